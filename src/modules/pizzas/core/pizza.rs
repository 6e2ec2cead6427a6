use crate::shared::infrastructure::persistence::Entity;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

pub mod errors {
    pub const SAVE: &str = "Error saving an Pizza";
    pub const UPDATE: &str = "Error updating Pizza";
    pub const DELETE: &str = "Error deleting Pizza";
    pub const NOT_FOUND: &str = "Pizza not found";
}

pub const NAME_MAX_LENGTH: usize = 200;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Pizza {
    pub id: i64,
    pub name: String,
    pub disabled: bool,
    pub date_created: DateTime<Utc>,
}

impl Pizza {
    pub fn new(name: String, disabled: bool, date_created: DateTime<Utc>) -> Self {
        Self {
            id: 0,
            name,
            disabled,
            date_created,
        }
    }
}

impl Entity for Pizza {
    fn id(&self) -> i64 {
        self.id
    }

    fn assign_id(&mut self, id: i64) {
        self.id = id;
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PizzaModel {
    pub id: i64,
    pub name: String,
    pub disabled: bool,
    pub date_created: DateTime<Utc>,
}

impl From<&Pizza> for PizzaModel {
    fn from(pizza: &Pizza) -> Self {
        Self {
            id: pizza.id,
            name: pizza.name.clone(),
            disabled: pizza.disabled,
            date_created: pizza.date_created,
        }
    }
}
