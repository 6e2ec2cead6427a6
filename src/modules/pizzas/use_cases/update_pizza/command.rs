use crate::modules::pizzas::core::pizza::{NAME_MAX_LENGTH, PizzaModel};
use crate::shared::core::outcome::FieldErrors;
use crate::shared::core::validation::{Rules, Validate};
use crate::shared::dispatch::contracts::Command;
use serde::Deserialize;

/// Fields left out keep their stored value. An empty name counts as left out.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdatePizza {
    #[serde(default)]
    pub id: i64,
    pub name: Option<String>,
    pub disabled: Option<bool>,
}

impl Command for UpdatePizza {
    const NAME: &'static str = "UpdatePizza";
    type Output = PizzaModel;
}

impl Validate for UpdatePizza {
    fn validate(&self) -> FieldErrors {
        let name = self.name.as_deref().unwrap_or_default();
        Rules::new()
            .max_length(
                "name",
                name,
                NAME_MAX_LENGTH,
                "Name must be 200 characters or fewer",
            )
            .finish()
    }
}
