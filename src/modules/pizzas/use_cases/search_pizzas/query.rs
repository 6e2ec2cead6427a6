use crate::modules::pizzas::core::pizza::PizzaModel;
use crate::shared::core::outcome::FieldErrors;
use crate::shared::core::validation::{Rules, Validate};
use crate::shared::dispatch::contracts::Query;
use crate::shared::infrastructure::persistence::{PAGE_LIMIT_MESSAGE, Paging, default_page_size};
use serde::Deserialize;

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchPizzas {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub disabled: Option<bool>,
    #[serde(default)]
    pub offset: usize,
    #[serde(default = "default_page_size")]
    pub limit: usize,
}

impl Default for SearchPizzas {
    fn default() -> Self {
        let Paging { offset, limit } = Paging::default();
        Self {
            name: None,
            disabled: None,
            offset,
            limit,
        }
    }
}

impl SearchPizzas {
    pub fn paging(&self) -> Paging {
        Paging::new(self.offset, self.limit)
    }
}

impl Query for SearchPizzas {
    const NAME: &'static str = "SearchPizzas";
    type Output = Vec<PizzaModel>;
}

impl Validate for SearchPizzas {
    fn validate(&self) -> FieldErrors {
        Rules::new()
            .check("limit", self.paging().has_valid_limit(), PAGE_LIMIT_MESSAGE)
            .finish()
    }
}
