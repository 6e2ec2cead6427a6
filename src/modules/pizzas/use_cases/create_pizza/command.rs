use crate::modules::pizzas::core::pizza::{NAME_MAX_LENGTH, PizzaModel};
use crate::shared::core::outcome::FieldErrors;
use crate::shared::core::validation::{Rules, Validate};
use crate::shared::dispatch::contracts::Command;
use serde::Deserialize;

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreatePizza {
    pub name: String,
    #[serde(default)]
    pub disabled: bool,
}

impl Command for CreatePizza {
    const NAME: &'static str = "CreatePizza";
    type Output = PizzaModel;
}

impl Validate for CreatePizza {
    fn validate(&self) -> FieldErrors {
        Rules::new()
            .required("name", &self.name, "Name is required")
            .max_length(
                "name",
                &self.name,
                NAME_MAX_LENGTH,
                "Name must be 200 characters or fewer",
            )
            .finish()
    }
}
