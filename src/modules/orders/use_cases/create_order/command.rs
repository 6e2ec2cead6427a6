use crate::modules::orders::core::order::OrderModel;
use crate::shared::core::outcome::FieldErrors;
use crate::shared::core::validation::{Rules, Validate};
use crate::shared::dispatch::contracts::Command;
use serde::Deserialize;

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateOrder {
    #[serde(default)]
    pub customer_name: String,
    #[serde(default)]
    pub customer_email: String,
    #[serde(default)]
    pub pizza_id: i64,
}

impl Command for CreateOrder {
    const NAME: &'static str = "CreateOrder";
    type Output = OrderModel;
}

impl Validate for CreateOrder {
    fn validate(&self) -> FieldErrors {
        Rules::new()
            .check("pizzaId", self.pizza_id != 0, "Pizza is required")
            .required("customerName", &self.customer_name, "Customer name is required")
            .required(
                "customerEmail",
                &self.customer_email,
                "Customer email is required",
            )
            .email(
                "customerEmail",
                &self.customer_email,
                "Customer email must be a valid email address",
            )
            .finish()
    }
}
