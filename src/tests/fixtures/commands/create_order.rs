use crate::modules::orders::use_cases::create_order::command::CreateOrder;

const JSON: &str = include_str!("json/create_order.json");

pub struct CreateOrderBuilder {
    inner: CreateOrder,
}

impl Default for CreateOrderBuilder {
    fn default() -> Self {
        Self::new()
    }
}

#[allow(dead_code)]
impl CreateOrderBuilder {
    pub fn new() -> Self {
        Self {
            inner: serde_json::from_str(JSON).unwrap(),
        }
    }

    pub fn customer_name(mut self, v: impl Into<String>) -> Self {
        self.inner.customer_name = v.into();
        self
    }

    pub fn customer_email(mut self, v: impl Into<String>) -> Self {
        self.inner.customer_email = v.into();
        self
    }

    pub fn pizza_id(mut self, v: i64) -> Self {
        self.inner.pizza_id = v;
        self
    }

    pub fn build(self) -> CreateOrder {
        self.inner
    }
}

#[cfg(test)]
mod create_order_builder_tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn default_parses_json() {
        let built = CreateOrderBuilder::default().build();
        assert_eq!(built.customer_name, "Ada Lovelace");
        assert_eq!(built.customer_email, "ada@example.com");
        assert_eq!(built.pizza_id, 1);
    }

    #[rstest]
    fn setters_override_fields() {
        let built = CreateOrderBuilder::new()
            .customer_name("Grace")
            .customer_email("grace@example.com")
            .pizza_id(4)
            .build();
        assert_eq!(built.customer_name, "Grace");
        assert_eq!(built.customer_email, "grace@example.com");
        assert_eq!(built.pizza_id, 4);
    }
}
