use crate::modules::pizzas::use_cases::create_pizza::command::CreatePizza;

const JSON: &str = include_str!("json/create_pizza.json");

pub struct CreatePizzaBuilder {
    inner: CreatePizza,
}

impl Default for CreatePizzaBuilder {
    fn default() -> Self {
        Self::new()
    }
}

#[allow(dead_code)]
impl CreatePizzaBuilder {
    pub fn new() -> Self {
        Self {
            inner: serde_json::from_str(JSON).unwrap(),
        }
    }

    pub fn name(mut self, v: impl Into<String>) -> Self {
        self.inner.name = v.into();
        self
    }

    pub fn disabled(mut self, v: bool) -> Self {
        self.inner.disabled = v;
        self
    }

    pub fn build(self) -> CreatePizza {
        self.inner
    }
}

#[cfg(test)]
mod create_pizza_builder_tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn default_delegates_to_new_and_parses_json() {
        let built = CreatePizzaBuilder::default().build();
        assert_eq!(
            built,
            CreatePizza {
                name: "Margherita".into(),
                disabled: false
            }
        );
    }

    #[rstest]
    fn setters_override_fields() {
        let built = CreatePizzaBuilder::new().name("Diavola").disabled(true).build();
        assert_eq!(built.name, "Diavola");
        assert!(built.disabled);
    }
}
