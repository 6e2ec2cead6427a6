use crate::modules::pizzas::core::pizza::PizzaModel;
use crate::shared::dispatch::contracts::Query;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GetPizza {
    pub id: i64,
}

impl Query for GetPizza {
    const NAME: &'static str = "GetPizza";
    type Output = PizzaModel;
}
