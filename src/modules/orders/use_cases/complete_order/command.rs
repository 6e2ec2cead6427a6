use crate::modules::orders::core::order::OrderModel;
use crate::shared::dispatch::contracts::Command;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CompleteOrder {
    pub id: i64,
}

impl Command for CompleteOrder {
    const NAME: &'static str = "CompleteOrder";
    type Output = OrderModel;
}
