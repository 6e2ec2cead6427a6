use crate::modules::orders::core::order::OrderStatus;
use crate::shared::dispatch::contracts::Query;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GetOrderStatus {
    pub id: i64,
}

impl Query for GetOrderStatus {
    const NAME: &'static str = "GetOrderStatus";
    type Output = OrderStatus;
}
