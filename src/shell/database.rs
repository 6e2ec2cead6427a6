use crate::modules::orders::core::order::Order;
use crate::modules::pizzas::core::pizza::Pizza;
use crate::shared::infrastructure::persistence::in_memory::{InMemoryRepository, InMemoryTable};
use std::sync::Arc;

/// Every table the service stores, shared by all request sessions.
pub struct InMemoryDatabase {
    pub pizzas: Arc<InMemoryTable<Pizza>>,
    pub orders: Arc<InMemoryTable<Order>>,
}

impl Default for InMemoryDatabase {
    fn default() -> Self {
        Self::new()
    }
}

impl InMemoryDatabase {
    pub fn new() -> Self {
        Self {
            pizzas: Arc::new(InMemoryTable::new("pizzas")),
            orders: Arc::new(InMemoryTable::new("orders")),
        }
    }

    pub fn pizzas_session(&self) -> InMemoryRepository<Pizza> {
        InMemoryRepository::new(self.pizzas.clone())
    }

    pub fn orders_session(&self) -> InMemoryRepository<Order> {
        InMemoryRepository::new(self.orders.clone())
    }
}
