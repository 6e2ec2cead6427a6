use crate::shared::dispatch::contracts::Notification;
use crate::shared::infrastructure::persistence::Entity;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

pub mod errors {
    pub const SAVE: &str = "Error saving an Order";
    pub const UPDATE: &str = "Error updating Order";

    pub fn not_found(id: i64) -> String {
        format!("Order with ID {id} was not found")
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum OrderStatus {
    #[default]
    Confirmed,
    Making,
    Complete,
    SentOutForDelivery,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Order {
    pub id: i64,
    pub customer_name: String,
    pub customer_email: String,
    pub pizza_id: i64,
    pub status: OrderStatus,
    pub date_created: DateTime<Utc>,
}

impl Order {
    /// A new order always starts out confirmed.
    pub fn place(
        customer_name: String,
        customer_email: String,
        pizza_id: i64,
        date_created: DateTime<Utc>,
    ) -> Self {
        Self {
            id: 0,
            customer_name,
            customer_email,
            pizza_id,
            status: OrderStatus::Confirmed,
            date_created,
        }
    }

    pub fn complete(mut self) -> Self {
        self.status = OrderStatus::Complete;
        self
    }
}

impl Entity for Order {
    fn id(&self) -> i64 {
        self.id
    }

    fn assign_id(&mut self, id: i64) {
        self.id = id;
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderModel {
    pub id: i64,
    pub customer_name: String,
    pub customer_email: String,
    pub pizza_id: i64,
    pub status: OrderStatus,
    pub date_created: DateTime<Utc>,
}

impl From<&Order> for OrderModel {
    fn from(order: &Order) -> Self {
        Self {
            id: order.id,
            customer_name: order.customer_name.clone(),
            customer_email: order.customer_email.clone(),
            pizza_id: order.pizza_id,
            status: order.status,
            date_created: order.date_created,
        }
    }
}

/// Raised once an order has been marked complete.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderCompleted {
    pub order_id: i64,
    pub pizza_id: i64,
    pub customer_email: String,
    pub completed_at: DateTime<Utc>,
}

impl Notification for OrderCompleted {
    const NAME: &'static str = "OrderCompleted";
}

impl OrderCompleted {
    pub fn of(order: &OrderModel, completed_at: DateTime<Utc>) -> Self {
        Self {
            order_id: order.id,
            pizza_id: order.pizza_id,
            customer_email: order.customer_email.clone(),
            completed_at,
        }
    }
}

#[cfg(test)]
mod order_tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn it_should_start_confirmed_and_move_to_complete() {
        let order = Order::place("Ada".into(), "ada@example.com".into(), 1, Utc::now());
        assert_eq!(order.status, OrderStatus::Confirmed);
        assert_eq!(order.complete().status, OrderStatus::Complete);
    }

    #[rstest]
    fn it_should_serialise_the_model_in_camel_case() {
        let order = Order::place("Ada".into(), "ada@example.com".into(), 3, Utc::now());
        let json = serde_json::to_value(OrderModel::from(&order)).unwrap();
        assert_eq!(json["customerName"], "Ada");
        assert_eq!(json["pizzaId"], 3);
        assert_eq!(json["status"], "Confirmed");
    }

    #[rstest]
    fn it_should_format_the_not_found_message() {
        assert_eq!(errors::not_found(12), "Order with ID 12 was not found");
    }
}
