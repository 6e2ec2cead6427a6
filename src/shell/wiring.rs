// Handler registrations for every request type the service understands.
//
// Responsibilities
// - Register one factory per command and query. Each factory opens a fresh storage
//   session so handlers never share staged changes across requests.
// - Register the OrderCompleted handlers in the order they must run.

use crate::modules::orders::core::order::OrderCompleted;
use crate::modules::orders::use_cases::complete_order::command::CompleteOrder;
use crate::modules::orders::use_cases::complete_order::handler::CompleteOrderHandler;
use crate::modules::orders::use_cases::complete_order::notifications::{
    EnqueueOrderCompleted, LogOrderCompleted,
};
use crate::modules::orders::use_cases::create_order::command::CreateOrder;
use crate::modules::orders::use_cases::create_order::handler::CreateOrderHandler;
use crate::modules::orders::use_cases::get_order_status::handler::GetOrderStatusHandler;
use crate::modules::orders::use_cases::get_order_status::query::GetOrderStatus;
use crate::modules::orders::use_cases::list_orders::handler::ListOrdersHandler;
use crate::modules::orders::use_cases::list_orders::query::ListOrders;
use crate::modules::pizzas::use_cases::create_pizza::command::CreatePizza;
use crate::modules::pizzas::use_cases::create_pizza::handler::CreatePizzaHandler;
use crate::modules::pizzas::use_cases::delete_pizza::command::DeletePizza;
use crate::modules::pizzas::use_cases::delete_pizza::handler::DeletePizzaHandler;
use crate::modules::pizzas::use_cases::get_pizza::handler::GetPizzaHandler;
use crate::modules::pizzas::use_cases::get_pizza::query::GetPizza;
use crate::modules::pizzas::use_cases::search_pizzas::handler::SearchPizzasHandler;
use crate::modules::pizzas::use_cases::search_pizzas::query::SearchPizzas;
use crate::modules::pizzas::use_cases::update_pizza::command::UpdatePizza;
use crate::modules::pizzas::use_cases::update_pizza::handler::UpdatePizzaHandler;
use crate::shared::dispatch::error::DispatchError;
use crate::shared::dispatch::registry::HandlerRegistry;
use crate::shared::infrastructure::outbox::DomainOutbox;
use crate::shared::infrastructure::persistence::save_outcome::SavePolicy;
use crate::shell::database::InMemoryDatabase;
use std::sync::Arc;

pub const ORDERS_TOPIC: &str = "orders";

pub fn register_handlers<TOutbox>(
    registry: &HandlerRegistry,
    database: &Arc<InMemoryDatabase>,
    outbox: &Arc<TOutbox>,
    policy: SavePolicy,
) -> Result<(), DispatchError>
where
    TOutbox: DomainOutbox + 'static,
{
    register_pizzas(registry, database, policy)?;
    register_orders(registry, database, outbox, policy)?;
    tracing::debug!(requests = ?registry.registered_requests(), "handlers wired");
    Ok(())
}

fn register_pizzas(
    registry: &HandlerRegistry,
    database: &Arc<InMemoryDatabase>,
    policy: SavePolicy,
) -> Result<(), DispatchError> {
    let db = database.clone();
    registry.register_command::<CreatePizza, _, _>(move || {
        CreatePizzaHandler::new(db.pizzas_session(), policy)
    })?;
    let db = database.clone();
    registry.register_command::<UpdatePizza, _, _>(move || {
        UpdatePizzaHandler::new(db.pizzas_session(), policy)
    })?;
    let db = database.clone();
    registry.register_command::<DeletePizza, _, _>(move || {
        DeletePizzaHandler::new(db.pizzas_session(), policy)
    })?;
    let db = database.clone();
    registry.register_query::<GetPizza, _, _>(move || GetPizzaHandler::new(db.pizzas_session()))?;
    let db = database.clone();
    registry.register_query::<SearchPizzas, _, _>(move || {
        SearchPizzasHandler::new(db.pizzas_session())
    })?;
    Ok(())
}

fn register_orders<TOutbox>(
    registry: &HandlerRegistry,
    database: &Arc<InMemoryDatabase>,
    outbox: &Arc<TOutbox>,
    policy: SavePolicy,
) -> Result<(), DispatchError>
where
    TOutbox: DomainOutbox + 'static,
{
    let db = database.clone();
    registry.register_command::<CreateOrder, _, _>(move || {
        CreateOrderHandler::new(db.orders_session(), policy)
    })?;
    let db = database.clone();
    registry.register_command::<CompleteOrder, _, _>(move || {
        CompleteOrderHandler::new(db.orders_session(), policy)
    })?;
    let db = database.clone();
    registry.register_query::<GetOrderStatus, _, _>(move || {
        GetOrderStatusHandler::new(db.orders_session())
    })?;
    let db = database.clone();
    registry.register_query::<ListOrders, _, _>(move || {
        ListOrdersHandler::new(db.orders_session())
    })?;

    registry.register_notification_instance::<OrderCompleted, _>(Arc::new(
        EnqueueOrderCompleted::new(ORDERS_TOPIC, outbox.clone()),
    ))?;
    registry.register_notification_instance::<OrderCompleted, _>(Arc::new(LogOrderCompleted))?;
    Ok(())
}
