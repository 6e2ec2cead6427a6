use axum::extract::State;
use chrono::Utc;

use crate::modules::orders::core::order::{OrderCompleted, OrderModel};
use crate::modules::orders::use_cases::complete_order::command::CompleteOrder;
use crate::shared::infrastructure::http::{ApiResult, IdPath};
use crate::shell::state::AppState;

/// Completes the order, then tells every `OrderCompleted` handler about it.
pub async fn handle(State(state): State<AppState>, IdPath(id): IdPath) -> ApiResult<OrderModel> {
    let cancel = state.request_token();
    let outcome = state.dispatcher.send(CompleteOrder { id }, &cancel).await?;
    if let Some(order) = outcome.data() {
        state
            .dispatcher
            .publish(&OrderCompleted::of(order, Utc::now()), &cancel)
            .await?;
    }
    Ok(outcome)
}
