use axum::extract::State;

use crate::modules::orders::core::order::OrderStatus;
use crate::modules::orders::use_cases::get_order_status::query::GetOrderStatus;
use crate::shared::infrastructure::http::{ApiResult, IdPath};
use crate::shell::state::AppState;

pub async fn handle(State(state): State<AppState>, IdPath(id): IdPath) -> ApiResult<OrderStatus> {
    Ok(state
        .dispatcher
        .query(GetOrderStatus { id }, &state.request_token())
        .await?)
}
