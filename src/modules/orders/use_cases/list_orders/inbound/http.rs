use axum::extract::State;

use crate::modules::orders::core::order::OrderModel;
use crate::modules::orders::use_cases::list_orders::query::ListOrders;
use crate::shared::infrastructure::http::{ApiResult, ValidatedQuery};
use crate::shell::state::AppState;

pub async fn handle(
    State(state): State<AppState>,
    ValidatedQuery(query): ValidatedQuery<ListOrders>,
) -> ApiResult<Vec<OrderModel>> {
    Ok(state.dispatcher.query(query, &state.request_token()).await?)
}
