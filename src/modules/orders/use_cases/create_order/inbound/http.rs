use axum::extract::State;

use crate::modules::orders::core::order::OrderModel;
use crate::modules::orders::use_cases::create_order::command::CreateOrder;
use crate::shared::infrastructure::http::{ApiResult, ValidatedJson};
use crate::shell::state::AppState;

pub async fn handle(
    State(state): State<AppState>,
    ValidatedJson(command): ValidatedJson<CreateOrder>,
) -> ApiResult<OrderModel> {
    Ok(state.dispatcher.send(command, &state.request_token()).await?)
}
