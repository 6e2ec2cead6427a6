// Pizza controller: every pizza action behind one router under /api/v1/pizzas.
//
// Responsibilities
// - Turn path and body input into pizza commands and queries.
// - Dispatch them and return the outcome untouched; the outcome mapper picks the status.

use axum::Router;
use axum::extract::State;
use axum::routing::{post, put};

use crate::modules::pizzas::core::pizza::PizzaModel;
use crate::modules::pizzas::use_cases::create_pizza::command::CreatePizza;
use crate::modules::pizzas::use_cases::delete_pizza::command::DeletePizza;
use crate::modules::pizzas::use_cases::get_pizza::query::GetPizza;
use crate::modules::pizzas::use_cases::search_pizzas::query::SearchPizzas;
use crate::modules::pizzas::use_cases::update_pizza::command::UpdatePizza;
use crate::shared::infrastructure::http::{ApiResult, IdPath, ValidatedJson};
use crate::shell::state::AppState;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", post(create))
        .route("/search", post(search))
        .route("/{id}", put(update).delete(delete).get(get))
}

pub async fn create(
    State(state): State<AppState>,
    ValidatedJson(command): ValidatedJson<CreatePizza>,
) -> ApiResult<PizzaModel> {
    Ok(state.dispatcher.send(command, &state.request_token()).await?)
}

pub async fn update(
    State(state): State<AppState>,
    IdPath(id): IdPath,
    ValidatedJson(command): ValidatedJson<UpdatePizza>,
) -> ApiResult<PizzaModel> {
    let command = UpdatePizza { id, ..command };
    Ok(state.dispatcher.send(command, &state.request_token()).await?)
}

pub async fn delete(State(state): State<AppState>, IdPath(id): IdPath) -> ApiResult<()> {
    Ok(state
        .dispatcher
        .send(DeletePizza { id }, &state.request_token())
        .await?)
}

pub async fn get(State(state): State<AppState>, IdPath(id): IdPath) -> ApiResult<PizzaModel> {
    Ok(state
        .dispatcher
        .query(GetPizza { id }, &state.request_token())
        .await?)
}

pub async fn search(
    State(state): State<AppState>,
    ValidatedJson(query): ValidatedJson<SearchPizzas>,
) -> ApiResult<Vec<PizzaModel>> {
    Ok(state.dispatcher.query(query, &state.request_token()).await?)
}
