use axum::http::{HeaderName, Method, header};
use axum::middleware::from_fn_with_state;
use axum::{
    Router,
    routing::{get, post},
};
use std::any::Any;
use tower_http::catch_panic::CatchPanicLayer;
use tower_http::cors::{Any as AnyOrigin, CorsLayer};
use tower_http::request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer};
use tower_http::trace::TraceLayer;

use crate::modules::orders::use_cases::complete_order::inbound::http as complete_order_http;
use crate::modules::orders::use_cases::create_order::inbound::http as create_order_http;
use crate::modules::orders::use_cases::get_order_status::inbound::http as order_status_http;
use crate::modules::orders::use_cases::list_orders::inbound::http as list_orders_http;
use crate::modules::pizzas::adapters::inbound::http as pizzas_http;
use crate::shared::infrastructure::http::api_error::{error_boundary, panic_response};
use crate::shell::api_doc;
use crate::shell::state::AppState;

pub const CORRELATION_ID: HeaderName = HeaderName::from_static("correlation-id");

pub fn router(state: AppState) -> Router {
    let expose_details = state.config.expose_error_details;

    let orders = Router::new()
        .route("/", post(create_order_http::handle).get(list_orders_http::handle))
        .route("/{id}/complete", post(complete_order_http::handle))
        .route("/{id}/status", get(order_status_http::handle));

    let mut app = Router::new()
        .nest("/api/v1/pizzas", pizzas_http::router())
        .nest("/api/v1/orders", orders);
    if state.config.include_api_doc {
        app = app.route("/api-doc", get(api_doc::handle));
    }

    let app = app
        .layer(from_fn_with_state(expose_details, error_boundary))
        .layer(CatchPanicLayer::custom(
            move |panic: Box<dyn Any + Send + 'static>| panic_response(panic, expose_details),
        ))
        .layer(cors())
        .layer(TraceLayer::new_for_http());

    let app = if state.config.include_correlation_id {
        app.layer(PropagateRequestIdLayer::new(CORRELATION_ID))
            .layer(SetRequestIdLayer::new(CORRELATION_ID, MakeRequestUuid))
    } else {
        app
    };

    app.with_state(state)
}

fn cors() -> CorsLayer {
    CorsLayer::new()
        .allow_origin(AnyOrigin)
        .allow_methods([Method::GET, Method::POST, Method::PUT, Method::DELETE])
        .allow_headers([header::CONTENT_TYPE, CORRELATION_ID])
        .expose_headers([CORRELATION_ID])
}
