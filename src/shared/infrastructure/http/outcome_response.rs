// Outcome to HTTP response translation.
//
// Every endpoint, grouped controller or single use case route, returns an Outcome (or
// an ApiError) and lets this module pick the status code. The body is always the
// Outcome envelope itself.

use crate::shared::core::outcome::{Outcome, OutcomeKind};
use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;

pub fn status_for(kind: OutcomeKind) -> StatusCode {
    match kind {
        OutcomeKind::Success => StatusCode::OK,
        OutcomeKind::NotFound => StatusCode::NOT_FOUND,
        OutcomeKind::ValidationFailure | OutcomeKind::Failure => StatusCode::BAD_REQUEST,
    }
}

impl<T: Serialize> IntoResponse for Outcome<T> {
    fn into_response(self) -> Response {
        (status_for(self.kind()), Json(self)).into_response()
    }
}
