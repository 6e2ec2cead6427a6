// Transport level failures and the global error boundary.
//
// Responsibilities
// - Render validation rejections with exactly the body a ValidationFailure outcome gets.
// - Render every internal failure (dispatch wiring, handler errors, panics) as one
//   minimal 500 envelope that never looks like an Outcome and only carries details when
//   the deployment allows it.

use crate::shared::core::outcome::{FieldErrors, Outcome};
use crate::shared::dispatch::error::DispatchError;
use axum::Json;
use axum::extract::{Request, State};
use axum::http::StatusCode;
use axum::middleware::Next;
use axum::response::{IntoResponse, Response};
use serde::Serialize;
use std::any::Any;
use thiserror::Error;
use uuid::Uuid;

pub const INTERNAL_ERROR_MESSAGE: &str =
    "An internal server error occurred. Please try again later.";

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("validation failed for {} field(s)", .0.len())]
    Validation(FieldErrors),

    #[error("malformed request: {0}")]
    MalformedRequest(String),

    #[error(transparent)]
    Dispatch(#[from] DispatchError),
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct InternalErrorBody {
    pub status_code: u16,
    pub message: String,
    pub error_id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

/// Attached to 500 responses so the boundary can add details after the fact.
#[derive(Debug, Clone)]
pub struct InternalFailure {
    pub error_id: Uuid,
    pub details: String,
}

impl InternalFailure {
    fn new(details: String) -> Self {
        Self {
            error_id: Uuid::now_v7(),
            details,
        }
    }

    pub fn render(&self, expose_details: bool) -> Response {
        let body = InternalErrorBody {
            status_code: StatusCode::INTERNAL_SERVER_ERROR.as_u16(),
            message: INTERNAL_ERROR_MESSAGE.to_string(),
            error_id: self.error_id.to_string(),
            details: expose_details.then(|| self.details.clone()),
        };
        let mut response = (StatusCode::INTERNAL_SERVER_ERROR, Json(body)).into_response();
        response.extensions_mut().insert(self.clone());
        response
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match self {
            ApiError::Validation(errors) => {
                Outcome::<()>::validation_failure(errors).into_response()
            }
            ApiError::MalformedRequest(reason) => {
                let mut response = Outcome::<()>::failure(reason).into_response();
                *response.status_mut() = StatusCode::UNPROCESSABLE_ENTITY;
                response
            }
            ApiError::Dispatch(err) => {
                let failure = InternalFailure::new(err.to_string());
                if err.is_configuration() {
                    tracing::error!(
                        error_id = %failure.error_id,
                        error = %err,
                        "dispatch misconfigured"
                    );
                } else {
                    tracing::error!(error_id = %failure.error_id, error = ?err, "request failed");
                }
                failure.render(false)
            }
        }
    }
}

/// Middleware re-rendering internal failures with details when `expose_details` is set.
pub async fn error_boundary(
    State(expose_details): State<bool>,
    request: Request,
    next: Next,
) -> Response {
    let response = next.run(request).await;
    if !expose_details {
        return response;
    }
    match response.extensions().get::<InternalFailure>() {
        Some(failure) => failure.render(true),
        None => response,
    }
}

/// Panic handler for `CatchPanicLayer`.
pub fn panic_response(panic: Box<dyn Any + Send + 'static>, expose_details: bool) -> Response {
    let details = if let Some(text) = panic.downcast_ref::<&str>() {
        (*text).to_string()
    } else if let Some(text) = panic.downcast_ref::<String>() {
        text.clone()
    } else {
        "handler panicked".to_string()
    };
    let failure = InternalFailure::new(details);
    tracing::error!(error_id = %failure.error_id, panic = %failure.details, "request panicked");
    failure.render(expose_details)
}
