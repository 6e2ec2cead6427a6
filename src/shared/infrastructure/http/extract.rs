// Request extractors that reject with ApiError, so every 4xx carries an Outcome envelope.

use crate::shared::core::validation::Validate;
use crate::shared::infrastructure::http::api_error::ApiError;
use axum::Json;
use axum::extract::{FromRequest, FromRequestParts, Path, Query, Request};
use axum::http::request::Parts;
use serde::de::DeserializeOwned;

/// JSON body that has passed its validation rules.
pub struct ValidatedJson<T>(pub T);

impl<S, T> FromRequest<S> for ValidatedJson<T>
where
    S: Send + Sync,
    T: DeserializeOwned + Validate + Send,
{
    type Rejection = ApiError;

    async fn from_request(request: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<T>::from_request(request, state)
            .await
            .map_err(|rejection| ApiError::MalformedRequest(rejection.body_text()))?;
        validated(value).map(ValidatedJson)
    }
}

/// Query string that has passed its validation rules.
pub struct ValidatedQuery<T>(pub T);

impl<S, T> FromRequestParts<S> for ValidatedQuery<T>
where
    S: Send + Sync,
    T: DeserializeOwned + Validate + Send,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Query(value) = Query::<T>::from_request_parts(parts, state)
            .await
            .map_err(|rejection| ApiError::MalformedRequest(rejection.body_text()))?;
        validated(value).map(ValidatedQuery)
    }
}

/// The numeric `{id}` segment of a route.
pub struct IdPath(pub i64);

impl<S> FromRequestParts<S> for IdPath
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(id) = Path::<i64>::from_request_parts(parts, state)
            .await
            .map_err(|rejection| ApiError::MalformedRequest(rejection.body_text()))?;
        Ok(IdPath(id))
    }
}

fn validated<T: Validate>(value: T) -> Result<T, ApiError> {
    let errors = value.validate();
    if errors.is_empty() {
        Ok(value)
    } else {
        tracing::debug!(fields = errors.len(), "request rejected by validation");
        Err(ApiError::Validation(errors))
    }
}

#[cfg(test)]
mod extract_tests {
    use super::*;
    use crate::shared::core::outcome::FieldErrors;
    use crate::shared::core::validation::Rules;
    use axum::{
        Router,
        body::Body,
        http::{Request, StatusCode},
        routing::get,
    };
    use http_body_util::BodyExt;
    use rstest::rstest;
    use serde::Deserialize;
    use serde_json::Value;
    use tower::ServiceExt;

    #[derive(Deserialize)]
    struct Window {
        limit: usize,
    }

    impl Validate for Window {
        fn validate(&self) -> FieldErrors {
            Rules::new()
                .check("limit", self.limit <= 10, "Limit too large")
                .finish()
        }
    }

    fn app() -> Router {
        Router::new()
            .route("/items/{id}", get(|IdPath(id): IdPath| async move { id.to_string() }))
            .route(
                "/items",
                get(|ValidatedQuery(window): ValidatedQuery<Window>| async move {
                    window.limit.to_string()
                }),
            )
    }

    async fn call(uri: &str) -> (StatusCode, Vec<u8>) {
        let response = app()
            .oneshot(Request::get(uri).body(Body::empty()).unwrap())
            .await
            .unwrap();
        let status = response.status();
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        (status, bytes.to_vec())
    }

    #[rstest]
    #[tokio::test]
    async fn it_should_pass_a_numeric_id_through() {
        let (status, body) = call("/items/42").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, b"42");
    }

    #[rstest]
    #[case("/items/abc")]
    #[case("/items?limit=many")]
    #[tokio::test]
    async fn it_should_wrap_unparsable_input_in_a_failure_envelope(#[case] uri: &str) {
        let (status, body) = call(uri).await;
        let json: Value = serde_json::from_slice(&body).unwrap();

        assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
        assert_eq!(json["kind"], "Failure");
        assert!(json["message"].is_string());
    }

    #[rstest]
    #[tokio::test]
    async fn it_should_run_the_rules_on_a_parsed_query() {
        let (status, body) = call("/items?limit=50").await;
        let json: Value = serde_json::from_slice(&body).unwrap();

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(json["errors"]["limit"][0], "Limit too large");
    }
}
