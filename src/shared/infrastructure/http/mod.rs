pub mod api_error;
pub mod extract;
pub mod outcome_response;

pub use api_error::ApiError;
pub use extract::{IdPath, ValidatedJson, ValidatedQuery};

use crate::shared::core::outcome::Outcome;

/// What every endpoint returns.
pub type ApiResult<T> = Result<Outcome<T>, ApiError>;
