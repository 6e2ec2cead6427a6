// Outcome returned by every command and query handler.
//
// Purpose
// - Carry either the data a handler produced or the expected reason it could not produce it.
//
// Boundaries
// - Only expected domain outcomes live here. Unexpected failures travel as errors and
//   never become an Outcome.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Field name to the messages raised against it.
pub type FieldErrors = BTreeMap<String, Vec<String>>;

pub const DEFAULT_NOT_FOUND_MESSAGE: &str = "The requested resource was not found";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum OutcomeKind {
    Success,
    NotFound,
    ValidationFailure,
    Failure,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all_fields = "camelCase")]
enum State<T> {
    Success {
        data: T,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        total_count: Option<u64>,
    },
    NotFound {
        message: String,
    },
    ValidationFailure {
        errors: FieldErrors,
    },
    Failure {
        message: String,
    },
}

/// Tagged handler outcome. `Outcome<()>` is the no-payload form.
///
/// Values are built through the constructors below and are immutable afterwards; the
/// serialized form is the envelope clients receive, e.g.
/// `{"kind":"Success","data":{..},"totalCount":3}` or
/// `{"kind":"ValidationFailure","errors":{"name":["Name is required"]}}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Outcome<T> {
    state: State<T>,
}

impl<T> Outcome<T> {
    pub fn success(data: T) -> Self {
        Self {
            state: State::Success {
                data,
                total_count: None,
            },
        }
    }

    /// Success for one page of a larger collection; `total_count` is the size before paging.
    pub fn success_with_count(data: T, total_count: u64) -> Self {
        Self {
            state: State::Success {
                data,
                total_count: Some(total_count),
            },
        }
    }

    pub fn not_found(message: impl Into<String>) -> Self {
        Self {
            state: State::NotFound {
                message: message.into(),
            },
        }
    }

    pub fn not_found_default() -> Self {
        Self::not_found(DEFAULT_NOT_FOUND_MESSAGE)
    }

    pub fn validation_failure(errors: FieldErrors) -> Self {
        Self {
            state: State::ValidationFailure { errors },
        }
    }

    pub fn failure(message: impl Into<String>) -> Self {
        Self {
            state: State::Failure {
                message: message.into(),
            },
        }
    }

    pub fn kind(&self) -> OutcomeKind {
        match self.state {
            State::Success { .. } => OutcomeKind::Success,
            State::NotFound { .. } => OutcomeKind::NotFound,
            State::ValidationFailure { .. } => OutcomeKind::ValidationFailure,
            State::Failure { .. } => OutcomeKind::Failure,
        }
    }

    pub fn is_success(&self) -> bool {
        self.kind() == OutcomeKind::Success
    }

    pub fn data(&self) -> Option<&T> {
        match &self.state {
            State::Success { data, .. } => Some(data),
            _ => None,
        }
    }

    pub fn into_data(self) -> Option<T> {
        match self.state {
            State::Success { data, .. } => Some(data),
            _ => None,
        }
    }

    pub fn total_count(&self) -> Option<u64> {
        match self.state {
            State::Success { total_count, .. } => total_count,
            _ => None,
        }
    }

    /// Message of a `NotFound` or `Failure` outcome.
    pub fn message(&self) -> Option<&str> {
        match &self.state {
            State::NotFound { message } | State::Failure { message } => Some(message),
            _ => None,
        }
    }

    pub fn field_errors(&self) -> Option<&FieldErrors> {
        match &self.state {
            State::ValidationFailure { errors } => Some(errors),
            _ => None,
        }
    }

    /// Transforms the payload of a success, keeping every other outcome as is.
    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> Outcome<U> {
        let state = match self.state {
            State::Success { data, total_count } => State::Success {
                data: f(data),
                total_count,
            },
            State::NotFound { message } => State::NotFound { message },
            State::ValidationFailure { errors } => State::ValidationFailure { errors },
            State::Failure { message } => State::Failure { message },
        };
        Outcome { state }
    }
}

impl Outcome<()> {
    pub fn done() -> Self {
        Self::success(())
    }
}
