use thiserror::Error;

#[derive(Debug, Error)]
pub enum DispatchError {
    #[error("no handler registered for {request}")]
    HandlerNotFound { request: &'static str },

    #[error("handler already registered for {request}")]
    AlreadyRegistered { request: &'static str },

    #[error("registered handler for {request} has an unexpected type")]
    TypeMismatch { request: &'static str },

    /// Failure raised by the handler itself, passed through untouched.
    #[error(transparent)]
    Handler(anyhow::Error),
}

impl DispatchError {
    /// True for wiring defects, as opposed to failures raised while handling a request.
    pub fn is_configuration(&self) -> bool {
        !matches!(self, DispatchError::Handler(_))
    }
}
