use crate::shared::core::outcome::Outcome;
use crate::shared::dispatch::contracts::{Command, Notification, Query};
use crate::shared::dispatch::error::DispatchError;
use crate::shared::dispatch::registry::HandlerRegistry;
use std::sync::Arc;
use tokio_util::sync::CancellationToken;

/// Routes requests to the handler registered for their concrete type.
///
/// Every call resolves the handler afresh from the registry and hands back whatever the
/// handler returned. Nothing is cached, logged, retried or converted here: a missing
/// registration is a `DispatchError` and a handler failure comes back as
/// `DispatchError::Handler` carrying the original error.
#[derive(Clone)]
pub struct Dispatcher {
    registry: Arc<HandlerRegistry>,
}

impl Dispatcher {
    pub fn new(registry: Arc<HandlerRegistry>) -> Self {
        Self { registry }
    }

    pub async fn send<C: Command>(
        &self,
        command: C,
        cancel: &CancellationToken,
    ) -> Result<Outcome<C::Output>, DispatchError> {
        let handler = self.registry.resolve_command::<C>()?;
        handler
            .handle(command, cancel)
            .await
            .map_err(DispatchError::Handler)
    }

    pub async fn query<Q: Query>(
        &self,
        query: Q,
        cancel: &CancellationToken,
    ) -> Result<Outcome<Q::Output>, DispatchError> {
        let handler = self.registry.resolve_query::<Q>()?;
        handler
            .handle(query, cancel)
            .await
            .map_err(DispatchError::Handler)
    }

    /// Runs every handler for `N` one after another in registration order. The first
    /// failure stops the sequence and is returned.
    pub async fn publish<N: Notification>(
        &self,
        notification: &N,
        cancel: &CancellationToken,
    ) -> Result<(), DispatchError> {
        for handler in self.registry.resolve_notifications::<N>()? {
            handler
                .handle(notification, cancel)
                .await
                .map_err(DispatchError::Handler)?;
        }
        Ok(())
    }
}
