// Request and handler contracts the dispatcher routes between.
//
// Responsibilities
// - Mark request types as commands (may mutate), queries (read only) or notifications (broadcast).
// - Describe the single async operation each handler kind exposes.
//
// Boundaries
// - Handlers return an Outcome for expected results and an error for anything unexpected.
//   They must not swallow storage failures into an Outcome.

use crate::shared::core::outcome::Outcome;
use async_trait::async_trait;
use tokio_util::sync::CancellationToken;

/// A request that may change state. `Output` is the payload of a successful outcome.
pub trait Command: Send + Sync + 'static {
    /// Stable name used in logs and configuration errors.
    const NAME: &'static str;

    type Output: Send + 'static;
}

/// A read-only request.
pub trait Query: Send + Sync + 'static {
    const NAME: &'static str;

    type Output: Send + 'static;
}

/// A broadcast event handled by zero or more handlers.
pub trait Notification: Send + Sync + 'static {
    const NAME: &'static str;
}

#[async_trait]
pub trait CommandHandler<C>: Send + Sync
where
    C: Command,
{
    async fn handle(
        &self,
        command: C,
        cancel: &CancellationToken,
    ) -> anyhow::Result<Outcome<C::Output>>;
}

#[async_trait]
pub trait QueryHandler<Q>: Send + Sync
where
    Q: Query,
{
    async fn handle(&self, query: Q, cancel: &CancellationToken)
    -> anyhow::Result<Outcome<Q::Output>>;
}

#[async_trait]
pub trait NotificationHandler<N>: Send + Sync
where
    N: Notification,
{
    async fn handle(&self, notification: &N, cancel: &CancellationToken) -> anyhow::Result<()>;
}
