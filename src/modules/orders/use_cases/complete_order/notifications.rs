// Reactions to OrderCompleted.
//
// Responsibilities
// - Record an outbox row per completed order so delivery can be told about it.
// - Leave a log line for each completion.
//
// Boundaries
// - Handlers run one after another; a failure here stops the ones registered after it.

use crate::modules::orders::core::order::OrderCompleted;
use crate::shared::dispatch::contracts::{Notification, NotificationHandler};
use crate::shared::infrastructure::outbox::{DomainOutbox, OutboxError, OutboxRow};
use async_trait::async_trait;
use std::sync::Arc;
use tokio_util::sync::CancellationToken;

pub struct EnqueueOrderCompleted<TOutbox>
where
    TOutbox: DomainOutbox + 'static,
{
    topic: String,
    outbox: Arc<TOutbox>,
}

impl<TOutbox> EnqueueOrderCompleted<TOutbox>
where
    TOutbox: DomainOutbox + 'static,
{
    pub fn new(topic: impl Into<String>, outbox: Arc<TOutbox>) -> Self {
        Self {
            topic: topic.into(),
            outbox,
        }
    }
}

#[async_trait]
impl<TOutbox> NotificationHandler<OrderCompleted> for EnqueueOrderCompleted<TOutbox>
where
    TOutbox: DomainOutbox + 'static,
{
    async fn handle(
        &self,
        event: &OrderCompleted,
        _cancel: &CancellationToken,
    ) -> anyhow::Result<()> {
        let row = OutboxRow {
            topic: self.topic.clone(),
            event_type: OrderCompleted::NAME.to_string(),
            stream_id: format!("Order-{}", event.order_id),
            occurred_at: event.completed_at.timestamp_millis(),
            payload: serde_json::to_value(event)?,
        };
        match self.outbox.enqueue(row).await {
            Ok(()) => Ok(()),
            // Completing an order twice must not fail the second request.
            Err(OutboxError::Duplicate { stream_id, .. }) => {
                tracing::debug!(%stream_id, "completion already enqueued");
                Ok(())
            }
            Err(err) => Err(err.into()),
        }
    }
}

pub struct LogOrderCompleted;

#[async_trait]
impl NotificationHandler<OrderCompleted> for LogOrderCompleted {
    async fn handle(
        &self,
        event: &OrderCompleted,
        _cancel: &CancellationToken,
    ) -> anyhow::Result<()> {
        tracing::info!(
            order_id = event.order_id,
            pizza_id = event.pizza_id,
            completed_at = %event.completed_at,
            "order ready"
        );
        Ok(())
    }
}
