// Outbox for integration messages raised by notification handlers.
//
// Boundaries
// - Rows are enqueued here and relayed by infrastructure outside this crate.

pub mod in_memory;

use serde::Serialize;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct OutboxRow {
    pub topic: String,
    pub event_type: String,
    pub stream_id: String,
    pub occurred_at: i64,
    pub payload: serde_json::Value,
}

#[derive(Debug, Error)]
pub enum OutboxError {
    #[error("duplicate outbox row: {event_type} for {stream_id}")]
    Duplicate {
        event_type: String,
        stream_id: String,
    },

    #[error("outbox backend error: {0}")]
    Backend(String),
}

#[async_trait::async_trait]
pub trait DomainOutbox: Send + Sync {
    async fn enqueue(&self, row: OutboxRow) -> Result<(), OutboxError>;
}
