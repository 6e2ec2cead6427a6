use crate::shared::infrastructure::outbox::{DomainOutbox, OutboxError, OutboxRow};
use std::collections::HashSet;
use std::sync::atomic::{AtomicBool, Ordering};
use tokio::sync::Mutex;

#[derive(Default)]
pub struct InMemoryDomainOutbox {
    rows: Mutex<Vec<OutboxRow>>,
    seen: Mutex<HashSet<(String, String)>>,
    is_offline: AtomicBool,
}

impl InMemoryDomainOutbox {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn toggle_offline(&self) {
        self.is_offline.fetch_xor(true, Ordering::SeqCst);
    }

    pub async fn rows(&self) -> Vec<OutboxRow> {
        self.rows.lock().await.clone()
    }
}

#[async_trait::async_trait]
impl DomainOutbox for InMemoryDomainOutbox {
    async fn enqueue(&self, row: OutboxRow) -> Result<(), OutboxError> {
        if self.is_offline.load(Ordering::SeqCst) {
            return Err(OutboxError::Backend("Outbox offline".into()));
        }
        let key = (row.event_type.clone(), row.stream_id.clone());
        {
            let mut seen = self.seen.lock().await;
            if !seen.insert(key) {
                return Err(OutboxError::Duplicate {
                    event_type: row.event_type,
                    stream_id: row.stream_id,
                });
            }
        }
        self.rows.lock().await.push(row);
        Ok(())
    }
}

#[cfg(test)]
mod in_memory_domain_outbox_tests {
    use super::*;
    use rstest::{fixture, rstest};

    #[fixture]
    fn row() -> OutboxRow {
        OutboxRow {
            topic: "orders".to_string(),
            event_type: "OrderCompleted".to_string(),
            stream_id: "Order-1".to_string(),
            occurred_at: 0,
            payload: serde_json::json!({ "orderId": 1 }),
        }
    }

    #[rstest]
    #[tokio::test]
    async fn it_should_enqueue_the_row(row: OutboxRow) {
        let outbox = InMemoryDomainOutbox::new();
        assert!(outbox.enqueue(row.clone()).await.is_ok());
        assert_eq!(outbox.rows().await, vec![row]);
    }

    #[rstest]
    #[tokio::test]
    async fn it_should_refuse_a_duplicate_row(row: OutboxRow) {
        let outbox = InMemoryDomainOutbox::new();
        outbox.enqueue(row.clone()).await.unwrap();
        let result = outbox.enqueue(row).await;
        assert!(matches!(result, Err(OutboxError::Duplicate { .. })));
        assert_eq!(outbox.rows().await.len(), 1);
    }

    #[rstest]
    #[tokio::test]
    async fn it_should_fail_while_offline(row: OutboxRow) {
        let outbox = InMemoryDomainOutbox::new();
        outbox.toggle_offline();
        let result = outbox.enqueue(row).await;
        assert_eq!(result.unwrap_err().to_string(), "outbox backend error: Outbox offline");
    }
}
