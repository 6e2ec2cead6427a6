// In memory storage, one table per entity type.
//
// Responsibilities
// - Keep committed rows in a shared table.
// - Give each caller its own session with a private list of staged changes, so a handler
//   resolved for one request never commits another request's work.

use crate::shared::infrastructure::persistence::{Entity, Page, Paging, Predicate, Repository};
use std::collections::BTreeMap;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, AtomicI64, Ordering};
use tokio::sync::{Mutex, RwLock};
use tokio_util::sync::CancellationToken;

pub struct InMemoryTable<E> {
    name: &'static str,
    rows: RwLock<BTreeMap<i64, E>>,
    next_id: AtomicI64,
    is_offline: AtomicBool,
}

impl<E: Entity> InMemoryTable<E> {
    pub fn new(name: &'static str) -> Self {
        Self {
            name,
            rows: RwLock::new(BTreeMap::new()),
            next_id: AtomicI64::new(1),
            is_offline: AtomicBool::new(false),
        }
    }

    pub fn toggle_offline(&self) {
        self.is_offline.fetch_xor(true, Ordering::SeqCst);
    }

    pub async fn len(&self) -> usize {
        self.rows.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.len().await == 0
    }

    fn ensure_online(&self) -> anyhow::Result<()> {
        if self.is_offline.load(Ordering::SeqCst) {
            anyhow::bail!("{} table offline", self.name);
        }
        Ok(())
    }
}

enum Change<E> {
    Add(E),
    Update(E),
    Remove(i64),
}

/// A session over one table. Cheap to create; meant to live for a single request.
pub struct InMemoryRepository<E> {
    table: Arc<InMemoryTable<E>>,
    pending: Mutex<Vec<Change<E>>>,
}

impl<E: Entity> InMemoryRepository<E> {
    pub fn new(table: Arc<InMemoryTable<E>>) -> Self {
        Self {
            table,
            pending: Mutex::new(Vec::new()),
        }
    }
}

#[async_trait::async_trait]
impl<E: Entity> Repository<E> for InMemoryRepository<E> {
    async fn add(&self, mut entity: E) -> anyhow::Result<E> {
        self.table.ensure_online()?;
        entity.assign_id(self.table.next_id.fetch_add(1, Ordering::SeqCst));
        self.pending.lock().await.push(Change::Add(entity.clone()));
        Ok(entity)
    }

    async fn update(&self, entity: E) -> anyhow::Result<()> {
        self.table.ensure_online()?;
        self.pending.lock().await.push(Change::Update(entity));
        Ok(())
    }

    async fn remove(&self, id: i64) -> anyhow::Result<()> {
        self.table.ensure_online()?;
        self.pending.lock().await.push(Change::Remove(id));
        Ok(())
    }

    async fn find(
        &self,
        id: i64,
        predicate: Option<Predicate<'_, E>>,
    ) -> anyhow::Result<Option<E>> {
        self.table.ensure_online()?;
        let rows = self.table.rows.read().await;
        Ok(rows
            .get(&id)
            .filter(|row| predicate.is_none_or(|keep| keep(*row)))
            .cloned())
    }

    async fn search(&self, filter: Predicate<'_, E>, paging: Paging) -> anyhow::Result<Page<E>> {
        self.table.ensure_online()?;
        let rows = self.table.rows.read().await;
        let matching: Vec<&E> = rows.values().filter(|row| (filter)(*row)).collect();
        let total = matching.len() as u64;
        let items = matching
            .into_iter()
            .skip(paging.offset)
            .take(paging.limit)
            .cloned()
            .collect();
        Ok(Page { items, total })
    }

    async fn save(&self, cancel: &CancellationToken) -> anyhow::Result<usize> {
        if cancel.is_cancelled() {
            anyhow::bail!("save on {} cancelled", self.table.name);
        }
        self.table.ensure_online()?;

        let changes = std::mem::take(&mut *self.pending.lock().await);
        let mut rows = self.table.rows.write().await;
        let mut affected = 0;
        for change in changes {
            match change {
                Change::Add(entity) => {
                    rows.insert(entity.id(), entity);
                    affected += 1;
                }
                Change::Update(entity) => {
                    if let Some(current) = rows.get_mut(&entity.id()) {
                        if *current != entity {
                            *current = entity;
                            affected += 1;
                        }
                    }
                }
                Change::Remove(id) => {
                    if rows.remove(&id).is_some() {
                        affected += 1;
                    }
                }
            }
        }
        tracing::debug!(table = self.table.name, affected, "changes saved");
        Ok(affected)
    }
}
