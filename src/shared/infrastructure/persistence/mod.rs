// Storage port the handlers write through.
//
// Purpose
// - Describe the unit-of-work style access handlers need: stage changes, then save and
//   learn how many rows the save touched.
//
// Boundaries
// - No concrete storage here. `in_memory` implements the port for tests and local runs.

pub mod in_memory;
pub mod save_outcome;

use async_trait::async_trait;
use tokio_util::sync::CancellationToken;

pub type Predicate<'a, E> = &'a (dyn Fn(&E) -> bool + Send + Sync);

pub trait Entity: Clone + PartialEq + Send + Sync + 'static {
    fn id(&self) -> i64;
    fn assign_id(&mut self, id: i64);
}

pub const DEFAULT_PAGE_SIZE: usize = 20;
pub const MAX_PAGE_SIZE: usize = 100;
pub const PAGE_LIMIT_MESSAGE: &str = "Limit must be between 1 and 100";

/// Serde default for the `limit` field of paged queries.
pub fn default_page_size() -> usize {
    DEFAULT_PAGE_SIZE
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Paging {
    pub offset: usize,
    pub limit: usize,
}

impl Paging {
    pub fn new(offset: usize, limit: usize) -> Self {
        Self { offset, limit }
    }

    pub fn has_valid_limit(&self) -> bool {
        (1..=MAX_PAGE_SIZE).contains(&self.limit)
    }
}

impl Default for Paging {
    fn default() -> Self {
        Self::new(0, DEFAULT_PAGE_SIZE)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Page<E> {
    pub items: Vec<E>,
    /// Matching rows before the page was cut.
    pub total: u64,
}

#[async_trait]
pub trait Repository<E: Entity>: Send + Sync {
    /// Stages an insert and returns the entity carrying its newly assigned identifier.
    async fn add(&self, entity: E) -> anyhow::Result<E>;

    async fn update(&self, entity: E) -> anyhow::Result<()>;

    async fn remove(&self, id: i64) -> anyhow::Result<()>;

    async fn find(
        &self,
        id: i64,
        predicate: Option<Predicate<'_, E>>,
    ) -> anyhow::Result<Option<E>>;

    /// Committed rows matching `filter`, ordered by identifier.
    async fn search(&self, filter: Predicate<'_, E>, paging: Paging) -> anyhow::Result<Page<E>>;

    /// Commits staged changes and returns the number of rows affected.
    async fn save(&self, cancel: &CancellationToken) -> anyhow::Result<usize>;
}
