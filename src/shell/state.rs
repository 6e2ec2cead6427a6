use crate::shared::dispatch::dispatcher::Dispatcher;
use crate::shared::dispatch::error::DispatchError;
use crate::shared::dispatch::registry::HandlerRegistry;
use crate::shared::infrastructure::outbox::in_memory::InMemoryDomainOutbox;
use crate::shared::infrastructure::persistence::save_outcome::SavePolicy;
use crate::shell::config::AppConfig;
use crate::shell::database::InMemoryDatabase;
use crate::shell::wiring::register_handlers;
use std::sync::Arc;
use tokio_util::sync::CancellationToken;

#[derive(Clone)]
pub struct AppState {
    pub dispatcher: Dispatcher,
    pub config: Arc<AppConfig>,
    pub database: Arc<InMemoryDatabase>,
    pub outbox: Arc<InMemoryDomainOutbox>,
    /// Cancelled when the server begins shutting down.
    pub shutdown: CancellationToken,
}

impl AppState {
    /// Wires every handler against fresh in-memory storage.
    pub fn in_memory(config: AppConfig) -> Result<Self, DispatchError> {
        let database = Arc::new(InMemoryDatabase::new());
        let outbox = Arc::new(InMemoryDomainOutbox::new());
        let registry = HandlerRegistry::new();
        register_handlers(
            &registry,
            &database,
            &outbox,
            SavePolicy::from_strict_writes(config.strict_writes),
        )?;

        Ok(Self {
            dispatcher: Dispatcher::new(Arc::new(registry)),
            config: Arc::new(config),
            database,
            outbox,
            shutdown: CancellationToken::new(),
        })
    }

    /// Token handed to the handlers of one request.
    pub fn request_token(&self) -> CancellationToken {
        self.shutdown.child_token()
    }
}
