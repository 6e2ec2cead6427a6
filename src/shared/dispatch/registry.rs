use crate::shared::dispatch::contracts::{
    Command, CommandHandler, Notification, NotificationHandler, Query, QueryHandler,
};
use crate::shared::dispatch::error::DispatchError;
use dashmap::DashMap;
use dashmap::mapref::entry::Entry;
use std::any::{Any, TypeId};
use std::sync::Arc;

type CommandFactory<C> = Arc<dyn Fn() -> Arc<dyn CommandHandler<C>> + Send + Sync>;
type QueryFactory<Q> = Arc<dyn Fn() -> Arc<dyn QueryHandler<Q>> + Send + Sync>;
type NotificationFactory<N> = Arc<dyn Fn() -> Arc<dyn NotificationHandler<N>> + Send + Sync>;

type Erased = Box<dyn Any + Send + Sync>;

/// Resolution provider for the dispatcher.
///
/// Handlers are registered per concrete request type, keyed by its `TypeId`. A
/// registration is a factory: it runs on every resolution, so the factory decides
/// whether callers share one instance or get a fresh one (for example one storage
/// session per request). Commands and queries accept exactly one registration;
/// notifications accept any number and keep registration order.
#[derive(Default)]
pub struct HandlerRegistry {
    commands: DashMap<TypeId, (&'static str, Erased)>,
    queries: DashMap<TypeId, (&'static str, Erased)>,
    notifications: DashMap<TypeId, (&'static str, Erased)>,
}

impl HandlerRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a factory producing a fresh handler for every dispatched `C`.
    pub fn register_command<C, H, F>(&self, factory: F) -> Result<(), DispatchError>
    where
        C: Command,
        H: CommandHandler<C> + 'static,
        F: Fn() -> H + Send + Sync + 'static,
    {
        let f: CommandFactory<C> =
            Arc::new(move || -> Arc<dyn CommandHandler<C>> { Arc::new(factory()) });
        insert_unique(&self.commands, TypeId::of::<C>(), C::NAME, Box::new(f))?;
        tracing::debug!(request = C::NAME, "command handler registered");
        Ok(())
    }

    /// Registers one handler instance shared by every dispatched `C`.
    pub fn register_command_instance<C, H>(&self, handler: Arc<H>) -> Result<(), DispatchError>
    where
        C: Command,
        H: CommandHandler<C> + 'static,
    {
        let f: CommandFactory<C> =
            Arc::new(move || -> Arc<dyn CommandHandler<C>> { handler.clone() });
        insert_unique(&self.commands, TypeId::of::<C>(), C::NAME, Box::new(f))?;
        tracing::debug!(request = C::NAME, "command handler instance registered");
        Ok(())
    }

    pub fn register_query<Q, H, F>(&self, factory: F) -> Result<(), DispatchError>
    where
        Q: Query,
        H: QueryHandler<Q> + 'static,
        F: Fn() -> H + Send + Sync + 'static,
    {
        let f: QueryFactory<Q> =
            Arc::new(move || -> Arc<dyn QueryHandler<Q>> { Arc::new(factory()) });
        insert_unique(&self.queries, TypeId::of::<Q>(), Q::NAME, Box::new(f))?;
        tracing::debug!(request = Q::NAME, "query handler registered");
        Ok(())
    }

    /// Appends a notification handler; handlers run in the order they were appended.
    pub fn register_notification<N, H, F>(&self, factory: F) -> Result<(), DispatchError>
    where
        N: Notification,
        H: NotificationHandler<N> + 'static,
        F: Fn() -> H + Send + Sync + 'static,
    {
        let f: NotificationFactory<N> =
            Arc::new(move || -> Arc<dyn NotificationHandler<N>> { Arc::new(factory()) });
        self.append_notification::<N>(f)
    }

    pub fn register_notification_instance<N, H>(&self, handler: Arc<H>) -> Result<(), DispatchError>
    where
        N: Notification,
        H: NotificationHandler<N> + 'static,
    {
        let f: NotificationFactory<N> =
            Arc::new(move || -> Arc<dyn NotificationHandler<N>> { handler.clone() });
        self.append_notification::<N>(f)
    }

    fn append_notification<N: Notification>(
        &self,
        factory: NotificationFactory<N>,
    ) -> Result<(), DispatchError> {
        let mut slot = self
            .notifications
            .entry(TypeId::of::<N>())
            .or_insert_with(|| (N::NAME, Box::new(Vec::<NotificationFactory<N>>::new())));
        let handlers = slot
            .value_mut()
            .1
            .downcast_mut::<Vec<NotificationFactory<N>>>()
            .ok_or(DispatchError::TypeMismatch { request: N::NAME })?;
        handlers.push(factory);
        tracing::debug!(
            request = N::NAME,
            position = handlers.len(),
            "notification handler registered"
        );
        Ok(())
    }

    pub fn resolve_command<C: Command>(&self) -> Result<Arc<dyn CommandHandler<C>>, DispatchError> {
        let factory = {
            let entry = self
                .commands
                .get(&TypeId::of::<C>())
                .ok_or(DispatchError::HandlerNotFound { request: C::NAME })?;
            entry
                .value()
                .1
                .downcast_ref::<CommandFactory<C>>()
                .ok_or(DispatchError::TypeMismatch { request: C::NAME })?
                .clone()
        };
        Ok(factory())
    }

    pub fn resolve_query<Q: Query>(&self) -> Result<Arc<dyn QueryHandler<Q>>, DispatchError> {
        let factory = {
            let entry = self
                .queries
                .get(&TypeId::of::<Q>())
                .ok_or(DispatchError::HandlerNotFound { request: Q::NAME })?;
            entry
                .value()
                .1
                .downcast_ref::<QueryFactory<Q>>()
                .ok_or(DispatchError::TypeMismatch { request: Q::NAME })?
                .clone()
        };
        Ok(factory())
    }

    /// All handlers for `N` in registration order; empty when none are registered.
    pub fn resolve_notifications<N: Notification>(
        &self,
    ) -> Result<Vec<Arc<dyn NotificationHandler<N>>>, DispatchError> {
        let factories = match self.notifications.get(&TypeId::of::<N>()) {
            None => return Ok(Vec::new()),
            Some(entry) => entry
                .value()
                .1
                .downcast_ref::<Vec<NotificationFactory<N>>>()
                .ok_or(DispatchError::TypeMismatch { request: N::NAME })?
                .clone(),
        };
        Ok(factories.iter().map(|factory| factory()).collect())
    }

    /// Names of every registered command, query and notification type.
    pub fn registered_requests(&self) -> Vec<&'static str> {
        let mut names: Vec<&'static str> = self
            .commands
            .iter()
            .chain(self.queries.iter())
            .chain(self.notifications.iter())
            .map(|entry| entry.value().0)
            .collect();
        names.sort_unstable();
        names
    }
}

fn insert_unique(
    map: &DashMap<TypeId, (&'static str, Erased)>,
    key: TypeId,
    name: &'static str,
    value: Erased,
) -> Result<(), DispatchError> {
    match map.entry(key) {
        Entry::Occupied(_) => Err(DispatchError::AlreadyRegistered { request: name }),
        Entry::Vacant(slot) => {
            slot.insert((name, value));
            Ok(())
        }
    }
}

#[cfg(test)]
mod handler_registry_tests {
    use super::*;
    use crate::shared::core::outcome::Outcome;
    use async_trait::async_trait;
    use rstest::{fixture, rstest};
    use std::sync::atomic::{AtomicUsize, Ordering};
    use tokio_util::sync::CancellationToken;

    struct Ping;

    impl Command for Ping {
        const NAME: &'static str = "Ping";
        type Output = usize;
    }

    struct Lookup;

    impl Query for Lookup {
        const NAME: &'static str = "Lookup";
        type Output = String;
    }

    struct Rang;

    impl Notification for Rang {
        const NAME: &'static str = "Rang";
    }

    struct PingHandler(usize);

    #[async_trait]
    impl CommandHandler<Ping> for PingHandler {
        async fn handle(&self, _: Ping, _: &CancellationToken) -> anyhow::Result<Outcome<usize>> {
            Ok(Outcome::success(self.0))
        }
    }

    struct LookupHandler;

    #[async_trait]
    impl QueryHandler<Lookup> for LookupHandler {
        async fn handle(
            &self,
            _: Lookup,
            _: &CancellationToken,
        ) -> anyhow::Result<Outcome<String>> {
            Ok(Outcome::success("found".to_string()))
        }
    }

    struct RangHandler;

    #[async_trait]
    impl NotificationHandler<Rang> for RangHandler {
        async fn handle(&self, _: &Rang, _: &CancellationToken) -> anyhow::Result<()> {
            Ok(())
        }
    }

    #[fixture]
    fn registry() -> HandlerRegistry {
        HandlerRegistry::new()
    }

    #[rstest]
    fn it_should_reject_a_second_command_registration(registry: HandlerRegistry) {
        registry.register_command::<Ping, _, _>(|| PingHandler(1)).unwrap();
        let err = registry
            .register_command_instance::<Ping, _>(Arc::new(PingHandler(2)))
            .unwrap_err();
        assert!(matches!(err, DispatchError::AlreadyRegistered { request: "Ping" }));
        assert!(err.is_configuration());
    }

    #[rstest]
    fn it_should_reject_a_second_query_registration(registry: HandlerRegistry) {
        registry.register_query::<Lookup, _, _>(|| LookupHandler).unwrap();
        let err = registry.register_query::<Lookup, _, _>(|| LookupHandler).unwrap_err();
        assert!(matches!(err, DispatchError::AlreadyRegistered { request: "Lookup" }));
    }

    #[rstest]
    fn it_should_fail_to_resolve_unregistered_requests(registry: HandlerRegistry) {
        assert!(matches!(
            registry.resolve_command::<Ping>().err(),
            Some(DispatchError::HandlerNotFound { request: "Ping" })
        ));
        assert!(matches!(
            registry.resolve_query::<Lookup>().err(),
            Some(DispatchError::HandlerNotFound { request: "Lookup" })
        ));
    }

    #[rstest]
    fn it_should_resolve_no_notification_handlers_when_none_registered(registry: HandlerRegistry) {
        assert!(registry.resolve_notifications::<Rang>().unwrap().is_empty());
    }

    #[rstest]
    fn it_should_accept_many_notification_handlers(registry: HandlerRegistry) {
        registry.register_notification::<Rang, _, _>(|| RangHandler).unwrap();
        registry
            .register_notification_instance::<Rang, _>(Arc::new(RangHandler))
            .unwrap();
        assert_eq!(registry.resolve_notifications::<Rang>().unwrap().len(), 2);
    }

    #[rstest]
    #[tokio::test]
    async fn it_should_run_the_factory_on_every_resolution(registry: HandlerRegistry) {
        let built = Arc::new(AtomicUsize::new(0));
        let counter = built.clone();
        registry
            .register_command::<Ping, _, _>(move || {
                PingHandler(counter.fetch_add(1, Ordering::SeqCst))
            })
            .unwrap();

        let cancel = CancellationToken::new();
        let first = registry
            .resolve_command::<Ping>()
            .unwrap()
            .handle(Ping, &cancel)
            .await
            .unwrap();
        let second = registry
            .resolve_command::<Ping>()
            .unwrap()
            .handle(Ping, &cancel)
            .await
            .unwrap();

        assert_eq!(first, Outcome::success(0));
        assert_eq!(second, Outcome::success(1));
        assert_eq!(built.load(Ordering::SeqCst), 2);
    }

    #[rstest]
    fn it_should_list_registered_request_names(registry: HandlerRegistry) {
        registry.register_command::<Ping, _, _>(|| PingHandler(0)).unwrap();
        registry.register_query::<Lookup, _, _>(|| LookupHandler).unwrap();
        registry.register_notification::<Rang, _, _>(|| RangHandler).unwrap();
        assert_eq!(registry.registered_requests(), vec!["Lookup", "Ping", "Rang"]);
    }
}
