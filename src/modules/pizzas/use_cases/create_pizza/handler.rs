use crate::modules::pizzas::core::pizza::{Pizza, PizzaModel, errors};
use crate::modules::pizzas::use_cases::create_pizza::command::CreatePizza;
use crate::shared::core::outcome::Outcome;
use crate::shared::dispatch::contracts::CommandHandler;
use crate::shared::infrastructure::persistence::Repository;
use crate::shared::infrastructure::persistence::save_outcome::SavePolicy;
use async_trait::async_trait;
use chrono::Utc;
use tokio_util::sync::CancellationToken;

pub struct CreatePizzaHandler<TRepository> {
    repository: TRepository,
    policy: SavePolicy,
}

impl<TRepository> CreatePizzaHandler<TRepository>
where
    TRepository: Repository<Pizza>,
{
    pub fn new(repository: TRepository, policy: SavePolicy) -> Self {
        Self { repository, policy }
    }
}

#[async_trait]
impl<TRepository> CommandHandler<CreatePizza> for CreatePizzaHandler<TRepository>
where
    TRepository: Repository<Pizza>,
{
    async fn handle(
        &self,
        command: CreatePizza,
        cancel: &CancellationToken,
    ) -> anyhow::Result<Outcome<PizzaModel>> {
        let pizza = self
            .repository
            .add(Pizza::new(command.name, command.disabled, Utc::now()))
            .await?;
        let rows = self.repository.save(cancel).await?;
        tracing::info!(pizza_id = pizza.id, rows, "pizza created");
        Ok(self.policy.outcome(PizzaModel::from(&pizza), rows, errors::SAVE))
    }
}

#[cfg(test)]
mod create_pizza_handler_tests {
    use super::*;
    use crate::shared::core::validation::Validate;
    use crate::shared::infrastructure::persistence::in_memory::{
        InMemoryRepository, InMemoryTable,
    };
    use crate::tests::fixtures::commands::create_pizza::CreatePizzaBuilder;
    use rstest::{fixture, rstest};
    use std::sync::Arc;

    #[fixture]
    fn table() -> Arc<InMemoryTable<Pizza>> {
        Arc::new(InMemoryTable::new("pizzas"))
    }

    fn handler(table: &Arc<InMemoryTable<Pizza>>) -> CreatePizzaHandler<InMemoryRepository<Pizza>> {
        CreatePizzaHandler::new(InMemoryRepository::new(table.clone()), SavePolicy::Permissive)
    }

    #[rstest]
    #[tokio::test]
    async fn it_should_store_the_pizza_and_return_it_with_a_fresh_id(
        table: Arc<InMemoryTable<Pizza>>,
    ) {
        let command = CreatePizzaBuilder::new().name("Margherita").build();

        let outcome = handler(&table)
            .handle(command, &CancellationToken::new())
            .await
            .expect("handle failed");

        let model = outcome.data().expect("expected success");
        assert_eq!(model.name, "Margherita");
        assert!(!model.disabled);
        assert_eq!(model.id, 1);
        assert_eq!(table.len().await, 1);
    }

    #[rstest]
    #[tokio::test]
    async fn it_should_hand_out_distinct_ids(table: Arc<InMemoryTable<Pizza>>) {
        let cancel = CancellationToken::new();
        let first = handler(&table)
            .handle(CreatePizzaBuilder::new().build(), &cancel)
            .await
            .unwrap();
        let second = handler(&table)
            .handle(CreatePizzaBuilder::new().name("Hawaiian").build(), &cancel)
            .await
            .unwrap();
        assert_ne!(first.data().unwrap().id, second.data().unwrap().id);
    }

    #[rstest]
    #[tokio::test]
    async fn it_should_propagate_storage_failures(table: Arc<InMemoryTable<Pizza>>) {
        table.toggle_offline();
        let result = handler(&table)
            .handle(CreatePizzaBuilder::new().build(), &CancellationToken::new())
            .await;
        assert!(result.unwrap_err().to_string().contains("pizzas table offline"));
    }

    #[rstest]
    #[tokio::test]
    async fn it_should_propagate_cancellation_from_the_save(table: Arc<InMemoryTable<Pizza>>) {
        let cancel = CancellationToken::new();
        cancel.cancel();
        let result = handler(&table).handle(CreatePizzaBuilder::new().build(), &cancel).await;
        assert!(result.is_err());
        assert!(table.is_empty().await);
    }

    #[rstest]
    fn it_should_reject_blank_or_overlong_names() {
        let blank = CreatePizzaBuilder::new().name("  ").build();
        let long = CreatePizzaBuilder::new().name("x".repeat(201)).build();

        assert_eq!(blank.validate()["name"], vec!["Name is required"]);
        assert_eq!(long.validate()["name"], vec!["Name must be 200 characters or fewer"]);
        assert!(CreatePizzaBuilder::new().build().validate().is_empty());
    }
}
