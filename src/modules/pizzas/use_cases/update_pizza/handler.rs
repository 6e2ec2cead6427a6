use crate::modules::pizzas::core::pizza::{Pizza, PizzaModel, errors};
use crate::modules::pizzas::use_cases::update_pizza::command::UpdatePizza;
use crate::shared::core::outcome::Outcome;
use crate::shared::dispatch::contracts::CommandHandler;
use crate::shared::infrastructure::persistence::Repository;
use crate::shared::infrastructure::persistence::save_outcome::SavePolicy;
use async_trait::async_trait;
use tokio_util::sync::CancellationToken;

pub struct UpdatePizzaHandler<TRepository> {
    repository: TRepository,
    policy: SavePolicy,
}

impl<TRepository> UpdatePizzaHandler<TRepository>
where
    TRepository: Repository<Pizza>,
{
    pub fn new(repository: TRepository, policy: SavePolicy) -> Self {
        Self { repository, policy }
    }
}

fn apply(mut pizza: Pizza, command: UpdatePizza) -> Pizza {
    if let Some(name) = command.name.filter(|name| !name.trim().is_empty()) {
        pizza.name = name;
    }
    if let Some(disabled) = command.disabled {
        pizza.disabled = disabled;
    }
    pizza
}

#[async_trait]
impl<TRepository> CommandHandler<UpdatePizza> for UpdatePizzaHandler<TRepository>
where
    TRepository: Repository<Pizza>,
{
    async fn handle(
        &self,
        command: UpdatePizza,
        cancel: &CancellationToken,
    ) -> anyhow::Result<Outcome<PizzaModel>> {
        let Some(current) = self.repository.find(command.id, None).await? else {
            return Ok(Outcome::not_found(errors::UPDATE));
        };

        let pizza = apply(current, command);
        self.repository.update(pizza.clone()).await?;
        let rows = self.repository.save(cancel).await?;
        tracing::info!(pizza_id = pizza.id, rows, "pizza updated");
        Ok(self.policy.outcome(PizzaModel::from(&pizza), rows, errors::UPDATE))
    }
}

#[cfg(test)]
mod update_pizza_handler_tests {
    use super::*;
    use crate::shared::core::outcome::OutcomeKind;
    use crate::shared::infrastructure::persistence::in_memory::{InMemoryRepository, InMemoryTable};
    use chrono::Utc;
    use rstest::{fixture, rstest};
    use std::sync::Arc;

    #[fixture]
    async fn table() -> Arc<InMemoryTable<Pizza>> {
        let table = Arc::new(InMemoryTable::new("pizzas"));
        let session = InMemoryRepository::new(table.clone());
        session
            .add(Pizza::new("Margherita".into(), false, Utc::now()))
            .await
            .unwrap();
        session.save(&CancellationToken::new()).await.unwrap();
        table
    }

    fn handler(
        table: &Arc<InMemoryTable<Pizza>>,
        policy: SavePolicy,
    ) -> UpdatePizzaHandler<InMemoryRepository<Pizza>> {
        UpdatePizzaHandler::new(InMemoryRepository::new(table.clone()), policy)
    }

    fn update(id: i64, name: Option<&str>, disabled: Option<bool>) -> UpdatePizza {
        UpdatePizza {
            id,
            name: name.map(str::to_string),
            disabled,
        }
    }

    #[rstest]
    #[tokio::test]
    async fn it_should_apply_the_supplied_fields(#[future] table: Arc<InMemoryTable<Pizza>>) {
        let table = table.await;
        let outcome = handler(&table, SavePolicy::Permissive)
            .handle(update(1, Some("Marinara"), Some(true)), &CancellationToken::new())
            .await
            .unwrap();

        let model = outcome.data().unwrap();
        assert_eq!(model.name, "Marinara");
        assert!(model.disabled);
    }

    #[rstest]
    #[case(None)]
    #[case(Some(""))]
    #[tokio::test]
    async fn it_should_keep_the_name_when_none_is_given(
        #[future] table: Arc<InMemoryTable<Pizza>>,
        #[case] name: Option<&str>,
    ) {
        let table = table.await;
        let outcome = handler(&table, SavePolicy::Permissive)
            .handle(update(1, name, Some(true)), &CancellationToken::new())
            .await
            .unwrap();

        assert_eq!(outcome.data().unwrap().name, "Margherita");
    }

    #[rstest]
    #[tokio::test]
    async fn it_should_return_not_found_for_an_unknown_pizza(
        #[future] table: Arc<InMemoryTable<Pizza>>,
    ) {
        let table = table.await;
        let outcome = handler(&table, SavePolicy::Permissive)
            .handle(update(42, Some("Marinara"), None), &CancellationToken::new())
            .await
            .unwrap();

        assert_eq!(outcome.kind(), OutcomeKind::NotFound);
        assert_eq!(outcome.message(), Some("Error updating Pizza"));
    }

    #[rstest]
    #[case(SavePolicy::Permissive, OutcomeKind::Success)]
    #[case(SavePolicy::Strict, OutcomeKind::Failure)]
    #[tokio::test]
    async fn it_should_report_an_unchanged_update_per_policy(
        #[future] table: Arc<InMemoryTable<Pizza>>,
        #[case] policy: SavePolicy,
        #[case] expected: OutcomeKind,
    ) {
        let table = table.await;
        let outcome = handler(&table, policy)
            .handle(update(1, Some("Margherita"), Some(false)), &CancellationToken::new())
            .await
            .unwrap();

        assert_eq!(outcome.kind(), expected);
    }
}
