use crate::modules::pizzas::core::pizza::{Pizza, errors};
use crate::modules::pizzas::use_cases::delete_pizza::command::DeletePizza;
use crate::shared::core::outcome::Outcome;
use crate::shared::dispatch::contracts::CommandHandler;
use crate::shared::infrastructure::persistence::Repository;
use crate::shared::infrastructure::persistence::save_outcome::SavePolicy;
use async_trait::async_trait;
use tokio_util::sync::CancellationToken;

pub struct DeletePizzaHandler<TRepository> {
    repository: TRepository,
    policy: SavePolicy,
}

impl<TRepository> DeletePizzaHandler<TRepository>
where
    TRepository: Repository<Pizza>,
{
    pub fn new(repository: TRepository, policy: SavePolicy) -> Self {
        Self { repository, policy }
    }
}

#[async_trait]
impl<TRepository> CommandHandler<DeletePizza> for DeletePizzaHandler<TRepository>
where
    TRepository: Repository<Pizza>,
{
    async fn handle(
        &self,
        command: DeletePizza,
        cancel: &CancellationToken,
    ) -> anyhow::Result<Outcome<()>> {
        if self.repository.find(command.id, None).await?.is_none() {
            return Ok(Outcome::not_found(errors::DELETE));
        }

        self.repository.remove(command.id).await?;
        let rows = self.repository.save(cancel).await?;
        tracing::info!(pizza_id = command.id, rows, "pizza deleted");
        Ok(self.policy.unit_outcome(rows, errors::DELETE))
    }
}
