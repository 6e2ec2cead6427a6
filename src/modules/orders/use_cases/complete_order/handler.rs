use crate::modules::orders::core::order::{Order, OrderModel, errors};
use crate::modules::orders::use_cases::complete_order::command::CompleteOrder;
use crate::shared::core::outcome::Outcome;
use crate::shared::dispatch::contracts::CommandHandler;
use crate::shared::infrastructure::persistence::Repository;
use crate::shared::infrastructure::persistence::save_outcome::SavePolicy;
use async_trait::async_trait;
use tokio_util::sync::CancellationToken;

pub struct CompleteOrderHandler<TRepository> {
    repository: TRepository,
    policy: SavePolicy,
}

impl<TRepository> CompleteOrderHandler<TRepository>
where
    TRepository: Repository<Order>,
{
    pub fn new(repository: TRepository, policy: SavePolicy) -> Self {
        Self { repository, policy }
    }
}

#[async_trait]
impl<TRepository> CommandHandler<CompleteOrder> for CompleteOrderHandler<TRepository>
where
    TRepository: Repository<Order>,
{
    async fn handle(
        &self,
        command: CompleteOrder,
        cancel: &CancellationToken,
    ) -> anyhow::Result<Outcome<OrderModel>> {
        let Some(order) = self.repository.find(command.id, None).await? else {
            return Ok(Outcome::not_found(errors::not_found(command.id)));
        };

        let order = order.complete();
        self.repository.update(order.clone()).await?;
        let rows = self.repository.save(cancel).await?;
        tracing::info!(order_id = order.id, rows, "order completed");
        Ok(self.policy.outcome(OrderModel::from(&order), rows, errors::UPDATE))
    }
}
