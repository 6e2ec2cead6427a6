use crate::modules::orders::core::order::{Order, OrderModel, errors};
use crate::modules::orders::use_cases::create_order::command::CreateOrder;
use crate::shared::core::outcome::Outcome;
use crate::shared::dispatch::contracts::CommandHandler;
use crate::shared::infrastructure::persistence::Repository;
use crate::shared::infrastructure::persistence::save_outcome::SavePolicy;
use async_trait::async_trait;
use chrono::Utc;
use tokio_util::sync::CancellationToken;

pub struct CreateOrderHandler<TRepository> {
    repository: TRepository,
    policy: SavePolicy,
}

impl<TRepository> CreateOrderHandler<TRepository>
where
    TRepository: Repository<Order>,
{
    pub fn new(repository: TRepository, policy: SavePolicy) -> Self {
        Self { repository, policy }
    }
}

#[async_trait]
impl<TRepository> CommandHandler<CreateOrder> for CreateOrderHandler<TRepository>
where
    TRepository: Repository<Order>,
{
    async fn handle(
        &self,
        command: CreateOrder,
        cancel: &CancellationToken,
    ) -> anyhow::Result<Outcome<OrderModel>> {
        let order = Order::place(
            command.customer_name,
            command.customer_email,
            command.pizza_id,
            Utc::now(),
        );
        let order = self.repository.add(order).await?;
        let rows = self.repository.save(cancel).await?;
        tracing::info!(order_id = order.id, pizza_id = order.pizza_id, rows, "order placed");
        Ok(self.policy.outcome(OrderModel::from(&order), rows, errors::SAVE))
    }
}
