use crate::modules::orders::core::order::{Order, OrderStatus};
use crate::modules::orders::use_cases::get_order_status::query::GetOrderStatus;
use crate::shared::core::outcome::Outcome;
use crate::shared::dispatch::contracts::QueryHandler;
use crate::shared::infrastructure::persistence::Repository;
use async_trait::async_trait;
use tokio_util::sync::CancellationToken;

pub struct GetOrderStatusHandler<TRepository> {
    repository: TRepository,
}

impl<TRepository> GetOrderStatusHandler<TRepository>
where
    TRepository: Repository<Order>,
{
    pub fn new(repository: TRepository) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl<TRepository> QueryHandler<GetOrderStatus> for GetOrderStatusHandler<TRepository>
where
    TRepository: Repository<Order>,
{
    async fn handle(
        &self,
        query: GetOrderStatus,
        _cancel: &CancellationToken,
    ) -> anyhow::Result<Outcome<OrderStatus>> {
        Ok(match self.repository.find(query.id, None).await? {
            Some(order) => Outcome::success(order.status),
            None => Outcome::not_found_default(),
        })
    }
}
