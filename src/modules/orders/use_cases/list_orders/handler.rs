use crate::modules::orders::core::order::{Order, OrderModel};
use crate::modules::orders::use_cases::list_orders::query::ListOrders;
use crate::shared::core::outcome::Outcome;
use crate::shared::dispatch::contracts::QueryHandler;
use crate::shared::infrastructure::persistence::Repository;
use async_trait::async_trait;
use tokio_util::sync::CancellationToken;

pub struct ListOrdersHandler<TRepository> {
    repository: TRepository,
}

impl<TRepository> ListOrdersHandler<TRepository>
where
    TRepository: Repository<Order>,
{
    pub fn new(repository: TRepository) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl<TRepository> QueryHandler<ListOrders> for ListOrdersHandler<TRepository>
where
    TRepository: Repository<Order>,
{
    async fn handle(
        &self,
        query: ListOrders,
        _cancel: &CancellationToken,
    ) -> anyhow::Result<Outcome<Vec<OrderModel>>> {
        let everything = |_: &Order| true;
        let page = self.repository.search(&everything, query.paging()).await?;
        let models = page.items.iter().map(OrderModel::from).collect();
        Ok(Outcome::success_with_count(models, page.total))
    }
}
