use crate::modules::pizzas::core::pizza::{Pizza, PizzaModel, errors};
use crate::modules::pizzas::use_cases::get_pizza::query::GetPizza;
use crate::shared::core::outcome::Outcome;
use crate::shared::dispatch::contracts::QueryHandler;
use crate::shared::infrastructure::persistence::{Predicate, Repository};
use async_trait::async_trait;
use tokio_util::sync::CancellationToken;

pub struct GetPizzaHandler<TRepository> {
    repository: TRepository,
}

impl<TRepository> GetPizzaHandler<TRepository>
where
    TRepository: Repository<Pizza>,
{
    pub fn new(repository: TRepository) -> Self {
        Self { repository }
    }
}

fn is_enabled(pizza: &Pizza) -> bool {
    !pizza.disabled
}

#[async_trait]
impl<TRepository> QueryHandler<GetPizza> for GetPizzaHandler<TRepository>
where
    TRepository: Repository<Pizza>,
{
    async fn handle(
        &self,
        query: GetPizza,
        _cancel: &CancellationToken,
    ) -> anyhow::Result<Outcome<PizzaModel>> {
        let enabled: Predicate<'_, Pizza> = &is_enabled;
        let found = self.repository.find(query.id, Some(enabled)).await?;
        Ok(match found {
            Some(pizza) => Outcome::success(PizzaModel::from(&pizza)),
            None => Outcome::not_found(errors::NOT_FOUND),
        })
    }
}
