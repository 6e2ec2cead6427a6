use crate::modules::pizzas::core::pizza::{Pizza, PizzaModel};
use crate::modules::pizzas::use_cases::search_pizzas::query::SearchPizzas;
use crate::shared::core::outcome::Outcome;
use crate::shared::dispatch::contracts::QueryHandler;
use crate::shared::infrastructure::persistence::Repository;
use async_trait::async_trait;
use tokio_util::sync::CancellationToken;

pub struct SearchPizzasHandler<TRepository> {
    repository: TRepository,
}

impl<TRepository> SearchPizzasHandler<TRepository>
where
    TRepository: Repository<Pizza>,
{
    pub fn new(repository: TRepository) -> Self {
        Self { repository }
    }
}

// Case-insensitive substring match on the name; an absent filter matches everything.
fn matches(query: &SearchPizzas, pizza: &Pizza) -> bool {
    let name_matches = query.name.as_deref().is_none_or(|needle| {
        pizza
            .name
            .to_lowercase()
            .contains(&needle.trim().to_lowercase())
    });
    let disabled_matches = query.disabled.is_none_or(|disabled| pizza.disabled == disabled);
    name_matches && disabled_matches
}

#[async_trait]
impl<TRepository> QueryHandler<SearchPizzas> for SearchPizzasHandler<TRepository>
where
    TRepository: Repository<Pizza>,
{
    async fn handle(
        &self,
        query: SearchPizzas,
        _cancel: &CancellationToken,
    ) -> anyhow::Result<Outcome<Vec<PizzaModel>>> {
        let filter = |pizza: &Pizza| matches(&query, pizza);
        let page = self.repository.search(&filter, query.paging()).await?;
        let models = page.items.iter().map(PizzaModel::from).collect();
        Ok(Outcome::success_with_count(models, page.total))
    }
}
