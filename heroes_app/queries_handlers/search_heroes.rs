use async_trait::async_trait;
use std::sync::Arc;

use heroes_types::errors::ApplicationError;

use crate::{
    config::Config,
    cqrs::{Query, QueryHandler, queries::SearchHeroes},
    repository::HeroRepository,
};

pub struct SearchHeroesHandler {}

impl SearchHeroesHandler {
    pub fn new() -> Self {
        Self {}
    }
}

#[async_trait]
impl QueryHandler<SearchHeroes> for SearchHeroesHandler {
    async fn handle(
        &self,
        query: SearchHeroes,
        heroes: &Arc<dyn HeroRepository>,
        _config: &Arc<Config>,
    ) -> Result<<SearchHeroes as Query>::Output, ApplicationError> {
        heroes.search(&query.term).await
    }
}
