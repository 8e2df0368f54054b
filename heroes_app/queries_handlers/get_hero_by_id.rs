use async_trait::async_trait;
use std::sync::Arc;

use heroes_types::errors::ApplicationError;

use crate::{
    config::Config,
    cqrs::{Query, QueryHandler, queries::GetHeroById},
    repository::HeroRepository,
};

pub struct GetHeroByIdHandler {}

impl GetHeroByIdHandler {
    pub fn new() -> Self {
        Self {}
    }
}

#[async_trait]
impl QueryHandler<GetHeroById> for GetHeroByIdHandler {
    async fn handle(
        &self,
        query: GetHeroById,
        heroes: &Arc<dyn HeroRepository>,
        _config: &Arc<Config>,
    ) -> Result<<GetHeroById as Query>::Output, ApplicationError> {
        let hero = heroes.get_by_id(&query.id).await?;
        if hero.is_none() {
            tracing::debug!(hero_id = %query.id, "Hero not found");
        }
        Ok(hero)
    }
}
