use std::sync::Arc;

use heroes_types::errors::{ApplicationError, Result};

use crate::{
    config::Config,
    cqrs::{CommandHandler, commands::DeleteHero},
    repository::HeroRepository,
};

pub struct DeleteHeroCommandHandler {}

impl DeleteHeroCommandHandler {
    pub fn new() -> Self {
        Self {}
    }
}

#[async_trait::async_trait]
impl CommandHandler<DeleteHero> for DeleteHeroCommandHandler {
    async fn handle(
        &self,
        command: DeleteHero,
        heroes: &Arc<dyn HeroRepository>,
        _config: &Arc<Config>,
    ) -> Result<bool, ApplicationError> {
        let deleted = heroes.delete(&command.id).await?;
        tracing::info!(hero_id = %command.id, "Hero deleted");
        Ok(deleted)
    }
}
