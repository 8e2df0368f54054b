use std::sync::Arc;

use heroes_types::{
    errors::{ApplicationError, Result},
    hero::Hero,
};

use crate::{
    config::Config,
    cqrs::{CommandHandler, commands::UpdateHero},
    repository::HeroRepository,
};

pub struct UpdateHeroCommandHandler {}

impl UpdateHeroCommandHandler {
    pub fn new() -> Self {
        Self {}
    }
}

#[async_trait::async_trait]
impl CommandHandler<UpdateHero> for UpdateHeroCommandHandler {
    async fn handle(
        &self,
        command: UpdateHero,
        heroes: &Arc<dyn HeroRepository>,
        _config: &Arc<Config>,
    ) -> Result<Hero, ApplicationError> {
        let (id, changes) = command.request.into_changes()?;

        let hero = heroes.update(&id, changes).await?;
        tracing::info!(hero_id = %hero.id, "Hero updated");
        Ok(hero)
    }
}
