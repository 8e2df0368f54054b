use std::sync::Arc;

use heroes_types::{
    errors::{ApplicationError, Result},
    hero::Hero,
};

use crate::{
    config::Config,
    cqrs::{CommandHandler, commands::CreateHero},
    repository::HeroRepository,
};

pub struct CreateHeroCommandHandler {}

impl CreateHeroCommandHandler {
    pub fn new() -> Self {
        Self {}
    }
}

#[async_trait::async_trait]
impl CommandHandler<CreateHero> for CreateHeroCommandHandler {
    async fn handle(
        &self,
        command: CreateHero,
        heroes: &Arc<dyn HeroRepository>,
        _config: &Arc<Config>,
    ) -> Result<Hero, ApplicationError> {
        // Normalize the request (trim, upper-case name) and enforce the
        // effectiveness and powers rules once more before storing.
        let new_hero = command.request.into_new_hero()?;

        let hero = heroes.create(new_hero).await?;
        tracing::info!(hero_id = %hero.id, name = %hero.name, "Hero created");
        Ok(hero)
    }
}
