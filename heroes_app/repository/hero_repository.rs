use heroes_types::{
    errors::{ApplicationError, Result},
    hero::{Hero, HeroChanges, NewHero},
};

/// The authoritative hero collection.
#[async_trait::async_trait]
pub trait HeroRepository: Send + Sync {
    /// Returns a snapshot of every hero.
    async fn list_all(&self) -> Result<Vec<Hero>, ApplicationError>;

    /// Retrieves a hero by id, `None` when absent.
    async fn get_by_id(&self, id: &str) -> Result<Option<Hero>, ApplicationError>;

    /// Case-insensitive substring search on name and real name.
    async fn search(&self, term: &str) -> Result<Vec<Hero>, ApplicationError>;

    /// Stores a new hero, assigning its id and timestamps.
    async fn create(&self, hero: NewHero) -> Result<Hero, ApplicationError>;

    /// Merges changes into an existing hero.
    async fn update(&self, id: &str, changes: HeroChanges) -> Result<Hero, ApplicationError>;

    /// Removes a hero.
    async fn delete(&self, id: &str) -> Result<bool, ApplicationError>;
}
