use std::sync::Arc;

use chrono::Utc;
use tokio::sync::RwLock;
use uuid::Uuid;

use heroes_app::repository::HeroRepository;
use heroes_types::{
    errors::{ApplicationError, DbError, Result},
    hero::{Hero, HeroChanges, NewHero},
};

use crate::latency::{Latency, RandomLatency};

/// Mock data store holding the authoritative hero collection in memory.
/// Every operation awaits the configured latency before touching the data.
#[derive(Clone)]
pub struct InMemoryHeroRepository {
    heroes: Arc<RwLock<Vec<Hero>>>,
    latency: Arc<dyn Latency>,
}

impl InMemoryHeroRepository {
    pub fn new(latency: Arc<dyn Latency>) -> Self {
        Self::with_heroes(Vec::new(), latency)
    }

    pub fn with_heroes(heroes: Vec<Hero>, latency: Arc<dyn Latency>) -> Self {
        Self {
            heroes: Arc::new(RwLock::new(heroes)),
            latency,
        }
    }

    /// Number of stored heroes, without simulated latency.
    pub async fn len(&self) -> usize {
        self.heroes.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.heroes.read().await.is_empty()
    }
}

impl Default for InMemoryHeroRepository {
    fn default() -> Self {
        Self::new(Arc::new(RandomLatency::default()))
    }
}

fn name_taken(heroes: &[Hero], name: &str, except_id: Option<&str>) -> bool {
    heroes
        .iter()
        .any(|hero| Some(hero.id.as_str()) != except_id && hero.has_name(name))
}

fn fresh_id(heroes: &[Hero]) -> String {
    loop {
        let id = Uuid::new_v4().to_string();
        if !heroes.iter().any(|hero| hero.id == id) {
            return id;
        }
    }
}

#[async_trait::async_trait]
impl HeroRepository for InMemoryHeroRepository {
    async fn list_all(&self) -> Result<Vec<Hero>, ApplicationError> {
        self.latency.wait().await;
        let heroes = self.heroes.read().await;
        tracing::debug!(count = heroes.len(), "Listing heroes");
        Ok(heroes.clone())
    }

    async fn get_by_id(&self, id: &str) -> Result<Option<Hero>, ApplicationError> {
        self.latency.wait().await;
        let heroes = self.heroes.read().await;
        Ok(heroes.iter().find(|hero| hero.id == id).cloned())
    }

    async fn search(&self, term: &str) -> Result<Vec<Hero>, ApplicationError> {
        self.latency.wait().await;
        let term = term.trim().to_lowercase();
        let heroes = self.heroes.read().await;
        let found: Vec<Hero> = heroes
            .iter()
            .filter(|hero| term.is_empty() || hero.matches(&term))
            .cloned()
            .collect();
        tracing::debug!(term = %term, count = found.len(), "Searched heroes");
        Ok(found)
    }

    async fn create(&self, hero: NewHero) -> Result<Hero, ApplicationError> {
        self.latency.wait().await;
        let mut heroes = self.heroes.write().await;

        if name_taken(&heroes, &hero.name, None) {
            return Err(ApplicationError::Db(DbError::HeroNameTaken(hero.name)));
        }

        let now = Utc::now();
        let created = Hero {
            id: fresh_id(&heroes),
            name: hero.name,
            real_name: hero.real_name,
            powers: hero.powers,
            weaknesses: hero.weaknesses,
            effectiveness: hero.effectiveness,
            is_alive: hero.is_alive,
            image_url: hero.image_url,
            created_at: now,
            updated_at: now,
        };
        heroes.push(created.clone());
        tracing::debug!(hero_id = %created.id, "Stored new hero");
        Ok(created)
    }

    async fn update(&self, id: &str, changes: HeroChanges) -> Result<Hero, ApplicationError> {
        self.latency.wait().await;
        let mut heroes = self.heroes.write().await;

        if let Some(name) = &changes.name {
            if name_taken(&heroes, name, Some(id)) {
                return Err(ApplicationError::Db(DbError::HeroNameTaken(name.clone())));
            }
        }

        let hero = heroes
            .iter_mut()
            .find(|hero| hero.id == id)
            .ok_or_else(|| ApplicationError::Db(DbError::HeroNotFound(id.to_string())))?;
        hero.apply(changes, Utc::now());
        tracing::debug!(hero_id = %id, "Stored hero changes");
        Ok(hero.clone())
    }

    async fn delete(&self, id: &str) -> Result<bool, ApplicationError> {
        self.latency.wait().await;
        let mut heroes = self.heroes.write().await;

        let index = heroes
            .iter()
            .position(|hero| hero.id == id)
            .ok_or_else(|| ApplicationError::Db(DbError::HeroNotFound(id.to_string())))?;
        heroes.remove(index);
        tracing::debug!(hero_id = %id, "Removed hero");
        Ok(true)
    }
}
