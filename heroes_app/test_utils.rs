#[cfg(not(tarpaulin_include))]
pub mod tests {
    use async_trait::async_trait;
    use chrono::Utc;
    use std::{
        collections::HashMap,
        sync::{
            Arc, Mutex,
            atomic::{AtomicBool, Ordering},
        },
    };

    use heroes_types::{
        errors::{ApplicationError, DbError},
        hero::{Hero, HeroChanges, NewHero},
    };

    use crate::{app_bus::AppBus, config::Config, hero_service::HeroService, repository::HeroRepository};

    /// In-memory repository without latency that records every call and
    /// can be switched into a failing mode.
    #[derive(Default, Clone)]
    pub struct MockHeroRepository {
        heroes: Arc<Mutex<Vec<Hero>>>,
        failing: Arc<AtomicBool>,
        calls: Arc<Mutex<HashMap<&'static str, usize>>>,
    }

    impl MockHeroRepository {
        pub fn new() -> Self {
            Self::default()
        }

        pub fn with_heroes(heroes: Vec<Hero>) -> Self {
            let repo = Self::default();
            *repo.heroes.lock().unwrap() = heroes;
            repo
        }

        /// Makes every following call fail with `DbError::Unavailable`.
        pub fn set_failing(&self, failing: bool) {
            self.failing.store(failing, Ordering::SeqCst);
        }

        pub fn calls(&self, operation: &str) -> usize {
            self.calls
                .lock()
                .unwrap()
                .get(operation)
                .copied()
                .unwrap_or(0)
        }

        pub fn stored(&self) -> Vec<Hero> {
            self.heroes.lock().unwrap().clone()
        }

        fn record(&self, operation: &'static str) -> Result<(), ApplicationError> {
            *self.calls.lock().unwrap().entry(operation).or_insert(0) += 1;
            if self.failing.load(Ordering::SeqCst) {
                return Err(DbError::Unavailable(format!("{operation} failed")).into());
            }
            Ok(())
        }
    }

    #[async_trait]
    impl HeroRepository for MockHeroRepository {
        async fn list_all(&self) -> Result<Vec<Hero>, ApplicationError> {
            self.record("list_all")?;
            Ok(self.heroes.lock().unwrap().clone())
        }

        async fn get_by_id(&self, id: &str) -> Result<Option<Hero>, ApplicationError> {
            self.record("get_by_id")?;
            let heroes = self.heroes.lock().unwrap();
            Ok(heroes.iter().find(|h| h.id == id).cloned())
        }

        async fn search(&self, term: &str) -> Result<Vec<Hero>, ApplicationError> {
            self.record("search")?;
            let term = term.trim().to_lowercase();
            let heroes = self.heroes.lock().unwrap();
            Ok(heroes.iter().filter(|h| h.matches(&term)).cloned().collect())
        }

        async fn create(&self, hero: NewHero) -> Result<Hero, ApplicationError> {
            self.record("create")?;
            let mut heroes = self.heroes.lock().unwrap();
            let now = Utc::now();
            let created = Hero {
                id: (heroes.len() + 1).to_string(),
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
            Ok(created)
        }

        async fn update(&self, id: &str, changes: HeroChanges) -> Result<Hero, ApplicationError> {
            self.record("update")?;
            let mut heroes = self.heroes.lock().unwrap();
            let hero = heroes
                .iter_mut()
                .find(|h| h.id == id)
                .ok_or_else(|| ApplicationError::Db(DbError::HeroNotFound(id.to_string())))?;
            hero.apply(changes, Utc::now());
            Ok(hero.clone())
        }

        async fn delete(&self, id: &str) -> Result<bool, ApplicationError> {
            self.record("delete")?;
            let mut heroes = self.heroes.lock().unwrap();
            let index = heroes
                .iter()
                .position(|h| h.id == id)
                .ok_or_else(|| ApplicationError::Db(DbError::HeroNotFound(id.to_string())))?;
            heroes.remove(index);
            Ok(true)
        }
    }

    /// Builds a service on top of a mock repository.
    pub fn setup_service(repo: &MockHeroRepository) -> HeroService {
        let config = Arc::new(Config::default());
        let bus = Arc::new(AppBus::new(config.clone(), Arc::new(repo.clone())));
        HeroService::new(bus, &config)
    }
}
