use tokio::sync::watch;

use heroes_app::hero_service::{NOT_FOUND_ERROR, UPDATE_SUCCESS};
use heroes_types::hero::{Hero, UpdateHeroRequest};

use crate::{app_state::AppState, forms::HeroForm, routes::Route};

const UPDATE_FAILED: &str = "Failed to update hero";

pub struct HeroEditPage {
    state: AppState,
    hero: watch::Sender<Option<Hero>>,
    submitting: watch::Sender<bool>,
}

impl HeroEditPage {
    pub fn new(state: AppState) -> Self {
        let (hero, _) = watch::channel(None);
        let (submitting, _) = watch::channel(false);
        Self {
            state,
            hero,
            submitting,
        }
    }

    /// Loads the hero from the cached list, falling back to the store.
    /// A blank or unknown id sends the user back to the list.
    pub async fn activate(&self, id: &str) -> Option<Hero> {
        let id = id.trim();
        if id.is_empty() {
            self.state.navigator.navigate(Route::List);
            return None;
        }

        let hero = match self.state.hero_service.cached_hero(id) {
            Some(hero) => Some(hero),
            None => self.state.hero_service.get_hero_by_id(id).await,
        };
        self.hero.send_replace(hero.clone());

        if hero.is_none() {
            tracing::debug!(hero_id = %id, "Hero to edit not found");
            self.state.notifier.error(NOT_FOUND_ERROR);
            self.state.navigator.navigate(Route::List);
        }
        hero
    }

    pub fn hero(&self) -> Option<Hero> {
        self.hero.borrow().clone()
    }

    /// A form pre-filled with the loaded hero.
    pub fn form(&self) -> Option<HeroForm> {
        self.hero.borrow().as_ref().map(HeroForm::from_hero)
    }

    pub fn is_submitting(&self) -> bool {
        *self.submitting.borrow()
    }

    /// Saves the changes for the loaded hero; the request's id is replaced
    /// by the loaded hero's id. Returns whether the hero was updated.
    pub async fn submit(&self, mut request: UpdateHeroRequest) -> bool {
        let Some(current) = self.hero() else {
            return false;
        };
        if self.submitting.send_replace(true) {
            return false;
        }

        request.id = current.id;
        let result = self.state.hero_service.update_hero(request).await;
        self.submitting.send_replace(false);

        match result.data {
            Some(updated) if result.success => {
                self.hero.send_replace(Some(updated));
                let message = result
                    .message
                    .unwrap_or_else(|| UPDATE_SUCCESS.to_string());
                self.state.notifier.success(&message);
                self.state.navigator.navigate(Route::List);
                true
            }
            _ => {
                let error = result.error.unwrap_or_else(|| UPDATE_FAILED.to_string());
                self.state.notifier.error(&error);
                false
            }
        }
    }

    pub fn cancel(&self) {
        self.state.navigator.navigate(Route::List);
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use heroes_app::{
        HeroService,
        test_utils::tests::{MockHeroRepository, setup_service},
    };
    use heroes_types::test_utils::{HeroFactoryOptions, hero_factory};

    use super::*;
    use crate::{
        forms::HeroSubmission,
        notification::NotificationKind,
        test_utils::tests::{TestCollaborators, setup_app_state},
    };

    fn setup() -> (MockHeroRepository, Arc<HeroService>, HeroEditPage, TestCollaborators) {
        let repo = MockHeroRepository::with_heroes(vec![
            hero_factory(HeroFactoryOptions {
                id: Some("1"),
                name: Some("CAPTAIN FIREWALL"),
                ..Default::default()
            }),
            hero_factory(HeroFactoryOptions {
                id: Some("2"),
                name: Some("CODEMASTER"),
                ..Default::default()
            }),
        ]);
        let service = Arc::new(setup_service(&repo));
        let (state, collaborators) = setup_app_state(service.clone());
        (repo, service, HeroEditPage::new(state), collaborators)
    }

    #[tokio::test]
    async fn test_activate_uses_cache_first() {
        let (repo, service, page, _) = setup();
        service.load_heroes().await;

        let hero = page.activate("2").await.unwrap();

        assert_eq!(hero.name, "CODEMASTER");
        assert_eq!(repo.calls("get_by_id"), 0);
        assert_eq!(page.form().unwrap().name, "CODEMASTER");
    }

    #[tokio::test]
    async fn test_activate_falls_back_to_store() {
        let (repo, _service, page, _) = setup();

        let hero = page.activate("1").await;

        assert_eq!(hero.unwrap().name, "CAPTAIN FIREWALL");
        assert_eq!(repo.calls("get_by_id"), 1);
    }

    #[tokio::test]
    async fn test_unknown_hero_goes_back_to_list() {
        let (_repo, _service, page, collaborators) = setup();

        assert!(page.activate("99").await.is_none());

        assert_eq!(
            collaborators.notifier.messages(NotificationKind::Error),
            vec!["Hero not found".to_string()]
        );
        assert_eq!(collaborators.navigator.last(), Some(Route::List));
    }

    #[tokio::test]
    async fn test_blank_id_goes_back_to_list() {
        let (repo, _service, page, collaborators) = setup();

        assert!(page.activate("  ").await.is_none());
        assert_eq!(repo.calls("get_by_id"), 0);
        assert!(collaborators.notifier.all().is_empty());
        assert_eq!(collaborators.navigator.last(), Some(Route::List));
    }

    #[tokio::test]
    async fn test_submit_form_changes() {
        let (_repo, service, page, collaborators) = setup();
        service.load_heroes().await;
        page.activate("2").await;

        let mut form = page.form().unwrap();
        form.effectiveness = 42;
        let Ok(HeroSubmission::Update(request)) = form.submit() else {
            panic!("expected a valid update");
        };

        assert!(page.submit(request).await);
        assert_eq!(page.hero().unwrap().effectiveness.value(), 42);
        assert_eq!(service.cached_hero("2").unwrap().effectiveness.value(), 42);
        assert_eq!(
            collaborators.notifier.messages(NotificationKind::Success),
            vec!["Hero updated successfully".to_string()]
        );
        assert_eq!(collaborators.navigator.last(), Some(Route::List));
    }

    #[tokio::test]
    async fn test_submit_uses_loaded_hero_id() {
        let (repo, service, page, collaborators) = setup();
        service.load_heroes().await;
        page.activate("1").await;

        let mut request = UpdateHeroRequest::new("2");
        request.name = Some("codemaster".to_string());

        assert!(!page.submit(request).await);
        assert_eq!(repo.calls("update"), 0);
        assert_eq!(
            collaborators.notifier.last().unwrap().message,
            "A hero with this name already exists"
        );
        assert!(!page.is_submitting());
    }

    #[tokio::test]
    async fn test_submit_without_hero_is_ignored() {
        let (repo, _service, page, _) = setup();
        assert!(!page.submit(UpdateHeroRequest::new("1")).await);
        assert_eq!(repo.calls("update"), 0);
    }
}
