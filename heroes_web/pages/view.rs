use tokio::sync::watch;

use heroes_types::hero::Hero;

use crate::{app_state::AppState, routes::Route};

pub struct HeroViewPage {
    state: AppState,
    hero: watch::Sender<Option<Hero>>,
}

impl HeroViewPage {
    pub fn new(state: AppState) -> Self {
        let (hero, _) = watch::channel(None);
        Self { state, hero }
    }

    /// Shows the hero from the cached list or the store. Without a hero
    /// the user is sent back to the list.
    pub async fn activate(&self, id: &str) -> Option<Hero> {
        let id = id.trim();
        let hero = if id.is_empty() {
            None
        } else {
            match self.state.hero_service.cached_hero(id) {
                Some(hero) => Some(hero),
                None => self.state.hero_service.get_hero_by_id(id).await,
            }
        };

        self.hero.send_replace(hero.clone());
        if hero.is_none() {
            self.state.navigator.navigate(Route::List);
        }
        hero
    }

    pub fn hero(&self) -> Option<Hero> {
        self.hero.borrow().clone()
    }

    pub fn edit(&self) {
        if let Some(hero) = self.hero() {
            self.state.navigator.navigate(Route::Edit(hero.id));
        }
    }

    pub fn back(&self) {
        self.state.navigator.navigate(Route::List);
    }
}
