use std::sync::Arc;

use heroes_app::HeroService;

use crate::{confirm::Confirmer, notification::Notifier, routes::Navigator};

/// Everything a page controller needs, shared between pages.
#[derive(Clone)]
pub struct AppState {
    pub hero_service: Arc<HeroService>,
    pub notifier: Arc<dyn Notifier>,
    pub confirmer: Arc<dyn Confirmer>,
    pub navigator: Arc<dyn Navigator>,
}

impl AppState {
    pub fn new(
        hero_service: Arc<HeroService>,
        notifier: Arc<dyn Notifier>,
        confirmer: Arc<dyn Confirmer>,
        navigator: Arc<dyn Navigator>,
    ) -> AppState {
        AppState {
            hero_service,
            notifier,
            confirmer,
            navigator,
        }
    }
}
