use tokio::sync::watch;

use heroes_app::hero_service::CREATE_SUCCESS;
use heroes_types::hero::CreateHeroRequest;

use crate::{app_state::AppState, routes::Route};

const CREATE_FAILED: &str = "Failed to create hero";

pub struct HeroCreatePage {
    state: AppState,
    submitting: watch::Sender<bool>,
}

impl HeroCreatePage {
    pub fn new(state: AppState) -> Self {
        let (submitting, _) = watch::channel(false);
        Self { state, submitting }
    }

    pub fn is_submitting(&self) -> bool {
        *self.submitting.borrow()
    }

    /// Creates the hero, then returns to the list on success. Returns
    /// whether the hero was created; a submit while another one is in
    /// flight is ignored.
    pub async fn submit(&self, request: CreateHeroRequest) -> bool {
        if self.submitting.send_replace(true) {
            return false;
        }

        let result = self.state.hero_service.create_hero(request).await;
        self.submitting.send_replace(false);

        if result.success {
            let message = result
                .message
                .unwrap_or_else(|| CREATE_SUCCESS.to_string());
            self.state.notifier.success(&message);
            self.state.navigator.navigate(Route::List);
            true
        } else {
            let error = result.error.unwrap_or_else(|| CREATE_FAILED.to_string());
            self.state.notifier.error(&error);
            false
        }
    }

    pub fn cancel(&self) {
        self.state.navigator.navigate(Route::List);
    }
}
