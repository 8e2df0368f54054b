use heroes_app::hero_service::DELETE_SUCCESS;
use heroes_types::common::HeroesResponse;

use crate::{app_state::AppState, confirm::ConfirmDialogData, routes::Route};

const DELETE_FAILED: &str = "Failed to delete hero";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageDirection {
    Next,
    Previous,
}

/// Row actions offered for each listed hero.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HeroAction {
    View(String),
    Edit(String),
    Delete(String),
}

/// 1-based positions of the first and last hero on the current page.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResultsRange {
    pub start: usize,
    pub end: usize,
}

pub struct HeroListPage {
    state: AppState,
}

impl HeroListPage {
    pub fn new(state: AppState) -> Self {
        Self { state }
    }

    /// Loads the roster when the page is shown.
    pub async fn activate(&self) {
        self.state.hero_service.load_heroes().await;
    }

    pub fn page(&self) -> HeroesResponse {
        self.state.hero_service.paginated_heroes()
    }

    pub fn is_loading(&self) -> bool {
        self.state.hero_service.is_loading()
    }

    pub fn error(&self) -> Option<String> {
        self.state.hero_service.error()
    }

    pub fn has_active_filters(&self) -> bool {
        !self.state.hero_service.search_term().is_empty()
    }

    pub fn results_range(&self) -> ResultsRange {
        let page = self.page();
        let start = page.pagination.page.saturating_sub(1) * page.pagination.page_size + 1;
        let end = (start + page.data.len())
            .saturating_sub(1)
            .min(page.pagination.total_items);
        ResultsRange { start, end }
    }

    pub fn on_search_change(&self, search_term: &str) {
        self.state.hero_service.set_search_term(search_term);
    }

    pub fn on_clear_search(&self) {
        self.state.hero_service.clear_search();
    }

    pub fn on_page_change(&self, direction: PageDirection) {
        match direction {
            PageDirection::Next => self.state.hero_service.next_page(),
            PageDirection::Previous => self.state.hero_service.previous_page(),
        }
    }

    pub fn on_page_size_change(&self, page_size: usize) {
        self.state.hero_service.set_page_size(page_size);
    }

    pub fn on_create(&self) {
        self.state.navigator.navigate(Route::Create);
    }

    /// Navigates for view/edit. A delete is confirmed first; returns `true`
    /// only when a hero was actually deleted.
    pub async fn on_hero_action(&self, action: HeroAction) -> bool {
        match action {
            HeroAction::View(id) => {
                self.state.navigator.navigate(Route::View(id));
                false
            }
            HeroAction::Edit(id) => {
                self.state.navigator.navigate(Route::Edit(id));
                false
            }
            HeroAction::Delete(id) => self.delete(&id).await,
        }
    }

    async fn delete(&self, id: &str) -> bool {
        let name = self
            .state
            .hero_service
            .cached_hero(id)
            .map(|hero| hero.name)
            .unwrap_or_else(|| "this hero".to_string());

        if !self
            .state
            .confirmer
            .confirm(ConfirmDialogData::delete_hero(&name))
            .await
        {
            tracing::debug!(hero_id = %id, "Delete cancelled");
            return false;
        }

        let result = self.state.hero_service.delete_hero(id).await;
        if result.success {
            let message = result
                .message
                .unwrap_or_else(|| DELETE_SUCCESS.to_string());
            self.state.notifier.success(&message);
            true
        } else {
            let error = result.error.unwrap_or_else(|| DELETE_FAILED.to_string());
            self.state.notifier.error(&error);
            false
        }
    }
}
