//! Client-side hero state and the views derived from it.
//!
//! Derived views are plain functions over a state snapshot, so they are
//! always consistent with the base state at the moment they are read.

use serde::Serialize;

use heroes_types::{
    common::{PaginatedResponse, PaginationInfo, PaginationParams},
    hero::Hero,
};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HeroState {
    /// Cached copy of the roster, synchronized by explicit load/create/update/delete calls.
    pub heroes: Vec<Hero>,
    /// May go stale if the hero is deleted behind the service's back.
    pub selected_hero: Option<Hero>,
    pub search_term: String,
    pub error: Option<String>,
}

/// Heroes whose name or real name contains the trimmed term, ignoring case.
/// A blank term keeps the full list.
pub fn filter_heroes(heroes: &[Hero], search_term: &str) -> Vec<Hero> {
    let term = search_term.trim().to_lowercase();
    if term.is_empty() {
        return heroes.to_vec();
    }
    heroes
        .iter()
        .filter(|hero| hero.matches(&term))
        .cloned()
        .collect()
}

pub fn pagination_info(total_items: usize, params: PaginationParams) -> PaginationInfo {
    let total_pages = if params.page_size == 0 {
        0
    } else {
        total_items.div_ceil(params.page_size)
    };

    PaginationInfo {
        page: params.page,
        page_size: params.page_size,
        total_items,
        total_pages,
        has_next: params.page < total_pages,
        has_previous: params.page > 1,
    }
}

/// Slices `items` to the requested page.
pub fn paginate<T: Clone>(items: &[T], params: PaginationParams) -> PaginatedResponse<T> {
    let start = params.page.saturating_sub(1).saturating_mul(params.page_size);
    let data = items
        .iter()
        .skip(start)
        .take(params.page_size)
        .cloned()
        .collect();

    PaginatedResponse {
        data,
        pagination: pagination_info(items.len(), params),
    }
}
