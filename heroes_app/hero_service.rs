//! Reactive façade over the hero store.
//!
//! [`HeroService`] owns the client-visible state ([`HeroState`] and
//! [`PaginationParams`]) in `tokio::sync::watch` channels and mediates every
//! store call through the [`AppBus`]. State-mutating operations never return
//! an error: they resolve to an [`ApiResponse`] that callers branch on.

use std::sync::{
    Arc,
    atomic::{AtomicU64, Ordering},
};

use tokio::sync::watch;

use heroes_types::{
    common::{ApiResponse, HeroesResponse, PaginationParams},
    errors::{ApplicationError, DbError, HeroError, Result},
    hero::{CreateHeroRequest, Hero, UpdateHeroRequest},
};

use crate::{
    app_bus::AppBus,
    command_handlers::{
        CreateHeroCommandHandler, DeleteHeroCommandHandler, UpdateHeroCommandHandler,
    },
    config::Config,
    cqrs::{
        commands::{CreateHero, DeleteHero, UpdateHero},
        queries::{GetHeroById, ListHeroes, SearchHeroes},
    },
    loading::LoadingTracker,
    queries_handlers::{GetHeroByIdHandler, ListHeroesHandler, SearchHeroesHandler},
    state::{HeroState, filter_heroes, paginate, pagination_info},
};

pub const LOAD_ERROR: &str = "Error loading heroes";
pub const CREATE_ERROR: &str = "Error creating hero";
pub const UPDATE_ERROR: &str = "Error updating hero";
pub const DELETE_ERROR: &str = "Error deleting hero";
pub const NOT_FOUND_ERROR: &str = "Hero not found";

pub const CREATE_SUCCESS: &str = "Hero created successfully";
pub const UPDATE_SUCCESS: &str = "Hero updated successfully";
pub const DELETE_SUCCESS: &str = "Hero deleted successfully";

pub struct HeroService {
    bus: Arc<AppBus>,
    state: watch::Sender<HeroState>,
    pagination: watch::Sender<PaginationParams>,
    loading: LoadingTracker,
    /// Ticket of the most recent `load_heroes` call.
    load_ticket: AtomicU64,
}

impl HeroService {
    pub fn new(bus: Arc<AppBus>, config: &Config) -> Self {
        let (state, _) = watch::channel(HeroState::default());
        let (pagination, _) = watch::channel(PaginationParams::new(config.page_size.max(1)));

        Self {
            bus,
            state,
            pagination,
            loading: LoadingTracker::new(),
            load_ticket: AtomicU64::new(0),
        }
    }

    // Base state

    pub fn state(&self) -> HeroState {
        self.state.borrow().clone()
    }

    pub fn heroes(&self) -> Vec<Hero> {
        self.state.borrow().heroes.clone()
    }

    pub fn selected_hero(&self) -> Option<Hero> {
        self.state.borrow().selected_hero.clone()
    }

    pub fn search_term(&self) -> String {
        self.state.borrow().search_term.clone()
    }

    pub fn error(&self) -> Option<String> {
        self.state.borrow().error.clone()
    }

    pub fn pagination(&self) -> PaginationParams {
        *self.pagination.borrow()
    }

    pub fn is_loading(&self) -> bool {
        self.loading.is_loading()
    }

    /// Looks a hero up in the cached list only.
    pub fn cached_hero(&self, id: &str) -> Option<Hero> {
        self.state.borrow().heroes.iter().find(|h| h.id == id).cloned()
    }

    pub fn subscribe(&self) -> watch::Receiver<HeroState> {
        self.state.subscribe()
    }

    pub fn subscribe_pagination(&self) -> watch::Receiver<PaginationParams> {
        self.pagination.subscribe()
    }

    pub fn subscribe_loading(&self) -> watch::Receiver<usize> {
        self.loading.subscribe()
    }

    // Derived views

    pub fn filtered_heroes(&self) -> Vec<Hero> {
        let state = self.state.borrow();
        filter_heroes(&state.heroes, &state.search_term)
    }

    pub fn paginated_heroes(&self) -> HeroesResponse {
        paginate(&self.filtered_heroes(), self.pagination())
    }

    // Store operations

    /// Reloads the cached roster. On failure the cached list is left as it
    /// was, the error is recorded and an empty list is returned.
    pub async fn load_heroes(&self) -> Vec<Hero> {
        self.set_error(None);
        let ticket = self.load_ticket.fetch_add(1, Ordering::SeqCst) + 1;

        let result = {
            let _loading = self.loading.show();
            self.bus.query(ListHeroes, ListHeroesHandler::new()).await
        };

        let superseded = self.load_ticket.load(Ordering::SeqCst) != ticket;
        match result {
            Ok(heroes) if superseded => {
                tracing::debug!(ticket, "Discarding superseded hero list");
                heroes
            }
            Ok(heroes) => {
                tracing::debug!(count = heroes.len(), "Heroes loaded");
                let cached = heroes.clone();
                self.state.send_modify(|state| state.heroes = cached);
                heroes
            }
            Err(e) if superseded => {
                tracing::debug!(ticket, error = %e, "Discarding superseded load failure");
                Vec::new()
            }
            Err(e) => {
                tracing::error!(error = %e, "Failed to load heroes");
                self.set_error(Some(LOAD_ERROR));
                Vec::new()
            }
        }
    }

    /// Fetches a hero from the store and selects it. Failures resolve to
    /// `None` without touching the selection.
    pub async fn get_hero_by_id(&self, id: &str) -> Option<Hero> {
        let result = {
            let _loading = self.loading.show();
            self.bus
                .query(GetHeroById { id: id.to_string() }, GetHeroByIdHandler::new())
                .await
        };

        match result {
            Ok(hero) => {
                self.select_hero(hero.clone());
                hero
            }
            Err(e) => {
                tracing::warn!(hero_id = %id, error = %e, "Failed to fetch hero");
                None
            }
        }
    }

    /// Searches the store directly, bypassing the cached list.
    pub async fn search_heroes(&self, term: &str) -> Result<Vec<Hero>, ApplicationError> {
        let _loading = self.loading.show();
        self.bus
            .query(
                SearchHeroes {
                    term: term.to_string(),
                },
                SearchHeroesHandler::new(),
            )
            .await
    }

    pub async fn create_hero(&self, request: CreateHeroRequest) -> ApiResponse<Hero> {
        if let Err(e) = request.validate(&self.state.borrow().heroes) {
            tracing::debug!(error = %e, "Hero creation rejected");
            return ApiResponse::failure(e.to_string());
        }

        let result = {
            let _loading = self.loading.show();
            self.bus
                .execute(CreateHero { request }, CreateHeroCommandHandler::new())
                .await
        };

        match result {
            Ok(hero) => {
                let cached = hero.clone();
                self.state.send_modify(|state| state.heroes.push(cached));
                ApiResponse::ok(hero, CREATE_SUCCESS)
            }
            Err(ApplicationError::Validation(e)) => ApiResponse::failure(e.to_string()),
            Err(ApplicationError::Db(DbError::HeroNameTaken(name))) => {
                ApiResponse::failure(HeroError::DuplicateName(name).to_string())
            }
            Err(e) => {
                tracing::error!(error = %e, "Failed to create hero");
                self.set_error(Some(CREATE_ERROR));
                ApiResponse::failure(CREATE_ERROR)
            }
        }
    }

    /// Updates a hero and splices the stored record into the cached list.
    pub async fn update_hero(&self, request: UpdateHeroRequest) -> ApiResponse<Hero> {
        if let Err(e) = request.validate(&self.state.borrow().heroes) {
            tracing::debug!(hero_id = %request.id, error = %e, "Hero update rejected");
            return ApiResponse::failure(e.to_string());
        }

        let result = {
            let _loading = self.loading.show();
            self.bus
                .execute(UpdateHero { request }, UpdateHeroCommandHandler::new())
                .await
        };

        match result {
            Ok(hero) => {
                self.state.send_modify(|state| {
                    if let Some(cached) = state.heroes.iter_mut().find(|h| h.id == hero.id) {
                        *cached = hero.clone();
                    }
                    if state.selected_hero.as_ref().is_some_and(|h| h.id == hero.id) {
                        state.selected_hero = Some(hero.clone());
                    }
                });
                ApiResponse::ok(hero, UPDATE_SUCCESS)
            }
            Err(ApplicationError::Validation(e)) => ApiResponse::failure(e.to_string()),
            Err(ApplicationError::Db(DbError::HeroNameTaken(name))) => {
                ApiResponse::failure(HeroError::DuplicateName(name).to_string())
            }
            Err(e) if e.is_not_found() => ApiResponse::failure(NOT_FOUND_ERROR),
            Err(e) => {
                tracing::error!(error = %e, "Failed to update hero");
                self.set_error(Some(UPDATE_ERROR));
                ApiResponse::failure(UPDATE_ERROR)
            }
        }
    }

    pub async fn delete_hero(&self, id: &str) -> ApiResponse<bool> {
        let result = {
            let _loading = self.loading.show();
            self.bus
                .execute(DeleteHero { id: id.to_string() }, DeleteHeroCommandHandler::new())
                .await
        };

        match result {
            Ok(deleted) => {
                self.state.send_modify(|state| {
                    state.heroes.retain(|h| h.id != id);
                    if state.selected_hero.as_ref().is_some_and(|h| h.id == id) {
                        state.selected_hero = None;
                    }
                });
                ApiResponse::ok(deleted, DELETE_SUCCESS)
            }
            Err(e) if e.is_not_found() => ApiResponse::failure(NOT_FOUND_ERROR),
            Err(e) => {
                tracing::error!(hero_id = %id, error = %e, "Failed to delete hero");
                self.set_error(Some(DELETE_ERROR));
                ApiResponse::failure(DELETE_ERROR)
            }
        }
    }

    // Search & pagination

    pub fn set_search_term(&self, search_term: &str) {
        let search_term = search_term.to_string();
        self.state
            .send_modify(|state| state.search_term = search_term);
        self.pagination.send_modify(|p| p.page = 1);
    }

    pub fn clear_search(&self) {
        self.set_search_term("");
    }

    /// Moves to `page` when it lies within `1..=total_pages`.
    pub fn go_to_page(&self, page: usize) {
        let total_items = self.filtered_heroes().len();
        let info = pagination_info(total_items, self.pagination());
        if page >= 1 && page <= info.total_pages {
            self.pagination.send_modify(|p| p.page = page);
        }
    }

    pub fn next_page(&self) {
        let info = self.paginated_heroes().pagination;
        if info.has_next {
            self.go_to_page(info.page + 1);
        }
    }

    pub fn previous_page(&self) {
        let info = self.paginated_heroes().pagination;
        if info.has_previous {
            self.go_to_page(info.page - 1);
        }
    }

    pub fn set_page_size(&self, page_size: usize) {
        if page_size == 0 {
            tracing::warn!("Ignoring page size of 0");
            return;
        }
        self.pagination.send_modify(|p| {
            p.page_size = page_size;
            p.page = 1;
        });
    }

    pub fn select_hero(&self, hero: Option<Hero>) {
        self.state.send_modify(|state| state.selected_hero = hero);
    }

    fn set_error(&self, error: Option<&str>) {
        let error = error.map(str::to_string);
        self.state.send_modify(|state| state.error = error);
    }
}

#[cfg(test)]
mod tests {
    use async_trait::async_trait;
    use std::sync::Arc;
    use tokio::sync::Notify;

    use heroes_types::{
        hero::{Effectiveness, HeroChanges, NewHero},
        test_utils::{HeroFactoryOptions, create_request, hero_factory},
    };

    use super::*;
    use crate::{
        repository::HeroRepository,
        test_utils::tests::{MockHeroRepository, setup_service},
    };

    fn two_heroes() -> Vec<Hero> {
        vec![
            hero_factory(HeroFactoryOptions {
                id: Some("1"),
                name: Some("CAPTAIN FIREWALL"),
                real_name: Some("Alice Johnson"),
                effectiveness: Some(92),
                ..Default::default()
            }),
            hero_factory(HeroFactoryOptions {
                id: Some("2"),
                name: Some("CODEMASTER"),
                real_name: Some("Raj Patel"),
                effectiveness: Some(95),
                ..Default::default()
            }),
        ]
    }

    async fn loaded_service() -> (MockHeroRepository, HeroService) {
        let repo = MockHeroRepository::with_heroes(two_heroes());
        let service = setup_service(&repo);
        service.load_heroes().await;
        (repo, service)
    }

    #[tokio::test]
    async fn test_initial_state() {
        let service = setup_service(&MockHeroRepository::new());
        assert!(service.heroes().is_empty());
        assert_eq!(
            service.pagination(),
            PaginationParams {
                page: 1,
                page_size: 10
            }
        );
        assert_eq!(service.error(), None);
        assert!(!service.is_loading());
    }

    #[tokio::test]
    async fn test_load_heroes_updates_state() {
        let (repo, service) = loaded_service().await;
        assert_eq!(repo.calls("list_all"), 1);
        assert_eq!(service.heroes(), repo.stored());
        assert_eq!(service.error(), None);
        assert!(!service.is_loading());
    }

    #[tokio::test]
    async fn test_load_heroes_failure_keeps_cached_list() {
        let (repo, service) = loaded_service().await;
        let before = service.heroes();

        repo.set_failing(true);
        let loaded = service.load_heroes().await;

        assert!(loaded.is_empty());
        assert_eq!(service.error().as_deref(), Some(LOAD_ERROR));
        assert_eq!(service.heroes(), before);
    }

    #[tokio::test]
    async fn test_load_heroes_clears_previous_error() {
        let (repo, service) = loaded_service().await;
        repo.set_failing(true);
        service.load_heroes().await;
        assert!(service.error().is_some());

        repo.set_failing(false);
        service.load_heroes().await;
        assert_eq!(service.error(), None);
    }

    #[tokio::test]
    async fn test_create_hero_upper_cases_name_and_appends() {
        let service = setup_service(&MockHeroRepository::new());

        let response = service
            .create_hero(create_request("Lady Encryption", 97, &["Encrypts data"]))
            .await;

        assert!(response.success);
        assert_eq!(response.message.as_deref(), Some(CREATE_SUCCESS));
        assert_eq!(response.data.unwrap().name, "LADY ENCRYPTION");
        assert_eq!(service.heroes().len(), 1);
        assert_eq!(service.heroes()[0].name, "LADY ENCRYPTION");
    }

    #[tokio::test]
    async fn test_create_hero_duplicate_name_never_reaches_store() {
        let (repo, service) = loaded_service().await;

        let response = service
            .create_hero(create_request("Captain Firewall", 100, &["Power"]))
            .await;

        assert!(!response.success);
        assert_eq!(
            response.error.as_deref(),
            Some("A hero with this name already exists")
        );
        assert_eq!(repo.calls("create"), 0);
    }

    #[tokio::test]
    async fn test_create_hero_effectiveness_out_of_range() {
        let repo = MockHeroRepository::new();
        let service = setup_service(&repo);

        for effectiveness in [0, -1, 101, 1000] {
            let response = service
                .create_hero(create_request("Nova", effectiveness, &["Flight"]))
                .await;
            assert_eq!(
                response.error.as_deref(),
                Some("Effectiveness must be between 1 and 100")
            );
        }
        assert_eq!(repo.calls("create"), 0);
    }

    #[tokio::test]
    async fn test_create_hero_validation_messages() {
        let service = setup_service(&MockHeroRepository::new());

        let response = service.create_hero(create_request("   ", 50, &["x"])).await;
        assert_eq!(response.error.as_deref(), Some("Hero name is required"));

        let response = service.create_hero(create_request("Nova", 50, &[])).await;
        assert_eq!(
            response.error.as_deref(),
            Some("Hero must have at least one power")
        );
    }

    #[tokio::test]
    async fn test_create_hero_store_failure_sets_error() {
        let repo = MockHeroRepository::new();
        let service = setup_service(&repo);
        repo.set_failing(true);

        let response = service
            .create_hero(create_request("Nova", 50, &["Flight"]))
            .await;

        assert!(!response.success);
        assert_eq!(response.error.as_deref(), Some(CREATE_ERROR));
        assert_eq!(service.error().as_deref(), Some(CREATE_ERROR));
        assert!(service.heroes().is_empty());
    }

    #[tokio::test]
    async fn test_update_hero_splices_cache_and_selection() {
        let (_repo, service) = loaded_service().await;
        service.select_hero(service.cached_hero("2"));

        let mut request = UpdateHeroRequest::new("2");
        request.effectiveness = Some(60);
        let response = service.update_hero(request).await;

        assert!(response.success);
        assert_eq!(service.cached_hero("2").unwrap().effectiveness.value(), 60);
        assert_eq!(
            service.selected_hero().unwrap().effectiveness.value(),
            60
        );
        assert_eq!(service.heroes()[1].id, "2");
    }

    #[tokio::test]
    async fn test_update_hero_rejects_taken_name() {
        let (repo, service) = loaded_service().await;

        let mut request = UpdateHeroRequest::new("2");
        request.name = Some("captain firewall".to_string());
        let response = service.update_hero(request).await;

        assert_eq!(
            response.error.as_deref(),
            Some("A hero with this name already exists")
        );
        assert_eq!(repo.calls("update"), 0);
    }

    #[tokio::test]
    async fn test_update_unknown_hero() {
        let (_repo, service) = loaded_service().await;

        let response = service.update_hero(UpdateHeroRequest::new("99")).await;

        assert!(!response.success);
        assert_eq!(response.error.as_deref(), Some(NOT_FOUND_ERROR));
        assert_eq!(service.error(), None);
    }

    #[tokio::test]
    async fn test_delete_selected_hero_clears_selection() {
        let (_repo, service) = loaded_service().await;
        let selected = service.get_hero_by_id("1").await;
        assert!(selected.is_some());
        assert_eq!(service.selected_hero().unwrap().id, "1");

        let response = service.delete_hero("1").await;

        assert!(response.success);
        assert_eq!(response.data, Some(true));
        assert_eq!(service.selected_hero(), None);
        assert_eq!(service.heroes().len(), 1);
    }

    #[tokio::test]
    async fn test_delete_other_hero_keeps_selection() {
        let (_repo, service) = loaded_service().await;
        service.get_hero_by_id("1").await;

        service.delete_hero("2").await;

        assert_eq!(service.selected_hero().unwrap().id, "1");
    }

    #[tokio::test]
    async fn test_delete_failures_are_reported() {
        let (repo, service) = loaded_service().await;

        let response = service.delete_hero("42").await;
        assert_eq!(response.error.as_deref(), Some(NOT_FOUND_ERROR));

        repo.set_failing(true);
        let response = service.delete_hero("1").await;
        assert_eq!(response.error.as_deref(), Some(DELETE_ERROR));
        assert_eq!(service.heroes().len(), 2);
    }

    #[tokio::test]
    async fn test_get_hero_by_id_swallows_failures() {
        let (repo, service) = loaded_service().await;
        service.select_hero(service.cached_hero("2"));
        repo.set_failing(true);

        assert_eq!(service.get_hero_by_id("1").await, None);
        assert_eq!(service.selected_hero().unwrap().id, "2");
        assert_eq!(service.error(), None);
    }

    #[tokio::test]
    async fn test_get_unknown_hero_selects_none() {
        let (_repo, service) = loaded_service().await;
        service.select_hero(service.cached_hero("2"));

        assert_eq!(service.get_hero_by_id("404").await, None);
        assert_eq!(service.selected_hero(), None);
    }

    #[tokio::test]
    async fn test_search_heroes_reads_the_store_not_the_cache() {
        let repo = MockHeroRepository::new();
        let service = setup_service(&repo);
        service.load_heroes().await;
        assert!(service.heroes().is_empty());

        // Stored behind the service's back, so the cache never sees it.
        repo.create(NewHero {
            name: "LADY ENCRYPTION".to_string(),
            real_name: Some("Maya Chen".to_string()),
            powers: vec!["Encrypts data".to_string()],
            weaknesses: vec![],
            effectiveness: Effectiveness::new(97).unwrap(),
            is_alive: true,
            image_url: None,
        })
        .await
        .unwrap();

        let found = service.search_heroes("maya").await.unwrap();

        assert_eq!(found.len(), 1);
        assert_eq!(found[0].name, "LADY ENCRYPTION");
        assert_eq!(repo.calls("search"), 1);
        assert!(service.heroes().is_empty());
        assert!(!service.is_loading());
    }

    #[tokio::test]
    async fn test_search_heroes_propagates_store_failure() {
        let repo = MockHeroRepository::new();
        let service = setup_service(&repo);
        repo.set_failing(true);

        let result = service.search_heroes("anything").await;

        assert!(matches!(
            result,
            Err(ApplicationError::Db(DbError::Unavailable(_)))
        ));
        assert_eq!(service.error(), None);
    }

    #[tokio::test]
    async fn test_filter_by_search_term() {
        let (_repo, service) = loaded_service().await;
        assert_eq!(service.filtered_heroes().len(), 2);

        service.set_search_term("captain");
        let filtered = service.filtered_heroes();
        assert_eq!(filtered.len(), 1);
        assert_eq!(filtered[0].name, "CAPTAIN FIREWALL");

        service.clear_search();
        assert_eq!(service.filtered_heroes().len(), 2);
    }

    #[tokio::test]
    async fn test_paginate_two_heroes_one_per_page() {
        let (_repo, service) = loaded_service().await;
        service.set_page_size(1);
        service.set_search_term("");

        let page = service.paginated_heroes();
        assert_eq!(page.data.len(), 1);
        assert_eq!(page.data[0].name, "CAPTAIN FIREWALL");
        assert_eq!(page.pagination.total_pages, 2);
        assert!(page.pagination.has_next);
        assert!(!page.pagination.has_previous);

        service.next_page();
        let page = service.paginated_heroes();
        assert_eq!(page.data[0].name, "CODEMASTER");
        assert!(!page.pagination.has_next);
        assert!(page.pagination.has_previous);

        service.next_page();
        assert_eq!(service.pagination().page, 2);

        service.previous_page();
        assert_eq!(service.pagination().page, 1);
    }

    #[tokio::test]
    async fn test_go_to_page_out_of_range_is_noop() {
        let (_repo, service) = loaded_service().await;
        service.set_page_size(1);

        service.go_to_page(0);
        assert_eq!(service.pagination().page, 1);
        service.go_to_page(3);
        assert_eq!(service.pagination().page, 1);
        service.go_to_page(2);
        assert_eq!(service.pagination().page, 2);
    }

    #[tokio::test]
    async fn test_search_resets_page() {
        let (_repo, service) = loaded_service().await;
        service.set_page_size(1);
        service.next_page();
        assert_eq!(service.pagination().page, 2);

        service.set_search_term("CODE");
        assert_eq!(service.pagination().page, 1);

        // Also when nothing matches and there are no pages at all.
        service.go_to_page(1);
        service.set_search_term("zzz");
        assert_eq!(service.pagination().page, 1);
        assert_eq!(service.paginated_heroes().pagination.total_pages, 0);
    }

    #[tokio::test]
    async fn test_set_page_size_resets_page_and_ignores_zero() {
        let (_repo, service) = loaded_service().await;
        service.set_page_size(1);
        service.next_page();

        service.set_page_size(5);
        assert_eq!(service.pagination(), PaginationParams { page: 1, page_size: 5 });

        service.set_page_size(0);
        assert_eq!(service.pagination().page_size, 5);
    }

    #[tokio::test]
    async fn test_subscribers_see_changes() {
        let (_repo, service) = loaded_service().await;
        let mut rx = service.subscribe();
        rx.borrow_and_update();

        service.set_search_term("raj");

        assert!(rx.has_changed().unwrap());
        assert_eq!(rx.borrow_and_update().search_term, "raj");
    }

    /// Blocks the first `list_all` call until released.
    struct GatedRepository {
        calls: std::sync::Mutex<usize>,
        entered: Notify,
        release: Notify,
        /// Result of the blocked first call; `None` fails it.
        old: Option<Vec<Hero>>,
        new: Vec<Hero>,
    }

    impl GatedRepository {
        fn new(old: Option<Vec<Hero>>, new: Vec<Hero>) -> Self {
            Self {
                calls: std::sync::Mutex::new(0),
                entered: Notify::new(),
                release: Notify::new(),
                old,
                new,
            }
        }
    }

    #[async_trait]
    impl HeroRepository for GatedRepository {
        async fn list_all(&self) -> Result<Vec<Hero>, ApplicationError> {
            let call = {
                let mut calls = self.calls.lock().unwrap();
                *calls += 1;
                *calls
            };
            if call == 1 {
                self.entered.notify_one();
                self.release.notified().await;
                return self
                    .old
                    .clone()
                    .ok_or_else(|| DbError::Unavailable("list_all failed".to_string()).into());
            }
            Ok(self.new.clone())
        }

        async fn get_by_id(&self, _id: &str) -> Result<Option<Hero>, ApplicationError> {
            Ok(None)
        }

        async fn search(&self, _term: &str) -> Result<Vec<Hero>, ApplicationError> {
            Ok(vec![])
        }

        async fn create(&self, _hero: NewHero) -> Result<Hero, ApplicationError> {
            Err(ApplicationError::Unknown("read only".to_string()))
        }

        async fn update(&self, _id: &str, _changes: HeroChanges) -> Result<Hero, ApplicationError> {
            Err(ApplicationError::Unknown("read only".to_string()))
        }

        async fn delete(&self, _id: &str) -> Result<bool, ApplicationError> {
            Err(ApplicationError::Unknown("read only".to_string()))
        }
    }

    fn gated_service(repo: Arc<GatedRepository>) -> HeroService {
        let config = Arc::new(Config::default());
        let bus = Arc::new(AppBus::new(config.clone(), repo));
        HeroService::new(bus, &config)
    }

    #[tokio::test]
    async fn test_superseded_load_does_not_overwrite_newer_state() {
        let heroes = two_heroes();
        let repo = Arc::new(GatedRepository::new(Some(vec![heroes[0].clone()]), heroes.clone()));
        let service = gated_service(repo.clone());

        let (stale, fresh) = tokio::join!(service.load_heroes(), async {
            repo.entered.notified().await;
            let fresh = service.load_heroes().await;
            repo.release.notify_one();
            fresh
        });

        assert_eq!(stale.len(), 1);
        assert_eq!(fresh.len(), 2);
        assert_eq!(service.heroes(), heroes);
    }

    #[tokio::test]
    async fn test_superseded_load_failure_does_not_set_error() {
        let heroes = two_heroes();
        let repo = Arc::new(GatedRepository::new(None, heroes.clone()));
        let service = gated_service(repo.clone());

        let (stale, fresh) = tokio::join!(service.load_heroes(), async {
            repo.entered.notified().await;
            let fresh = service.load_heroes().await;
            repo.release.notify_one();
            fresh
        });

        assert!(stale.is_empty());
        assert_eq!(fresh.len(), 2);
        assert_eq!(service.heroes(), heroes);
        assert_eq!(service.error(), None);
    }
}
