pub mod app_bus;
pub mod command_handlers;
pub mod config;
pub mod cqrs;
pub mod hero_service;
pub mod loading;
pub mod queries_handlers;
pub mod repository;
pub mod state;

#[cfg(any(test, feature = "test-utils"))]
pub mod test_utils;

pub use app_bus::AppBus;
pub use hero_service::HeroService;
