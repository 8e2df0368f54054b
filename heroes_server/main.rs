use std::sync::Arc;

use heroes_app::{AppBus, HeroService, config::Config};
use heroes_db::{InMemoryHeroRepository, RandomLatency, default_roster};
use heroes_types::errors::{ApplicationError, Result};

mod console;
mod logs;

use console::Console;
use logs::setup_logging;

#[tokio::main]
#[cfg(not(tarpaulin_include))]
async fn main() -> Result<(), ApplicationError> {
    setup_logging();
    let (config, app_bus) = setup_app();
    let hero_service = Arc::new(HeroService::new(app_bus, &config));

    let console = Console::stdio(hero_service);
    console.run().await?;
    Ok(())
}

fn setup_app() -> (Arc<Config>, Arc<AppBus>) {
    let config = Arc::new(Config::from_env());
    let latency = Arc::new(RandomLatency::from_config(&config));

    let roster = if config.seed_roster {
        default_roster()
    } else {
        Vec::new()
    };
    tracing::info!(
        heroes = roster.len(),
        latency_min_ms = config.latency_min_ms,
        latency_max_ms = config.latency_max_ms,
        "Mock hero store ready"
    );

    let heroes = Arc::new(InMemoryHeroRepository::with_heroes(roster, latency));
    let app_bus = Arc::new(AppBus::new(config.clone(), heroes));
    (config, app_bus)
}
