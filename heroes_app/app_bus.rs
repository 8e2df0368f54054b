use std::sync::Arc;

use heroes_types::errors::{ApplicationError, Result};

use crate::{
    config::Config,
    cqrs::{Command, CommandHandler, Query, QueryHandler},
    repository::HeroRepository,
};

/// AppBus (Mediator)
/// This struct is the central entry point for all store access.
/// It does not contain any business logic itself: it dispatches Commands
/// and Queries to their handlers, handing them the repository and config.
pub struct AppBus {
    config: Arc<Config>,
    heroes: Arc<dyn HeroRepository>,
}

impl AppBus {
    pub fn new(config: Arc<Config>, heroes: Arc<dyn HeroRepository>) -> Self {
        Self { config, heroes }
    }

    /// Executes a command.
    /// A command is an operation that modifies the store.
    pub async fn execute<C, H>(&self, cmd: C, handler: H) -> Result<C::Output, ApplicationError>
    where
        C: Command,
        H: CommandHandler<C> + Send + Sync,
    {
        handler.handle(cmd, &self.heroes, &self.config).await
    }

    /// Executes a query.
    /// A query reads from the store and should *never* modify it.
    pub async fn query<Q, H>(&self, query: Q, handler: H) -> Result<Q::Output, ApplicationError>
    where
        Q: Query,
        H: QueryHandler<Q> + Send + Sync,
    {
        handler.handle(query, &self.heroes, &self.config).await
    }
}
