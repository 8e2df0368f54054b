use async_trait::async_trait;
use heroes_types::errors::ApplicationError;
use std::sync::Arc;

use crate::{config::Config, repository::HeroRepository};

/// A marker trait for Command structs.
/// Commands are operations that change the state of the store.
pub trait Command: Send + Sync {
    /// The data type handed back once the command has been applied.
    type Output: Send + Sync;
}

/// A trait for handlers that execute Commands.
/// It receives the command and the hero repository to act upon.
#[async_trait]
pub trait CommandHandler<C: Command> {
    async fn handle(
        &self,
        cmd: C,
        heroes: &Arc<dyn HeroRepository>,
        config: &Arc<Config>,
    ) -> Result<C::Output, ApplicationError>;
}
