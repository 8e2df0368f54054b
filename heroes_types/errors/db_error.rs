use thiserror::Error;

/// Errors for store operations.
#[derive(Debug, Error)]
pub enum DbError {
    #[error("Hero with ID {0} not found")]
    HeroNotFound(String),

    #[error("Hero named '{0}' already exists")]
    HeroNameTaken(String),

    #[error("Store unavailable: {0}")]
    Unavailable(String),
}
