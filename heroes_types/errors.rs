use thiserror::Error;

mod db_error;
mod hero_error;

pub use db_error::DbError;
pub use hero_error::HeroError;

pub type Result<T, E = ApplicationError> = std::result::Result<T, E>;

#[derive(Debug, Error)]
pub enum ApplicationError {
    #[error(transparent)]
    Validation(#[from] HeroError),

    #[error(transparent)]
    Db(#[from] DbError),

    #[error("An unknown error occurred: {0}")]
    Unknown(String),
}

impl ApplicationError {
    /// True when the store had no record for the requested id.
    pub fn is_not_found(&self) -> bool {
        matches!(self, ApplicationError::Db(DbError::HeroNotFound(_)))
    }
}

impl From<anyhow::Error> for ApplicationError {
    fn from(err: anyhow::Error) -> Self {
        ApplicationError::Unknown(err.to_string())
    }
}
