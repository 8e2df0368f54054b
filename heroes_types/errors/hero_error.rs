use thiserror::Error;

/// Errors for hero rules, checked before a request reaches the store.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum HeroError {
    #[error("Hero name is required")]
    NameRequired,

    #[error("Effectiveness must be between 1 and 100")]
    EffectivenessOutOfRange(i32),

    #[error("Hero must have at least one power")]
    PowersRequired,

    #[error("A hero with this name already exists")]
    DuplicateName(String),
}
