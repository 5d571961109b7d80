//! Error types raised by repository implementations.

use arena_core::{MealError, MealId};
use thiserror::Error;

/// Errors surfaced by catalog repository implementations.
#[derive(Debug, Error)]
pub enum RepositoryError {
    #[error("catalog lock was poisoned")]
    LockPoisoned,

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("serialization error: {0}")]
    Serialization(String),

    #[error("corrupted data: {0}")]
    CorruptedData(String),

    #[error(transparent)]
    InvalidMeal(#[from] MealError),

    #[error("meal with name '{0}' already exists")]
    DuplicateName(String),

    #[error("meal {0} not found")]
    NotFound(MealId),

    #[error("meal '{0}' not found")]
    NameNotFound(String),

    #[error("meal {0} has been deleted")]
    Deleted(MealId),
}

pub type Result<T> = std::result::Result<T, RepositoryError>;
