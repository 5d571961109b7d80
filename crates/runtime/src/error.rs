//! Unified error types surfaced by the runtime API.
//!
//! Wraps arena and repository failures so callers can bubble them up with
//! consistent context.

use arena_core::BattleError;
use thiserror::Error;

pub use crate::repository::RepositoryError;

pub type Result<T> = std::result::Result<T, RuntimeError>;

#[derive(Debug, Error)]
pub enum RuntimeError {
    #[error(transparent)]
    Battle(#[from] BattleError),

    #[error(transparent)]
    Repository(#[from] RepositoryError),

    #[error("arena lock was poisoned")]
    ArenaLockPoisoned,

    #[error("battle service requires a meal repository")]
    MissingRepository,

    #[error("battle service requires a randomness provider")]
    MissingRandomness,

    #[error("invalid arena config: upset_scale must be positive, got {0}")]
    InvalidConfig(f64),
}
