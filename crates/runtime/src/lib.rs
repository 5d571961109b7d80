//! Runtime wiring for the meal arena.
//!
//! This crate binds the deterministic rules in `arena-core` to concrete
//! collaborators: catalog repositories that persist meals and battle counters,
//! `rand`-backed randomness, and environment-driven configuration. Consumers
//! embed [`BattleService`] to prepare meals and resolve battles.
//!
//! Modules are organized by responsibility:
//! - [`service`] hosts the serialized arena and its builder
//! - [`repository`] provides in-memory and file-backed catalogs
//! - [`oracle`] provides randomness sources
//! - [`config`] reads runtime settings from the environment
pub mod config;
pub mod error;
pub mod oracle;
pub mod repository;
pub mod service;

pub use config::RuntimeConfig;
pub use error::{Result, RuntimeError};
pub use oracle::{RandomSource, SeededRandom, ThreadRandom};
pub use repository::{
    FileMealRepository, InMemoryMealRepo, LeaderboardEntry, LeaderboardSort, MealRepository,
    RepositoryError, RepositorySink,
};
pub use service::{BattleService, BattleServiceBuilder};
