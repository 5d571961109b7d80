//! Repository layer for the meal catalog.
//!
//! Repositories own the canonical meal records: creation, soft deletion,
//! lookups, leaderboards and the battle counters. The arena only ever sees
//! them through [`RepositorySink`].

mod catalog;
mod error;
mod file;
mod memory;
mod sink;
mod traits;

pub use catalog::{LeaderboardEntry, LeaderboardSort};
pub use error::{RepositoryError, Result};
pub use file::FileMealRepository;
pub use memory::InMemoryMealRepo;
pub use sink::RepositorySink;
pub use traits::MealRepository;
