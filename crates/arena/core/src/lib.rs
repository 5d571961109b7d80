//! Deterministic battle rules for the meal arena.
//!
//! `arena-core` defines the meal record, the score function and the two-slot
//! [`battle::Arena`] that resolves head-to-head battles. It performs no I/O:
//! randomness and outcome persistence are injected through the
//! [`env::RandomOracle`] and [`env::StatisticsSink`] contracts, so the same
//! meals and the same draw always produce the same winner.
pub mod battle;
pub mod config;
pub mod env;
pub mod error;
pub mod meal;

pub use battle::{Arena, ArenaPhase, BattleError, BattleReport, Slot, Verdict};
pub use config::ArenaConfig;
pub use env::{PcgRng, RandomOracle, ScriptedRandom, StatisticsSink};
pub use error::{ArenaError, ErrorSeverity};
pub use meal::{Difficulty, Meal, MealError, MealId, MealStats, NewMeal, Outcome, score};
