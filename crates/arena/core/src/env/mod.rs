//! Collaborator contracts the arena consumes.
//!
//! The arena reads randomness from a [`RandomOracle`] and reports outcomes to
//! a [`StatisticsSink`]. Both are passed per call, so tests substitute
//! scripted implementations without touching global state.
mod rng;
mod stats;

pub use rng::{PcgRng, RandomOracle, ScriptedRandom};
pub use stats::StatisticsSink;
