//! Battle arena: combatant slots and winner selection.
//!
//! [`Arena`] owns the two combatant slots and drives a battle through
//! [`Arena::resolve`]. The scoring-to-verdict math is kept in
//! [`resolution`] as free functions so it can be checked without an arena.
mod arena;
mod errors;
pub mod resolution;

pub use arena::{Arena, ArenaPhase, BattleReport};
pub use errors::BattleError;
pub use resolution::{Slot, Verdict, decide, upset_delta};
