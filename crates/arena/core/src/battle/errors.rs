//! Error types for arena operations.

use crate::error::{ArenaError, ErrorSeverity};
use crate::meal::{MealId, Outcome};

/// Errors surfaced by [`Arena`](super::Arena) operations.
///
/// `Capacity` and `InsufficientCombatants` are caller mistakes and leave the
/// arena untouched. `Sink` is raised after the winner was chosen; any outcome
/// recorded before the failure stays recorded.
#[derive(Debug, thiserror::Error)]
pub enum BattleError {
    #[error("both combatant slots are occupied")]
    Capacity,

    #[error("battle requires two combatants, {occupied} prepared")]
    InsufficientCombatants { occupied: usize },

    #[error("statistics sink failed to record {outcome} for meal {meal}")]
    Sink {
        meal: MealId,
        outcome: Outcome,
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },
}

impl ArenaError for BattleError {
    fn severity(&self) -> ErrorSeverity {
        match self {
            Self::Capacity | Self::InsufficientCombatants { .. } => ErrorSeverity::Recoverable,
            Self::Sink { .. } => ErrorSeverity::Internal,
        }
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::Capacity => "BATTLE_CAPACITY",
            Self::InsufficientCombatants { .. } => "BATTLE_INSUFFICIENT_COMBATANTS",
            Self::Sink { .. } => "BATTLE_SINK_FAILED",
        }
    }
}
