use arrayvec::ArrayVec;

use super::errors::BattleError;
use super::resolution::{decide, upset_delta};
use crate::config::ArenaConfig;
use crate::env::{RandomOracle, StatisticsSink};
use crate::meal::{Meal, MealId, Outcome, score};

/// Occupancy of the combatant slots.
#[derive(Clone, Copy, Debug, PartialEq, Eq, strum::Display, strum::AsRefStr)]
#[strum(serialize_all = "snake_case")]
pub enum ArenaPhase {
    Empty,
    OneFilled,
    TwoFilled,
}

/// Summary of a resolved battle.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BattleReport {
    pub winner: MealId,
    pub winner_name: String,
    pub loser: MealId,
    pub loser_name: String,
    /// Scores in slot order.
    pub scores: [f64; ArenaConfig::SLOT_COUNT],
    pub delta: f64,
    pub roll: f64,
    /// True when the lower-scoring meal won.
    pub upset: bool,
}

/// Two-slot battle arena.
///
/// State moves `Empty -> OneFilled -> TwoFilled` through [`prepare`](Self::prepare)
/// and back to `Empty` through [`resolve`](Self::resolve) or [`clear`](Self::clear).
/// The arena keeps snapshots of the meals it is handed and never writes
/// statistics itself; outcomes go to the [`StatisticsSink`].
#[derive(Clone, Debug, Default)]
pub struct Arena {
    slots: ArrayVec<Meal, { ArenaConfig::SLOT_COUNT }>,
    config: ArenaConfig,
}

impl Arena {
    pub fn new() -> Self {
        Self::default()
    }

    /// Arena tuned by `config`. An invalid config falls back to the defaults.
    pub fn with_config(config: ArenaConfig) -> Self {
        Self {
            slots: ArrayVec::new(),
            config: if config.is_valid() {
                config
            } else {
                ArenaConfig::default()
            },
        }
    }

    pub fn config(&self) -> &ArenaConfig {
        &self.config
    }

    /// Places `meal` into the next free slot.
    ///
    /// The same meal may fill both slots; no de-duplication is performed.
    pub fn prepare(&mut self, meal: Meal) -> Result<(), BattleError> {
        self.slots.try_push(meal).map_err(|_| BattleError::Capacity)
    }

    /// Occupied slots in insertion order.
    pub fn combatants(&self) -> &[Meal] {
        &self.slots
    }

    pub fn phase(&self) -> ArenaPhase {
        match self.slots.len() {
            0 => ArenaPhase::Empty,
            1 => ArenaPhase::OneFilled,
            _ => ArenaPhase::TwoFilled,
        }
    }

    /// Empties both slots. Calling it on an empty arena is a no-op.
    pub fn clear(&mut self) {
        self.slots.clear();
    }

    /// Runs one battle between the two prepared meals.
    ///
    /// Draws exactly one value from `rng`, reports the winner then the loser
    /// to `sink`, and empties the slots only after both reports succeeded.
    /// On a sink failure the slots stay occupied and earlier reports are not
    /// undone.
    pub fn resolve<G, S>(&mut self, rng: &mut G, sink: &S) -> Result<BattleReport, BattleError>
    where
        G: RandomOracle + ?Sized,
        S: StatisticsSink + ?Sized,
    {
        let [a, b] = self.slots.as_slice() else {
            return Err(BattleError::InsufficientCombatants {
                occupied: self.slots.len(),
            });
        };

        let scores = [score(a), score(b)];
        let delta = upset_delta(scores[0], scores[1], self.config.upset_scale);
        let roll = rng.next_unit();
        let verdict = decide(scores[0], scores[1], delta, roll);

        let combatants = [a, b];
        let winner = combatants[verdict.winner.index()];
        let loser = combatants[verdict.loser().index()];

        record(sink, winner.id(), Outcome::Win)?;
        record(sink, loser.id(), Outcome::Loss)?;

        let report = BattleReport {
            winner: winner.id(),
            winner_name: winner.name().to_owned(),
            loser: loser.id(),
            loser_name: loser.name().to_owned(),
            scores,
            delta,
            roll,
            upset: verdict.upset,
        };

        self.slots.clear();
        Ok(report)
    }
}

fn record<S>(sink: &S, meal: MealId, outcome: Outcome) -> Result<(), BattleError>
where
    S: StatisticsSink + ?Sized,
{
    sink.record_outcome(meal, outcome)
        .map_err(|source| BattleError::Sink {
            meal,
            outcome,
            source: Box::new(source),
        })
}
