//! Meal records and their lifetime statistics.
//!
//! A [`Meal`] is owned by the catalog store. The arena only reads the fields
//! that feed the score function; battle and win counters change exclusively
//! through [`Meal::record_outcome`], which catalog stores call when acting as a
//! statistics sink.

mod score;

pub use score::{score, score_parts};

use core::fmt;

use crate::error::{ArenaError, ErrorSeverity};

/// Unique catalog identity of a meal.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct MealId(pub u64);

impl MealId {
    pub const fn new(id: u64) -> Self {
        Self(id)
    }

    pub const fn get(self) -> u64 {
        self.0
    }
}

impl fmt::Display for MealId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// How hard a meal is to prepare.
///
/// Ordered `Low < Med < High`. Harder meals take a smaller score penalty.
#[derive(
    Clone,
    Copy,
    Debug,
    Default,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    strum::Display,
    strum::EnumString,
    strum::AsRefStr,
    strum::EnumIter,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "UPPERCASE"))]
#[strum(serialize_all = "UPPERCASE", ascii_case_insensitive)]
pub enum Difficulty {
    Low,
    #[default]
    Med,
    High,
}

impl Difficulty {
    /// Fixed score penalty for this tier.
    ///
    /// `Low = 3` extends the observed `High = 1`, `Med = 2` progression.
    pub const fn penalty(self) -> f64 {
        match self {
            Self::High => 1.0,
            Self::Med => 2.0,
            Self::Low => 3.0,
        }
    }
}

/// Result of one battle from a single meal's point of view.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display, strum::EnumString, strum::AsRefStr,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum Outcome {
    Win,
    Loss,
}

/// Lifetime battle counters. `wins <= battles` always holds.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MealStats {
    battles: u64,
    wins: u64,
}

impl MealStats {
    pub const fn battles(&self) -> u64 {
        self.battles
    }

    pub const fn wins(&self) -> u64 {
        self.wins
    }

    /// Counts one battle, and one win when `outcome` is [`Outcome::Win`].
    pub fn record(&mut self, outcome: Outcome) {
        self.battles = self.battles.saturating_add(1);
        if outcome == Outcome::Win {
            self.wins = self.wins.saturating_add(1);
        }
    }

    /// Fraction of battles won, or `None` before the first battle.
    pub fn win_ratio(&self) -> Option<f64> {
        (self.battles > 0).then(|| self.wins as f64 / self.battles as f64)
    }
}

/// Creation request for a catalog entry.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct NewMeal {
    pub name: String,
    pub cuisine: String,
    pub price: f64,
    pub difficulty: Difficulty,
}

impl NewMeal {
    pub fn new(
        name: impl Into<String>,
        cuisine: impl Into<String>,
        price: f64,
        difficulty: Difficulty,
    ) -> Self {
        Self {
            name: name.into(),
            cuisine: cuisine.into(),
            price,
            difficulty,
        }
    }

    /// Checks the field constraints every stored meal must satisfy.
    pub fn validate(&self) -> Result<(), MealError> {
        if self.name.trim().is_empty() {
            return Err(MealError::EmptyName);
        }
        if self.cuisine.trim().is_empty() {
            return Err(MealError::EmptyCuisine);
        }
        if !self.price.is_finite() || self.price <= 0.0 {
            return Err(MealError::InvalidPrice(self.price));
        }
        Ok(())
    }
}

/// A catalog entry: immutable identity plus mutable lifetime statistics.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Meal {
    id: MealId,
    name: String,
    cuisine: String,
    price: f64,
    difficulty: Difficulty,
    deleted: bool,
    stats: MealStats,
}

impl Meal {
    /// Builds a fresh record with zeroed statistics.
    pub fn new(id: MealId, new_meal: NewMeal) -> Result<Self, MealError> {
        new_meal.validate()?;
        let NewMeal {
            name,
            cuisine,
            price,
            difficulty,
        } = new_meal;
        Ok(Self {
            id,
            name,
            cuisine,
            price,
            difficulty,
            deleted: false,
            stats: MealStats::default(),
        })
    }

    pub const fn id(&self) -> MealId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn cuisine(&self) -> &str {
        &self.cuisine
    }

    pub const fn price(&self) -> f64 {
        self.price
    }

    pub const fn difficulty(&self) -> Difficulty {
        self.difficulty
    }

    pub const fn is_deleted(&self) -> bool {
        self.deleted
    }

    pub const fn stats(&self) -> MealStats {
        self.stats
    }

    /// Hides the record from lookups. Statistics are kept.
    pub fn soft_delete(&mut self) {
        self.deleted = true;
    }

    /// Applies one battle outcome to the lifetime counters.
    pub fn record_outcome(&mut self, outcome: Outcome) {
        self.stats.record(outcome);
    }
}

/// Errors raised when a meal record violates its field constraints.
#[derive(Clone, Debug, PartialEq, thiserror::Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum MealError {
    #[error("meal name must not be empty")]
    EmptyName,

    #[error("cuisine must not be empty")]
    EmptyCuisine,

    #[error("invalid price {0}: must be a positive number")]
    InvalidPrice(f64),
}

impl ArenaError for MealError {
    fn severity(&self) -> ErrorSeverity {
        ErrorSeverity::Validation
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::EmptyName => "MEAL_EMPTY_NAME",
            Self::EmptyCuisine => "MEAL_EMPTY_CUISINE",
            Self::InvalidPrice(_) => "MEAL_INVALID_PRICE",
        }
    }
}
