//! Repository contract for the meal catalog.

use arena_core::{Meal, MealId, MealStats, NewMeal, Outcome};

use super::catalog::{LeaderboardEntry, LeaderboardSort};
use super::error::Result;
use super::sink::RepositorySink;

/// Repository for catalog persistence and lookup.
///
/// Soft-deleted meals keep their statistics but are invisible to lookups,
/// leaderboards and stat updates.
pub trait MealRepository: Send + Sync {
    /// Store a new meal and assign it the next id.
    ///
    /// Fails when the fields are invalid or a live meal already uses the name.
    fn create(&self, meal: NewMeal) -> Result<Meal>;

    /// Soft-delete a meal.
    fn delete(&self, id: MealId) -> Result<()>;

    /// Look up a live meal by id.
    fn get_by_id(&self, id: MealId) -> Result<Meal>;

    /// Look up a live meal by name.
    fn get_by_name(&self, name: &str) -> Result<Meal>;

    /// Count one battle for a live meal, and one win for [`Outcome::Win`].
    ///
    /// Both counters change in a single step.
    fn update_stats(&self, id: MealId, outcome: Outcome) -> Result<MealStats>;

    /// Live meals that have fought at least once, best first.
    fn leaderboard(&self, sort: LeaderboardSort) -> Result<Vec<LeaderboardEntry>>;

    /// All live meals ordered by id.
    fn list(&self) -> Result<Vec<Meal>>;

    /// Remove every record, deleted or not, and restart ids at 1.
    fn clear_catalog(&self) -> Result<()>;

    /// Create every meal in order, stopping at the first failure.
    fn seed(&self, meals: Vec<NewMeal>) -> Result<Vec<Meal>> {
        meals.into_iter().map(|meal| self.create(meal)).collect()
    }

    /// View this repository as a statistics sink for the arena.
    fn as_sink(&self) -> RepositorySink<'_, Self>
    where
        Self: Sized,
    {
        RepositorySink::new(self)
    }
}
