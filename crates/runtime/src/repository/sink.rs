//! Adapter exposing a catalog repository as the arena's statistics sink.

use arena_core::{MealId, Outcome, StatisticsSink};

use super::error::RepositoryError;
use super::traits::MealRepository;

/// Borrows a [`MealRepository`] and forwards arena outcomes to
/// [`MealRepository::update_stats`].
#[derive(Debug)]
pub struct RepositorySink<'a, R: ?Sized> {
    repository: &'a R,
}

impl<'a, R: ?Sized> RepositorySink<'a, R> {
    pub fn new(repository: &'a R) -> Self {
        Self { repository }
    }
}

impl<R: MealRepository + ?Sized> StatisticsSink for RepositorySink<'_, R> {
    type Error = RepositoryError;

    fn record_outcome(&self, meal: MealId, outcome: Outcome) -> Result<(), RepositoryError> {
        self.repository.update_stats(meal, outcome)?;
        tracing::debug!("Recorded {} for meal {}", outcome, meal);
        Ok(())
    }
}
