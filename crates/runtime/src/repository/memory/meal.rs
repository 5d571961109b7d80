//! In-memory MealRepository implementation for tests and local runs.

use std::sync::{RwLock, RwLockReadGuard};

use arena_core::{Meal, MealId, MealStats, NewMeal, Outcome};

use crate::repository::catalog::Catalog;
use crate::repository::{
    LeaderboardEntry, LeaderboardSort, MealRepository, RepositoryError, Result,
};

/// In-memory implementation of MealRepository.
///
/// Every operation runs under one lock, so each call is atomic.
#[derive(Debug, Default)]
pub struct InMemoryMealRepo {
    catalog: RwLock<Catalog>,
}

impl InMemoryMealRepo {
    /// Create a new empty in-memory repository.
    pub fn new() -> Self {
        Self::default()
    }

    fn read(&self) -> Result<RwLockReadGuard<'_, Catalog>> {
        self.catalog
            .read()
            .map_err(|_| RepositoryError::LockPoisoned)
    }

    fn write<T>(&self, apply: impl FnOnce(&mut Catalog) -> Result<T>) -> Result<T> {
        let mut catalog = self
            .catalog
            .write()
            .map_err(|_| RepositoryError::LockPoisoned)?;
        apply(&mut catalog)
    }
}

impl MealRepository for InMemoryMealRepo {
    fn create(&self, meal: NewMeal) -> Result<Meal> {
        self.write(|catalog| catalog.create(meal))
    }

    fn delete(&self, id: MealId) -> Result<()> {
        self.write(|catalog| catalog.delete(id))
    }

    fn get_by_id(&self, id: MealId) -> Result<Meal> {
        self.read()?.get_by_id(id)
    }

    fn get_by_name(&self, name: &str) -> Result<Meal> {
        self.read()?.get_by_name(name)
    }

    fn update_stats(&self, id: MealId, outcome: Outcome) -> Result<MealStats> {
        self.write(|catalog| catalog.update_stats(id, outcome))
    }

    fn leaderboard(&self, sort: LeaderboardSort) -> Result<Vec<LeaderboardEntry>> {
        Ok(self.read()?.leaderboard(sort))
    }

    fn list(&self) -> Result<Vec<Meal>> {
        Ok(self.read()?.list())
    }

    fn clear_catalog(&self) -> Result<()> {
        self.write(|catalog| {
            catalog.clear();
            Ok(())
        })
    }
}
