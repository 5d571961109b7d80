//! Catalog state shared by the in-memory and file repositories.

use std::cmp::Ordering;
use std::collections::BTreeMap;

use arena_core::{Difficulty, Meal, MealId, MealStats, NewMeal, Outcome};
use serde::{Deserialize, Serialize};

use super::error::{RepositoryError, Result};

/// Leaderboard ordering.
#[derive(
    Clone,
    Copy,
    Debug,
    Default,
    PartialEq,
    Eq,
    Hash,
    strum::Display,
    strum::EnumString,
    strum::AsRefStr,
)]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum LeaderboardSort {
    /// Most wins first.
    #[default]
    Wins,
    /// Highest win percentage first.
    WinPct,
}

/// One leaderboard row.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct LeaderboardEntry {
    pub id: MealId,
    pub name: String,
    pub cuisine: String,
    pub price: f64,
    pub difficulty: Difficulty,
    pub battles: u64,
    pub wins: u64,
    /// Win percentage rounded to one decimal place.
    pub win_pct: f64,
}

impl LeaderboardEntry {
    fn from_meal(meal: &Meal, ratio: f64) -> Self {
        let stats = meal.stats();
        Self {
            id: meal.id(),
            name: meal.name().to_owned(),
            cuisine: meal.cuisine().to_owned(),
            price: meal.price(),
            difficulty: meal.difficulty(),
            battles: stats.battles(),
            wins: stats.wins(),
            win_pct: (ratio * 1000.0).round() / 10.0,
        }
    }
}

/// Every record ever created, deleted ones included, plus the id sequence.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub(crate) struct Catalog {
    meals: BTreeMap<MealId, Meal>,
    last_id: u64,
}

impl Catalog {
    pub(crate) fn create(&mut self, new_meal: NewMeal) -> Result<Meal> {
        new_meal.validate()?;
        if self.live().any(|meal| meal.name() == new_meal.name) {
            return Err(RepositoryError::DuplicateName(new_meal.name));
        }

        let id = MealId(self.last_id + 1);
        let meal = Meal::new(id, new_meal)?;
        self.last_id = id.get();
        self.meals.insert(id, meal.clone());
        Ok(meal)
    }

    pub(crate) fn delete(&mut self, id: MealId) -> Result<()> {
        self.live_mut(id)?.soft_delete();
        Ok(())
    }

    pub(crate) fn get_by_id(&self, id: MealId) -> Result<Meal> {
        match self.meals.get(&id) {
            None => Err(RepositoryError::NotFound(id)),
            Some(meal) if meal.is_deleted() => Err(RepositoryError::Deleted(id)),
            Some(meal) => Ok(meal.clone()),
        }
    }

    pub(crate) fn get_by_name(&self, name: &str) -> Result<Meal> {
        if let Some(meal) = self.live().find(|meal| meal.name() == name) {
            return Ok(meal.clone());
        }
        match self.meals.values().rev().find(|meal| meal.name() == name) {
            Some(deleted) => Err(RepositoryError::Deleted(deleted.id())),
            None => Err(RepositoryError::NameNotFound(name.to_owned())),
        }
    }

    pub(crate) fn update_stats(&mut self, id: MealId, outcome: Outcome) -> Result<MealStats> {
        let meal = self.live_mut(id)?;
        meal.record_outcome(outcome);
        Ok(meal.stats())
    }

    pub(crate) fn leaderboard(&self, sort: LeaderboardSort) -> Vec<LeaderboardEntry> {
        let mut ranked: Vec<(&Meal, f64)> = self
            .live()
            .filter_map(|meal| meal.stats().win_ratio().map(|ratio| (meal, ratio)))
            .collect();

        ranked.sort_by(|(a, a_ratio), (b, b_ratio)| {
            let primary = match sort {
                LeaderboardSort::Wins => b.stats().wins().cmp(&a.stats().wins()),
                LeaderboardSort::WinPct => b_ratio.total_cmp(a_ratio),
            };
            match primary {
                Ordering::Equal => a.id().cmp(&b.id()),
                other => other,
            }
        });

        ranked
            .into_iter()
            .map(|(meal, ratio)| LeaderboardEntry::from_meal(meal, ratio))
            .collect()
    }

    pub(crate) fn list(&self) -> Vec<Meal> {
        self.live().cloned().collect()
    }

    pub(crate) fn clear(&mut self) {
        self.meals.clear();
        self.last_id = 0;
    }

    fn live(&self) -> impl Iterator<Item = &Meal> {
        self.meals.values().filter(|meal| !meal.is_deleted())
    }

    fn live_mut(&mut self, id: MealId) -> Result<&mut Meal> {
        match self.meals.get_mut(&id) {
            None => Err(RepositoryError::NotFound(id)),
            Some(meal) if meal.is_deleted() => Err(RepositoryError::Deleted(id)),
            Some(meal) => Ok(meal),
        }
    }
}
