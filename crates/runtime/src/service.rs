//! Serialized access to the battle arena.
//!
//! [`BattleService`] pairs one [`Arena`] with a catalog repository and a
//! randomness provider. Every arena operation runs under a single mutex, so a
//! prepare can never interleave with an in-flight resolve.

use std::sync::{Mutex, MutexGuard};

use arena_core::{Arena, ArenaConfig, BattleReport, Meal, MealId, RandomOracle};

use crate::config::RuntimeConfig;
use crate::error::{Result, RuntimeError};
use crate::oracle::RandomSource;
use crate::repository::{MealRepository, RepositorySink};

struct ArenaState<G> {
    arena: Arena,
    rng: G,
}

/// Battle arena bound to a catalog repository.
pub struct BattleService<R, G = RandomSource> {
    repository: R,
    state: Mutex<ArenaState<G>>,
}

impl<R, G> BattleService<R, G>
where
    R: MealRepository,
    G: RandomOracle,
{
    /// Create a new service builder
    pub fn builder() -> BattleServiceBuilder<R, G> {
        BattleServiceBuilder::new()
    }

    /// Repository backing lookups and statistics.
    pub fn repository(&self) -> &R {
        &self.repository
    }

    /// Load a live meal by id into the next free slot.
    pub fn prepare(&self, id: MealId) -> Result<Meal> {
        let mut state = self.lock()?;
        let meal = self.repository.get_by_id(id).inspect_err(|e| {
            tracing::warn!("Cannot prepare meal {}: {}", id, e);
        })?;
        self.place(&mut state, meal)
    }

    /// Load a live meal by name into the next free slot.
    pub fn prepare_by_name(&self, name: &str) -> Result<Meal> {
        let mut state = self.lock()?;
        let meal = self.repository.get_by_name(name).inspect_err(|e| {
            tracing::warn!("Cannot prepare meal '{}': {}", name, e);
        })?;
        self.place(&mut state, meal)
    }

    /// Snapshot of the prepared combatants in slot order.
    pub fn combatants(&self) -> Result<Vec<Meal>> {
        Ok(self.lock()?.arena.combatants().to_vec())
    }

    /// Empty both slots.
    pub fn clear(&self) -> Result<()> {
        self.lock()?.arena.clear();
        tracing::debug!("Arena cleared");
        Ok(())
    }

    /// Fight the two prepared meals and record the outcome in the repository.
    pub fn resolve(&self) -> Result<BattleReport> {
        let mut guard = self.lock()?;
        let ArenaState { arena, rng } = &mut *guard;
        let sink = RepositorySink::new(&self.repository);

        match arena.resolve(rng, &sink) {
            Ok(report) => {
                tracing::info!(
                    "{} (#{}) beat {} (#{}) [scores {:.2} vs {:.2}, delta {:.3}, roll {:.3}, upset {}]",
                    report.winner_name,
                    report.winner,
                    report.loser_name,
                    report.loser,
                    report.scores[0],
                    report.scores[1],
                    report.delta,
                    report.roll,
                    report.upset,
                );
                Ok(report)
            }
            Err(e) => {
                tracing::warn!("Battle not resolved: {}", e);
                Err(e.into())
            }
        }
    }

    fn place(&self, state: &mut ArenaState<G>, meal: Meal) -> Result<Meal> {
        state.arena.prepare(meal.clone()).inspect_err(|e| {
            tracing::warn!("Cannot prepare meal {}: {}", meal.id(), e);
        })?;
        tracing::debug!(
            "Prepared {} (#{}) in slot {}",
            meal.name(),
            meal.id(),
            state.arena.combatants().len()
        );
        Ok(meal)
    }

    fn lock(&self) -> Result<MutexGuard<'_, ArenaState<G>>> {
        self.state
            .lock()
            .map_err(|_| RuntimeError::ArenaLockPoisoned)
    }
}

impl<R: MealRepository> BattleService<R, RandomSource> {
    /// Build a service from runtime configuration.
    pub fn from_config(config: &RuntimeConfig, repository: R) -> Result<Self> {
        Self::builder()
            .config(config.arena.clone())
            .repository(repository)
            .rng(config.random_source())
            .build()
    }
}

/// Builder for [`BattleService`].
pub struct BattleServiceBuilder<R, G> {
    config: ArenaConfig,
    repository: Option<R>,
    rng: Option<G>,
}

impl<R, G> BattleServiceBuilder<R, G>
where
    R: MealRepository,
    G: RandomOracle,
{
    fn new() -> Self {
        Self {
            config: ArenaConfig::default(),
            repository: None,
            rng: None,
        }
    }

    /// Override arena configuration
    pub fn config(mut self, config: ArenaConfig) -> Self {
        self.config = config;
        self
    }

    /// Set required catalog repository
    pub fn repository(mut self, repository: R) -> Self {
        self.repository = Some(repository);
        self
    }

    /// Set required randomness provider
    pub fn rng(mut self, rng: G) -> Self {
        self.rng = Some(rng);
        self
    }

    pub fn build(self) -> Result<BattleService<R, G>> {
        if !self.config.is_valid() {
            return Err(RuntimeError::InvalidConfig(self.config.upset_scale));
        }
        let repository = self.repository.ok_or(RuntimeError::MissingRepository)?;
        let rng = self.rng.ok_or(RuntimeError::MissingRandomness)?;

        Ok(BattleService {
            repository,
            state: Mutex::new(ArenaState {
                arena: Arena::with_config(self.config),
                rng,
            }),
        })
    }
}

#[cfg(test)]
mod tests {
    use arena_core::{BattleError, Difficulty, NewMeal, ScriptedRandom};

    use super::*;
    use crate::repository::{InMemoryMealRepo, RepositoryError};

    fn service(draws: &[f64]) -> BattleService<InMemoryMealRepo, ScriptedRandom> {
        let repo = InMemoryMealRepo::new();
        repo.seed(vec![
            NewMeal::new("Pad Thai", "Thai", 17.75, Difficulty::High),
            NewMeal::new("Som Tam", "Thai", 12.75, Difficulty::High),
        ])
        .unwrap();
        BattleService::builder()
            .repository(repo)
            .rng(ScriptedRandom::new(draws.to_vec()))
            .build()
            .unwrap()
    }

    #[test]
    fn builder_requires_collaborators() {
        let missing_repo = BattleService::<InMemoryMealRepo, ScriptedRandom>::builder()
            .rng(ScriptedRandom::default())
            .build();
        assert!(matches!(missing_repo, Err(RuntimeError::MissingRepository)));

        let missing_rng = BattleService::<InMemoryMealRepo, ScriptedRandom>::builder()
            .repository(InMemoryMealRepo::new())
            .build();
        assert!(matches!(missing_rng, Err(RuntimeError::MissingRandomness)));

        let bad_config = BattleService::builder()
            .config(ArenaConfig::with_upset_scale(0.0))
            .repository(InMemoryMealRepo::new())
            .rng(ScriptedRandom::default())
            .build();
        assert!(matches!(bad_config, Err(RuntimeError::InvalidConfig(_))));
    }

    #[test]
    fn resolve_updates_repository_stats() {
        let service = service(&[0.1]);
        service.prepare(MealId(1)).unwrap();
        service.prepare_by_name("Som Tam").unwrap();

        let report = service.resolve().unwrap();
        assert_eq!(report.winner_name, "Pad Thai");
        assert!(service.combatants().unwrap().is_empty());

        let repo = service.repository();
        let winner = repo.get_by_id(MealId(1)).unwrap().stats();
        let loser = repo.get_by_id(MealId(2)).unwrap().stats();
        assert_eq!((winner.battles(), winner.wins()), (1, 1));
        assert_eq!((loser.battles(), loser.wins()), (1, 0));
    }

    #[test]
    fn deleted_meals_cannot_be_prepared() {
        let service = service(&[0.5]);
        service.repository().delete(MealId(2)).unwrap();

        let err = service.prepare(MealId(2)).unwrap_err();
        assert!(matches!(
            err,
            RuntimeError::Repository(RepositoryError::Deleted(MealId(2)))
        ));
        assert!(service.combatants().unwrap().is_empty());
    }

    #[test]
    fn capacity_error_passes_through() {
        let service = service(&[0.5]);
        service.prepare(MealId(1)).unwrap();
        service.prepare(MealId(2)).unwrap();

        let err = service.prepare(MealId(1)).unwrap_err();
        assert!(matches!(err, RuntimeError::Battle(BattleError::Capacity)));
        assert_eq!(service.combatants().unwrap().len(), 2);
    }

    #[test]
    fn resolve_with_one_combatant_leaves_stats_untouched() {
        let service = service(&[0.5]);
        service.prepare(MealId(1)).unwrap();

        let err = service.resolve().unwrap_err();
        assert!(matches!(
            err,
            RuntimeError::Battle(BattleError::InsufficientCombatants { occupied: 1 })
        ));
        assert_eq!(service.combatants().unwrap().len(), 1);
        assert_eq!(
            service.repository().get_by_id(MealId(1)).unwrap().stats().battles(),
            0
        );
    }

    #[test]
    fn meal_deleted_after_prepare_fails_at_resolve() {
        // Slot B wins on an upset, so the loss report targets the deleted meal.
        let service = service(&[0.5]);
        service.prepare(MealId(1)).unwrap();
        service.prepare(MealId(2)).unwrap();
        service.repository().delete(MealId(1)).unwrap();

        let err = service.resolve().unwrap_err();
        assert!(matches!(
            err,
            RuntimeError::Battle(BattleError::Sink { meal: MealId(1), .. })
        ));

        // The win already recorded for the other meal is kept.
        let survivor = service.repository().get_by_id(MealId(2)).unwrap().stats();
        assert_eq!((survivor.battles(), survivor.wins()), (1, 1));
        assert_eq!(service.combatants().unwrap().len(), 2);

        service.clear().unwrap();
        assert!(service.combatants().unwrap().is_empty());
    }
}
