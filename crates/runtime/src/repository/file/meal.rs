//! File-based MealRepository implementation.

use std::fs;
use std::path::{Path, PathBuf};
use std::sync::{RwLock, RwLockReadGuard};

use arena_core::{Meal, MealId, MealStats, NewMeal, Outcome};

use crate::repository::catalog::Catalog;
use crate::repository::{
    LeaderboardEntry, LeaderboardSort, MealRepository, RepositoryError, Result,
};

/// File-based implementation of MealRepository.
///
/// The whole catalog is kept in memory and written to `catalog.bin` after
/// every mutation.
///
/// # File Format
///
/// A single bincode-encoded catalog snapshot, replaced atomically through a
/// temporary file and rename. A mutation is only visible in memory once its
/// snapshot reached disk, so a failed write leaves the catalog unchanged.
#[derive(Debug)]
pub struct FileMealRepository {
    path: PathBuf,
    catalog: RwLock<Catalog>,
}

impl FileMealRepository {
    const FILE_NAME: &'static str = "catalog.bin";

    /// Open (or create) a catalog stored under `base_dir`.
    pub fn open(base_dir: impl AsRef<Path>) -> Result<Self> {
        let base_dir = base_dir.as_ref();
        fs::create_dir_all(base_dir)?;

        let path = base_dir.join(Self::FILE_NAME);
        let catalog = if path.exists() {
            let bytes = fs::read(&path)?;
            let catalog: Catalog = bincode::deserialize(&bytes).map_err(|e| {
                RepositoryError::CorruptedData(format!("{}: {}", path.display(), e))
            })?;
            tracing::debug!("Loaded catalog from {}", path.display());
            catalog
        } else {
            Catalog::default()
        };

        Ok(Self {
            path,
            catalog: RwLock::new(catalog),
        })
    }

    /// Location of the catalog snapshot.
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn persist(&self, catalog: &Catalog) -> Result<()> {
        let temp_path = self.path.with_extension("bin.tmp");

        let bytes = bincode::serialize(catalog)
            .map_err(|e| RepositoryError::Serialization(e.to_string()))?;

        fs::write(&temp_path, bytes)?;
        fs::rename(&temp_path, &self.path)?;

        tracing::debug!("Saved catalog to {}", self.path.display());
        Ok(())
    }

    fn read(&self) -> Result<RwLockReadGuard<'_, Catalog>> {
        self.catalog
            .read()
            .map_err(|_| RepositoryError::LockPoisoned)
    }

    fn write<T>(&self, apply: impl FnOnce(&mut Catalog) -> Result<T>) -> Result<T> {
        let mut current = self
            .catalog
            .write()
            .map_err(|_| RepositoryError::LockPoisoned)?;

        let mut next = current.clone();
        let value = apply(&mut next)?;
        self.persist(&next)?;
        *current = next;
        Ok(value)
    }
}

impl MealRepository for FileMealRepository {
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
