//! Meal catalog loader.

use std::collections::HashSet;
use std::path::Path;

use arena_core::NewMeal;
use serde::{Deserialize, Serialize};

use crate::loaders::{LoadResult, read_file};

/// Meal catalog structure for RON files.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MealCatalog {
    pub meals: Vec<NewMeal>,
}

/// Loader for meal catalogs from RON files.
pub struct MealCatalogLoader;

impl MealCatalogLoader {
    /// Load a meal catalog from a RON file.
    ///
    /// Every entry is validated and names must be unique within the file.
    pub fn load(path: &Path) -> LoadResult<Vec<NewMeal>> {
        let content = read_file(path)?;
        Self::parse(&content)
    }

    /// Parse a meal catalog from RON text.
    pub fn parse(content: &str) -> LoadResult<Vec<NewMeal>> {
        let catalog: MealCatalog = ron::from_str(content)
            .map_err(|e| anyhow::anyhow!("Failed to parse meal catalog RON: {}", e))?;

        let mut names = HashSet::new();
        for (index, meal) in catalog.meals.iter().enumerate() {
            meal.validate()
                .map_err(|e| anyhow::anyhow!("Invalid meal #{} '{}': {}", index, meal.name, e))?;
            if !names.insert(meal.name.as_str()) {
                anyhow::bail!("Duplicate meal name '{}' in catalog", meal.name);
            }
        }

        Ok(catalog.meals)
    }
}
