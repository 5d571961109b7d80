//! Data-driven meal catalogs and arena configuration.
//!
//! Provides loaders for the files that seed a catalog store and tune the
//! arena:
//! - Meal catalogs (data-driven via RON)
//! - Arena configuration (data-driven via TOML)
//!
//! Loaders produce arena-core types directly; persisting them is the job of a
//! catalog repository.

#[cfg(feature = "loaders")]
pub mod loaders;

#[cfg(feature = "loaders")]
pub use loaders::{ConfigLoader, MealCatalog, MealCatalogLoader};
