//! Runtime configuration structures and loaders.
use std::env;
use std::path::PathBuf;

use arena_core::ArenaConfig;

use crate::oracle::RandomSource;

/// Configuration required to assemble a battle service.
#[derive(Clone, Debug, Default)]
pub struct RuntimeConfig {
    pub arena: ArenaConfig,
    /// Seed for reproducible battles; thread-local randomness when absent.
    pub rng_seed: Option<u64>,
    /// Directory of the file-backed catalog.
    pub data_dir: Option<PathBuf>,
}

impl RuntimeConfig {
    /// Construct configuration from process environment variables.
    ///
    /// Environment variables:
    /// - `ARENA_UPSET_SCALE` - Score gap that guarantees a favourite win (default: 100)
    /// - `ARENA_RNG_SEED` - Seed for reproducible battles (default: unseeded)
    /// - `ARENA_DATA_DIR` - Catalog directory (default: platform-specific)
    pub fn from_env() -> Self {
        Self::from_vars(|key| env::var(key).ok())
    }

    /// Same as [`from_env`](Self::from_env) with a custom variable lookup.
    pub fn from_vars(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let mut config = Self::default();

        if let Some(scale) = parse::<f64>(&lookup, "ARENA_UPSET_SCALE") {
            let arena = ArenaConfig::with_upset_scale(scale);
            if arena.is_valid() {
                config.arena = arena;
            } else {
                tracing::warn!("Ignoring invalid ARENA_UPSET_SCALE={}", scale);
            }
        }

        config.rng_seed = parse::<u64>(&lookup, "ARENA_RNG_SEED");
        config.data_dir = lookup("ARENA_DATA_DIR").map(PathBuf::from);

        config
    }

    /// Randomness provider matching `rng_seed`.
    pub fn random_source(&self) -> RandomSource {
        RandomSource::from_seed(self.rng_seed)
    }

    /// Catalog directory, falling back to the platform data directory.
    ///
    /// - Linux: `~/.local/share/meal-arena` (or `$XDG_DATA_HOME/meal-arena`)
    /// - macOS: `~/Library/Application Support/meal-arena`
    /// - Windows: `%APPDATA%\meal-arena`
    /// - Fallback: `./save_data`
    pub fn resolved_data_dir(&self) -> PathBuf {
        if let Some(dir) = &self.data_dir {
            return dir.clone();
        }
        directories::ProjectDirs::from("", "", "meal-arena")
            .map(|dirs| dirs.data_dir().to_path_buf())
            .unwrap_or_else(|| PathBuf::from("./save_data"))
    }
}

fn parse<T>(lookup: &impl Fn(&str) -> Option<String>, key: &str) -> Option<T>
where
    T: std::str::FromStr,
{
    lookup(key)?.trim().parse().ok()
}
