/// Arena configuration constants and tunable parameters.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct ArenaConfig {
    /// Score gap that maps to a certain win for the stronger meal.
    ///
    /// The upset threshold is `|score_a - score_b| / upset_scale`, clamped to `[0, 1]`.
    pub upset_scale: f64,
}

impl ArenaConfig {
    // ===== compile-time constants used as type parameters =====
    /// Number of combatant slots in one arena.
    pub const SLOT_COUNT: usize = 2;

    // ===== runtime-tunable defaults =====
    pub const DEFAULT_UPSET_SCALE: f64 = 100.0;

    pub fn new() -> Self {
        Self {
            upset_scale: Self::DEFAULT_UPSET_SCALE,
        }
    }

    pub fn with_upset_scale(upset_scale: f64) -> Self {
        Self { upset_scale }
    }

    /// The scale must be a positive, finite number.
    pub fn is_valid(&self) -> bool {
        self.upset_scale.is_finite() && self.upset_scale > 0.0
    }
}

impl Default for ArenaConfig {
    fn default() -> Self {
        Self::new()
    }
}
