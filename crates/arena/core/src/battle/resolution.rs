//! Winner selection from two scores and one random draw.
//!
//! # Rule
//!
//! ```text
//! delta = clamp(|score_a - score_b| / upset_scale, 0, 1)
//! delta <  roll  => lower score wins (upset)
//! delta >= roll  => higher score wins
//! ```
//!
//! Equal scores are not special-cased: slot A counts as the lower side, so
//! any positive roll hands the battle to slot A.

/// Position of a combatant in the arena.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Slot {
    A,
    B,
}

impl Slot {
    pub const fn other(self) -> Self {
        match self {
            Self::A => Self::B,
            Self::B => Self::A,
        }
    }

    pub const fn index(self) -> usize {
        match self {
            Self::A => 0,
            Self::B => 1,
        }
    }
}

/// Which slot won, and whether it was the underdog.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Verdict {
    pub winner: Slot,
    pub upset: bool,
}

impl Verdict {
    pub const fn loser(&self) -> Slot {
        self.winner.other()
    }
}

/// Upset threshold for a pair of scores, always within `[0, 1]`.
///
/// Equal scores give `0.0` even when both are infinite or the scale is zero.
/// An infinite ratio saturates at `1.0`; any other undefined ratio maps to `0.0`.
pub fn upset_delta(score_a: f64, score_b: f64, upset_scale: f64) -> f64 {
    if score_a == score_b {
        return 0.0;
    }
    let ratio = (score_a - score_b).abs() / upset_scale;
    if ratio.is_nan() {
        return 0.0;
    }
    ratio.clamp(0.0, 1.0)
}

/// Picks the winning slot for the given scores, threshold and draw.
pub fn decide(score_a: f64, score_b: f64, delta: f64, roll: f64) -> Verdict {
    let (higher, lower) = if score_a > score_b {
        (Slot::A, Slot::B)
    } else {
        (Slot::B, Slot::A)
    };

    if delta < roll {
        Verdict {
            winner: lower,
            upset: true,
        }
    } else {
        Verdict {
            winner: higher,
            upset: false,
        }
    }
}
