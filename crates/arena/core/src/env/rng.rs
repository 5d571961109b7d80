//! Randomness oracle consumed by battle resolution.
//!
//! The arena never reaches for a global generator: every draw comes from a
//! [`RandomOracle`] passed in by the caller, so a fixed sequence of draws
//! always reproduces the same battle.

/// Source of uniformly distributed values in `[0, 1)`.
pub trait RandomOracle {
    /// Draw the next value in `[0, 1)`.
    fn next_unit(&mut self) -> f64;

    /// Generate a random value in range [min, max] inclusive.
    fn range(&mut self, min: u32, max: u32) -> u32 {
        if min >= max {
            return min;
        }
        let span = u64::from(max - min) + 1;
        let offset = (self.next_unit() * span as f64) as u64;
        min + offset.min(span - 1) as u32
    }

    /// Generate a random value between `min` and `max`.
    ///
    /// Returns `min` when the bounds are equal or inverted.
    fn range_f64(&mut self, min: f64, max: f64) -> f64 {
        if min >= max {
            return min;
        }
        (min + self.next_unit() * (max - min)).min(max)
    }

    /// Pick an index into a collection of `len` elements.
    ///
    /// Returns `None` for an empty collection.
    fn choose_index(&mut self, len: usize) -> Option<usize> {
        if len == 0 {
            return None;
        }
        let index = (self.next_unit() * len as f64) as usize;
        Some(index.min(len - 1))
    }
}

impl<T: RandomOracle + ?Sized> RandomOracle for &mut T {
    fn next_unit(&mut self) -> f64 {
        (**self).next_unit()
    }
}

impl<T: RandomOracle + ?Sized> RandomOracle for Box<T> {
    fn next_unit(&mut self) -> f64 {
        (**self).next_unit()
    }
}

/// PCG random number generator (Permuted Congruential Generator).
///
/// Uses the PCG-XSH-RR variant: 32-bit output from 64-bit state.
///
/// # Properties
///
/// - **Deterministic**: Same seed always produces the same stream
/// - **Fast**: Single multiply + xorshift + rotate
/// - **Small state**: Only 64 bits
///
/// # References
///
/// - PCG paper: <https://www.pcg-random.org/>
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct PcgRng {
    state: u64,
}

impl PcgRng {
    /// PCG multiplier constant.
    const MULTIPLIER: u64 = 6364136223846793005;

    /// PCG increment constant.
    const INCREMENT: u64 = 1442695040888963407;

    /// 2^32, maps a `u32` onto `[0, 1)`.
    const U32_RANGE: f64 = 4_294_967_296.0;

    pub const fn new(seed: u64) -> Self {
        Self { state: seed }
    }

    /// Advance the PCG state by one step.
    ///
    /// `state' = (state * multiplier + increment) mod 2^64`
    #[inline]
    fn pcg_step(state: u64) -> u64 {
        state
            .wrapping_mul(Self::MULTIPLIER)
            .wrapping_add(Self::INCREMENT)
    }

    /// PCG output function using XSH-RR (xorshift high, random rotate).
    #[inline]
    fn pcg_output(state: u64) -> u32 {
        let xorshifted = (((state >> 18) ^ state) >> 27) as u32;
        let rot = (state >> 59) as u32;
        xorshifted.rotate_right(rot)
    }

    /// Returns the next 32-bit value of the stream.
    pub fn next_u32(&mut self) -> u32 {
        self.state = Self::pcg_step(self.state);
        Self::pcg_output(self.state)
    }
}

impl RandomOracle for PcgRng {
    fn next_unit(&mut self) -> f64 {
        f64::from(self.next_u32()) / Self::U32_RANGE
    }
}

/// Replays a fixed list of draws, starting over when exhausted.
///
/// An empty script always yields `0.0`.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ScriptedRandom {
    draws: Vec<f64>,
    cursor: usize,
}

impl ScriptedRandom {
    pub fn new(draws: impl Into<Vec<f64>>) -> Self {
        Self {
            draws: draws.into(),
            cursor: 0,
        }
    }

    /// Number of values handed out so far.
    pub fn draws_taken(&self) -> usize {
        self.cursor
    }
}

impl RandomOracle for ScriptedRandom {
    fn next_unit(&mut self) -> f64 {
        if self.draws.is_empty() {
            return 0.0;
        }
        let value = self.draws[self.cursor % self.draws.len()];
        self.cursor += 1;
        value
    }
}
