//! Randomness providers backed by the `rand` crate.
mod rng;

pub use rng::{RandomSource, SeededRandom, ThreadRandom};
