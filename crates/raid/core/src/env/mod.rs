//! Deterministic randomness sources consumed by the combat rules.
mod rng;

pub use rng::{PcgRng, RngOracle, compute_seed, roll};
