//! Deterministic mission-build RNG.
//!
//! Wraps `ChaCha8Rng` for cross-platform deterministic randomness. Every
//! random draw made while building a mission goes through the build's
//! `GenRng` so that identical seeds and identical call order produce
//! identical missions. Each build owns its own instance; nothing is shared
//! across builds.

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

/// Seed used when the caller does not provide one.
const DEFAULT_SEED: u64 = 42;

pub struct GenRng(pub ChaCha8Rng);

impl Default for GenRng {
    fn default() -> Self {
        Self(ChaCha8Rng::seed_from_u64(DEFAULT_SEED))
    }
}

impl GenRng {
    /// Create a new `GenRng` seeded from the given `u64` value.
    pub fn from_seed_u64(seed: u64) -> Self {
        Self(ChaCha8Rng::seed_from_u64(seed))
    }
}
