//! Deterministic random number generation.
//!
//! Players never keep a running random stream. Each decision builds a fresh
//! `GameRng` from the player's seed, so a given seed always answers a given
//! question the same way no matter what was drawn before.
//!
//! ```
//! use sticks::core::GameRng;
//!
//! let first = GameRng::new(-42).gen_range_usize(0..100);
//! let again = GameRng::new(-42).gen_range_usize(0..100);
//! assert_eq!(first, again);
//! ```

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// Seeded ChaCha8 generator.
#[derive(Clone, Debug)]
pub struct GameRng {
    inner: ChaCha8Rng,
}

impl GameRng {
    /// Create a new RNG with the given seed.
    ///
    /// Negative seeds are valid; the seed's bit pattern feeds ChaCha8.
    #[must_use]
    pub fn new(seed: i64) -> Self {
        Self {
            inner: ChaCha8Rng::seed_from_u64(u64::from_ne_bytes(seed.to_ne_bytes())),
        }
    }

    /// Uniform usize in `range` (end exclusive). Panics on an empty range.
    pub fn gen_range_usize(&mut self, range: std::ops::Range<usize>) -> usize {
        self.inner.gen_range(range)
    }

    /// Uniform u32 in `range` (end exclusive). Panics on an empty range.
    pub fn gen_range_u32(&mut self, range: std::ops::Range<u32>) -> u32 {
        self.inner.gen_range(range)
    }
}
