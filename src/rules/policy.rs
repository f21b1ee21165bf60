//! Seed-driven move policy.
//!
//! Each decision rebuilds its generator from the seed, so row choice and
//! quantity choice are two independent pure functions of the seed:
//!
//! - row: index drawn from `[0, len - 1)` over the eligible rows. The last
//!   eligible position is never drawn directly.
//! - quantity: drawn from `[1, sticks)`, so a row holding more than one stick
//!   is never emptied in a single move. A single-stick row forces 1.

use serde::{Deserialize, Serialize};

use crate::core::{AllowedRows, GameRng, RowNumber};

/// Picks rows and quantities from a fixed seed.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SeededPolicy {
    seed: i64,
}

impl SeededPolicy {
    /// Create a policy driven by `seed`.
    #[must_use]
    pub const fn new(seed: i64) -> Self {
        Self { seed }
    }

    /// The driving seed.
    #[must_use]
    pub const fn seed(&self) -> i64 {
        self.seed
    }

    fn rng(&self) -> GameRng {
        GameRng::new(self.seed)
    }

    /// Pick one of `allowed`. Returns `None` when nothing is eligible.
    #[must_use]
    pub fn choose_row(&self, allowed: &AllowedRows) -> Option<RowNumber> {
        let position = match allowed.len() {
            0 => return None,
            1 => 0,
            n => self.rng().gen_range_usize(0..n - 1),
        };
        allowed.get(position)
    }

    /// Pick how many of `sticks` to take.
    ///
    /// Rows of 0 or 1 sticks have no draw to make and return their own count.
    #[must_use]
    pub fn choose_quantity(&self, sticks: u32) -> u32 {
        if sticks <= 1 {
            return sticks;
        }
        self.rng().gen_range_u32(1..sticks)
    }
}
