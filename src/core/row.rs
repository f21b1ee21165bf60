//! Row numbering, the row inventory, and per-player row eligibility.
//!
//! Rows are addressed by 1-based `RowNumber`s. Raw numbers coming from callers
//! are validated once, through `RowNumber::new`, and everything past that
//! point works with the checked type.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use super::error::{GameError, Result};

/// Number of rows on the table.
pub const ROW_COUNT: usize = 3;

/// Starting stick count of each row, row 1 first.
pub const INITIAL_ROWS: [u32; ROW_COUNT] = [3, 5, 7];

/// A validated 1-based row number.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "usize", into = "usize")]
pub struct RowNumber(u8);

impl RowNumber {
    /// Validate a raw 1-based row number.
    pub fn new(raw: usize) -> Result<Self> {
        if (1..=ROW_COUNT).contains(&raw) {
            Ok(Self(raw as u8))
        } else {
            Err(GameError::InvalidRow {
                row: raw,
                row_total: ROW_COUNT,
            })
        }
    }

    /// The 1-based number.
    #[must_use]
    pub const fn get(self) -> usize {
        self.0 as usize
    }

    /// The 0-based storage index.
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize - 1
    }

    /// All rows in ascending order.
    pub fn all() -> impl Iterator<Item = RowNumber> {
        (1..=ROW_COUNT as u8).map(RowNumber)
    }
}

impl TryFrom<usize> for RowNumber {
    type Error = GameError;

    fn try_from(raw: usize) -> Result<Self> {
        Self::new(raw)
    }
}

impl From<RowNumber> for usize {
    fn from(row: RowNumber) -> usize {
        row.get()
    }
}

impl std::fmt::Display for RowNumber {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// The stick inventory: one counter per row.
///
/// Counts never increase. The only mutation is `remove`, which checks the
/// quantity against the row's current count first.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Rows {
    counts: [u32; ROW_COUNT],
}

impl Default for Rows {
    fn default() -> Self {
        Self {
            counts: INITIAL_ROWS,
        }
    }
}

impl Rows {
    /// Rows at their starting counts.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Current count of one row.
    #[must_use]
    pub fn count(&self, row: RowNumber) -> u32 {
        self.counts[row.index()]
    }

    /// Sum of all rows.
    #[must_use]
    pub fn total(&self) -> u32 {
        self.counts.iter().sum()
    }

    /// Snapshot of every row, row 1 first.
    #[must_use]
    pub fn counts(&self) -> [u32; ROW_COUNT] {
        self.counts
    }

    /// Take `quantity` sticks from `row`, returning what is left in it.
    ///
    /// Fails with `InvalidQuantity` when `quantity` is negative or larger than
    /// the row's current count; the row is left untouched in that case.
    pub fn remove(&mut self, row: RowNumber, quantity: i64) -> Result<u32> {
        let available = self.counts[row.index()];
        let taken = u32::try_from(quantity)
            .ok()
            .filter(|&q| q <= available)
            .ok_or(GameError::InvalidQuantity {
                row,
                quantity,
                available,
            })?;

        let slot = &mut self.counts[row.index()];
        *slot -= taken;
        Ok(*slot)
    }
}

/// The rows one player still considers selectable, in ascending order.
///
/// Starts as `{1, 2, 3}` and only ever shrinks.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AllowedRows {
    rows: SmallVec<[RowNumber; ROW_COUNT]>,
}

impl Default for AllowedRows {
    fn default() -> Self {
        Self {
            rows: RowNumber::all().collect(),
        }
    }
}

impl AllowedRows {
    /// Every row eligible.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of eligible rows.
    #[must_use]
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// True when no row is eligible.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// The eligible row at `position` in iteration order.
    #[must_use]
    pub fn get(&self, position: usize) -> Option<RowNumber> {
        self.rows.get(position).copied()
    }

    /// Check whether `row` is still eligible.
    #[must_use]
    pub fn contains(&self, row: RowNumber) -> bool {
        self.rows.contains(&row)
    }

    /// Drop `row`. Does nothing if it was already gone.
    pub fn remove(&mut self, row: RowNumber) {
        self.rows.retain(|r| *r != row);
    }

    /// Iterate over eligible rows in ascending order.
    pub fn iter(&self) -> impl Iterator<Item = RowNumber> + '_ {
        self.rows.iter().copied()
    }
}
