//! Move representation and history records.

use serde::{Deserialize, Serialize};

use super::player::PlayerId;
use super::row::RowNumber;

/// One applied removal, as seen by the player who made it.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Move {
    /// The row sticks were taken from.
    pub row: RowNumber,

    /// How many sticks were taken.
    pub quantity: u32,

    /// Sticks left in the row afterwards.
    pub remaining: u32,
}

impl Move {
    /// True when this move took the last stick of its row.
    #[must_use]
    pub fn emptied_row(&self) -> bool {
        self.remaining == 0
    }
}

/// A move with the seat and round it happened in.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveRecord {
    /// The seat that moved.
    pub player: PlayerId,

    /// 1-based round number.
    pub round: u32,

    /// What was done.
    pub action: Move,
}

impl MoveRecord {
    /// Create a new move record.
    #[must_use]
    pub fn new(player: PlayerId, round: u32, action: Move) -> Self {
        Self {
            player,
            round,
            action,
        }
    }
}
