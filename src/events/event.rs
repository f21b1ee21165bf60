//! Game event types.
//!
//! Every observable step of a game is one `GameEvent`. A move produces, in
//! order: `RowSelected`, `RowContents`, `SticksRemoved`, `RowRemaining`, then
//! the post-move `TotalRemaining`. `Display` renders each as one status line.

use derive_more::Display;
use serde::{Deserialize, Serialize};

use crate::core::RowNumber;

/// Something that happened at the table.
#[derive(Clone, Debug, PartialEq, Eq, Display, Serialize, Deserialize)]
pub enum GameEvent {
    /// A new round begins.
    #[display("------ round {round} ------")]
    RoundStarted { round: u32 },

    /// A player picked a row.
    #[display("{player} selected row {row}")]
    RowSelected { player: String, row: RowNumber },

    /// Row contents before the removal.
    #[display("there are {sticks} sticks")]
    RowContents { row: RowNumber, sticks: u32 },

    /// Quantity about to be taken.
    #[display("and removed {quantity}")]
    SticksRemoved { quantity: u32 },

    /// Row contents after the removal.
    #[display("{remaining} sticks remain")]
    RowRemaining { row: RowNumber, remaining: u32 },

    /// Table total, reported every time termination is checked.
    #[display("{total} sticks remain in total")]
    TotalRemaining { total: u32 },

    /// The named player emptied the table and lost.
    #[display("{player} lost!!!")]
    PlayerLost { player: String },
}
