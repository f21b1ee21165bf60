//! Result of a completed game.

use serde::{Deserialize, Serialize};

use crate::core::{MoveRecord, PlayerId};

/// How a finished game ended.
///
/// There is no winner field: the game only ever names a loser, the player
/// whose move left the table empty.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameOutcome {
    /// Seat of the losing player.
    pub loser: PlayerId,

    /// Name of the losing player.
    pub loser_name: String,

    /// Round in which the game ended (1-based).
    pub rounds: u32,

    /// Every move, in the order it was played.
    pub moves: Vec<MoveRecord>,
}
