//! Game error types.
//!
//! Every error is fatal to the game it came from: nothing is retried and a
//! failing move aborts `Game::run`.

use derive_more::{Display, Error};

use super::row::RowNumber;

/// Why a game could not be set up.
#[derive(Debug, Clone, PartialEq, Eq, Display)]
pub enum SetupProblem {
    /// Anything other than two players.
    #[display("a game needs exactly 2 players, got {_0}")]
    PlayerCount(usize),
    /// Both players share a name.
    #[display("player name {_0:?} is used twice")]
    DuplicateName(String),
}

/// Errors raised by the game engine.
#[derive(Debug, Clone, PartialEq, Eq, Display, Error)]
pub enum GameError {
    /// The player list cannot form a game.
    #[display("invalid setup: {problem}")]
    InvalidSetup { problem: SetupProblem },

    /// A row number outside `1..=row_total`.
    #[display("row {row} does not exist, choose a row from 1 to {row_total}")]
    InvalidRow { row: usize, row_total: usize },

    /// A removal that is negative or larger than the row holds.
    #[display("cannot remove {quantity} sticks from row {row}, which holds {available}")]
    InvalidQuantity {
        row: RowNumber,
        quantity: i64,
        available: u32,
    },

    /// The acting player has no eligible rows left.
    #[display("{player} has no eligible rows left")]
    NoEligibleRows { player: String },
}

/// Result alias for engine operations.
pub type Result<T> = std::result::Result<T, GameError>;

impl GameError {
    /// Shorthand for an `InvalidSetup` error.
    #[must_use]
    pub fn setup(problem: SetupProblem) -> Self {
        Self::InvalidSetup { problem }
    }
}
