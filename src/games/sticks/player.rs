//! A seat at the table: identity, eligible rows, and the move it plays.

use tracing::{debug, instrument};

use crate::core::{AllowedRows, GameError, Move, PlayerSpec, Result, RowNumber};
use crate::events::{DisplaySink, GameEvent};
use crate::rules::SeededPolicy;

use super::game::Game;

/// A player. Holds no reference to the game; the game is passed in per move.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Player {
    name: String,
    policy: SeededPolicy,
    allowed_rows: AllowedRows,
}

impl Player {
    /// Create a player with every row eligible.
    pub fn new(name: impl Into<String>, seed: i64) -> Self {
        Self {
            name: name.into(),
            policy: SeededPolicy::new(seed),
            allowed_rows: AllowedRows::new(),
        }
    }

    /// Player name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Seed behind every decision.
    #[must_use]
    pub fn seed(&self) -> i64 {
        self.policy.seed()
    }

    /// Rows this player may still pick.
    #[must_use]
    pub fn allowed_rows(&self) -> &AllowedRows {
        &self.allowed_rows
    }

    /// Stop considering `row`. Does nothing if it is already excluded.
    pub fn remove_allowed_row(&mut self, row: RowNumber) {
        self.allowed_rows.remove(row);
    }

    /// Play one full turn against `game`.
    ///
    /// Picks an eligible row, reads its contents, picks a quantity, removes
    /// it, and tells the game when the row was emptied. Fails with
    /// `NoEligibleRows` before touching the table if nothing is eligible.
    #[instrument(skip(self, game), fields(player = %self.name))]
    pub fn take_turn<S: DisplaySink>(&self, game: &mut Game<S>) -> Result<Move> {
        let row = self
            .policy
            .choose_row(&self.allowed_rows)
            .ok_or_else(|| GameError::NoEligibleRows {
                player: self.name.clone(),
            })?;
        game.emit(GameEvent::RowSelected {
            player: self.name.clone(),
            row,
        });

        let sticks = game.row_count(row.get())?;
        game.emit(GameEvent::RowContents { row, sticks });

        let quantity = self.policy.choose_quantity(sticks);
        game.emit(GameEvent::SticksRemoved { quantity });

        let remaining = game.remove_sticks(row.get(), i64::from(quantity))?;
        let action = Move {
            row,
            quantity,
            remaining,
        };
        if action.emptied_row() {
            game.notify_row_emptied(row.get())?;
        }

        debug!(%row, quantity, remaining, "turn complete");
        Ok(action)
    }
}

impl From<PlayerSpec> for Player {
    fn from(spec: PlayerSpec) -> Self {
        Self::new(spec.name, spec.seed)
    }
}
