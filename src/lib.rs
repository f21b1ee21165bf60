//! # sticks
//!
//! A deterministic engine for a two-player stick-removal game.
//!
//! ## Rules
//!
//! Three rows hold 3, 5 and 7 sticks. Players alternate, seat 0 first. On a
//! turn a player picks one of the rows it still considers eligible and takes
//! some sticks from it. Whoever leaves the table empty loses.
//!
//! ## Design Principles
//!
//! 1. **Deterministic**: every decision is a pure function of the player's
//!    seed. Row choice and quantity choice each start from a freshly seeded
//!    generator rather than sharing one stream.
//!
//! 2. **Checked access**: row storage is private to the `Game`. Raw row numbers
//!    and quantities are validated at the boundary and rejected with a
//!    `GameError`, never clamped.
//!
//! 3. **Injected display**: the engine reports what happens as `GameEvent`s to
//!    a `DisplaySink` instead of printing.
//!
//! ## Modules
//!
//! - `core`: Seats, rows, moves, RNG, configuration, errors
//! - `events`: Game events and display sinks
//! - `rules`: Seeded move policy and game outcome
//! - `games`: The stick game itself (`Game`, `Player`)
//!
//! ## Example
//!
//! ```
//! use sticks::{Game, MatchConfig, RecordingSink};
//!
//! let mut game = Game::from_config(MatchConfig::default(), RecordingSink::new()).unwrap();
//! let outcome = game.run().unwrap();
//!
//! assert_eq!(game.total_sticks(), 0);
//! assert_eq!(outcome.moves.last().map(|m| m.player), Some(outcome.loser));
//! ```

pub mod core;
pub mod events;
pub mod games;
pub mod rules;

// Re-export commonly used types
pub use crate::core::{
    AllowedRows, GameError, GameRng, MatchConfig, Move, MoveRecord, PlayerId, PlayerSpec, Result,
    RowNumber, Rows, Seats, SetupProblem, INITIAL_ROWS, ROW_COUNT,
};

pub use crate::events::{ConsoleSink, DisplaySink, GameEvent, RecordingSink, TracingSink};

pub use crate::rules::{GameOutcome, SeededPolicy};

pub use crate::games::sticks::{Game, Player};
