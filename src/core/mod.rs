//! Core engine types: seats, rows, moves, RNG, configuration, errors.

pub mod action;
pub mod config;
pub mod error;
pub mod player;
pub mod rng;
pub mod row;

pub use action::{Move, MoveRecord};
pub use config::{MatchConfig, PlayerSpec};
pub use error::{GameError, Result, SetupProblem};
pub use player::{PlayerId, Seats, SEAT_COUNT};
pub use rng::GameRng;
pub use row::{AllowedRows, RowNumber, Rows, INITIAL_ROWS, ROW_COUNT};
