//! Decision rules and game results.
//!
//! - `SeededPolicy`: how a player turns its seed into a row and a quantity
//! - `GameOutcome`: who lost, when, and the full move history

pub mod outcome;
pub mod policy;

pub use outcome::GameOutcome;
pub use policy::SeededPolicy;
