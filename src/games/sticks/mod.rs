//! Three-row stick removal.
//!
//! - Two players, seat 0 always opens the round
//! - Rows start at 3, 5 and 7 sticks
//! - On your turn: pick one of your eligible rows and take some of its sticks
//! - Whoever takes the last stick on the table loses
//!
//! A row drops out of both players' eligible sets as soon as it is emptied.

mod game;
mod player;

pub use game::Game;
pub use player::Player;
