//! Game configuration types.
//!
//! A game is configured by the identities of its two players and nothing
//! else: the row layout is fixed. `MatchConfig` is a plain serde type so a
//! driver can load it from a JSON file; it does not validate itself, that
//! happens once, when the `Game` is built.

use serde::{Deserialize, Serialize};

/// Identity of one player: a display name and the seed behind its moves.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerSpec {
    /// Name shown in status lines. Must differ from the other player's.
    pub name: String,

    /// Seed for every random decision this player makes.
    pub seed: i64,
}

impl PlayerSpec {
    /// Create a new player identity.
    pub fn new(name: impl Into<String>, seed: i64) -> Self {
        Self {
            name: name.into(),
            seed,
        }
    }
}

/// Identities of the players taking part, in seat order.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchConfig {
    /// Seat 0 first.
    pub players: Vec<PlayerSpec>,
}

impl Default for MatchConfig {
    fn default() -> Self {
        Self {
            players: vec![
                PlayerSpec::new("player 1", 87373),
                PlayerSpec::new("player 2", 1297684),
            ],
        }
    }
}

impl MatchConfig {
    /// Create a config from player identities.
    #[must_use]
    pub fn new(players: Vec<PlayerSpec>) -> Self {
        Self { players }
    }
}
