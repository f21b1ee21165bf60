//! The table: row inventory, turn loop, and termination.

use tracing::{debug, info, instrument, warn};

use crate::core::{
    GameError, MatchConfig, MoveRecord, PlayerId, Result, RowNumber, Rows, Seats, SetupProblem,
    ROW_COUNT,
};
use crate::events::{DisplaySink, GameEvent};
use crate::rules::GameOutcome;

use super::player::Player;

/// A two-player game over rows of 3, 5 and 7 sticks.
///
/// Rows are only reachable through the bounds-checked operations below, and
/// `remove_sticks` is the only way to change them. Every status line goes to
/// the sink `S`.
pub struct Game<S: DisplaySink> {
    players: Seats<Player>,
    rows: Rows,
    current: Option<PlayerId>,
    round: u32,
    history: Vec<MoveRecord>,
    outcome: Option<GameOutcome>,
    aborted: Option<GameError>,
    sink: S,
}

impl<S: DisplaySink> Game<S> {
    /// Seat two players at a fresh table.
    ///
    /// Fails with `InvalidSetup` unless there are exactly two players with
    /// different names.
    pub fn new(players: Vec<Player>, sink: S) -> Result<Self> {
        let players = Seats::try_from(players)
            .map_err(|rejected| GameError::setup(SetupProblem::PlayerCount(rejected.len())))?;

        let (first, second) = (&players[PlayerId::FIRST], &players[PlayerId::SECOND]);
        if first.name() == second.name() {
            return Err(GameError::setup(SetupProblem::DuplicateName(
                first.name().to_owned(),
            )));
        }

        Ok(Self {
            players,
            rows: Rows::new(),
            current: None,
            round: 0,
            history: Vec::new(),
            outcome: None,
            aborted: None,
            sink,
        })
    }

    /// Build a game from configured player identities.
    pub fn from_config(config: MatchConfig, sink: S) -> Result<Self> {
        Self::new(config.players.into_iter().map(Player::from).collect(), sink)
    }

    /// Sticks currently in a 1-based row.
    pub fn row_count(&self, row_number: usize) -> Result<u32> {
        let row = RowNumber::new(row_number)?;
        Ok(self.rows.count(row))
    }

    /// Take `quantity` sticks from a 1-based row and return what is left in it.
    ///
    /// Fails with `InvalidRow` or `InvalidQuantity` without changing anything.
    #[instrument(skip(self))]
    pub fn remove_sticks(&mut self, row_number: usize, quantity: i64) -> Result<u32> {
        let row = RowNumber::new(row_number)?;
        let remaining = self.rows.remove(row, quantity)?;
        debug!(total = self.rows.total(), "sticks removed");

        self.emit(GameEvent::RowRemaining { row, remaining });
        Ok(remaining)
    }

    /// Tell both players that a row is now empty.
    pub fn notify_row_emptied(&mut self, row_number: usize) -> Result<()> {
        let row = RowNumber::new(row_number)?;
        debug!(%row, "row emptied");
        for player in self.players.values_mut() {
            player.remove_allowed_row(row);
        }
        Ok(())
    }

    /// Whether the table is empty. Reports the table total every time.
    pub fn is_finished(&mut self) -> bool {
        let total = self.rows.total();
        self.emit(GameEvent::TotalRemaining { total });
        total == 0
    }

    /// Play rounds until a move empties the table.
    ///
    /// Seat 0 moves first in every round. After each move the table is
    /// checked, and the game ends on the spot when it is empty; the player who
    /// just moved loses. Any error from a move aborts the game: no player is
    /// left acting and the table stays as the failed move left it.
    ///
    /// Calling `run` again on a finished game returns the same outcome, and on
    /// an aborted game the same error. Neither emits anything.
    #[instrument(skip(self))]
    pub fn run(&mut self) -> Result<GameOutcome> {
        if let Some(outcome) = &self.outcome {
            return Ok(outcome.clone());
        }
        if let Some(err) = &self.aborted {
            return Err(err.clone());
        }

        info!(
            first = self.players[PlayerId::FIRST].name(),
            second = self.players[PlayerId::SECOND].name(),
            "game started"
        );

        self.play_rounds().map_err(|err| {
            warn!(%err, round = self.round, "game aborted");
            self.current = None;
            self.aborted = Some(err.clone());
            err
        })
    }

    fn play_rounds(&mut self) -> Result<GameOutcome> {
        loop {
            self.round += 1;
            self.emit(GameEvent::RoundStarted { round: self.round });

            for seat in PlayerId::in_turn_order() {
                self.current = Some(seat);
                // The acting player's own row set is only read before its
                // move mutates the table, so a snapshot is enough.
                let player = self.players[seat].clone();
                let action = player.take_turn(self)?;
                self.history.push(MoveRecord::new(seat, self.round, action));

                if self.is_finished() {
                    return Ok(self.finish(seat));
                }
            }
        }
    }

    fn finish(&mut self, loser: PlayerId) -> GameOutcome {
        let loser_name = self.players[loser].name().to_owned();
        self.emit(GameEvent::PlayerLost {
            player: loser_name.clone(),
        });
        info!(loser = %loser_name, rounds = self.round, "game over");

        self.current = None;
        let outcome = GameOutcome {
            loser,
            loser_name,
            rounds: self.round,
            moves: self.history.clone(),
        };
        self.outcome = Some(outcome.clone());
        outcome
    }

    /// Hand an event to the sink.
    pub(super) fn emit(&mut self, event: GameEvent) {
        self.sink.emit(&event);
    }

    /// The acting player, only set while a turn is in progress.
    #[must_use]
    pub fn current_player(&self) -> Option<&Player> {
        self.current.map(|seat| &self.players[seat])
    }

    /// A seated player.
    #[must_use]
    pub fn player(&self, seat: PlayerId) -> &Player {
        &self.players[seat]
    }

    /// Both players in seat order.
    #[must_use]
    pub fn players(&self) -> &Seats<Player> {
        &self.players
    }

    /// Snapshot of every row, row 1 first.
    #[must_use]
    pub fn rows(&self) -> [u32; ROW_COUNT] {
        self.rows.counts()
    }

    /// Sticks left on the whole table.
    #[must_use]
    pub fn total_sticks(&self) -> u32 {
        self.rows.total()
    }

    /// Moves applied through `run` so far.
    #[must_use]
    pub fn history(&self) -> &[MoveRecord] {
        &self.history
    }

    /// The error that aborted the game, if a move failed.
    #[must_use]
    pub fn aborted(&self) -> Option<&GameError> {
        self.aborted.as_ref()
    }

    /// The outcome, once the game has finished.
    #[must_use]
    pub fn outcome(&self) -> Option<&GameOutcome> {
        self.outcome.as_ref()
    }

    /// The display sink.
    #[must_use]
    pub fn sink(&self) -> &S {
        &self.sink
    }

    /// Consume the game, returning its sink.
    pub fn into_sink(self) -> S {
        self.sink
    }
}
