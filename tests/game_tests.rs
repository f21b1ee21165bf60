//! End-to-end tests for the stick game.
//!
//! These drive `Game` through its public operations and through `run`,
//! checking table state, player eligibility, and the emitted status events.

use sticks::{
    Game, GameError, GameEvent, GameOutcome, MatchConfig, Player, PlayerId, PlayerSpec,
    RecordingSink, RowNumber, SetupProblem, INITIAL_ROWS,
};

fn row(n: usize) -> RowNumber {
    RowNumber::new(n).unwrap()
}

fn reference_game() -> Game<RecordingSink> {
    Game::from_config(MatchConfig::default(), RecordingSink::new()).unwrap()
}

fn played(config: MatchConfig) -> (GameOutcome, Vec<GameEvent>) {
    let mut game = Game::from_config(config, RecordingSink::new()).unwrap();
    let outcome = game.run().unwrap();
    (outcome, game.into_sink().into_events())
}

/// Manual removals on the reference table, ending with an emptied row.
#[test]
fn test_reference_scenario() {
    let mut game = reference_game();

    assert_eq!(game.row_count(1), Ok(3));
    assert_eq!(game.remove_sticks(1, 2), Ok(1));
    assert_eq!(game.rows(), [1, 5, 7]);

    assert_eq!(game.remove_sticks(1, 1), Ok(0));
    game.notify_row_emptied(1).unwrap();

    for (_, player) in game.players().iter() {
        assert!(!player.allowed_rows().contains(row(1)));
        assert_eq!(player.allowed_rows().len(), 2);
    }
    assert_eq!(game.rows(), [0, 5, 7]);
}

#[test]
fn test_over_removal_is_invalid_quantity() {
    let mut game = reference_game();

    assert_eq!(
        game.remove_sticks(2, 10),
        Err(GameError::InvalidQuantity {
            row: row(2),
            quantity: 10,
            available: 5,
        })
    );
    assert_eq!(game.rows(), INITIAL_ROWS);
}

#[test]
fn test_negative_removal_is_invalid_quantity() {
    let mut game = reference_game();
    assert!(matches!(
        game.remove_sticks(3, -2),
        Err(GameError::InvalidQuantity { quantity: -2, .. })
    ));
}

#[test]
fn test_duplicate_names_rejected() {
    let config = MatchConfig::new(vec![PlayerSpec::new("p", 1), PlayerSpec::new("p", 1)]);
    let result = Game::from_config(config, RecordingSink::new());
    assert!(matches!(
        result,
        Err(GameError::InvalidSetup {
            problem: SetupProblem::DuplicateName(_)
        })
    ));
}

#[test]
fn test_single_player_rejected() {
    let config = MatchConfig::new(vec![PlayerSpec::new("solo", 1)]);
    let result = Game::from_config(config, RecordingSink::new());
    assert!(matches!(
        result,
        Err(GameError::InvalidSetup {
            problem: SetupProblem::PlayerCount(1)
        })
    ));
}

/// The reference game runs to an empty table and the last mover loses.
#[test]
fn test_run_reference_game() {
    let mut game = reference_game();
    let outcome = game.run().unwrap();

    assert_eq!(game.rows(), [0, 0, 0]);
    let last = outcome.moves.last().unwrap();
    assert_eq!(last.player, outcome.loser);
    assert_eq!(last.round, outcome.rounds);
    assert_eq!(outcome.loser_name, game.player(outcome.loser).name());

    let taken: u32 = outcome.moves.iter().map(|m| m.action.quantity).sum();
    assert_eq!(taken, 15);
    assert_eq!(game.history(), outcome.moves.as_slice());
}

/// Seats alternate strictly and the game stops right after the losing move,
/// even when seat 0 loses and seat 1 has not moved that round.
#[test]
fn test_turn_order_and_immediate_stop() {
    let (outcome, _) = played(MatchConfig::default());

    for (i, record) in outcome.moves.iter().enumerate() {
        let expected_seat = if i % 2 == 0 { PlayerId::FIRST } else { PlayerId::SECOND };
        assert_eq!(record.player, expected_seat);
        assert_eq!(record.round as usize, i / 2 + 1);
    }

    let expected_loser = if outcome.moves.len() % 2 == 1 {
        PlayerId::FIRST
    } else {
        PlayerId::SECOND
    };
    assert_eq!(outcome.loser, expected_loser);
}

/// Same seeds, same game: move for move and line for line.
#[test]
fn test_run_is_deterministic() {
    let config = MatchConfig::new(vec![PlayerSpec::new("ann", 11), PlayerSpec::new("bo", 4242)]);

    let (first, first_events) = played(config.clone());
    let (second, second_events) = played(config);

    assert_eq!(first, second);
    assert_eq!(first_events, second_events);
}

/// The event stream is one `RoundStarted` per round, five events per move in
/// a fixed order with consistent values, and a final `PlayerLost`.
#[test]
fn test_event_stream_matches_history() {
    let (outcome, events) = played(MatchConfig::default());

    let rounds = events
        .iter()
        .filter(|e| matches!(e, GameEvent::RoundStarted { .. }))
        .count();
    assert_eq!(rounds as u32, outcome.rounds);

    let per_move: Vec<&GameEvent> = events
        .iter()
        .filter(|e| !matches!(e, GameEvent::RoundStarted { .. }))
        .collect();
    assert_eq!(per_move.len(), outcome.moves.len() * 5 + 1);

    let mut table = INITIAL_ROWS;
    for (chunk, record) in per_move.chunks(5).zip(&outcome.moves) {
        let mv = record.action;
        let before = table[mv.row.index()];
        table[mv.row.index()] -= mv.quantity;
        let total: u32 = table.iter().sum();

        let name = if record.player == PlayerId::FIRST { "player 1" } else { "player 2" };
        assert_eq!(
            chunk,
            &[
                &GameEvent::RowSelected { player: name.into(), row: mv.row },
                &GameEvent::RowContents { row: mv.row, sticks: before },
                &GameEvent::SticksRemoved { quantity: mv.quantity },
                &GameEvent::RowRemaining { row: mv.row, remaining: mv.remaining },
                &GameEvent::TotalRemaining { total },
            ]
        );
    }

    assert_eq!(
        per_move.last(),
        Some(&&GameEvent::PlayerLost { player: outcome.loser_name.clone() })
    );
    assert_eq!(per_move[per_move.len() - 2], &GameEvent::TotalRemaining { total: 0 });
}

/// Emptied rows are never picked again, and rows are only emptied from a
/// single stick.
#[test]
fn test_moves_respect_eligibility() {
    let (outcome, _) = played(MatchConfig::default());

    let mut table = INITIAL_ROWS;
    for record in &outcome.moves {
        let mv = record.action;
        let before = table[mv.row.index()];
        assert!(before > 0, "row {} picked after it was emptied", mv.row);
        assert!(mv.quantity >= 1);
        if mv.remaining == 0 {
            assert_eq!(before, 1);
        }
        table[mv.row.index()] = mv.remaining;
    }
}

#[test]
fn test_finished_game_players_have_no_rows() {
    let mut game = reference_game();
    game.run().unwrap();

    for (_, player) in game.players().iter() {
        assert!(player.allowed_rows().is_empty());
    }
}

#[test]
fn test_player_without_rows_aborts_the_game() {
    let mut stuck = Player::new("a", 87373);
    for number in 1..=3 {
        stuck.remove_allowed_row(row(number));
    }
    let mut game = Game::new(vec![stuck, Player::new("b", 1297684)], RecordingSink::new()).unwrap();

    let err = game.run().unwrap_err();
    assert_eq!(err, GameError::NoEligibleRows { player: "a".into() });
    assert!(game.current_player().is_none());
    assert!(game.history().is_empty());
    assert_eq!(game.rows(), INITIAL_ROWS);

    let emitted = game.sink().events().len();
    assert_eq!(game.run(), Err(err));
    assert_eq!(game.sink().events().len(), emitted);
    assert!(!game
        .sink()
        .events()
        .iter()
        .skip(1)
        .any(|event| matches!(event, GameEvent::RoundStarted { .. })));
}
