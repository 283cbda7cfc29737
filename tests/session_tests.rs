//! Session tests - the tick/input protocol through the public API

use gridfall::core::{Session, StepDown};
use gridfall::types::{GameAction, BOARD_HEIGHT, BOARD_WIDTH};

#[test]
fn test_fresh_session_defaults() {
    let session = Session::new(42);

    assert!(!session.game_over());
    assert_eq!(session.score(), 0);
    assert_eq!(session.level(), 1);
    assert_eq!(session.lines(), 0);
    assert_eq!(session.drop_interval_ms(), 1000);
    assert!(session.board().cells().iter().all(|c| c.is_none()));
}

#[test]
fn test_deterministic_piece_sequence_from_seed() {
    let a = Session::new(9001);
    let b = Session::new(9001);

    assert_eq!(a.current().kind, b.current().kind);
    assert_eq!(a.next().kind, b.next().kind);
}

#[test]
fn test_tick_descends_one_row() {
    let mut session = Session::new(42);
    let y0 = session.current().y;

    assert!(session.tick());
    assert_eq!(session.current().y, y0 + 1);
}

#[test]
fn test_walls_bound_horizontal_movement() {
    let mut session = Session::new(42);

    let mut lefts = 0;
    while session.move_left() {
        lefts += 1;
        assert!(lefts <= BOARD_WIDTH, "walked through the left wall");
    }
    let mut rights = 0;
    while session.move_right() {
        rights += 1;
        assert!(rights <= BOARD_WIDTH * 2, "walked through the right wall");
    }

    // Nothing locked along the way.
    assert_eq!(session.score(), 0);
    assert!(session.board().cells().iter().all(|c| c.is_none()));
}

#[test]
fn test_first_hard_drop_reaches_the_floor() {
    let mut session = Session::new(42);

    assert!(session.hard_drop());

    // Exactly one piece locked, resting on the floor.
    let filled = session.board().cells().iter().filter(|c| c.is_some()).count();
    assert_eq!(filled, 4);
    let floor_start = (BOARD_HEIGHT as usize - 1) * BOARD_WIDTH as usize;
    let floor_filled = session.board().cells()[floor_start..]
        .iter()
        .filter(|c| c.is_some())
        .count();
    assert!(floor_filled > 0, "locked piece does not touch the floor");

    // No clear is possible on an empty board: flat lock reward only.
    assert_eq!(session.score(), 10);
    assert_eq!(session.lines(), 0);
}

#[test]
fn test_hard_drop_terminates_within_board_height_steps() {
    let mut session = Session::new(7);
    let mut moves = 0;
    loop {
        match session.step_down() {
            Some(StepDown::Moved) => {
                moves += 1;
                assert!(moves <= BOARD_HEIGHT, "descent exceeded board height");
            }
            Some(StepDown::Locked { .. }) => break,
            None => panic!("game over on an empty board"),
        }
    }
}

#[test]
fn test_stacking_forever_ends_the_game() {
    let mut session = Session::new(42);

    // Drop pieces without steering; the center columns must fill up and
    // block the spawn rows well before the board could hold this many.
    for _ in 0..((BOARD_WIDTH as u32 * BOARD_HEIGHT as u32) / 2) {
        if !session.hard_drop() {
            break;
        }
    }
    assert!(session.game_over());
}

#[test]
fn test_no_state_changes_after_game_over_except_restart() {
    let mut session = Session::new(42);
    while session.hard_drop() {}
    assert!(session.game_over());

    let score = session.score();
    let lines = session.lines();
    let board = session.board().clone();

    for action in [
        GameAction::MoveLeft,
        GameAction::MoveRight,
        GameAction::MoveDown,
        GameAction::Rotate,
        GameAction::HardDrop,
    ] {
        assert!(!session.apply_action(action), "{action:?} mutated a dead game");
    }
    assert_eq!(session.score(), score);
    assert_eq!(session.lines(), lines);
    assert_eq!(*session.board(), board);

    assert!(session.apply_action(GameAction::Restart));
    assert!(!session.game_over());
    assert_eq!(session.score(), 0);
    assert!(session.board().cells().iter().all(|c| c.is_none()));
}

#[test]
fn test_restart_is_allowed_mid_game() {
    let mut session = Session::new(42);
    session.hard_drop();
    assert!(session.score() > 0);

    session.restart();
    assert_eq!(session.score(), 0);
    assert_eq!(session.lines(), 0);
    assert!(session.board().cells().iter().all(|c| c.is_none()));
}

#[test]
fn test_rotate_on_open_board_commits() {
    let mut session = Session::new(42);
    // Give the frame room regardless of which kind spawned.
    session.tick();
    session.tick();

    let before = session.current();
    assert!(session.rotate());
    let after = session.current();
    assert_eq!(after.rotation, before.rotation.rotate_cw());
    assert_eq!((after.x, after.y), (before.x, before.y));
}
