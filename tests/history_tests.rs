//! History tests - turn recording and snapshot-based undo at the game level

use blockfall::core::Game;

/// Tick the game until the current piece locks, returning the number of rows
/// cleared by that lock.
fn drive_to_lock(game: &mut Game) -> u32 {
    for _ in 0..1000 {
        game.tick(game.fall_interval_ms());
        if let Some(cleared) = game.take_lines_cleared() {
            return cleared;
        }
    }
    panic!("no lock within 1000 ticks");
}

#[test]
fn test_undo_before_any_lock_yields_baseline() {
    let mut game = Game::new(7);
    game.set_fall_interval(100);
    let baseline = game.snapshot();

    assert!(game.undo());
    assert_eq!(game.snapshot(), baseline);
}

#[test]
fn test_undo_restores_state_before_last_lock() {
    let mut game = Game::new(7);
    game.set_fall_interval(100);
    let baseline = game.snapshot();

    drive_to_lock(&mut game);
    assert_ne!(game.snapshot(), baseline);

    assert!(game.undo());
    assert_eq!(game.snapshot(), baseline);
}

#[test]
fn test_consecutive_undos_walk_back_through_turns() {
    let mut game = Game::new(99);
    game.set_fall_interval(100);

    drive_to_lock(&mut game);
    let after_first = game.snapshot();
    drive_to_lock(&mut game);
    let after_second = game.snapshot();
    drive_to_lock(&mut game);
    let after_third = game.snapshot();

    game.undo();
    assert_eq!(game.snapshot(), after_second);
    game.undo();
    assert_eq!(game.snapshot(), after_first);

    // The ring holds three slots, so a third rewind wraps back around to the
    // most recent turn instead of reaching further into the past.
    game.undo();
    assert_eq!(game.snapshot(), after_third);
}

#[test]
fn test_undo_count_is_cyclic_modulo_depth() {
    let mut game = Game::new(1234);
    game.set_fall_interval(100);
    for _ in 0..4 {
        drive_to_lock(&mut game);
    }

    let mut three = game.clone();
    let mut six = game;
    for _ in 0..3 {
        three.undo();
    }
    for _ in 0..6 {
        six.undo();
    }
    assert_eq!(three.snapshot(), six.snapshot());
}

#[test]
fn test_undo_after_lock_discards_locked_cells() {
    let mut game = Game::new(7);
    game.set_fall_interval(100);

    drive_to_lock(&mut game);
    let occupied = game.board().cells().iter().filter(|&&c| c != 0).count();
    assert_eq!(occupied, 4);

    game.undo();
    assert!(game.board().cells().iter().all(|&c| c == 0));
    assert_eq!(game.score(), 0);
}
