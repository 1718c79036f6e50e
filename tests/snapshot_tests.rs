//! Snapshot tests - session export, restore, and the serde wire format

use blockfall::core::{Game, GameSnapshot};
use blockfall::types::PieceKind;

fn advanced_game() -> Game {
    let mut game = Game::new(42);
    game.set_fall_interval(100);
    game.try_move(-2);
    for _ in 0..40 {
        game.tick(100);
    }
    game
}

#[test]
fn test_snapshot_round_trips_through_json() {
    let game = advanced_game();
    let snapshot = game.snapshot();

    let json = serde_json::to_string(&snapshot).unwrap();
    let decoded: GameSnapshot = serde_json::from_str(&json).unwrap();
    assert_eq!(decoded, snapshot);
}

#[test]
fn test_restore_resumes_exported_state() {
    let game = advanced_game();
    let snapshot = game.snapshot();

    let mut resumed = Game::new(0);
    resumed.restore(&snapshot);

    assert_eq!(resumed.snapshot(), snapshot);
    assert_eq!(resumed.score(), game.score());
    assert_eq!(resumed.current(), game.current());
    assert_eq!(resumed.next_kind(), game.next_kind());
    assert!(!resumed.game_over());
}

#[test]
fn test_restored_game_keeps_playing() {
    let game = advanced_game();
    let snapshot = game.snapshot();

    let mut resumed = Game::new(0);
    resumed.restore(&snapshot);
    resumed.tick(resumed.fall_interval_ms());

    // One fall interval moves the restored piece, or locks it if it was
    // already resting on something.
    assert_ne!(resumed.snapshot(), snapshot);
}

#[test]
fn test_restore_reseeds_undo_baseline() {
    let game = advanced_game();
    let snapshot = game.snapshot();

    let mut resumed = Game::new(0);
    resumed.restore(&snapshot);
    assert!(resumed.undo());
    assert_eq!(resumed.snapshot(), snapshot);
}

#[test]
#[should_panic(expected = "out of range")]
fn test_restore_rejects_invalid_cell_codes() {
    let mut snapshot = Game::new(1).snapshot();
    snapshot.arena[19][0] = (PieceKind::ALL.len() + 2) as u8;

    let mut game = Game::new(1);
    game.restore(&snapshot);
}
