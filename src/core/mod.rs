//! Core module - pure game logic with no external I/O
//!
//! This module contains all the game rules, state management, and logic.
//! It has zero dependencies on UI, timers, or persistence media.

pub mod board;
pub mod game_state;
pub mod history;
pub mod pieces;
pub mod rng;
pub mod scoring;
pub mod snapshot;

// Re-export commonly used types
pub use board::Board;
pub use game_state::{ClearState, Game};
pub use history::HistoryRing;
pub use pieces::{catalog_mask, popcount, rotate_cw, Mask, Piece, SPAWN_POSITION};
pub use rng::SimpleRng;
pub use scoring::line_clear_score;
pub use snapshot::{GameSnapshot, PieceSnapshot};
