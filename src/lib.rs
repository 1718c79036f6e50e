//! Blockfall - a deterministic falling-block puzzle engine.
//!
//! The engine owns the arena grid, piece placement, collision detection,
//! locking, line clearing with scoring, and a fixed-depth undo history.
//! Rendering, input devices, audio, and persistence are collaborators: they
//! read the queryable state, issue command operations, and serialize
//! [`core::GameSnapshot`]s however they like.
//!
//! ```
//! use blockfall::core::Game;
//!
//! let mut game = Game::new(42);
//!
//! // Player intent: validated against the arena, committed only if legal.
//! game.try_move(-1);
//! game.try_rotate();
//!
//! // The caller drives time; a blocked fall locks the piece, scores any
//! // full rows, and spawns the next piece.
//! let interval = game.fall_interval_ms();
//! game.tick(interval);
//!
//! // Session state for rendering or saving.
//! let _score = game.score();
//! let _save = game.snapshot();
//! ```

pub mod core;
pub mod types;

pub use crate::core::{Board, ClearState, Game, GameSnapshot, HistoryRing, Piece, PieceSnapshot};
pub use crate::types::PieceKind;
