//! Snapshot module - flat, serializable copies of resumable game state
//!
//! A snapshot is everything needed to resume play: arena grid, both live
//! pieces, and the score. Snapshots are plain values with no padding
//! ambiguity - the collaborator chooses the storage medium.

use serde::{Deserialize, Serialize};

use crate::core::pieces::{Mask, Piece};
use crate::types::{PieceKind, ARENA_HEIGHT, ARENA_WIDTH};

/// Serializable copy of one piece
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PieceSnapshot {
    pub kind: PieceKind,
    pub x: i8,
    pub y: i8,
    pub mask: Mask,
}

impl From<Piece> for PieceSnapshot {
    fn from(value: Piece) -> Self {
        Self {
            kind: value.kind,
            x: value.x,
            y: value.y,
            mask: value.mask,
        }
    }
}

impl From<PieceSnapshot> for Piece {
    fn from(value: PieceSnapshot) -> Self {
        Self {
            kind: value.kind,
            x: value.x,
            y: value.y,
            mask: value.mask,
        }
    }
}

/// Complete resumable game state.
///
/// Copied in and copied out of the history ring and the persistence surface;
/// never aliased with live state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameSnapshot {
    /// Arena cell codes, row-major, row 0 on top: 0 = empty, `k + 1` = kind `k`
    pub arena: [[u8; ARENA_WIDTH as usize]; ARENA_HEIGHT as usize],
    pub current: PieceSnapshot,
    pub next: PieceSnapshot,
    pub score: u32,
}
