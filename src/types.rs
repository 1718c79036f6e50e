//! Core types shared across the engine
//! This module contains pure data types and constants with no external dependencies

use serde::{Deserialize, Serialize};

/// Arena dimensions (cells)
pub const ARENA_WIDTH: u8 = 12;
pub const ARENA_HEIGHT: u8 = 20;

/// Undo history depth (number of snapshot slots in the ring)
pub const HISTORY_DEPTH: usize = 3;

/// Fall timing (milliseconds)
pub const DEFAULT_FALL_INTERVAL_MS: u32 = 300;
pub const MIN_FALL_INTERVAL_MS: u32 = 100;
pub const MAX_FALL_INTERVAL_MS: u32 = 500;

/// Hold time between line-clear detection and row removal (milliseconds).
/// Zero commits removal within the same tick; a presentation layer that wants
/// a per-row blink raises this and reads the pending rows in the meantime.
pub const DEFAULT_CLEAR_HOLD_MS: u32 = 0;

/// Score awarded per simultaneous line clear, indexed by line count (0-4)
pub const LINE_SCORES: [u32; 5] = [0, 100, 300, 500, 800];

/// Tetromino piece kinds.
///
/// The discriminant order fixes the shape-catalog index and the arena cell
/// encoding (`index + 1`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PieceKind {
    I,
    O,
    T,
    S,
    Z,
    J,
    L,
}

impl PieceKind {
    /// All kinds in catalog order
    pub const ALL: [PieceKind; 7] = [
        PieceKind::I,
        PieceKind::O,
        PieceKind::T,
        PieceKind::S,
        PieceKind::Z,
        PieceKind::J,
        PieceKind::L,
    ];

    /// Catalog index of this kind (0-6)
    pub fn index(&self) -> usize {
        *self as usize
    }

    /// Look up a kind by catalog index
    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    /// Display color for this kind as RGB.
    ///
    /// Metadata for renderers only; never consulted by game logic.
    pub fn color(&self) -> (u8, u8, u8) {
        match self {
            PieceKind::I => (0, 255, 255),
            PieceKind::O => (255, 255, 0),
            PieceKind::T => (128, 0, 128),
            PieceKind::S => (0, 255, 0),
            PieceKind::Z => (255, 0, 0),
            PieceKind::J => (0, 0, 255),
            PieceKind::L => (255, 165, 0),
        }
    }
}
