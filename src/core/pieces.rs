//! Pieces module - shape catalog, piece state, and collision checks
//!
//! Every piece is a 4x4 occupancy mask anchored by the grid coordinates of the
//! mask's top-left cell. Rotation replaces the mask with its clockwise
//! transform (copy-on-rotate), so a rejected rotation never touches live state.

use crate::core::Board;
use crate::types::{PieceKind, ARENA_HEIGHT, ARENA_WIDTH};

/// 4x4 occupancy mask, row-major, row 0 on top
pub type Mask = [[bool; 4]; 4];

/// Spawn anchor: horizontally centered, two rows above the visible grid
pub const SPAWN_POSITION: (i8, i8) = (ARENA_WIDTH as i8 / 2 - 2, -2);

const fn mask(rows: [u8; 4]) -> Mask {
    let mut m = [[false; 4]; 4];
    let mut i = 0;
    while i < 4 {
        let mut j = 0;
        while j < 4 {
            m[i][j] = (rows[i] >> (3 - j)) & 1 == 1;
            j += 1;
        }
        i += 1;
    }
    m
}

/// Shape catalog, indexed by `PieceKind::index()`. Defined once, never mutated.
const SHAPES: [Mask; 7] = [
    mask([0b0000, 0b1111, 0b0000, 0b0000]), // I
    mask([0b0000, 0b0110, 0b0110, 0b0000]), // O
    mask([0b0000, 0b0111, 0b0010, 0b0000]), // T
    mask([0b0000, 0b0011, 0b0110, 0b0000]), // S
    mask([0b0000, 0b0110, 0b0011, 0b0000]), // Z
    mask([0b0000, 0b0100, 0b0111, 0b0000]), // J
    mask([0b0000, 0b0001, 0b0111, 0b0000]), // L
];

/// Get the catalog mask for a piece kind (spawn orientation)
pub fn catalog_mask(kind: PieceKind) -> Mask {
    SHAPES[kind.index()]
}

/// Rotate a mask 90 degrees clockwise: `rotated[i][j] = original[3-j][i]`
pub fn rotate_cw(mask: &Mask) -> Mask {
    let mut rotated = [[false; 4]; 4];
    for (i, row) in rotated.iter_mut().enumerate() {
        for (j, cell) in row.iter_mut().enumerate() {
            *cell = mask[3 - j][i];
        }
    }
    rotated
}

/// Number of set cells in a mask (4 for every catalog shape and rotation)
pub fn popcount(mask: &Mask) -> u32 {
    mask.iter().flatten().filter(|&&c| c).count() as u32
}

/// A live tetromino instance
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Piece {
    pub kind: PieceKind,
    /// Grid x of the mask's top-left cell
    pub x: i8,
    /// Grid y of the mask's top-left cell; negative while partially above the grid
    pub y: i8,
    pub mask: Mask,
}

impl Piece {
    /// Create a piece of the given kind at the spawn anchor
    pub fn spawn(kind: PieceKind) -> Self {
        let (x, y) = SPAWN_POSITION;
        Self {
            kind,
            x,
            y,
            mask: catalog_mask(kind),
        }
    }

    /// Absolute grid coordinates of every set mask cell
    pub fn cells(&self) -> impl Iterator<Item = (i8, i8)> + '_ {
        self.mask.iter().enumerate().flat_map(move |(i, row)| {
            row.iter().enumerate().filter_map(move |(j, &set)| {
                set.then_some((
                    self.x.saturating_add(j as i8),
                    self.y.saturating_add(i as i8),
                ))
            })
        })
    }

    /// Trial piece translated by `(dx, dy)`.
    ///
    /// Coordinates saturate at the `i8` limits, far outside the arena, so an
    /// absurd delta yields a trial the collision check rejects rather than an
    /// arithmetic overflow.
    pub fn offset(&self, dx: i8, dy: i8) -> Self {
        Self {
            x: self.x.saturating_add(dx),
            y: self.y.saturating_add(dy),
            ..*self
        }
    }

    /// Trial piece rotated 90 degrees clockwise
    pub fn rotated(&self) -> Self {
        Self {
            mask: rotate_cw(&self.mask),
            ..*self
        }
    }

    /// Single source of truth for placement legality.
    ///
    /// A set cell collides if it is out of horizontal bounds, below the arena
    /// floor, or overlaps an occupied cell. Cells with `y < 0` (piece still
    /// above the visible grid) are exempt from the occupancy check but not
    /// from horizontal bounds, which is what allows spawning at negative `y`.
    pub fn collides(&self, board: &Board) -> bool {
        self.cells().any(|(x, y)| {
            x < 0
                || x >= ARENA_WIDTH as i8
                || y >= ARENA_HEIGHT as i8
                || (y >= 0 && board.is_occupied(x, y))
        })
    }
}
