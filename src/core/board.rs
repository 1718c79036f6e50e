//! Board module - the arena grid and the lock & clear engine
//!
//! The arena is a 12x20 grid where each cell is a small integer: 0 = empty,
//! `k + 1` = locked cells of piece kind `k`. Uses a flat array for better
//! cache locality and zero-allocation.
//! Coordinates: (x, y) with x ranging 0..11 (left to right), y ranging 0..19
//! (top to bottom). Pieces spawn above the grid at negative y.
//!
//! Line clearing is split into a pure detection phase ([`Board::full_rows`])
//! and a mutating commit phase ([`Board::remove_rows`]) so a caller can hold
//! detected rows on screen (e.g. for a blink) before removal.

use arrayvec::ArrayVec;

use crate::core::pieces::Piece;
use crate::types::{PieceKind, ARENA_HEIGHT, ARENA_WIDTH};

/// Total number of cells in the arena
const ARENA_SIZE: usize = (ARENA_WIDTH * ARENA_HEIGHT) as usize;

/// The arena - 12 columns x 20 rows using flat array storage
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    /// Flat array of cell codes, row-major order (y * WIDTH + x)
    cells: [u8; ARENA_SIZE],
}

impl Board {
    /// Create a new empty board
    pub fn new() -> Self {
        Self {
            cells: [0; ARENA_SIZE],
        }
    }

    /// Calculate flat index from (x, y) coordinates
    #[inline(always)]
    fn index(x: i8, y: i8) -> Option<usize> {
        if x < 0 || x >= ARENA_WIDTH as i8 || y < 0 || y >= ARENA_HEIGHT as i8 {
            return None;
        }
        Some((y as usize) * (ARENA_WIDTH as usize) + (x as usize))
    }

    /// Get width of the board
    pub fn width(&self) -> u8 {
        ARENA_WIDTH
    }

    /// Get height of the board
    pub fn height(&self) -> u8 {
        ARENA_HEIGHT
    }

    /// Get the cell code at (x, y); `None` if out of bounds
    pub fn get(&self, x: i8, y: i8) -> Option<u8> {
        Self::index(x, y).map(|idx| self.cells[idx])
    }

    /// Get the piece kind locked at (x, y); `None` if empty or out of bounds
    pub fn kind_at(&self, x: i8, y: i8) -> Option<PieceKind> {
        match self.get(x, y) {
            Some(code) if code > 0 => PieceKind::from_index(code as usize - 1),
            _ => None,
        }
    }

    /// Set the cell code at (x, y). Returns false if out of bounds.
    ///
    /// Panics on a code outside `0..=7`; such a value is a contract violation,
    /// never a runtime condition.
    pub fn set(&mut self, x: i8, y: i8, code: u8) -> bool {
        assert!(
            code as usize <= PieceKind::ALL.len(),
            "cell code {code} out of range"
        );
        match Self::index(x, y) {
            Some(idx) => {
                self.cells[idx] = code;
                true
            }
            None => false,
        }
    }

    /// Check if position is occupied (within bounds and non-zero)
    pub fn is_occupied(&self, x: i8, y: i8) -> bool {
        matches!(self.get(x, y), Some(code) if code != 0)
    }

    /// Check if a row is completely filled
    pub fn is_row_full(&self, y: usize) -> bool {
        if y >= ARENA_HEIGHT as usize {
            return false;
        }
        let start = y * ARENA_WIDTH as usize;
        let end = start + ARENA_WIDTH as usize;
        self.cells[start..end].iter().all(|&cell| cell != 0)
    }

    /// Check if any cell of the top row is occupied (game-over condition)
    pub fn row_zero_occupied(&self) -> bool {
        self.cells[..ARENA_WIDTH as usize].iter().any(|&c| c != 0)
    }

    /// Detection phase: collect the indices of all full rows, bottom-most
    /// first, up to the theoretical maximum of 4.
    ///
    /// Pure - the board is not modified, so detected rows stay fully
    /// populated until [`Board::remove_rows`] commits their removal.
    pub fn full_rows(&self) -> ArrayVec<usize, 4> {
        let mut rows = ArrayVec::new();
        for y in (0..ARENA_HEIGHT as usize).rev() {
            if self.is_row_full(y) && rows.try_push(y).is_err() {
                break;
            }
        }
        rows
    }

    /// Commit phase: remove the given rows, shifting everything above each
    /// removed row down by one and zeroing the top row.
    ///
    /// Rows are processed in ascending index order (top-most first) so that
    /// removing one row never displaces a not-yet-processed row index.
    pub fn remove_rows(&mut self, rows: &[usize]) {
        let mut ordered: ArrayVec<usize, 4> = rows.iter().copied().collect();
        ordered.sort_unstable();

        let width = ARENA_WIDTH as usize;
        for &row in &ordered {
            debug_assert!(row < ARENA_HEIGHT as usize);
            // Row k takes the contents of row k - 1, from the removed row up.
            for k in (1..=row).rev() {
                let src = (k - 1) * width;
                let dst = k * width;
                self.cells.copy_within(src..src + width, dst);
            }
            self.cells[..width].fill(0);
        }
    }

    /// Lock a piece's cells into the arena.
    ///
    /// Cells still above the visible grid (`y < 0`) are silently dropped; the
    /// turn controller checks the top-row game-over condition separately.
    pub fn lock(&mut self, piece: &Piece) {
        let code = piece.kind.index() as u8 + 1;
        for (x, y) in piece.cells() {
            if let Some(idx) = Self::index(x, y) {
                self.cells[idx] = code;
            }
        }
    }

    /// Get a reference to the internal cells array (row-major)
    pub fn cells(&self) -> &[u8] {
        &self.cells
    }

    /// Copy the board into a 2D byte grid (snapshot / renderer surface)
    pub fn write_u8_grid(&self, out: &mut [[u8; ARENA_WIDTH as usize]; ARENA_HEIGHT as usize]) {
        let width = ARENA_WIDTH as usize;
        for (y, row) in out.iter_mut().enumerate() {
            row.copy_from_slice(&self.cells[y * width..(y + 1) * width]);
        }
    }

    /// Rebuild a board from a 2D byte grid.
    ///
    /// Panics if any cell code is outside `0..=7` (malformed snapshot data is
    /// a programming-contract violation, not a recoverable error).
    pub fn from_grid(grid: &[[u8; ARENA_WIDTH as usize]; ARENA_HEIGHT as usize]) -> Self {
        let mut board = Self::new();
        let width = ARENA_WIDTH as usize;
        for (y, row) in grid.iter().enumerate() {
            for &code in row {
                assert!(
                    code as usize <= PieceKind::ALL.len(),
                    "cell code {code} out of range"
                );
            }
            board.cells[y * width..(y + 1) * width].copy_from_slice(row);
        }
        board
    }

    /// Clear the entire board
    pub fn clear(&mut self) {
        self.cells.fill(0);
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_board_index_calculation() {
        assert_eq!(Board::index(0, 0), Some(0));
        assert_eq!(Board::index(11, 0), Some(11));
        assert_eq!(Board::index(0, 1), Some(12));
        assert_eq!(Board::index(11, 19), Some(239));
        assert_eq!(Board::index(-1, 0), None);
        assert_eq!(Board::index(12, 0), None);
        assert_eq!(Board::index(0, 20), None);
    }

    #[test]
    fn test_board_flat_array() {
        let mut board = Board::new();

        board.set(0, 0, 2);
        board.set(5, 10, 3);

        assert_eq!(board.get(0, 0), Some(2));
        assert_eq!(board.get(5, 10), Some(3));
        assert_eq!(board.cells[0], 2);
        assert_eq!(board.cells[10 * 12 + 5], 3);
    }

    #[test]
    fn test_kind_at_decodes_cell_code() {
        let mut board = Board::new();
        board.set(3, 4, PieceKind::T.index() as u8 + 1);

        assert_eq!(board.kind_at(3, 4), Some(PieceKind::T));
        assert_eq!(board.kind_at(0, 0), None);
        assert_eq!(board.kind_at(-1, 0), None);
    }

    #[test]
    #[should_panic(expected = "out of range")]
    fn test_set_rejects_invalid_code() {
        let mut board = Board::new();
        board.set(0, 0, 9);
    }
}
