//! Scoring module - fixed line-clear score table
//!
//! The bonus is non-linear in the number of simultaneously cleared lines
//! (1 -> 100, 2 -> 300, 3 -> 500, 4 -> 800) and takes no configuration.

use crate::types::LINE_SCORES;

/// Score delta for clearing `lines` rows at once.
///
/// Zero lines (and anything past the 4-line theoretical maximum) scores zero.
pub fn line_clear_score(lines: usize) -> u32 {
    if lines == 0 || lines >= LINE_SCORES.len() {
        return 0;
    }
    LINE_SCORES[lines]
}
