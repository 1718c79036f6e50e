//! History module - fixed-depth snapshot ring enabling undo
//!
//! A circular buffer of [`GameSnapshot`]s plus a write cursor. Exactly one
//! slot holds the most recently completed turn; undo copies out the slot
//! immediately behind the cursor and rewinds. The ring stores independent
//! copies, so mutating a restored snapshot never perturbs history.
//!
//! Depth is bounded: after `HISTORY_DEPTH - 1` effective rewinds the cursor
//! wraps and undo starts cycling through already-seen states rather than
//! erroring.

use crate::core::snapshot::GameSnapshot;
use crate::types::HISTORY_DEPTH;

/// Fixed-capacity circular snapshot buffer with a write cursor
#[derive(Debug, Clone)]
pub struct HistoryRing {
    slots: [GameSnapshot; HISTORY_DEPTH],
    cursor: usize,
}

impl HistoryRing {
    /// Create a ring seeded with a baseline snapshot in every slot.
    ///
    /// Seeding all slots makes undo before the first completed turn restore
    /// the baseline instead of garbage.
    pub fn new(baseline: GameSnapshot) -> Self {
        Self {
            slots: [baseline; HISTORY_DEPTH],
            cursor: 0,
        }
    }

    /// Record a completed turn: advance the cursor, overwrite that slot
    pub fn record(&mut self, snapshot: GameSnapshot) {
        self.cursor = (self.cursor + 1) % HISTORY_DEPTH;
        self.slots[self.cursor] = snapshot;
    }

    /// Rewind one turn: copy out the slot behind the cursor and move onto it
    pub fn undo(&mut self) -> GameSnapshot {
        let restore = (self.cursor + HISTORY_DEPTH - 1) % HISTORY_DEPTH;
        self.cursor = restore;
        self.slots[restore]
    }

    /// Snapshot of the most recently recorded turn
    pub fn latest(&self) -> &GameSnapshot {
        &self.slots[self.cursor]
    }

    #[cfg(test)]
    pub(crate) fn cursor(&self) -> usize {
        self.cursor
    }
}
