//! Game state module - the turn controller
//!
//! Ties together board, pieces, RNG, scoring, and history. One discrete step:
//! player intent is validated through collision, a blocked fall locks the
//! piece, full rows are detected and scored, the next piece spawns, and the
//! post-turn state is recorded for undo.
//!
//! The engine is synchronous and owns no timer: the caller supplies elapsed
//! time to [`Game::tick`]. There is no internal pause state - a paused
//! presentation layer simply stops calling the step functions.

use arrayvec::ArrayVec;

use crate::core::history::HistoryRing;
use crate::core::pieces::Piece;
use crate::core::rng::SimpleRng;
use crate::core::scoring::line_clear_score;
use crate::core::snapshot::GameSnapshot;
use crate::core::Board;
use crate::types::{
    PieceKind, ARENA_HEIGHT, ARENA_WIDTH, DEFAULT_CLEAR_HOLD_MS, DEFAULT_FALL_INTERVAL_MS,
    MAX_FALL_INTERVAL_MS, MIN_FALL_INTERVAL_MS,
};

/// Transient view of rows detected full but not yet removed.
///
/// Exists only between detection and commit; the arena rows it names remain
/// fully populated for the duration so a renderer can blink them.
#[derive(Debug, Clone)]
pub struct ClearState {
    rows: ArrayVec<usize, 4>,
    remaining_ms: u32,
}

impl ClearState {
    /// Detected full row indices, bottom-most first
    pub fn rows(&self) -> &[usize] {
        &self.rows
    }

    /// Hold time left before removal commits
    pub fn remaining_ms(&self) -> u32 {
        self.remaining_ms
    }
}

/// One session of play. Owns the arena and both live pieces exclusively;
/// the history ring holds independent copies.
#[derive(Debug, Clone)]
pub struct Game {
    board: Board,
    current: Piece,
    next: Piece,
    score: u32,
    game_over: bool,
    rng: SimpleRng,
    /// Elapsed time accumulated since the last fall attempt
    fall_timer_ms: u32,
    fall_interval_ms: u32,
    clear_hold_ms: u32,
    clearing: Option<ClearState>,
    /// Line count of the most recent lock (consumed by observers)
    last_clear: Option<u32>,
    history: HistoryRing,
}

impl Game {
    /// Create a new session with the given RNG seed
    pub fn new(seed: u32) -> Self {
        let mut rng = SimpleRng::new(seed);
        let board = Board::new();
        let current = Piece::spawn(rng.next_kind());
        let next = Piece::spawn(rng.next_kind());

        let mut arena = [[0u8; ARENA_WIDTH as usize]; ARENA_HEIGHT as usize];
        board.write_u8_grid(&mut arena);
        let baseline = GameSnapshot {
            arena,
            current: current.into(),
            next: next.into(),
            score: 0,
        };

        Self {
            board,
            current,
            next,
            score: 0,
            game_over: false,
            rng,
            fall_timer_ms: 0,
            fall_interval_ms: DEFAULT_FALL_INTERVAL_MS,
            clear_hold_ms: DEFAULT_CLEAR_HOLD_MS,
            clearing: None,
            last_clear: None,
            history: HistoryRing::new(baseline),
        }
    }

    /// Start over: empty arena, zero score, two fresh pieces, new history
    /// baseline. The RNG sequence continues from where it left off.
    pub fn reset(&mut self) {
        self.board.clear();
        self.score = 0;
        self.game_over = false;
        self.current = Piece::spawn(self.rng.next_kind());
        self.next = Piece::spawn(self.rng.next_kind());
        self.fall_timer_ms = 0;
        self.clearing = None;
        self.last_clear = None;
        self.history = HistoryRing::new(self.snapshot());
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn current(&self) -> &Piece {
        &self.current
    }

    /// Kind of the upcoming piece (for preview rendering)
    pub fn next_kind(&self) -> PieceKind {
        self.next.kind
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn game_over(&self) -> bool {
        self.game_over
    }

    /// Rows detected full and awaiting removal, if a clear hold is pending
    pub fn clearing(&self) -> Option<&ClearState> {
        self.clearing.as_ref()
    }

    pub fn fall_interval_ms(&self) -> u32 {
        self.fall_interval_ms
    }

    /// Set the fall interval, clamped to the supported range (100-500 ms)
    pub fn set_fall_interval(&mut self, ms: u32) {
        self.fall_interval_ms = ms.clamp(MIN_FALL_INTERVAL_MS, MAX_FALL_INTERVAL_MS);
    }

    pub fn clear_hold_ms(&self) -> u32 {
        self.clear_hold_ms
    }

    /// Set the hold window between clear detection and row removal.
    /// Zero (the default) commits removal within the locking tick.
    pub fn set_clear_hold(&mut self, ms: u32) {
        self.clear_hold_ms = ms;
    }

    /// Take and clear the line count of the most recent lock.
    ///
    /// `Some(0)` means a piece locked without clearing anything; observers
    /// that only care about clears can filter on the count.
    pub fn take_lines_cleared(&mut self) -> Option<u32> {
        self.last_clear.take()
    }

    /// Try to shift the current piece horizontally. Transactional: either the
    /// whole piece moves or nothing does.
    pub fn try_move(&mut self, dx: i8) -> bool {
        if self.game_over {
            return false;
        }
        let trial = self.current.offset(dx, 0);
        if trial.collides(&self.board) {
            return false;
        }
        self.current = trial;
        true
    }

    /// Try to rotate the current piece 90 degrees clockwise (no wall kicks)
    pub fn try_rotate(&mut self) -> bool {
        if self.game_over {
            return false;
        }
        let trial = self.current.rotated();
        if trial.collides(&self.board) {
            return false;
        }
        self.current = trial;
        true
    }

    /// Advance the game by `elapsed_ms` of caller time.
    ///
    /// Counts down any pending clear hold (committing row removal when it
    /// expires), then attempts one fall once the accumulated time reaches the
    /// fall interval. A blocked fall is the lock trigger: the piece is
    /// committed, full rows are detected and scored, the next piece spawns,
    /// and the completed turn is recorded to history.
    ///
    /// Returns whether any observable state changed.
    pub fn tick(&mut self, elapsed_ms: u32) -> bool {
        if self.game_over {
            return false;
        }

        let mut changed = false;

        let commit = match self.clearing.as_mut() {
            Some(state) if state.remaining_ms > elapsed_ms => {
                state.remaining_ms -= elapsed_ms;
                false
            }
            Some(_) => true,
            None => false,
        };
        if commit {
            if let Some(state) = self.clearing.take() {
                self.board.remove_rows(state.rows());
                changed = true;
            }
        }

        self.fall_timer_ms += elapsed_ms;
        if self.fall_timer_ms >= self.fall_interval_ms {
            self.fall_timer_ms = 0;
            let trial = self.current.offset(0, 1);
            if trial.collides(&self.board) {
                self.lock_and_advance();
            } else {
                self.current = trial;
            }
            changed = true;
        }

        changed
    }

    /// Rewind to the previous recorded turn. No-op once the game is over;
    /// rewinds wrap after the ring depth is exhausted.
    pub fn undo(&mut self) -> bool {
        if self.game_over {
            return false;
        }
        let snapshot = self.history.undo();
        self.apply_snapshot(&snapshot);
        true
    }

    /// Export the exact resumable state (arena, both pieces, score)
    pub fn snapshot(&self) -> GameSnapshot {
        let mut arena = [[0u8; ARENA_WIDTH as usize]; ARENA_HEIGHT as usize];
        self.board.write_u8_grid(&mut arena);
        GameSnapshot {
            arena,
            current: self.current.into(),
            next: self.next.into(),
            score: self.score,
        }
    }

    /// Resume a previously exported session. Clears the game-over flag and
    /// reseeds the history baseline with the restored state.
    ///
    /// Panics if the snapshot's arena holds cell codes outside `0..=7`.
    pub fn restore(&mut self, snapshot: &GameSnapshot) {
        self.apply_snapshot(snapshot);
        self.game_over = false;
        self.history = HistoryRing::new(*snapshot);
    }

    fn apply_snapshot(&mut self, snapshot: &GameSnapshot) {
        self.board = Board::from_grid(&snapshot.arena);
        self.current = snapshot.current.into();
        self.next = snapshot.next.into();
        self.score = snapshot.score;
        self.fall_timer_ms = 0;
        self.clearing = None;
        self.last_clear = None;
    }

    /// Lock the current piece, detect and score full rows, then spawn.
    ///
    /// The top-row check runs after the lock and before the spawn: any
    /// occupied cell in row 0 ends the game, spawning is aborted, and the
    /// piece fields are left as-is.
    fn lock_and_advance(&mut self) {
        // Rows scored by the previous lock stay on the board while a hold
        // runs; commit them first so detection counts each row exactly once.
        if let Some(state) = self.clearing.take() {
            self.board.remove_rows(state.rows());
        }
        self.board.lock(&self.current);

        let rows = self.board.full_rows();
        self.last_clear = Some(rows.len() as u32);
        if !rows.is_empty() {
            self.score += line_clear_score(rows.len());
            if self.clear_hold_ms == 0 {
                self.board.remove_rows(&rows);
            } else {
                self.clearing = Some(ClearState {
                    rows,
                    remaining_ms: self.clear_hold_ms,
                });
            }
        }

        if self.board.row_zero_occupied() {
            self.game_over = true;
            return;
        }

        self.current = Piece::spawn(self.next.kind);
        self.next = Piece::spawn(self.rng.next_kind());
        self.history.record(self.snapshot());
    }
}
