//! Session module - the puzzle lifecycle state machine
//!
//! Ties together the board, the shuffler and the countdown timer.
//! Lifecycle: `Idle` (solved preview) -> `Running` (shuffled, countdown
//! active) -> `Solved` or `TimedOut`, then back to `Idle` once the host
//! acknowledges the outcome. All mutation happens in reaction to discrete
//! host calls (`start`, `apply_move`, `tick`, `acknowledge`) on a single
//! logical thread.

use chrono::{DateTime, Utc};
use tracing::debug;

use crate::core::shuffle::{ShuffleConfig, Shuffler};
use crate::core::timer::{CountdownTimer, TimerEvent};
use crate::core::Board;
use crate::types::{MoveOutcome, Phase, EMPTY, TIME_LIMIT_MS};

/// Immutable summary of a finished round
///
/// Created once per terminal transition and consumed by the host via
/// [`GameSession::take_completion`].
#[derive(Debug, Clone, PartialEq)]
pub struct CompletionRecord {
    pub moves: u32,
    pub elapsed_ms: u64,
    pub timed_out: bool,
    pub finished_at: DateTime<Utc>,
}

/// Session tuning
#[derive(Debug, Clone)]
pub struct SessionConfig {
    pub time_limit_ms: u64,
    pub shuffle: ShuffleConfig,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            time_limit_ms: TIME_LIMIT_MS,
            shuffle: ShuffleConfig::default(),
        }
    }
}

/// One game instance, owned by the host application
#[derive(Debug, Clone)]
pub struct GameSession {
    board: Board,
    shuffler: Shuffler,
    timer: CountdownTimer,
    phase: Phase,
    moves: u32,
    completion: Option<CompletionRecord>,
}

impl GameSession {
    /// Create an idle session with the default tuning and the given seed
    pub fn new(seed: u32) -> Self {
        Self::with_config(seed, SessionConfig::default())
    }

    /// Create an idle session with explicit tuning
    pub fn with_config(seed: u32, config: SessionConfig) -> Self {
        Self {
            board: Board::solved(),
            shuffler: Shuffler::with_config(seed, config.shuffle),
            timer: CountdownTimer::new(config.time_limit_ms),
            phase: Phase::Idle,
            moves: 0,
            completion: None,
        }
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn moves(&self) -> u32 {
        self.moves
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn remaining_ms(&self) -> u64 {
        self.timer.remaining_ms()
    }

    pub fn elapsed_ms(&self) -> u64 {
        self.timer.elapsed_ms()
    }

    /// Begin a round: shuffle the board, reset the counter, arm the timer
    ///
    /// Ignored unless the session is idle; a terminal outcome must be
    /// acknowledged first, and starting while running is a no-op.
    pub fn start(&mut self) {
        if self.phase != Phase::Idle {
            return;
        }
        self.board = self.shuffler.shuffle();
        self.moves = 0;
        self.completion = None;
        self.timer.start();
        self.phase = Phase::Running;
        debug!(
            manhattan = self.board.manhattan_total(),
            out_of_place = self.board.out_of_place(),
            "round started"
        );
    }

    /// Slide the tile with the given label into the empty slot
    ///
    /// Rejected moves (wrong phase, unknown label, not adjacent) leave
    /// the board and the counter untouched. Checking the phase first
    /// resolves a move racing a same-tick expiry deterministically.
    pub fn apply_move(&mut self, label: u8) -> MoveOutcome {
        if self.phase != Phase::Running {
            return MoveOutcome::Rejected;
        }
        if label == EMPTY {
            debug!("ignoring move of the empty slot");
            return MoveOutcome::Rejected;
        }
        let Some(tile_index) = self.board.index_of_label(label) else {
            debug!(label, "ignoring move of unknown label");
            return MoveOutcome::Rejected;
        };
        let empty_index = self.board.empty_index();
        if !Board::are_adjacent(tile_index, empty_index) {
            debug!(label, "ignoring non-adjacent move");
            return MoveOutcome::Rejected;
        }

        self.board.swap(tile_index, empty_index);
        self.moves += 1;

        if self.board.is_solved() {
            self.timer.cancel();
            self.complete(false);
            self.phase = Phase::Solved;
            debug!(moves = self.moves, "puzzle solved");
            return MoveOutcome::Solved;
        }
        MoveOutcome::Applied
    }

    /// Advance the countdown; expiry ends the round as a timeout
    pub fn tick(&mut self, delta_ms: u64) {
        if self.phase != Phase::Running {
            return;
        }
        if let Some(TimerEvent::Expired) = self.timer.tick(delta_ms) {
            self.complete(true);
            self.phase = Phase::TimedOut;
            debug!(moves = self.moves, "time limit reached");
        }
    }

    /// Return to the idle preview after a terminal outcome
    ///
    /// Explicit rather than automatic so the host controls when the next
    /// round's preview appears.
    pub fn acknowledge(&mut self) {
        if !matches!(self.phase, Phase::Solved | Phase::TimedOut) {
            return;
        }
        self.board = Board::solved();
        self.moves = 0;
        self.phase = Phase::Idle;
    }

    /// Take the completion record of the last finished round, if any
    pub fn take_completion(&mut self) -> Option<CompletionRecord> {
        self.completion.take()
    }

    fn complete(&mut self, timed_out: bool) {
        self.completion = Some(CompletionRecord {
            moves: self.moves,
            elapsed_ms: self.timer.elapsed_ms(),
            timed_out,
            finished_at: Utc::now(),
        });
    }

    /// Drop the session into a running round on a specific board
    #[cfg(test)]
    pub(crate) fn force_running(&mut self, board: Board) {
        self.board = board;
        self.moves = 0;
        self.completion = None;
        self.timer.start();
        self.phase = Phase::Running;
    }
}
