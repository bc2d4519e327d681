//! Core types shared across the application
//! This module contains pure data types with no external dependencies

/// Grid geometry (the photo puzzle is a fixed 3x4 grid)
pub const ROWS: usize = 3;
pub const COLS: usize = 4;
pub const BOARD_SIZE: usize = ROWS * COLS;

/// Label of the empty slot
pub const EMPTY: u8 = 0;

/// Session timing (in milliseconds)
pub const TIME_LIMIT_MS: u64 = 5 * 60 * 1000;
pub const TICK_MS: u64 = 10;

/// Shuffle tuning
pub const SHUFFLE_MOVE_BUDGET: u32 = 35;
pub const SHUFFLE_MAX_ATTEMPTS: u32 = 10;
pub const MANHATTAN_BAND: (u32, u32) = (25, 45);
pub const OUT_OF_PLACE_BAND: (f32, f32) = (0.4, 0.6);

/// Directions the empty slot can travel during a shuffle walk
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    pub const ALL: [Direction; 4] = [
        Direction::Up,
        Direction::Down,
        Direction::Left,
        Direction::Right,
    ];

    /// Row/column delta of one step in this direction
    pub fn offset(&self) -> (i32, i32) {
        match self {
            Direction::Up => (-1, 0),
            Direction::Down => (1, 0),
            Direction::Left => (0, -1),
            Direction::Right => (0, 1),
        }
    }

    /// The direction that undoes this one
    pub fn opposite(&self) -> Self {
        match self {
            Direction::Up => Direction::Down,
            Direction::Down => Direction::Up,
            Direction::Left => Direction::Right,
            Direction::Right => Direction::Left,
        }
    }
}

/// Session lifecycle states
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// Pre-start preview: solved board shown, timer idle
    Idle,
    /// Shuffled board, countdown active, moves accepted
    Running,
    /// Terminal: puzzle completed before the limit
    Solved,
    /// Terminal: countdown reached zero first
    TimedOut,
}

/// Result of submitting a move to the session
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveOutcome {
    /// Tile slid into the empty slot
    Applied,
    /// Tile slid in and completed the puzzle
    Solved,
    /// Move ignored: wrong phase, unknown label, or not adjacent
    Rejected,
}
