//! View module - what a UI adapter needs to draw a session
//!
//! The core exposes per-tile sprite cells (derived from each label's
//! solved position) and a formatted countdown clock; the adapter owns
//! all actual rendering and input wiring.

use crate::core::session::GameSession;
use crate::types::{Phase, BOARD_SIZE, COLS, EMPTY};

/// Sprite-sheet cell for a tile, derived from its solved position
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SpriteCell {
    pub row: u8,
    pub col: u8,
}

/// Sprite cell for a label; the empty slot has no sprite
pub fn sprite_cell(label: u8) -> Option<SpriteCell> {
    if label == EMPTY {
        return None;
    }
    let home = (label - 1) as usize;
    Some(SpriteCell {
        row: (home / COLS) as u8,
        col: (home % COLS) as u8,
    })
}

/// One board slot as the renderer sees it
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TileView {
    pub label: u8,
    pub sprite: Option<SpriteCell>,
}

/// Snapshot of everything the display needs for one frame
#[derive(Debug, Clone, PartialEq)]
pub struct SessionView {
    pub phase: Phase,
    pub moves: u32,
    pub clock: String,
    pub tiles: [TileView; BOARD_SIZE],
}

impl SessionView {
    pub fn capture(session: &GameSession) -> Self {
        let tiles = std::array::from_fn(|i| {
            let label = session.board().tiles()[i];
            TileView {
                label,
                sprite: sprite_cell(label),
            }
        });
        Self {
            phase: session.phase(),
            moves: session.moves(),
            clock: format_clock(session.remaining_ms()),
            tiles,
        }
    }
}

/// Format remaining time as `M:SS` for the countdown display
pub fn format_clock(remaining_ms: u64) -> String {
    let minutes = remaining_ms / 60_000;
    let seconds = (remaining_ms % 60_000) / 1_000;
    format!("{}:{:02}", minutes, seconds)
}
