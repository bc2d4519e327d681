//! Timed sliding-tile photo puzzle engine.
//!
//! `core` holds the board model, shuffle engine, countdown timer and the
//! session state machine; `report` holds the completion-record wire
//! model, the fire-and-forget reporter and the record service. A UI
//! adapter drives the session through `start`/`apply_move`/`tick` and
//! renders from `SessionView`.

pub mod core;
pub mod report;
pub mod types;
