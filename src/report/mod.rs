//! Report module - completion-record edge of the system
//!
//! Holds the wire model shared by client and server, the fire-and-forget
//! HTTP reporter the game host uses, and the record service with its
//! JSON-file store.

pub mod client;
pub mod record;
pub mod server;
pub mod store;

// Re-export the public surface
pub use client::{CompletionReporter, ReporterConfig};
pub use record::{SavedTime, TimeParts};
pub use server::{router, run_server, ServerConfig};
pub use store::TimeStore;
