//! Sync engine: orchestration and progress reporting.
//!
//! # Module Structure
//!
//! - [`engine`] - The run orchestrator: `sync()`, options, result, errors
//! - [`progress`] - Progress events: `SyncProgress`, `ProgressCallback`, `emit()`

pub mod engine;
mod progress;

pub use engine::{SyncError, SyncOptions, SyncResult, sync};
pub use progress::{ProgressCallback, SyncProgress, emit};
