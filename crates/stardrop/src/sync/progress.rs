//! Progress reporting for sync runs.
//!
//! The library emits structured events through an optional callback; the CLI
//! decides how to render them. Events describe observable phases of a run,
//! nothing more, so reporters can stay stateless.

/// Progress events emitted during a sync run.
#[derive(Debug, Clone)]
#[non_exhaustive]
pub enum SyncProgress {
    /// Starting to fetch the starred-repository list from GitHub.
    FetchingStars,

    /// Fetched a page of starred repositories.
    FetchedStarPage {
        /// Page number (1-indexed, GitHub convention).
        page: u32,
        /// Number of entries on this page.
        count: usize,
        /// Running total fetched so far.
        total_so_far: usize,
    },

    /// The starred-repository list is complete.
    StarsFetched { total: usize },

    /// Starting to fetch existing raindrops from the target collection.
    FetchingRaindrops { collection_id: i64 },

    /// Fetched a page of raindrops.
    FetchedRaindropPage {
        /// Page number (0-indexed, Raindrop convention).
        page: u32,
        /// Number of items on this page.
        count: usize,
        /// Running total fetched so far.
        total_so_far: usize,
    },

    /// The raindrop list is complete.
    RaindropsFetched { total: usize },

    /// Diff between the two lists has been computed.
    DiffComputed { to_create: usize, to_delete: usize },

    /// Starting bulk creation.
    CreatingRaindrops { count: usize },

    /// One create batch was accepted.
    CreatedBatch { size: usize },

    /// Starting bulk deletion.
    DeletingRaindrops { count: usize },

    /// One delete batch was accepted.
    DeletedBatch { size: usize },

    /// The run finished.
    SyncComplete { created: usize, deleted: usize },
}

/// Callback invoked for each progress event.
pub type ProgressCallback = Box<dyn Fn(SyncProgress) + Send + Sync>;

/// Emit an event if a callback is present.
pub fn emit(on_progress: Option<&ProgressCallback>, event: SyncProgress) {
    if let Some(cb) = on_progress {
        cb(event);
    }
}
