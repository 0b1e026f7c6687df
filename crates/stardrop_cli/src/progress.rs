//! Maps library progress events onto structured log lines.

use stardrop::SyncProgress;

/// Stateless reporter rendering [`SyncProgress`] through tracing.
pub struct LoggingReporter;

impl LoggingReporter {
    pub fn new() -> Self {
        Self
    }

    pub fn handle(&self, event: SyncProgress) {
        match event {
            SyncProgress::FetchingStars => {
                tracing::info!("Fetching GitHub stars");
            }
            SyncProgress::FetchedStarPage {
                page,
                count,
                total_so_far,
            } => {
                tracing::debug!(page, count, total_so_far, "Fetched star page");
            }
            SyncProgress::StarsFetched { total } => {
                tracing::info!(total, "Fetched stars");
            }
            SyncProgress::FetchingRaindrops { collection_id } => {
                tracing::info!(collection_id, "Fetching existing raindrops");
            }
            SyncProgress::FetchedRaindropPage {
                page,
                count,
                total_so_far,
            } => {
                tracing::debug!(page, count, total_so_far, "Fetched raindrop page");
            }
            SyncProgress::RaindropsFetched { total } => {
                tracing::info!(total, "Fetched existing raindrops");
            }
            SyncProgress::DiffComputed {
                to_create,
                to_delete,
            } => {
                tracing::info!(to_create, to_delete, "Diff");
            }
            SyncProgress::CreatingRaindrops { count } => {
                tracing::info!(count, "Creating raindrops");
            }
            SyncProgress::CreatedBatch { size } => {
                tracing::info!(size, "Created batch");
            }
            SyncProgress::DeletingRaindrops { count } => {
                tracing::info!(count, "Deleting raindrops");
            }
            SyncProgress::DeletedBatch { size } => {
                tracing::info!(size, "Deleted batch");
            }
            SyncProgress::SyncComplete { created, deleted } => {
                tracing::info!(created, deleted, "Sync complete");
            }
            _ => {}
        }
    }
}

impl Default for LoggingReporter {
    fn default() -> Self {
        Self::new()
    }
}
