//! Sync orchestration: collect both sides, diff, apply.
//!
//! Everything runs on one logical thread of control: source fetch completes
//! before the target fetch starts, the diff completes before any mutation,
//! and all creates are attempted before any deletes. A run either completes
//! or aborts on the first unrecoverable error; nothing is persisted between
//! runs.

use thiserror::Error;

use crate::github::{GitHubClient, GitHubError};
use crate::raindrop::{RaindropClient, RaindropError};
use crate::reconcile::diff;

use super::progress::{ProgressCallback, SyncProgress, emit};

/// Errors that abort a sync run.
#[derive(Debug, Error)]
pub enum SyncError {
    #[error(transparent)]
    GitHub(#[from] GitHubError),

    #[error(transparent)]
    Raindrop(#[from] RaindropError),
}

/// Options for one sync run.
#[derive(Debug, Clone, Default)]
pub struct SyncOptions {
    /// Compute and report the diff but skip all mutations.
    pub dry_run: bool,
}

/// Summary counts for one sync run.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct SyncResult {
    /// Starred repositories fetched from GitHub.
    pub stars: usize,
    /// Existing raindrops fetched from the collection.
    pub raindrops: usize,
    /// Diff size on the create side.
    pub to_create: usize,
    /// Diff size on the delete side.
    pub to_delete: usize,
    /// Bookmarks actually created (0 on dry runs).
    pub created: usize,
    /// Bookmarks actually deleted (0 on dry runs).
    pub deleted: usize,
}

/// Run one full synchronization of the collection against the star list.
pub async fn sync(
    github: &GitHubClient,
    raindrop: &RaindropClient,
    collection_id: i64,
    options: &SyncOptions,
    on_progress: Option<&ProgressCallback>,
) -> Result<SyncResult, SyncError> {
    let stars = github.fetch_all_stars(on_progress).await?;
    let raindrops = raindrop.fetch_all(collection_id, on_progress).await?;

    let changes = diff(&stars, &raindrops);
    emit(
        on_progress,
        SyncProgress::DiffComputed {
            to_create: changes.to_create.len(),
            to_delete: changes.to_delete.len(),
        },
    );
    tracing::info!(
        to_create = changes.to_create.len(),
        to_delete = changes.to_delete.len(),
        "Diff computed"
    );

    let mut result = SyncResult {
        stars: stars.len(),
        raindrops: raindrops.len(),
        to_create: changes.to_create.len(),
        to_delete: changes.to_delete.len(),
        ..SyncResult::default()
    };

    if options.dry_run {
        tracing::info!("Dry run; skipping creates and deletes");
        emit(
            on_progress,
            SyncProgress::SyncComplete {
                created: 0,
                deleted: 0,
            },
        );
        return Ok(result);
    }

    if !changes.to_create.is_empty() {
        raindrop
            .create_many(collection_id, &changes.to_create, on_progress)
            .await?;
        result.created = changes.to_create.len();
    }

    if !changes.to_delete.is_empty() {
        raindrop
            .delete_many(collection_id, &changes.to_delete, on_progress)
            .await?;
        result.deleted = changes.to_delete.len();
    }

    emit(
        on_progress,
        SyncProgress::SyncComplete {
            created: result.created,
            deleted: result.deleted,
        },
    );
    tracing::info!(created = result.created, deleted = result.deleted, "Sync complete");

    Ok(result)
}
