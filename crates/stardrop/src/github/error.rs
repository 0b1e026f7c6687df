//! GitHub API error types.

use thiserror::Error;

use crate::http::HttpError;

/// Errors from the starred-repository collector.
#[derive(Debug, Error)]
pub enum GitHubError {
    /// Non-success response from the GitHub API.
    #[error("GitHub API error: {status} {message}")]
    Api { status: u16, message: String },

    /// Transport-level failure.
    #[error("HTTP error: {0}")]
    Http(#[from] HttpError),

    /// Response body did not match the expected shape.
    #[error("invalid GitHub response body: {0}")]
    Json(#[from] serde_json::Error),
}
