//! Raindrop API error types.

use thiserror::Error;

use crate::http::HttpError;

/// Errors from the raindrop collector and bulk mutator.
///
/// Unlike the GitHub side, every non-success response here is fatal: an empty
/// collection is a normal first-run state, but a broken connection to the
/// bookmark service is not.
#[derive(Debug, Error)]
pub enum RaindropError {
    /// Non-success response, with the failing operation named.
    #[error("Raindrop {operation} failed: {status} {message}")]
    Api {
        operation: &'static str,
        status: u16,
        message: String,
    },

    /// Transport-level failure.
    #[error("HTTP error: {0}")]
    Http(#[from] HttpError),

    /// Response or request body did not match the expected shape.
    #[error("invalid Raindrop body: {0}")]
    Json(#[from] serde_json::Error),
}
