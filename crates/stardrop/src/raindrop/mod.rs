//! Raindrop.io target collector and bulk mutator.
//!
//! Lists the target collection and applies create/delete batches, with all
//! traffic paced through a single [`RequestGate`].
//!
//! # Module Structure
//!
//! - [`client`] - Collection listing and bulk create/delete
//! - [`gate`] - Minimum-interval spacing and 429 backoff
//! - [`types`] - Wire DTOs
//! - [`error`] - Error types for Raindrop API operations

mod client;
mod error;
mod gate;
mod types;

pub use client::{BATCH_SIZE, FETCH_PAGE_SIZE, RAINDROP_API, RaindropClient, SYNC_TAG};
pub use error::RaindropError;
pub use gate::{MIN_REQUEST_INTERVAL, RequestGate};
pub use types::Raindrop;
