//! Stardrop - mirror GitHub stars into a Raindrop.io collection.
//!
//! The library fetches the authenticated user's starred repositories and the
//! contents of one Raindrop collection, computes a minimal create/delete diff
//! under normalized-URL identity, and applies it through rate-limited bulk
//! requests.
//!
//! # Example
//!
//! ```ignore
//! use stardrop::{GitHubClient, RaindropClient, SyncOptions, sync};
//!
//! let github = GitHubClient::new(&gh_token)?;
//! let raindrop = RaindropClient::new(&raindrop_token)?;
//! let result = sync(&github, &raindrop, collection_id, &SyncOptions::default(), None).await?;
//! println!("created {} deleted {}", result.created, result.deleted);
//! ```

pub mod github;
pub mod http;
pub mod normalize;
pub mod raindrop;
pub mod reconcile;
pub mod sync;

pub use github::{GitHubClient, GitHubError, Star};
pub use normalize::normalize;
pub use raindrop::{Raindrop, RaindropClient, RaindropError, RequestGate};
pub use reconcile::{Diff, diff};
pub use sync::{ProgressCallback, SyncError, SyncOptions, SyncProgress, SyncResult, sync};
