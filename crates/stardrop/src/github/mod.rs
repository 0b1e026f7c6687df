//! GitHub source collector.
//!
//! Fetches the authenticated user's starred repositories through the paginated
//! `GET /user/starred` endpoint and maps each raw entry into a [`Star`] at the
//! boundary.
//!
//! # Module Structure
//!
//! - [`client`] - Paginated fetch of the star list
//! - [`types`] - Wire DTOs and the [`Star`] value type
//! - [`convert`] - Wire-to-domain mapping with defaulting rules
//! - [`error`] - Error types for GitHub API operations

mod client;
mod convert;
mod error;
mod types;

pub use client::{GITHUB_API, GitHubClient, STARS_PAGE_SIZE};
pub use convert::to_star;
pub use error::GitHubError;
pub use types::{Star, StarredEntry, StarredRepo};
