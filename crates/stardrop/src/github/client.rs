//! GitHub API client for fetching the authenticated user's stars.

use std::sync::Arc;
use std::time::Duration;

use crate::http::{HttpMethod, HttpRequest, HttpResponse, HttpTransport, ReqwestTransport};
use crate::sync::{ProgressCallback, SyncProgress, emit};

use super::convert::to_star;
use super::error::GitHubError;
use super::types::{Star, StarredEntry};

/// GitHub REST API base URL.
pub const GITHUB_API: &str = "https://api.github.com";

/// Page size for the starred endpoint (GitHub's maximum).
pub const STARS_PAGE_SIZE: usize = 100;

/// Media type that includes `starred_at` in the response.
const STAR_MEDIA_TYPE: &str = "application/vnd.github.star+json";

const USER_AGENT: &str = concat!("stardrop/", env!("CARGO_PKG_VERSION"));

/// Client for the GitHub starred-repositories endpoint.
#[derive(Clone)]
pub struct GitHubClient {
    transport: Arc<dyn HttpTransport>,
    token: String,
}

impl GitHubClient {
    /// Create a client backed by a real HTTP transport.
    pub fn new(token: &str) -> Result<Self, GitHubError> {
        let transport = ReqwestTransport::with_timeout(Duration::from_secs(30))?;
        Ok(Self::new_with_transport(token, Arc::new(transport)))
    }

    /// Create a client with an injected transport (tests use a mock here).
    pub fn new_with_transport(token: &str, transport: Arc<dyn HttpTransport>) -> Self {
        Self {
            transport,
            token: token.to_string(),
        }
    }

    async fn get_page(&self, page: u32) -> Result<Vec<StarredEntry>, GitHubError> {
        let url = format!(
            "{}/user/starred?per_page={}&page={}",
            GITHUB_API, STARS_PAGE_SIZE, page
        );
        let request = HttpRequest {
            method: HttpMethod::Get,
            url,
            headers: vec![
                ("Accept".to_string(), STAR_MEDIA_TYPE.to_string()),
                ("User-Agent".to_string(), USER_AGENT.to_string()),
                ("Authorization".to_string(), format!("Bearer {}", self.token)),
            ],
            body: Vec::new(),
        };

        let response: HttpResponse = self.transport.send(request).await?;
        if !response.is_success() {
            return Err(GitHubError::Api {
                status: response.status,
                message: response.body_text(),
            });
        }

        Ok(serde_json::from_slice(&response.body)?)
    }

    /// Fetch every starred repository for the authenticated user.
    ///
    /// Pages are requested in increasing order starting at 1; the loop stops
    /// on an empty page or a short page. An empty overall result is not an
    /// error: it usually means the token lost its scopes, so a warning is
    /// logged and the empty list is returned (the reconciler then sees every
    /// existing raindrop as deletable).
    pub async fn fetch_all_stars(
        &self,
        on_progress: Option<&ProgressCallback>,
    ) -> Result<Vec<Star>, GitHubError> {
        emit(on_progress, SyncProgress::FetchingStars);

        let mut all: Vec<Star> = Vec::new();
        let mut page = 1u32;

        loop {
            let entries = self.get_page(page).await?;
            if entries.is_empty() {
                break;
            }

            let count = entries.len();
            all.extend(entries.iter().map(to_star));

            emit(
                on_progress,
                SyncProgress::FetchedStarPage {
                    page,
                    count,
                    total_so_far: all.len(),
                },
            );

            if count < STARS_PAGE_SIZE {
                break;
            }
            page += 1;
        }

        emit(on_progress, SyncProgress::StarsFetched { total: all.len() });

        if all.is_empty() {
            tracing::warn!("GitHub returned 0 stars; check that GH_TOKEN has the correct scopes");
        }

        Ok(all)
    }
}
