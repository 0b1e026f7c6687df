//! Raindrop API client: paginated collection fetch and bulk mutations.

use std::sync::Arc;
use std::time::Duration;

use crate::github::Star;
use crate::http::{HttpMethod, HttpRequest, HttpResponse, HttpTransport, ReqwestTransport};
use crate::sync::{ProgressCallback, SyncProgress, emit};

use super::error::RaindropError;
use super::gate::RequestGate;
use super::types::{CollectionRef, CreateBatch, DeleteBatch, NewRaindrop, Raindrop, RaindropPage};

/// Raindrop REST API base URL.
pub const RAINDROP_API: &str = "https://api.raindrop.io/rest/v1";

/// Page size when listing a collection.
pub const FETCH_PAGE_SIZE: usize = 50;

/// Items per bulk create/delete request.
pub const BATCH_SIZE: usize = 100;

/// Tag stamped on every bookmark this tool creates.
pub const SYNC_TAG: &str = "ghstars";

const USER_AGENT: &str = concat!("stardrop/", env!("CARGO_PKG_VERSION"));

/// Tags for a bookmark created from a star. Currently a fixed classification
/// tag; takes the star so richer tagging has a place to grow.
fn build_tags(_star: &Star) -> Vec<&'static str> {
    vec![SYNC_TAG]
}

/// Client for the Raindrop collection the sync targets.
///
/// All requests pass through the owned [`RequestGate`], which serializes and
/// paces outbound traffic.
#[derive(Clone)]
pub struct RaindropClient {
    transport: Arc<dyn HttpTransport>,
    token: String,
    gate: RequestGate,
}

impl RaindropClient {
    /// Create a client backed by a real HTTP transport and the default gate.
    pub fn new(token: &str) -> Result<Self, RaindropError> {
        let transport = ReqwestTransport::with_timeout(Duration::from_secs(30))?;
        Ok(Self::new_with_transport(
            token,
            Arc::new(transport),
            RequestGate::default(),
        ))
    }

    /// Create a client with an injected transport and gate (tests use a mock
    /// transport and a short-interval gate).
    pub fn new_with_transport(
        token: &str,
        transport: Arc<dyn HttpTransport>,
        gate: RequestGate,
    ) -> Self {
        Self {
            transport,
            token: token.to_string(),
            gate,
        }
    }

    async fn request(
        &self,
        method: HttpMethod,
        path: &str,
        body: Vec<u8>,
    ) -> Result<HttpResponse, RaindropError> {
        let request = HttpRequest {
            method,
            url: format!("{RAINDROP_API}{path}"),
            headers: vec![
                ("Authorization".to_string(), format!("Bearer {}", self.token)),
                ("Content-Type".to_string(), "application/json".to_string()),
                ("User-Agent".to_string(), USER_AGENT.to_string()),
            ],
            body,
        };
        Ok(self.gate.send(self.transport.as_ref(), request).await?)
    }

    /// Fetch every raindrop in the collection.
    ///
    /// Pages are 0-indexed and fetched until one comes back empty. Any
    /// non-success response aborts the whole run.
    pub async fn fetch_all(
        &self,
        collection_id: i64,
        on_progress: Option<&ProgressCallback>,
    ) -> Result<Vec<Raindrop>, RaindropError> {
        emit(on_progress, SyncProgress::FetchingRaindrops { collection_id });

        let mut all: Vec<Raindrop> = Vec::new();
        let mut page = 0u32;

        loop {
            let path =
                format!("/raindrops/{collection_id}?perpage={FETCH_PAGE_SIZE}&page={page}");
            let response = self.request(HttpMethod::Get, &path, Vec::new()).await?;
            if !response.is_success() {
                return Err(RaindropError::Api {
                    operation: "fetch",
                    status: response.status,
                    message: response.body_text(),
                });
            }

            let body: RaindropPage = serde_json::from_slice(&response.body)?;
            if body.items.is_empty() {
                break;
            }

            let count = body.items.len();
            all.extend(body.items);
            emit(
                on_progress,
                SyncProgress::FetchedRaindropPage {
                    page,
                    count,
                    total_so_far: all.len(),
                },
            );
            page += 1;
        }

        emit(on_progress, SyncProgress::RaindropsFetched { total: all.len() });
        Ok(all)
    }

    /// Create bookmarks for the given stars, in batches of [`BATCH_SIZE`].
    ///
    /// One bulk request per batch; a rejected batch aborts the run with its
    /// status and body. Batches are atomic from the caller's perspective.
    pub async fn create_many(
        &self,
        collection_id: i64,
        stars: &[Star],
        on_progress: Option<&ProgressCallback>,
    ) -> Result<(), RaindropError> {
        emit(on_progress, SyncProgress::CreatingRaindrops { count: stars.len() });

        for batch in stars.chunks(BATCH_SIZE) {
            let items: Vec<NewRaindrop<'_>> = batch
                .iter()
                .map(|star| NewRaindrop {
                    link: &star.url,
                    title: &star.full_name,
                    excerpt: &star.description,
                    created: star.starred_at,
                    collection: CollectionRef { id: collection_id },
                    tags: build_tags(star),
                })
                .collect();
            let body = serde_json::to_vec(&CreateBatch { items })?;

            let response = self.request(HttpMethod::Post, "/raindrops", body).await?;
            if !response.is_success() {
                return Err(RaindropError::Api {
                    operation: "bulk create",
                    status: response.status,
                    message: response.body_text(),
                });
            }

            emit(on_progress, SyncProgress::CreatedBatch { size: batch.len() });
        }

        Ok(())
    }

    /// Delete raindrops by id, in batches of [`BATCH_SIZE`].
    pub async fn delete_many(
        &self,
        collection_id: i64,
        ids: &[i64],
        on_progress: Option<&ProgressCallback>,
    ) -> Result<(), RaindropError> {
        emit(on_progress, SyncProgress::DeletingRaindrops { count: ids.len() });

        for batch in ids.chunks(BATCH_SIZE) {
            let body = serde_json::to_vec(&DeleteBatch { ids: batch })?;
            let path = format!("/raindrops/{collection_id}");

            let response = self.request(HttpMethod::Delete, &path, body).await?;
            if !response.is_success() {
                return Err(RaindropError::Api {
                    operation: "bulk delete",
                    status: response.status,
                    message: response.body_text(),
                });
            }

            emit(on_progress, SyncProgress::DeletedBatch { size: batch.len() });
        }

        Ok(())
    }
}
