//! Rate-limited request gate for the Raindrop API.
//!
//! Every outbound Raindrop call goes through one [`RequestGate`], which
//! serializes traffic to at most one request per minimum interval and absorbs
//! a single 429 per request. The gate is an explicit object owned by the
//! client and injected where needed, never process-global state, so tests can
//! construct gates with short intervals and concurrency stays safe if callers
//! ever stop being strictly sequential.

use std::sync::Arc;
use std::time::Duration;

use chrono::{DateTime, Utc};
use governor::clock::DefaultClock;
use governor::state::{InMemoryState, NotKeyed};
use governor::{Quota, RateLimiter};

use crate::http::{HttpError, HttpRequest, HttpResponse, HttpTransport};

type DirectRateLimiter = RateLimiter<NotKeyed, InMemoryState, DefaultClock>;

/// Minimum spacing between consecutive Raindrop requests.
pub const MIN_REQUEST_INTERVAL: Duration = Duration::from_millis(500);

/// Backoff applied when a 429 carries no usable reset header.
const DEFAULT_BACKOFF_MS: i64 = 60_000;

/// Floor for the 429 backoff, whatever the reset header says.
const MIN_BACKOFF_MS: i64 = 1_000;

/// Gate enforcing minimum inter-request spacing and single-retry 429 backoff.
#[derive(Clone)]
pub struct RequestGate {
    limiter: Arc<DirectRateLimiter>,
}

impl RequestGate {
    /// Create a gate with a custom minimum interval (clamped to at least 1ms).
    #[must_use]
    pub fn new(min_interval: Duration) -> Self {
        let period = min_interval.max(Duration::from_millis(1));
        let quota = Quota::with_period(period).expect("non-zero gate period");
        Self {
            limiter: Arc::new(RateLimiter::direct(quota)),
        }
    }

    /// Send a request through the gate.
    ///
    /// Waits out the spacing interval, issues the request, and on a 429 sleeps
    /// for the server-hinted delay before retrying exactly once. Whatever the
    /// retry returns, 429 included, is handed back to the caller unchanged.
    pub async fn send(
        &self,
        transport: &dyn HttpTransport,
        request: HttpRequest,
    ) -> Result<HttpResponse, HttpError> {
        self.limiter.until_ready().await;
        let response = transport.send(request.clone()).await?;
        if response.status != 429 {
            return Ok(response);
        }

        let delay = backoff_delay(response.header("X-RateLimit-Reset"), Utc::now());
        tracing::warn!(
            delay_secs = delay.as_secs(),
            "Raindrop rate limited; sleeping before a single retry"
        );
        tokio::time::sleep(delay).await;

        self.limiter.until_ready().await;
        transport.send(request).await
    }
}

impl Default for RequestGate {
    fn default() -> Self {
        Self::new(MIN_REQUEST_INTERVAL)
    }
}

/// Compute the 429 backoff from an `X-RateLimit-Reset` header (unix seconds).
///
/// Absent or unparseable headers fall back to 60s; the result is floored at
/// 1s so a reset time in the past still yields a real pause.
fn backoff_delay(reset_header: Option<&str>, now: DateTime<Utc>) -> Duration {
    let computed_ms = reset_header
        .and_then(|h| h.trim().parse::<i64>().ok())
        .map(|reset_secs| {
            reset_secs
                .saturating_mul(1000)
                .saturating_sub(now.timestamp_millis())
        })
        .unwrap_or(DEFAULT_BACKOFF_MS);

    Duration::from_millis(computed_ms.max(MIN_BACKOFF_MS) as u64)
}
