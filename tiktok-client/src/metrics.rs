use serde::Serialize;
use std::collections::BTreeMap;
use std::time::{Duration, SystemTime};
use tokio::sync::RwLock;

/// What one HTTP call to the web API ended with.
#[derive(Debug, Clone)]
pub struct RequestOutcome {
    pub endpoint: String,
    pub status_code: Option<u16>,
    pub elapsed: Duration,
    /// `None` when the call succeeded.
    pub error_kind: Option<&'static str>,
}

/// Paging totals for one feed endpoint.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct FeedMetrics {
    pub pages: u64,
    pub videos: u64,
    pub empty_pages: u64,
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct ApiMetrics {
    pub total_requests: u64,
    pub successful_requests: u64,
    pub failed_requests: u64,
    pub total_elapsed: Duration,
    pub slowest_request: Duration,
    pub last_request_time: Option<SystemTime>,
    pub errors_by_kind: BTreeMap<String, u64>,
    pub feeds: BTreeMap<String, FeedMetrics>,
}

impl ApiMetrics {
    pub fn average_elapsed(&self) -> Duration {
        match u32::try_from(self.total_requests) {
            Ok(0) | Err(_) => Duration::ZERO,
            Ok(n) => self.total_elapsed / n,
        }
    }

    pub fn videos_received(&self) -> u64 {
        self.feeds.values().map(|feed| feed.videos).sum()
    }

    pub fn pages_fetched(&self) -> u64 {
        self.feeds.values().map(|feed| feed.pages).sum()
    }

    /// One-line digest for the end-of-run log.
    pub fn summary(&self) -> String {
        format!(
            "{} requests ({} failed), {} videos over {} pages, avg {} ms, slowest {} ms",
            self.total_requests,
            self.failed_requests,
            self.videos_received(),
            self.pages_fetched(),
            self.average_elapsed().as_millis(),
            self.slowest_request.as_millis(),
        )
    }
}

/// Shared counters updated by the client on every request and every page.
#[derive(Debug, Default)]
pub struct MetricsCollector {
    state: RwLock<ApiMetrics>,
}

impl MetricsCollector {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn record_request(&self, outcome: RequestOutcome) {
        let mut state = self.state.write().await;

        state.total_requests += 1;
        state.total_elapsed += outcome.elapsed;
        state.slowest_request = state.slowest_request.max(outcome.elapsed);
        state.last_request_time = Some(SystemTime::now());

        match outcome.error_kind {
            None => state.successful_requests += 1,
            Some(kind) => {
                state.failed_requests += 1;
                *state.errors_by_kind.entry(kind.to_string()).or_default() += 1;
            }
        }
    }

    pub async fn record_page(&self, endpoint: &str, videos: usize) {
        let mut state = self.state.write().await;
        let feed = state.feeds.entry(endpoint.to_string()).or_default();

        feed.pages += 1;
        feed.videos += videos as u64;
        if videos == 0 {
            feed.empty_pages += 1;
        }
    }

    pub async fn snapshot(&self) -> ApiMetrics {
        self.state.read().await.clone()
    }

    pub async fn export_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(&self.snapshot().await)
    }
}
