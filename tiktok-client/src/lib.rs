pub mod api;
pub mod metrics;

pub use api::TikTokClient;
pub use metrics::{ApiMetrics, FeedMetrics, MetricsCollector};

use trendfinder_core::{CoreError, FeedSource, RawVideo};

impl FeedSource for TikTokClient {
    async fn fetch_trending(&self, limit: usize) -> Result<Vec<RawVideo>, CoreError> {
        self.get_trending(limit).await
    }

    async fn fetch_by_hashtag(
        &self,
        hashtag: &str,
        limit: usize,
    ) -> Result<Vec<RawVideo>, CoreError> {
        self.get_hashtag_videos(hashtag, limit).await
    }
}
