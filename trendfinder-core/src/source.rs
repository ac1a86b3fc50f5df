use crate::error::CoreError;
use crate::raw::RawVideo;

/// A place videos can be fetched from. The HTTP client implements this for
/// TikTok; tests implement it over canned data.
pub trait FeedSource {
    /// Up to `limit` videos from the global trending feed.
    async fn fetch_trending(&self, limit: usize) -> Result<Vec<RawVideo>, CoreError>;

    /// Up to `limit` videos tagged with `hashtag` (no leading `#`).
    async fn fetch_by_hashtag(
        &self,
        hashtag: &str,
        limit: usize,
    ) -> Result<Vec<RawVideo>, CoreError>;
}
