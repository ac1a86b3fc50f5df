/// Placeholder for author and sound names the upstream payload did not carry.
pub const UNKNOWN: &str = "Unknown";

/// One normalized row per fetched video.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VideoRecord {
    pub author: String,
    pub views: u64,
    pub likes: u64,
    pub shares: u64,
    pub hashtags: Vec<String>,
    pub sound_name: String,
    pub sound_url: Option<String>,
}

impl VideoRecord {
    /// Filtering key: hashtags joined by spaces, then a space, then the sound name.
    pub fn combined_text(&self) -> String {
        format!("{} {}", self.hashtags.join(" "), self.sound_name)
    }
}

impl Default for VideoRecord {
    fn default() -> Self {
        Self {
            author: UNKNOWN.to_string(),
            views: 0,
            likes: 0,
            shares: 0,
            hashtags: Vec::new(),
            sound_name: UNKNOWN.to_string(),
            sound_url: None,
        }
    }
}

/// Which feed a run reads. Decides the report file name, its columns and the summary title.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FeedKind {
    Trending,
    Hashtag(String),
}

impl FeedKind {
    /// Trending reports carry the derived `AllText` column, hashtag reports do not.
    pub fn includes_combined_text(&self) -> bool {
        matches!(self, FeedKind::Trending)
    }
}

/// Ordered, non-deduplicated keywords supplied once per run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterKeywordSet(Vec<String>);

impl FilterKeywordSet {
    pub fn new() -> Self {
        Self(Vec::new())
    }

    pub fn push(&mut self, keyword: impl Into<String>) {
        self.0.push(keyword.into());
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(String::as_str)
    }

    pub fn as_slice(&self) -> &[String] {
        &self.0
    }
}

impl From<Vec<String>> for FilterKeywordSet {
    fn from(keywords: Vec<String>) -> Self {
        Self(keywords)
    }
}
