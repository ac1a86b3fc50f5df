use crate::raw::RawVideo;
use crate::types::{VideoRecord, UNKNOWN};
use tracing::debug;

/// Flatten one upstream item into a [`VideoRecord`], substituting defaults for
/// every missing nested object or field. Never fails.
pub fn normalize(video: &RawVideo) -> VideoRecord {
    let hashtags = video
        .challenges
        .as_deref()
        .unwrap_or_default()
        .iter()
        .filter_map(|challenge| challenge.title.clone())
        .collect();

    let (sound_name, sound_url) = match &video.music {
        Some(music) => (
            music.title.clone().unwrap_or_else(|| UNKNOWN.to_string()),
            music.play_url.clone().filter(|url| !url.is_empty()),
        ),
        None => (UNKNOWN.to_string(), None),
    };

    let stats = video.stats.as_ref();
    let views = stats.and_then(|s| s.play_count).unwrap_or(0);
    let likes = stats.and_then(|s| s.digg_count).unwrap_or(0);
    let shares = stats.and_then(|s| s.share_count).unwrap_or(0);

    let author = video
        .author
        .as_ref()
        .and_then(|a| a.unique_id.clone())
        .unwrap_or_else(|| UNKNOWN.to_string());

    if stats.is_none() || video.music.is_none() || video.author.is_none() {
        debug!(
            id = video.id.as_deref().unwrap_or("-"),
            has_stats = stats.is_some(),
            has_music = video.music.is_some(),
            has_author = video.author.is_some(),
            "Substituted defaults for missing fields"
        );
    }

    VideoRecord {
        author,
        views,
        likes,
        shares,
        hashtags,
        sound_name,
        sound_url,
    }
}

/// Normalize a whole batch, keeping the upstream order.
pub fn normalize_all(videos: &[RawVideo]) -> Vec<VideoRecord> {
    videos.iter().map(normalize).collect()
}

impl From<&RawVideo> for VideoRecord {
    fn from(video: &RawVideo) -> Self {
        normalize(video)
    }
}
