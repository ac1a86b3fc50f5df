use crate::types::{FilterKeywordSet, VideoRecord};

/// True when any keyword occurs in `text`, ignoring case. Substring match,
/// so "dance" matches "dancer". An empty keyword set never matches.
pub fn contains_keywords(text: &str, keywords: &FilterKeywordSet) -> bool {
    let text_lower = text.to_lowercase();
    keywords
        .iter()
        .any(|keyword| text_lower.contains(&keyword.to_lowercase()))
}

/// Records whose combined text matches at least one keyword, in input order.
pub fn filter_by_keywords(records: &[VideoRecord], keywords: &FilterKeywordSet) -> Vec<VideoRecord> {
    if keywords.is_empty() {
        tracing::warn!("No filter keywords supplied; every record will be rejected");
    }

    records
        .iter()
        .filter(|record| contains_keywords(&record.combined_text(), keywords))
        .cloned()
        .collect()
}
