use std::io::{self, Write};
use trendfinder_core::{FeedKind, FilterKeywordSet, VideoRecord};

/// Records ordered by views, highest first. Equal view counts keep their input order.
pub fn rank_by_views(records: &[VideoRecord]) -> Vec<VideoRecord> {
    let mut ranked = records.to_vec();
    ranked.sort_by(|a, b| b.views.cmp(&a.views));
    ranked
}

/// `1234567` -> `"1,234,567"`.
pub fn format_count(count: u64) -> String {
    let digits = count.to_string();
    let mut formatted = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            formatted.push(',');
        }
        formatted.push(ch);
    }
    formatted
}

pub fn summary_title(kind: &FeedKind, keywords: &FilterKeywordSet) -> String {
    match kind {
        FeedKind::Hashtag(tag) => format!("Top TikToks for #{}", tag),
        FeedKind::Trending if keywords.is_empty() => "Top Trending TikToks".to_string(),
        FeedKind::Trending => format!(
            "Top Trending TikToks matching {}",
            keywords.iter().collect::<Vec<_>>().join("/")
        ),
    }
}

/// Print the `limit` most viewed records. Returns how many were printed.
pub fn print_top_summary<W: Write>(
    out: &mut W,
    records: &[VideoRecord],
    limit: usize,
    title: &str,
) -> io::Result<usize> {
    let ranked = rank_by_views(records);

    writeln!(out)?;
    writeln!(out, "===== {} =====", title)?;

    let mut printed = 0;
    for (idx, record) in ranked.iter().take(limit).enumerate() {
        writeln!(
            out,
            "{}. {} | Views: {} | Hashtags: {}",
            idx + 1,
            record.sound_name,
            format_count(record.views),
            record.hashtags.join(", ")
        )?;
        if let Some(url) = &record.sound_url {
            writeln!(out, "   🔗 {}", url)?;
        }
        printed += 1;
    }

    Ok(printed)
}
