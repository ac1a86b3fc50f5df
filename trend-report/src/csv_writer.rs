use chrono::NaiveDate;
use std::path::{Path, PathBuf};
use tracing::info;
use trendfinder_core::{CoreError, FeedKind, ReportError, VideoRecord};

pub const BASE_COLUMNS: [&str; 7] = [
    "Author",
    "Views",
    "Likes",
    "Shares",
    "Hashtags",
    "Sound",
    "Sound URL",
];
pub const COMBINED_TEXT_COLUMN: &str = "AllText";

/// `tiktok_trends_{date}.csv` or `tiktok_trends_{hashtag}_{date}.csv` inside `folder`.
pub fn report_path(folder: &Path, kind: &FeedKind, date: NaiveDate) -> PathBuf {
    let date = date.format("%Y-%m-%d");
    let file_name = match kind {
        FeedKind::Trending => format!("tiktok_trends_{}.csv", date),
        FeedKind::Hashtag(tag) => format!("tiktok_trends_{}_{}.csv", tag, date),
    };
    folder.join(file_name)
}

pub fn header(kind: &FeedKind) -> Vec<&'static str> {
    let mut columns = BASE_COLUMNS.to_vec();
    if kind.includes_combined_text() {
        columns.push(COMBINED_TEXT_COLUMN);
    }
    columns
}

/// Hashtags rendered as a list literal, e.g. `['roblox', 'dance']`.
pub fn format_hashtags(hashtags: &[String]) -> String {
    let quoted: Vec<String> = hashtags.iter().map(|tag| quote_literal(tag)).collect();
    format!("[{}]", quoted.join(", "))
}

fn quote_literal(value: &str) -> String {
    if value.contains('\'') && !value.contains('"') {
        return format!("\"{}\"", value.replace('\\', "\\\\"));
    }
    format!("'{}'", value.replace('\\', "\\\\").replace('\'', "\\'"))
}

pub fn record_row(record: &VideoRecord, kind: &FeedKind) -> Vec<String> {
    let mut row = vec![
        record.author.clone(),
        record.views.to_string(),
        record.likes.to_string(),
        record.shares.to_string(),
        format_hashtags(&record.hashtags),
        record.sound_name.clone(),
        record.sound_url.clone().unwrap_or_default(),
    ];
    if kind.includes_combined_text() {
        row.push(record.combined_text());
    }
    row
}

/// Write `records` in the given order, replacing any existing file at `path`.
/// The containing folder must already exist. Returns the number of rows written.
pub fn write_report(
    path: &Path,
    records: &[VideoRecord],
    kind: &FeedKind,
) -> Result<usize, CoreError> {
    if let Some(folder) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        if !folder.is_dir() {
            return Err(ReportError::OutputFolderMissing {
                path: folder.display().to_string(),
            }
            .into());
        }
    }

    let mut writer = csv::Writer::from_path(path).map_err(|e| ReportError::WriteFailed {
        path: path.display().to_string(),
        reason: e.to_string(),
    })?;

    writer.write_record(header(kind))?;
    for record in records {
        writer.write_record(record_row(record, kind))?;
    }
    writer.flush()?;

    info!("Wrote {} rows to {}", records.len(), path.display());
    Ok(records.len())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::env;
    use std::fs;

    fn temp_folder() -> PathBuf {
        let folder = env::temp_dir().join(format!("trend_report_test_{}", uuid::Uuid::new_v4()));
        fs::create_dir_all(&folder).expect("Failed to create test folder");
        folder
    }

    fn sample_records() -> Vec<VideoRecord> {
        vec![
            VideoRecord {
                author: "creator1".to_string(),
                views: 100,
                likes: 10,
                shares: 1,
                hashtags: vec!["roblox".to_string(), "dance".to_string()],
                sound_name: "Beat, Drop".to_string(),
                sound_url: Some("https://cdn.example.com/beat.mp3".to_string()),
            },
            VideoRecord {
                views: 500,
                ..Default::default()
            },
        ]
    }

    fn date() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 3, 9).unwrap()
    }

    #[test]
    fn test_report_path() {
        let folder = Path::new("./");
        assert_eq!(
            report_path(folder, &FeedKind::Trending, date()),
            PathBuf::from("./tiktok_trends_2024-03-09.csv")
        );
        assert_eq!(
            report_path(folder, &FeedKind::Hashtag("robloxdance".to_string()), date()),
            PathBuf::from("./tiktok_trends_robloxdance_2024-03-09.csv")
        );
        assert_eq!(
            report_path(Path::new("reports"), &FeedKind::Trending, date()),
            PathBuf::from("reports/tiktok_trends_2024-03-09.csv")
        );
    }

    #[test]
    fn test_format_hashtags() {
        assert_eq!(format_hashtags(&[]), "[]");
        assert_eq!(
            format_hashtags(&["roblox".to_string(), "dance".to_string()]),
            "['roblox', 'dance']"
        );
        assert_eq!(format_hashtags(&["it's".to_string()]), "[\"it's\"]");
    }

    #[test]
    fn test_round_trip_trending() {
        let folder = temp_folder();
        let path = report_path(&folder, &FeedKind::Trending, date());
        let records = sample_records();

        let written = write_report(&path, &records, &FeedKind::Trending).unwrap();
        assert_eq!(written, 2);

        let mut reader = csv::Reader::from_path(&path).unwrap();
        let headers = reader.headers().unwrap().clone();
        assert_eq!(
            headers.iter().collect::<Vec<_>>(),
            vec!["Author", "Views", "Likes", "Shares", "Hashtags", "Sound", "Sound URL", "AllText"]
        );

        let rows: Vec<csv::StringRecord> = reader.records().map(|r| r.unwrap()).collect();
        assert_eq!(rows.len(), records.len());
        for (row, record) in rows.iter().zip(&records) {
            let expected = record_row(record, &FeedKind::Trending);
            assert_eq!(row.iter().collect::<Vec<_>>(), expected);
        }

        // input order is kept, not re-sorted by views
        assert_eq!(&rows[0][0], "creator1");
        assert_eq!(&rows[0][5], "Beat, Drop");
        assert_eq!(&rows[0][7], "roblox dance Beat, Drop");
        assert_eq!(&rows[1][6], "");

        fs::remove_dir_all(folder).ok();
    }

    #[test]
    fn test_hashtag_report_has_no_combined_text() {
        let folder = temp_folder();
        let kind = FeedKind::Hashtag("dance".to_string());
        let path = report_path(&folder, &kind, date());

        write_report(&path, &sample_records(), &kind).unwrap();

        let mut reader = csv::Reader::from_path(&path).unwrap();
        let headers = reader.headers().unwrap().clone();
        assert_eq!(headers.len(), 7);
        assert!(!headers.iter().any(|h| h == COMBINED_TEXT_COLUMN));
        assert_eq!(reader.records().count(), 2);

        fs::remove_dir_all(folder).ok();
    }

    #[test]
    fn test_empty_report_still_has_header() {
        let folder = temp_folder();
        let path = report_path(&folder, &FeedKind::Trending, date());

        assert_eq!(write_report(&path, &[], &FeedKind::Trending).unwrap(), 0);
        let contents = fs::read_to_string(&path).unwrap();
        assert_eq!(
            contents,
            "Author,Views,Likes,Shares,Hashtags,Sound,Sound URL,AllText\n"
        );

        fs::remove_dir_all(folder).ok();
    }

    #[test]
    fn test_overwrites_existing_report() {
        let folder = temp_folder();
        let path = report_path(&folder, &FeedKind::Trending, date());

        write_report(&path, &sample_records(), &FeedKind::Trending).unwrap();
        write_report(&path, &sample_records()[1..], &FeedKind::Trending).unwrap();

        let mut reader = csv::Reader::from_path(&path).unwrap();
        assert_eq!(reader.records().count(), 1);

        fs::remove_dir_all(folder).ok();
    }

    #[test]
    fn test_missing_output_folder() {
        let folder = env::temp_dir().join(format!("missing_{}", uuid::Uuid::new_v4()));
        let path = report_path(&folder, &FeedKind::Trending, date());

        let result = write_report(&path, &sample_records(), &FeedKind::Trending);
        assert!(matches!(
            result,
            Err(CoreError::Report(ReportError::OutputFolderMissing { .. }))
        ));
        assert!(!folder.exists());
    }
}
