//! Runs one fetch → filter → report pass over a [`FeedSource`].
//!
//! Every stage consumes the full output of the previous one and a failure at
//! any stage aborts the rest of the run. Progress lines go to the supplied
//! writer; structured logs go through `tracing`.

use chrono::NaiveDate;
use std::io::Write;
use std::path::PathBuf;
use tracing::info;
use trend_report::{print_top_summary, report_path, summary_title, write_report};
use trendfinder_core::{
    filter_by_keywords, normalize_all, CoreError, FeedKind, FeedSource, FilterKeywordSet,
};

#[derive(Debug, Clone)]
pub enum RunMode {
    Trending { keywords: FilterKeywordSet },
    Hashtag { tag: String },
}

impl RunMode {
    pub fn feed_kind(&self) -> FeedKind {
        match self {
            RunMode::Trending { .. } => FeedKind::Trending,
            RunMode::Hashtag { tag } => FeedKind::Hashtag(tag.clone()),
        }
    }
}

#[derive(Debug, Clone)]
pub struct RunOptions {
    pub mode: RunMode,
    pub trend_limit: usize,
    pub summary_limit: usize,
    pub output_folder: PathBuf,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunReport {
    pub fetched: usize,
    pub matched: usize,
    pub report_path: PathBuf,
    pub summarized: usize,
}

pub struct TrendPipeline<S> {
    source: S,
    options: RunOptions,
}

impl<S: FeedSource> TrendPipeline<S> {
    pub fn new(source: S, options: RunOptions) -> Self {
        Self { source, options }
    }

    pub fn source(&self) -> &S {
        &self.source
    }

    pub async fn run<W: Write>(&self, out: &mut W, date: NaiveDate) -> Result<RunReport, CoreError> {
        let options = &self.options;
        let kind = options.mode.feed_kind();

        let raw = match &options.mode {
            RunMode::Trending { .. } => {
                writeln!(out, "[🔍] Fetching trending TikToks...")?;
                self.source.fetch_trending(options.trend_limit).await?
            }
            RunMode::Hashtag { tag } => {
                writeln!(out, "[🔍] Fetching TikToks for #{}...", tag)?;
                self.source.fetch_by_hashtag(tag, options.trend_limit).await?
            }
        };

        let records = normalize_all(&raw);
        let fetched = records.len();
        writeln!(out, "[📊] {} total trends fetched.", fetched)?;
        info!(fetched, "Fetch stage complete");

        let (records, keywords) = match &options.mode {
            RunMode::Trending { keywords } => {
                let matched = filter_by_keywords(&records, keywords);
                writeln!(
                    out,
                    "[🎯] {} trends match keywords: {}.",
                    matched.len(),
                    keywords.iter().collect::<Vec<_>>().join(", ")
                )?;
                info!(fetched, matched = matched.len(), "Filter stage complete");
                (matched, keywords.clone())
            }
            RunMode::Hashtag { .. } => (records, FilterKeywordSet::new()),
        };

        let path = report_path(&options.output_folder, &kind, date);
        write_report(&path, &records, &kind)?;
        writeln!(out, "[✔] Saved trend report to {}", path.display())?;

        let title = summary_title(&kind, &keywords);
        let summarized = print_top_summary(out, &records, options.summary_limit, &title)?;

        Ok(RunReport {
            fetched,
            matched: records.len(),
            report_path: path,
            summarized,
        })
    }
}
