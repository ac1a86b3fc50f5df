mod cli;

use clap::Parser;
use cli::{Cli, Command};
use std::io::{self, BufRead, Write};
use std::process::ExitCode;
use tiktok_client::TikTokClient;
use trend_pipeline::{RunMode, RunOptions, TrendPipeline};
use trendfinder_core::keywords::{clean_hashtag, collect_keywords, prompt_hashtag};
use trendfinder_core::{CoreError, ErrorExt, FilterKeywordSet, TrendConfig};
use tracing_subscriber::EnvFilter;

const DEFAULT_LOG_FILTER: &str =
    "trendfinder=info,tiktok_client=info,trend_pipeline=info,trend_report=info";
const VERBOSE_LOG_FILTER: &str =
    "trendfinder=debug,trendfinder_core=debug,tiktok_client=debug,trend_pipeline=debug,trend_report=debug";

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    let default_filter = if cli.verbose {
        VERBOSE_LOG_FILTER
    } else {
        DEFAULT_LOG_FILTER
    };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter)),
        )
        .with_writer(io::stderr)
        .init();

    tracing::info!("Starting trendfinder");

    match run(cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            e.log_error();
            eprintln!("Error: {}", e.user_friendly_message());
            ExitCode::FAILURE
        }
    }
}

async fn run(cli: Cli) -> Result<(), CoreError> {
    let mut config = TrendConfig::load_or_default(cli.config.as_deref())?;
    config.apply_env();
    cli.apply_overrides(&mut config);
    config.validate()?;

    let mode = resolve_mode(&cli.command, &config, io::stdin().lock(), io::stdout())?;
    tracing::debug!(?mode, limit = config.trend_limit, "Resolved run mode");

    let client = TikTokClient::new(&config.tiktok)?;
    let options = RunOptions {
        mode,
        trend_limit: config.trend_limit,
        summary_limit: config.summary_limit,
        output_folder: config.output_folder.clone(),
    };
    let pipeline = TrendPipeline::new(client, options);

    let today = chrono::Local::now().date_naive();
    let report = pipeline.run(&mut io::stdout().lock(), today).await?;
    tracing::info!(
        fetched = report.fetched,
        matched = report.matched,
        path = %report.report_path.display(),
        "Run complete"
    );

    let metrics = pipeline.source().metrics();
    tracing::debug!("TikTok API: {}", metrics.snapshot().await.summary());
    if let Ok(exported) = metrics.export_json().await {
        tracing::debug!("TikTok API metrics: {}", exported);
    }

    Ok(())
}

/// Decide what to fetch. Stdin is only read when the command line and config
/// leave the keywords or hashtag open.
fn resolve_mode<R: BufRead, W: Write>(
    command: &Command,
    config: &TrendConfig,
    input: R,
    output: W,
) -> Result<RunMode, CoreError> {
    match command {
        Command::Trending { no_prompt, .. } => {
            let keywords = if !config.keywords.is_empty() || *no_prompt {
                FilterKeywordSet::from(config.keywords.clone())
            } else {
                collect_keywords(input, output)?
            };
            Ok(RunMode::Trending { keywords })
        }
        Command::Hashtag { tag } => {
            let tag = match tag {
                Some(tag) => clean_hashtag(tag),
                None => prompt_hashtag(input, output)?,
            };
            if tag.is_empty() {
                return Err(CoreError::InvalidInput {
                    message: "hashtag must not be empty".to_string(),
                });
            }
            // The tag becomes part of the report file name
            if tag.contains(['/', '\\']) {
                return Err(CoreError::InvalidInput {
                    message: format!("hashtag '{}' must not contain path separators", tag),
                });
            }
            Ok(RunMode::Hashtag { tag })
        }
    }
}
