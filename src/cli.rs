use clap::{Parser, Subcommand};
use std::path::PathBuf;
use trendfinder_core::TrendConfig;

#[derive(Debug, Parser)]
#[command(
    name = "trendfinder",
    about = "Fetch TikTok videos, filter them by keyword and save a dated CSV report"
)]
pub struct Cli {
    /// Path to a TOML config file
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Folder the CSV report is written to
    #[arg(long, global = true)]
    pub output_folder: Option<PathBuf>,

    /// Number of videos to fetch
    #[arg(long, global = true)]
    pub limit: Option<usize>,

    /// Number of videos shown in the console summary
    #[arg(long, global = true)]
    pub top: Option<usize>,

    /// Log at debug level unless RUST_LOG says otherwise
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Filter the trending feed by keywords
    Trending {
        /// Keyword to match against hashtags and sound names (repeatable)
        #[arg(short, long = "keyword")]
        keywords: Vec<String>,

        /// Never prompt for keywords; an empty keyword list matches nothing
        #[arg(long)]
        no_prompt: bool,
    },
    /// Report on the videos for one hashtag
    Hashtag {
        /// Hashtag to fetch, with or without the leading '#'
        tag: Option<String>,
    },
}

impl Cli {
    /// Command line values win over file and environment settings.
    pub fn apply_overrides(&self, config: &mut TrendConfig) {
        if let Some(folder) = &self.output_folder {
            config.output_folder = folder.clone();
        }
        if let Some(limit) = self.limit {
            config.trend_limit = limit;
        }
        if let Some(top) = self.top {
            config.summary_limit = top;
        }
        if let Command::Trending { keywords, .. } = &self.command {
            if !keywords.is_empty() {
                config.keywords = keywords.clone();
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_trending_keywords() {
        let cli = Cli::parse_from([
            "trendfinder",
            "--limit",
            "20",
            "trending",
            "-k",
            "roblox",
            "--keyword",
            "dance",
        ]);
        let mut config = TrendConfig::default();
        cli.apply_overrides(&mut config);

        assert_eq!(config.trend_limit, 20);
        assert_eq!(config.summary_limit, 5);
        assert_eq!(config.keywords, vec!["roblox", "dance"]);
    }

    #[test]
    fn test_cli_keywords_replace_config_keywords() {
        let cli = Cli::parse_from(["trendfinder", "trending", "-k", "gaming"]);
        let mut config = TrendConfig {
            keywords: vec!["dance".to_string()],
            ..Default::default()
        };
        cli.apply_overrides(&mut config);
        assert_eq!(config.keywords, vec!["gaming"]);

        let cli = Cli::parse_from(["trendfinder", "trending", "--no-prompt"]);
        let mut config = TrendConfig {
            keywords: vec!["dance".to_string()],
            ..Default::default()
        };
        cli.apply_overrides(&mut config);
        assert_eq!(config.keywords, vec!["dance"]);
    }

    #[test]
    fn test_parse_hashtag() {
        let cli = Cli::parse_from([
            "trendfinder",
            "hashtag",
            "#robloxdance",
            "--output-folder",
            "reports",
            "--top",
            "3",
        ]);
        assert!(matches!(
            cli.command,
            Command::Hashtag { tag: Some(ref t) } if t == "#robloxdance"
        ));

        let mut config = TrendConfig::default();
        cli.apply_overrides(&mut config);
        assert_eq!(config.output_folder, PathBuf::from("reports"));
        assert_eq!(config.summary_limit, 3);
    }

    #[test]
    fn test_subcommand_required() {
        assert!(Cli::try_parse_from(["trendfinder"]).is_err());
    }
}
