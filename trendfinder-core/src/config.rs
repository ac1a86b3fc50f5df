use crate::error::ConfigError;
use serde::Deserialize;
use std::path::{Path, PathBuf};

pub const DEFAULT_TREND_LIMIT: usize = 50;
pub const DEFAULT_SUMMARY_LIMIT: usize = 5;
pub const DEFAULT_OUTPUT_FOLDER: &str = "./";
pub const DEFAULT_BASE_URL: &str = "https://www.tiktok.com";
pub const DEFAULT_USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 \
     (KHTML, like Gecko) Chrome/124.0.0.0 Safari/537.36";

pub const MS_TOKEN_ENV: &str = "TIKTOK_MS_TOKEN";
pub const OUTPUT_FOLDER_ENV: &str = "TRENDFINDER_OUTPUT_FOLDER";

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct TrendConfig {
    pub trend_limit: usize,
    pub summary_limit: usize,
    pub output_folder: PathBuf,
    pub keywords: Vec<String>,
    pub tiktok: TikTokConfig,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct TikTokConfig {
    pub base_url: String,
    pub user_agent: String,
    pub ms_token: Option<String>,
    pub timeout_secs: u64,
}

impl Default for TrendConfig {
    fn default() -> Self {
        Self {
            trend_limit: DEFAULT_TREND_LIMIT,
            summary_limit: DEFAULT_SUMMARY_LIMIT,
            output_folder: PathBuf::from(DEFAULT_OUTPUT_FOLDER),
            keywords: Vec::new(),
            tiktok: TikTokConfig::default(),
        }
    }
}

impl Default for TikTokConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            user_agent: DEFAULT_USER_AGENT.to_string(),
            ms_token: None,
            timeout_secs: 30,
        }
    }
}

impl TrendConfig {
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path).map_err(|e| match e.kind() {
            std::io::ErrorKind::NotFound => ConfigError::FileNotFound {
                path: path.display().to_string(),
            },
            _ => ConfigError::ReadFailed {
                path: path.display().to_string(),
                reason: e.to_string(),
            },
        })?;
        Self::from_toml_str(&contents)
    }

    pub fn load_or_default(path: Option<&Path>) -> Result<Self, ConfigError> {
        match path {
            Some(path) => Self::load(path),
            None => Ok(Self::default()),
        }
    }

    pub fn from_toml_str(contents: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(contents)?)
    }

    /// Overlay values from the process environment.
    pub fn apply_env(&mut self) {
        self.apply_env_from(|name| std::env::var(name).ok());
    }

    pub fn apply_env_from<F>(&mut self, lookup: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(token) = lookup(MS_TOKEN_ENV).filter(|t| !t.is_empty()) {
            self.tiktok.ms_token = Some(token);
        }
        if let Some(folder) = lookup(OUTPUT_FOLDER_ENV).filter(|f| !f.is_empty()) {
            self.output_folder = PathBuf::from(folder);
        }
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.trend_limit == 0 {
            return Err(ConfigError::InvalidValue {
                field: "trend_limit".to_string(),
                value: self.trend_limit.to_string(),
            });
        }

        let invalid_url = || ConfigError::InvalidValue {
            field: "tiktok.base_url".to_string(),
            value: self.tiktok.base_url.clone(),
        };
        let url = url::Url::parse(&self.tiktok.base_url).map_err(|_| invalid_url())?;
        if !matches!(url.scheme(), "http" | "https") || url.cannot_be_a_base() {
            return Err(invalid_url());
        }

        Ok(())
    }
}
