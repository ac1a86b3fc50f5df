use thiserror::Error;

#[derive(Error, Debug)]
pub enum CoreError {
    #[error("TikTok API error: {0}")]
    TikTokApi(#[from] TikTokApiError),

    #[error("Report error: {0}")]
    Report(#[from] ReportError),

    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("Invalid input: {message}")]
    InvalidInput { message: String },
}

#[derive(Error, Debug, Clone)]
pub enum TikTokApiError {
    #[error("Unauthorized: session token missing or expired")]
    Unauthorized,

    #[error("Forbidden access to resource: {resource}")]
    Forbidden { resource: String },

    #[error("Rate limit exceeded. Retry after {retry_after} seconds")]
    RateLimitExceeded { retry_after: u64 },

    #[error("Hashtag not found: {hashtag}")]
    HashtagNotFound { hashtag: String },

    #[error("Request timeout")]
    RequestTimeout,

    #[error("Invalid API response: {details}")]
    InvalidResponse { details: String },

    #[error("Server error: {status_code}")]
    ServerError { status_code: u16 },

    #[error("API returned status {status_code}: {message}")]
    Api { status_code: i64, message: String },
}

#[derive(Error, Debug)]
pub enum ReportError {
    #[error("Output folder does not exist: {path}")]
    OutputFolderMissing { path: String },

    #[error("Failed to write report {path}: {reason}")]
    WriteFailed { path: String, reason: String },
}

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Configuration file not found: {path}")]
    FileNotFound { path: String },

    #[error("Failed to read configuration {path}: {reason}")]
    ReadFailed { path: String, reason: String },

    #[error("Invalid value for {field}: {value}")]
    InvalidValue { field: String, value: String },

    #[error("Configuration parsing error: {0}")]
    Parse(#[from] toml::de::Error),
}
