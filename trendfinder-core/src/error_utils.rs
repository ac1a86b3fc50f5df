use crate::error::*;
use tracing::{error, warn};

pub trait ErrorExt {
    fn log_error(&self) -> &Self;
    fn log_warn(&self) -> &Self;
    fn user_friendly_message(&self) -> String;
    fn error_code(&self) -> String;
}

impl ErrorExt for CoreError {
    fn log_error(&self) -> &Self {
        error!("CoreError: {}", self);
        match self {
            CoreError::TikTokApi(e) => {
                error!("TikTok API error details: {:?}", e);
            }
            CoreError::Report(e) => {
                error!("Report error details: {:?}", e);
            }
            CoreError::Config(e) => {
                error!("Configuration error details: {:?}", e);
            }
            _ => {}
        }
        self
    }

    fn log_warn(&self) -> &Self {
        warn!("CoreError (warning): {}", self);
        self
    }

    fn user_friendly_message(&self) -> String {
        match self {
            CoreError::TikTokApi(e) => e.user_friendly_message(),
            CoreError::Report(e) => e.user_friendly_message(),
            CoreError::Config(e) => e.user_friendly_message(),
            CoreError::Network(_) => {
                "Network connection error. Please check your internet connection.".to_string()
            }
            CoreError::Io(e) => format!("File or console error: {}", e),
            CoreError::Csv(e) => format!("Could not write the CSV report: {}", e),
            CoreError::InvalidInput { message } => {
                format!("Invalid input: {}. Please check your input and try again.", message)
            }
            CoreError::Serialization(_) => {
                "Received data that could not be decoded. Please try again later.".to_string()
            }
        }
    }

    fn error_code(&self) -> String {
        match self {
            CoreError::TikTokApi(_) => "TIKTOK_API".to_string(),
            CoreError::Report(_) => "REPORT".to_string(),
            CoreError::Config(_) => "CONFIG".to_string(),
            CoreError::Io(_) => "IO".to_string(),
            CoreError::Serialization(_) => "SERIALIZATION".to_string(),
            CoreError::Network(_) => "NETWORK".to_string(),
            CoreError::Csv(_) => "CSV".to_string(),
            CoreError::InvalidInput { .. } => "INVALID_INPUT".to_string(),
        }
    }
}

impl ErrorExt for TikTokApiError {
    fn log_error(&self) -> &Self {
        error!("TikTokApiError: {}", self);
        self
    }

    fn log_warn(&self) -> &Self {
        warn!("TikTokApiError (warning): {}", self);
        self
    }

    fn user_friendly_message(&self) -> String {
        match self {
            TikTokApiError::Unauthorized => {
                "TikTok rejected the session. Set a fresh ms_token (TIKTOK_MS_TOKEN) and retry."
                    .to_string()
            }
            TikTokApiError::Forbidden { resource } => format!(
                "Access denied to {}. TikTok may be blocking automated requests.",
                resource
            ),
            TikTokApiError::RateLimitExceeded { retry_after } => format!(
                "Too many requests. Please wait {} seconds before trying again.",
                retry_after
            ),
            TikTokApiError::HashtagNotFound { hashtag } => {
                format!("Hashtag '#{}' was not found on TikTok.", hashtag)
            }
            TikTokApiError::RequestTimeout => {
                "Request to TikTok timed out. Please try again.".to_string()
            }
            _ => "TikTok API error occurred. Please try again later.".to_string(),
        }
    }

    fn error_code(&self) -> String {
        match self {
            TikTokApiError::Unauthorized => "TIKTOK_UNAUTHORIZED".to_string(),
            TikTokApiError::Forbidden { .. } => "TIKTOK_FORBIDDEN".to_string(),
            TikTokApiError::RateLimitExceeded { .. } => "TIKTOK_RATE_LIMIT".to_string(),
            TikTokApiError::HashtagNotFound { .. } => "TIKTOK_HASHTAG_NOT_FOUND".to_string(),
            TikTokApiError::RequestTimeout => "TIKTOK_TIMEOUT".to_string(),
            TikTokApiError::InvalidResponse { .. } => "TIKTOK_INVALID_RESPONSE".to_string(),
            TikTokApiError::ServerError { .. } => "TIKTOK_SERVER_ERROR".to_string(),
            TikTokApiError::Api { .. } => "TIKTOK_API_STATUS".to_string(),
        }
    }
}

impl ErrorExt for ReportError {
    fn log_error(&self) -> &Self {
        error!("ReportError: {}", self);
        self
    }

    fn log_warn(&self) -> &Self {
        warn!("ReportError (warning): {}", self);
        self
    }

    fn user_friendly_message(&self) -> String {
        match self {
            ReportError::OutputFolderMissing { path } => format!(
                "Output folder '{}' does not exist. Create it or pass --output-folder.",
                path
            ),
            ReportError::WriteFailed { path, .. } => {
                format!("Could not write the report to '{}'.", path)
            }
        }
    }

    fn error_code(&self) -> String {
        match self {
            ReportError::OutputFolderMissing { .. } => "REPORT_FOLDER_MISSING".to_string(),
            ReportError::WriteFailed { .. } => "REPORT_WRITE_FAILED".to_string(),
        }
    }
}

impl ErrorExt for ConfigError {
    fn log_error(&self) -> &Self {
        error!("ConfigError: {}", self);
        self
    }

    fn log_warn(&self) -> &Self {
        warn!("ConfigError (warning): {}", self);
        self
    }

    fn user_friendly_message(&self) -> String {
        match self {
            ConfigError::FileNotFound { path } => {
                format!("Configuration file '{}' not found.", path)
            }
            ConfigError::ReadFailed { path, .. } => {
                format!("Configuration file '{}' could not be read.", path)
            }
            ConfigError::InvalidValue { field, .. } => {
                format!("Invalid value for configuration field '{}'.", field)
            }
            ConfigError::Parse(_) => {
                "Configuration file format is invalid. Please check the settings.".to_string()
            }
        }
    }

    fn error_code(&self) -> String {
        match self {
            ConfigError::FileNotFound { .. } => "CONFIG_FILE_NOT_FOUND".to_string(),
            ConfigError::ReadFailed { .. } => "CONFIG_READ_FAILED".to_string(),
            ConfigError::InvalidValue { .. } => "CONFIG_INVALID_VALUE".to_string(),
            ConfigError::Parse(_) => "CONFIG_PARSE_ERROR".to_string(),
        }
    }
}
