use trendfinder_core::{ConfigError, CoreError, ErrorExt, ReportError, TikTokApiError};

#[test]
fn test_error_codes() {
    let api_error = CoreError::TikTokApi(TikTokApiError::Unauthorized);
    assert_eq!(api_error.error_code(), "TIKTOK_API");

    let report_error = CoreError::Report(ReportError::OutputFolderMissing {
        path: "./missing".to_string(),
    });
    assert_eq!(report_error.error_code(), "REPORT");

    let config_error = CoreError::Config(ConfigError::InvalidValue {
        field: "trend_limit".to_string(),
        value: "0".to_string(),
    });
    assert_eq!(config_error.error_code(), "CONFIG");

    let input_error = CoreError::InvalidInput {
        message: "empty hashtag".to_string(),
    };
    assert_eq!(input_error.error_code(), "INVALID_INPUT");
}

#[test]
fn test_nested_error_codes() {
    assert_eq!(
        TikTokApiError::RateLimitExceeded { retry_after: 60 }.error_code(),
        "TIKTOK_RATE_LIMIT"
    );
    assert_eq!(
        TikTokApiError::HashtagNotFound {
            hashtag: "roblox".to_string()
        }
        .error_code(),
        "TIKTOK_HASHTAG_NOT_FOUND"
    );
    assert_eq!(
        ReportError::WriteFailed {
            path: "a.csv".to_string(),
            reason: "disk full".to_string()
        }
        .error_code(),
        "REPORT_WRITE_FAILED"
    );
}

#[test]
fn test_user_friendly_messages() {
    let api_error = CoreError::TikTokApi(TikTokApiError::HashtagNotFound {
        hashtag: "robloxdance".to_string(),
    });
    let message = api_error.user_friendly_message();
    assert!(message.contains("#robloxdance"));

    let config_error = CoreError::Config(ConfigError::InvalidValue {
        field: "tiktok.base_url".to_string(),
        value: "nope".to_string(),
    });
    let message = config_error.user_friendly_message();
    assert!(message.contains("tiktok.base_url"));

    let unauthorized = CoreError::TikTokApi(TikTokApiError::Unauthorized);
    assert!(unauthorized
        .user_friendly_message()
        .contains("TIKTOK_MS_TOKEN"));
}

#[test]
fn test_from_conversions() {
    let io_error = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied");
    let error: CoreError = io_error.into();
    assert!(matches!(error, CoreError::Io(_)));

    let error: CoreError = TikTokApiError::RequestTimeout.into();
    assert!(error.to_string().contains("Request timeout"));
}

#[test]
fn test_logging_does_not_panic() {
    let error = CoreError::TikTokApi(TikTokApiError::ServerError { status_code: 503 });
    error.log_error();
    error.log_warn();
}
