use crate::metrics::{MetricsCollector, RequestOutcome};
use reqwest::{Client, Response, StatusCode};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer};
use std::time::{Duration, Instant};
use tracing::{debug, error, info, warn};
use trendfinder_core::{ConfigError, CoreError, RawVideo, TikTokApiError, TikTokConfig};
use url::Url;

pub const TRENDING_ENDPOINT: &str = "/api/recommend/item_list/";
pub const CHALLENGE_DETAIL_ENDPOINT: &str = "/api/challenge/detail/";
pub const CHALLENGE_ITEMS_ENDPOINT: &str = "/api/challenge/item_list/";

/// Largest page the web API serves per request.
pub const PAGE_SIZE: usize = 30;
/// Hard stop for feeds that keep reporting `hasMore` without new items.
const MAX_PAGES: usize = 20;

/// Web app id expected by the item list endpoints.
const WEB_AID: &str = "1988";

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ItemListResponse {
    #[serde(default)]
    pub status_code: Option<i64>,
    #[serde(default)]
    pub status_msg: Option<String>,
    #[serde(default)]
    pub item_list: Option<Vec<RawVideo>>,
    #[serde(default)]
    pub has_more: Option<bool>,
    #[serde(default, deserialize_with = "cursor_string")]
    pub cursor: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChallengeDetailResponse {
    #[serde(default)]
    pub status_code: Option<i64>,
    #[serde(default)]
    pub status_msg: Option<String>,
    #[serde(default)]
    pub challenge_info: Option<ChallengeInfo>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ChallengeInfo {
    #[serde(default)]
    pub challenge: Option<ChallengeData>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ChallengeData {
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default)]
    pub title: Option<String>,
}

fn cursor_string<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Option::<serde_json::Value>::deserialize(deserializer)? {
        Some(serde_json::Value::String(s)) => Some(s),
        Some(serde_json::Value::Number(n)) => Some(n.to_string()),
        _ => None,
    })
}

fn check_status(status_code: Option<i64>, status_msg: Option<&str>) -> Result<(), CoreError> {
    match status_code {
        None | Some(0) => Ok(()),
        Some(code) => Err(CoreError::TikTokApi(TikTokApiError::Api {
            status_code: code,
            message: status_msg.unwrap_or("no status message").to_string(),
        })),
    }
}

#[derive(Debug)]
pub struct TikTokClient {
    http_client: Client,
    base_url: Url,
    ms_token: Option<String>,
    metrics: MetricsCollector,
}

impl TikTokClient {
    pub fn new(config: &TikTokConfig) -> Result<Self, CoreError> {
        let base_url = Url::parse(&config.base_url).map_err(|_| ConfigError::InvalidValue {
            field: "tiktok.base_url".to_string(),
            value: config.base_url.clone(),
        })?;

        let http_client = Client::builder()
            .user_agent(&config.user_agent)
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()?;

        Ok(Self {
            http_client,
            base_url,
            ms_token: config.ms_token.clone().filter(|t| !t.is_empty()),
            metrics: MetricsCollector::new(),
        })
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    pub fn metrics(&self) -> &MetricsCollector {
        &self.metrics
    }

    pub async fn make_request(
        &self,
        endpoint: &str,
        query_params: &[(&str, String)],
    ) -> Result<Response, CoreError> {
        let url = self.base_url.join(endpoint).map_err(|e| {
            CoreError::TikTokApi(TikTokApiError::InvalidResponse {
                details: format!("Cannot build URL for {}: {}", endpoint, e),
            })
        })?;

        let mut request_builder = self
            .http_client
            .get(url)
            .query(&[("aid", WEB_AID), ("device_platform", "web_pc")])
            .query(query_params);

        if let Some(token) = &self.ms_token {
            request_builder = request_builder.query(&[("msToken", token.as_str())]);
        }

        info!("Making TikTok API request: GET {}", endpoint);
        let start_time = Instant::now();
        let outcome = request_builder.send().await;
        let response_time = start_time.elapsed();

        let (result, status_code, error_kind) = match outcome {
            Ok(response) => {
                let status = response.status();
                if status.is_success() {
                    debug!("Request successful: {} {}", status, endpoint);
                    (Ok(response), Some(status.as_u16()), None)
                } else {
                    error!("Request failed with status: {} for {}", status, endpoint);
                    let (err, kind) = Self::status_error(&response, endpoint);
                    (Err(err), Some(status.as_u16()), Some(kind))
                }
            }
            Err(e) => {
                error!("Network error for GET {}: {}", endpoint, e);
                if e.is_timeout() {
                    (
                        Err(CoreError::TikTokApi(TikTokApiError::RequestTimeout)),
                        None,
                        Some("timeout"),
                    )
                } else {
                    (Err(CoreError::Network(e)), None, Some("network_error"))
                }
            }
        };

        self.metrics
            .record_request(RequestOutcome {
                endpoint: endpoint.to_string(),
                status_code,
                elapsed: response_time,
                error_kind,
            })
            .await;

        result
    }

    fn status_error(response: &Response, endpoint: &str) -> (CoreError, &'static str) {
        let status = response.status();
        match status {
            StatusCode::TOO_MANY_REQUESTS => {
                let retry_after = response
                    .headers()
                    .get("retry-after")
                    .and_then(|v| v.to_str().ok())
                    .and_then(|v| v.parse::<u64>().ok())
                    .unwrap_or(60);
                warn!("Rate limited, retry after {} seconds", retry_after);
                (
                    TikTokApiError::RateLimitExceeded { retry_after }.into(),
                    "rate_limited",
                )
            }
            StatusCode::UNAUTHORIZED => (TikTokApiError::Unauthorized.into(), "unauthorized"),
            StatusCode::FORBIDDEN => (
                TikTokApiError::Forbidden {
                    resource: endpoint.to_string(),
                }
                .into(),
                "forbidden",
            ),
            s if s.is_server_error() => (
                TikTokApiError::ServerError {
                    status_code: s.as_u16(),
                }
                .into(),
                "server_error",
            ),
            s => (
                TikTokApiError::Api {
                    status_code: i64::from(s.as_u16()),
                    message: s.canonical_reason().unwrap_or("unexpected status").to_string(),
                }
                .into(),
                "http_error",
            ),
        }
    }

    async fn get_json<T: DeserializeOwned>(
        &self,
        endpoint: &str,
        query_params: &[(&str, String)],
    ) -> Result<T, CoreError> {
        let response = self.make_request(endpoint, query_params).await?;
        let body = response.text().await?;

        serde_json::from_str(&body).map_err(|e| {
            error!("Failed to parse response from {}: {}", endpoint, e);
            CoreError::TikTokApi(TikTokApiError::InvalidResponse {
                details: format!("Failed to parse response from {}", endpoint),
            })
        })
    }

    /// Follow `cursor` / `hasMore` until `limit` videos are collected or the feed runs dry.
    async fn collect_pages(
        &self,
        endpoint: &str,
        base_params: &[(&str, String)],
        limit: usize,
    ) -> Result<Vec<RawVideo>, CoreError> {
        let mut videos: Vec<RawVideo> = Vec::with_capacity(limit);
        let mut cursor = "0".to_string();

        for page in 0..MAX_PAGES {
            if videos.len() >= limit {
                break;
            }

            let count = (limit - videos.len()).min(PAGE_SIZE);
            let mut params = base_params.to_vec();
            params.push(("count", count.to_string()));
            params.push(("cursor", cursor.clone()));

            let listing: ItemListResponse = self.get_json(endpoint, &params).await?;
            check_status(listing.status_code, listing.status_msg.as_deref())?;

            let items = listing.item_list.unwrap_or_default();
            debug!(page, received = items.len(), "Fetched page from {}", endpoint);
            self.metrics.record_page(endpoint, items.len()).await;
            if items.is_empty() {
                break;
            }
            videos.extend(items);

            if !listing.has_more.unwrap_or(false) {
                break;
            }
            match listing.cursor {
                Some(next) if next != cursor => cursor = next,
                _ => {
                    warn!(
                        "{} reported more items without advancing the cursor, stopping at {}",
                        endpoint, cursor
                    );
                    break;
                }
            }
        }

        videos.truncate(limit);
        Ok(videos)
    }

    pub async fn get_trending(&self, limit: usize) -> Result<Vec<RawVideo>, CoreError> {
        let params = [("from_page", "fyp".to_string())];
        let videos = self.collect_pages(TRENDING_ENDPOINT, &params, limit).await?;

        info!("Retrieved {} trending videos", videos.len());
        Ok(videos)
    }

    pub async fn get_challenge_id(&self, hashtag: &str) -> Result<String, CoreError> {
        let params = [("challengeName", hashtag.to_string())];
        let detail: ChallengeDetailResponse =
            self.get_json(CHALLENGE_DETAIL_ENDPOINT, &params).await?;
        check_status(detail.status_code, detail.status_msg.as_deref())?;

        let id = detail
            .challenge_info
            .and_then(|info| info.challenge)
            .and_then(|challenge| challenge.id)
            .filter(|id| !id.is_empty())
            .ok_or_else(|| TikTokApiError::HashtagNotFound {
                hashtag: hashtag.to_string(),
            })?;

        debug!("Resolved #{} to challenge {}", hashtag, id);
        Ok(id)
    }

    pub async fn get_hashtag_videos(
        &self,
        hashtag: &str,
        limit: usize,
    ) -> Result<Vec<RawVideo>, CoreError> {
        let challenge_id = self.get_challenge_id(hashtag).await?;
        let params = [("challengeID", challenge_id)];
        let videos = self
            .collect_pages(CHALLENGE_ITEMS_ENDPOINT, &params, limit)
            .await?;

        info!("Retrieved {} videos for #{}", videos.len(), hashtag);
        Ok(videos)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_client_creation() {
        let client = TikTokClient::new(&TikTokConfig::default()).unwrap();
        assert_eq!(client.base_url().as_str(), "https://www.tiktok.com/");
        assert!(client.ms_token.is_none());
    }

    #[test]
    fn test_client_rejects_bad_base_url() {
        let config = TikTokConfig {
            base_url: "::not-a-url".to_string(),
            ..Default::default()
        };
        let result = TikTokClient::new(&config);
        assert!(matches!(
            result,
            Err(CoreError::Config(ConfigError::InvalidValue { .. }))
        ));
    }

    #[test]
    fn test_empty_ms_token_is_ignored() {
        let config = TikTokConfig {
            ms_token: Some(String::new()),
            ..Default::default()
        };
        let client = TikTokClient::new(&config).unwrap();
        assert!(client.ms_token.is_none());
    }

    #[test]
    fn test_item_list_cursor_forms() {
        let numeric: ItemListResponse =
            serde_json::from_str(r#"{"statusCode":0,"itemList":[],"hasMore":true,"cursor":30}"#)
                .unwrap();
        assert_eq!(numeric.cursor.as_deref(), Some("30"));

        let text: ItemListResponse =
            serde_json::from_str(r#"{"cursor":"1700000000","hasMore":false}"#).unwrap();
        assert_eq!(text.cursor.as_deref(), Some("1700000000"));
        assert!(text.item_list.is_none());
    }

    #[test]
    fn test_check_status() {
        assert!(check_status(None, None).is_ok());
        assert!(check_status(Some(0), None).is_ok());

        let err = check_status(Some(10201), Some("invalid params")).unwrap_err();
        assert!(matches!(
            err,
            CoreError::TikTokApi(TikTokApiError::Api { status_code: 10201, .. })
        ));
    }
}
