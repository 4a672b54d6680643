//! HTTP client for YouTube Data API v3 requests

use crate::error::YtError;
use crate::platform::endpoint::Endpoint;
use crate::platform::resource::{ErrorEnvelope, ListResponse};
use reqwest::{Client, ClientBuilder};
use serde_json::Value;
use std::fmt;
use std::time::Duration;
use tracing::{debug, warn};
use url::Url;

/// Public API root
pub const DEFAULT_BASE_URL: &str = "https://www.googleapis.com/youtube/v3";

const DEFAULT_USER_AGENT: &str = concat!("ytdata/", env!("CARGO_PKG_VERSION"));

/// HTTP client configuration
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// API root the endpoint paths are appended to
    pub base_url: String,
    /// Request timeout (none by default)
    pub timeout: Option<Duration>,
    /// User agent string
    pub user_agent: Option<String>,
    /// Proxy URL
    pub proxy_url: Option<String>,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout: None,
            user_agent: None,
            proxy_url: None,
        }
    }
}

impl ClientConfig {
    /// Point the client at another API root (a mock server, for instance)
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = Some(user_agent.into());
        self
    }

    pub fn with_proxy(mut self, proxy_url: impl Into<String>) -> Self {
        self.proxy_url = Some(proxy_url.into());
        self
    }
}

/// Key-authenticated client for the YouTube Data API
#[derive(Clone)]
pub struct ApiClient {
    client: Client,
    config: ClientConfig,
    key: String,
}

impl fmt::Debug for ApiClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ApiClient")
            .field("config", &self.config)
            .field("key", &"<redacted>")
            .finish()
    }
}

impl ApiClient {
    /// Create a new API client with default configuration
    pub fn new(key: impl Into<String>) -> Result<Self, YtError> {
        Self::with_config(key, ClientConfig::default())
    }

    /// Create a new API client with custom configuration
    pub fn with_config(key: impl Into<String>, config: ClientConfig) -> Result<Self, YtError> {
        // Reject a bad base URL up front rather than on the first request
        Url::parse(&config.base_url)?;

        let mut builder = ClientBuilder::new().gzip(true).brotli(true);

        if let Some(timeout) = config.timeout {
            builder = builder.timeout(timeout);
        }

        builder = builder.user_agent(
            config
                .user_agent
                .as_deref()
                .unwrap_or(DEFAULT_USER_AGENT),
        );

        if let Some(proxy_url) = &config.proxy_url {
            builder = builder.proxy(reqwest::Proxy::all(proxy_url)?);
        }

        Ok(Self {
            client: builder.build()?,
            config,
            key: key.into(),
        })
    }

    /// Get client configuration
    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// Full URL of an endpoint
    pub fn endpoint_url(&self, endpoint: Endpoint) -> String {
        format!(
            "{}/{}",
            self.config.base_url.trim_end_matches('/'),
            endpoint.path()
        )
    }

    /// Issue one GET against an endpoint and decode the list envelope.
    ///
    /// The API key is appended here and never logged. Transport errors are
    /// stripped of their URL, which would otherwise carry the key.
    pub async fn get(
        &self,
        endpoint: Endpoint,
        params: &[(&str, &str)],
    ) -> Result<ListResponse<Value>, YtError> {
        let url = self.endpoint_url(endpoint);
        debug!("GET {} {:?}", url, params);

        let response = self
            .client
            .get(&url)
            .query(params)
            .query(&[("key", self.key.as_str())])
            .header("Accept", "application/json")
            .send()
            .await
            .map_err(reqwest::Error::without_url)?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(reqwest::Error::without_url)?;

        if !status.is_success() {
            let message = api_error_message(&body)
                .or_else(|| status.canonical_reason().map(str::to_string))
                .unwrap_or_else(|| "unknown error".to_string());
            warn!(
                "YouTube API {} request failed with status {}: {}",
                endpoint, status, message
            );
            return Err(YtError::Api {
                status: status.as_u16(),
                message,
            });
        }

        let list: ListResponse<Value> = serde_json::from_str(&body)?;
        debug!("{} returned {} item(s)", endpoint, list.items.len());
        Ok(list)
    }
}

/// Pull a human readable message out of an error body
fn api_error_message(body: &str) -> Option<String> {
    if let Ok(envelope) = serde_json::from_str::<ErrorEnvelope>(body) {
        if !envelope.error.message.is_empty() {
            return Some(envelope.error.message);
        }
    }

    let trimmed = body.trim();
    (!trimmed.is_empty()).then(|| trimmed.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_client_config_defaults() {
        let config = ClientConfig::default();
        assert_eq!(config.base_url, DEFAULT_BASE_URL);
        assert!(config.timeout.is_none());
        assert!(config.user_agent.is_none());
        assert!(config.proxy_url.is_none());
    }

    #[test]
    fn test_client_config_builders() {
        let config = ClientConfig::default()
            .with_base_url("http://127.0.0.1:9000/")
            .with_timeout(Duration::from_secs(5))
            .with_user_agent("tests");
        assert_eq!(config.base_url, "http://127.0.0.1:9000/");
        assert_eq!(config.timeout, Some(Duration::from_secs(5)));
        assert_eq!(config.user_agent.as_deref(), Some("tests"));
    }

    #[test]
    fn test_endpoint_url() {
        let client = ApiClient::new("key").unwrap();
        assert_eq!(
            client.endpoint_url(Endpoint::Videos),
            "https://www.googleapis.com/youtube/v3/videos"
        );

        let client = ApiClient::with_config(
            "key",
            ClientConfig::default().with_base_url("http://localhost:8080/v3/"),
        )
        .unwrap();
        assert_eq!(
            client.endpoint_url(Endpoint::PlaylistItems),
            "http://localhost:8080/v3/playlistItems"
        );
    }

    #[test]
    fn test_invalid_base_url_rejected() {
        let err = ApiClient::with_config("key", ClientConfig::default().with_base_url("not a url"))
            .unwrap_err();
        assert!(matches!(err, YtError::UrlError(_)));
    }

    #[tokio::test]
    async fn test_transport_error_hides_key() {
        // Nothing listens on port 1
        let client = ApiClient::with_config(
            "SUPER-SECRET-KEY",
            ClientConfig::default()
                .with_base_url("http://127.0.0.1:1")
                .with_timeout(Duration::from_secs(5)),
        )
        .unwrap();

        let err = client
            .get(Endpoint::Videos, &[("id", "dQw4w9WgXcQ")])
            .await
            .unwrap_err();

        assert!(matches!(err, YtError::Http(_)));
        assert!(!err.to_string().contains("SUPER-SECRET-KEY"));
        assert!(!format!("{:?}", err).contains("SUPER-SECRET-KEY"));
    }

    #[test]
    fn test_debug_redacts_key() {
        let client = ApiClient::new("SUPER-SECRET-KEY").unwrap();
        let printed = format!("{:?}", client);
        assert!(printed.contains("<redacted>"));
        assert!(!printed.contains("SUPER-SECRET-KEY"));
    }

    #[test]
    fn test_api_error_message() {
        let body = r#"{"error":{"code":403,"message":"The request cannot be completed because you have exceeded your quota."}}"#;
        assert_eq!(
            api_error_message(body).as_deref(),
            Some("The request cannot be completed because you have exceeded your quota.")
        );
        assert_eq!(api_error_message("  Bad Gateway \n").as_deref(), Some("Bad Gateway"));
        assert_eq!(api_error_message(""), None);
    }
}
