//! HTTP client for flixhq.to
//!
//! Thin wrapper around `reqwest` with fixed browser-like headers.
//! No retries and no rate limiting: each user action costs a handful
//! of sequential requests.

use std::time::Duration;

use reqwest::header::{HeaderMap, HeaderValue, REFERER};
use serde_json::Value;
use tracing::debug;

use crate::error::{FlixhqError, Result};

const BASE_URL: &str = "https://flixhq.to";
const USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/119.0.0.0 Safari/537.36";

/// Configuration for the HTTP client
///
/// Built once and injected into [`FlixhqClient`]; never mutated afterwards.
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Site root without trailing slash (default: https://flixhq.to)
    pub base_url: String,
    /// User-Agent header sent with every request
    pub user_agent: String,
    /// Referer header sent with every request (default: site root)
    pub referer: String,
    /// Connect + read timeout in seconds (default: 15)
    pub timeout_secs: u64,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self::with_base_url(BASE_URL)
    }
}

impl ClientConfig {
    /// Default configuration pointed at another site root
    ///
    /// The referer follows the base URL.
    pub fn with_base_url(base_url: &str) -> Self {
        let base_url = base_url.trim_end_matches('/').to_string();
        Self {
            referer: format!("{}/", base_url),
            base_url,
            user_agent: USER_AGENT.to_string(),
            timeout_secs: 15,
        }
    }
}

/// HTTP client wrapper for flixhq.to
///
/// Follows redirects, enforces the configured timeout and turns
/// non-2xx responses into [`FlixhqError::Status`].
#[derive(Debug, Clone)]
pub struct FlixhqClient {
    client: reqwest::Client,
    base_url: String,
}

impl FlixhqClient {
    /// Create a new client with default configuration
    pub fn new() -> Result<Self> {
        Self::with_config(ClientConfig::default())
    }

    /// Create a new client with custom configuration
    pub fn with_config(config: ClientConfig) -> Result<Self> {
        let referer = HeaderValue::from_str(&config.referer).map_err(|_| {
            FlixhqError::ParseError(format!("Invalid referer header: {}", config.referer))
        })?;

        let mut headers = HeaderMap::new();
        headers.insert(REFERER, referer);

        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .connect_timeout(Duration::from_secs(config.timeout_secs))
            .user_agent(config.user_agent)
            .default_headers(headers)
            .build()
            .map_err(FlixhqError::HttpError)?;

        Ok(Self {
            client,
            base_url: config.base_url,
        })
    }

    /// Absolute URL for a site-relative path
    pub fn url_for(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// Fetch a page or HTML fragment as text
    ///
    /// # Arguments
    /// * `path` - Site-relative path (e.g., "/search/inception")
    ///
    /// # Errors
    /// - `HttpError` - Network or timeout failure
    /// - `Status` - Non-2xx response
    pub async fn fetch(&self, path: &str) -> Result<String> {
        let url = self.url_for(path);
        let response = self.get(&url).await?;
        response.text().await.map_err(FlixhqError::HttpError)
    }

    /// Fetch a path and parse the body as JSON
    ///
    /// # Errors
    /// Same as [`fetch`](Self::fetch), plus `Json` if the body is not valid JSON.
    pub async fn fetch_json(&self, path: &str) -> Result<Value> {
        let body = self.fetch(path).await?;
        Ok(serde_json::from_str(&body)?)
    }

    async fn get(&self, url: &str) -> Result<reqwest::Response> {
        debug!(%url, "GET");

        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(FlixhqError::HttpError)?;

        let status = response.status();
        if !status.is_success() {
            debug!(%url, status = status.as_u16(), "non-success status");
            return Err(FlixhqError::Status {
                status: status.as_u16(),
                url: response.url().to_string(),
            });
        }

        Ok(response)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_client_config_default() {
        let config = ClientConfig::default();
        assert_eq!(config.base_url, "https://flixhq.to");
        assert_eq!(config.referer, "https://flixhq.to/");
        assert_eq!(config.timeout_secs, 15);
        assert!(config.user_agent.starts_with("Mozilla/5.0"));
    }

    #[test]
    fn test_client_config_with_base_url_trims_slash() {
        let config = ClientConfig::with_base_url("http://127.0.0.1:8080/");
        assert_eq!(config.base_url, "http://127.0.0.1:8080");
        assert_eq!(config.referer, "http://127.0.0.1:8080/");
    }

    #[test]
    fn test_client_creation() {
        let client = FlixhqClient::new();
        assert!(client.is_ok());
    }

    #[test]
    fn test_client_rejects_bad_referer() {
        let config = ClientConfig {
            referer: "bad\nreferer".to_string(),
            ..ClientConfig::default()
        };
        let result = FlixhqClient::with_config(config);
        assert!(matches!(result, Err(FlixhqError::ParseError(_))));
    }

    #[test]
    fn test_url_for() {
        let client = FlixhqClient::new().unwrap();
        assert_eq!(
            client.url_for("/ajax/movie/episodes/1"),
            "https://flixhq.to/ajax/movie/episodes/1"
        );
    }
}
