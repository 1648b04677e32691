//! Target page fetcher
//!
//! This module handles the one outbound request to the audited site:
//! - Building an HTTP client with the bot's user agent string
//! - A bounded total request time per attempt
//! - A single automatic retry by default
//! - Error classification into timeout or unreachable

use crate::config::{FetcherConfig, UserAgentConfig};
use crate::FetchError;
use reqwest::Client;
use std::time::Duration;
use url::Url;

/// Builds an HTTP client for fetching target pages
///
/// # Arguments
///
/// * `user_agent` - The user agent configuration
/// * `config` - Fetch timeout settings
///
/// # Returns
///
/// * `Ok(Client)` - Successfully built HTTP client
/// * `Err(reqwest::Error)` - Failed to build client
///
/// # Example
///
/// ```no_run
/// use seo_audit::audit::build_http_client;
/// use seo_audit::config::{FetcherConfig, UserAgentConfig};
///
/// let client = build_http_client(&UserAgentConfig::default(), &FetcherConfig::default()).unwrap();
/// ```
pub fn build_http_client(
    user_agent: &UserAgentConfig,
    config: &FetcherConfig,
) -> Result<Client, reqwest::Error> {
    Client::builder()
        .user_agent(user_agent.header_value())
        .timeout(Duration::from_secs(config.timeout_secs))
        .connect_timeout(Duration::from_secs(config.timeout_secs.min(10)))
        .gzip(true)
        .brotli(true)
        .build()
}

/// Fetches page markup with bounded time and limited retries
#[derive(Debug, Clone)]
pub struct PageFetcher {
    client: Client,
    max_retries: u32,
    retry_delay: Duration,
}

impl PageFetcher {
    /// Creates a fetcher from configuration
    pub fn new(user_agent: &UserAgentConfig, config: &FetcherConfig) -> Result<Self, reqwest::Error> {
        Ok(Self::with_client(build_http_client(user_agent, config)?, config))
    }

    /// Creates a fetcher around an existing client
    pub fn with_client(client: Client, config: &FetcherConfig) -> Self {
        Self {
            client,
            max_retries: config.max_retries,
            retry_delay: Duration::from_millis(config.retry_delay_ms),
        }
    }

    /// Fetches the raw markup of `url`
    ///
    /// # Retry Logic
    ///
    /// | Condition | Action |
    /// |-----------|--------|
    /// | HTTP 2xx | Return the body |
    /// | HTTP non-2xx | Retry, then → Unreachable |
    /// | Timeout | Retry, then → Timeout |
    /// | Connection or body error | Retry, then → Unreachable |
    ///
    /// The kind of the final failure is the kind of the last attempt.
    pub async fn fetch(&self, url: &Url) -> Result<String, FetchError> {
        let attempts = self.max_retries.saturating_add(1);
        let mut attempt = 1;

        loop {
            match self.fetch_once(url).await {
                Ok(body) => {
                    tracing::debug!("Fetched {} ({} bytes, attempt {})", url, body.len(), attempt);
                    return Ok(body);
                }
                Err(e) if attempt < attempts => {
                    tracing::warn!("Fetch attempt {} for {} failed: {}; retrying", attempt, url, e);
                    tokio::time::sleep(self.retry_delay).await;
                    attempt += 1;
                }
                Err(e) => {
                    tracing::warn!("Giving up on {} after {} attempts: {}", url, attempt, e);
                    return Err(e);
                }
            }
        }
    }

    /// Performs a single GET and requires a 2xx response with a readable body
    async fn fetch_once(&self, url: &Url) -> Result<String, FetchError> {
        let response = self
            .client
            .get(url.clone())
            .send()
            .await
            .map_err(|e| classify_error(url, e))?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Unreachable {
                url: url.to_string(),
                reason: format!("HTTP {}", status),
            });
        }

        response.text().await.map_err(|e| classify_error(url, e))
    }
}

/// Maps a transport error to a fetch failure kind
fn classify_error(url: &Url, error: reqwest::Error) -> FetchError {
    if error.is_timeout() {
        FetchError::Timeout {
            url: url.to_string(),
        }
    } else if error.is_connect() {
        FetchError::Unreachable {
            url: url.to_string(),
            reason: "Connection refused".to_string(),
        }
    } else {
        FetchError::Unreachable {
            url: url.to_string(),
            reason: error.to_string(),
        }
    }
}
