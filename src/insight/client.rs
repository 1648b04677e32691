//! Performance-analysis API client
//!
//! Queries the API once per strategy, in order, and stops at the first
//! usable result. A failing or slow API never fails the audit; it only
//! leaves the insight out of the report.

use crate::config::{InsightConfig, UserAgentConfig};
use crate::insight::decode::{decode_error_message, decode_insight};
use crate::insight::redact::redact_secret;
use crate::insight::types::{PerformanceInsight, PerformanceInsightError, Strategy};
use crate::report::normalize_text;
use crate::ConfigError;
use reqwest::Client;
use serde_json::Value;
use std::time::Duration;
use url::Url;

/// Category filter sent with every request
const CATEGORY: &str = "performance";

/// Longest slice of a raw error body kept as the error message
const MAX_ERROR_BODY_CHARS: usize = 500;

/// Result of one insight lookup: at most one of the two is set
pub type InsightOutcome = (Option<PerformanceInsight>, Option<PerformanceInsightError>);

/// Outcome of querying a single strategy that produced an HTTP response
enum Attempt {
    Usable(PerformanceInsight),
    Unusable(PerformanceInsightError),
}

/// Client for the external performance-analysis API
#[derive(Debug, Clone)]
pub struct InsightClient {
    client: Client,
    endpoint: Url,
    api_key: Option<String>,
    strategies: Vec<Strategy>,
}

impl InsightClient {
    /// Creates a client from configuration
    ///
    /// # Returns
    ///
    /// * `Ok(InsightClient)` - Client ready to query the endpoint
    /// * `Err(SeoAuditError)` - The endpoint is not a URL or the HTTP client failed to build
    pub fn new(user_agent: &UserAgentConfig, config: &InsightConfig) -> crate::Result<Self> {
        let endpoint = Url::parse(&config.endpoint)
            .map_err(|e| ConfigError::InvalidUrl(format!("Invalid insight endpoint: {}", e)))?;

        let client = Client::builder()
            .user_agent(user_agent.header_value())
            .timeout(Duration::from_secs(config.timeout_secs))
            .gzip(true)
            .brotli(true)
            .build()?;

        Ok(Self {
            client,
            endpoint,
            api_key: config
                .api_key
                .as_deref()
                .and_then(|k| normalize_text(Some(k))),
            strategies: config.strategies.clone(),
        })
    }

    /// Strategies tried by [`fetch_insight`](Self::fetch_insight), in order
    pub fn strategies(&self) -> &[Strategy] {
        &self.strategies
    }

    /// Looks up the performance insight for `target_url`
    ///
    /// # Fallback Logic
    ///
    /// | Condition | Action |
    /// |-----------|--------|
    /// | 2xx with a performance result | Return it, skip remaining strategies |
    /// | Non-2xx or unusable body | Record the error, try the next strategy |
    /// | Transport failure | Stop, return the error |
    /// | Strategies exhausted | Return the last recorded error |
    ///
    /// Every error message is redacted before it is logged or returned.
    pub async fn fetch_insight(&self, target_url: &str) -> InsightOutcome {
        let mut last_error = None;

        for &strategy in &self.strategies {
            match self.query(target_url, strategy).await {
                Ok(Attempt::Usable(insight)) => {
                    tracing::debug!(
                        "Performance insight for {} via {} strategy (score {:?})",
                        target_url,
                        strategy,
                        insight.performance_score
                    );
                    return (Some(insight), None);
                }
                Ok(Attempt::Unusable(error)) => {
                    tracing::warn!(
                        "Performance insight via {} strategy unusable for {}: {}",
                        strategy,
                        target_url,
                        error
                    );
                    last_error = Some(error);
                }
                Err(e) => {
                    let error = PerformanceInsightError::transport(self.scrub(&e.to_string()));
                    tracing::warn!(
                        "Performance insight request failed for {}: {}",
                        target_url,
                        error
                    );
                    return (None, Some(error));
                }
            }
        }

        (None, last_error)
    }

    /// Queries one strategy; only transport failures are returned as `Err`
    async fn query(&self, target_url: &str, strategy: Strategy) -> Result<Attempt, reqwest::Error> {
        let mut request = self.client.get(self.endpoint.clone()).query(&[
            ("url", target_url),
            ("strategy", strategy.as_str()),
            ("category", CATEGORY),
        ]);
        if let Some(key) = &self.api_key {
            request = request.query(&[("key", key.as_str())]);
        }

        let response = request.send().await?;
        let status = response.status();
        let body = response.text().await?;
        let parsed = serde_json::from_str::<Value>(&body).ok();

        if status.is_success() {
            if let Some(insight) = parsed.as_ref().and_then(|v| decode_insight(v, strategy)) {
                return Ok(Attempt::Usable(insight));
            }
        }

        let message = if status.is_success() {
            Some("Response did not contain a performance result".to_string())
        } else {
            parsed
                .as_ref()
                .and_then(decode_error_message)
                .or_else(|| truncated_body(&body))
        };

        Ok(Attempt::Unusable(PerformanceInsightError::new(
            Some(status.as_u16()),
            status.canonical_reason().map(|r| self.scrub(r)),
            message.map(|m| self.scrub(&m)),
        )))
    }

    /// Removes the configured key from text, in addition to `key=` parameters
    fn scrub(&self, text: &str) -> String {
        redact_secret(text, self.api_key.as_deref())
    }
}

/// First characters of a non-JSON error body, or `None` when blank
fn truncated_body(body: &str) -> Option<String> {
    let truncated: String = body.chars().take(MAX_ERROR_BODY_CHARS).collect();
    normalize_text(Some(&truncated))
}
