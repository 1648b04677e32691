use crate::insight::Strategy;
use serde::Deserialize;

/// Default PageSpeed Insights v5 endpoint
pub const DEFAULT_INSIGHT_ENDPOINT: &str =
    "https://www.googleapis.com/pagespeedonline/v5/runPagespeed";

/// Main configuration structure for the auditor
///
/// Every section is optional; a missing section takes the defaults below.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    pub server: ServerConfig,
    #[serde(rename = "user-agent")]
    pub user_agent: UserAgentConfig,
    pub fetcher: FetcherConfig,
    pub insight: InsightConfig,
    #[serde(rename = "rate-limit")]
    pub rate_limit: RateLimitConfig,
}

/// Inbound HTTP listener configuration
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    /// Address the listener binds to
    #[serde(rename = "bind-address")]
    pub bind_address: String,

    /// TCP port the listener binds to
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind_address: "127.0.0.1".to_string(),
            port: 8080,
        }
    }
}

/// User agent identification configuration
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct UserAgentConfig {
    /// Name of the bot
    #[serde(rename = "crawler-name")]
    pub crawler_name: String,

    /// Version of the bot
    #[serde(rename = "crawler-version")]
    pub crawler_version: String,

    /// URL with information about the bot
    #[serde(rename = "contact-url")]
    pub contact_url: String,
}

impl Default for UserAgentConfig {
    fn default() -> Self {
        Self {
            crawler_name: "seo-toolbot".to_string(),
            crawler_version: "1.0".to_string(),
            contact_url: "https://example.com".to_string(),
        }
    }
}

impl UserAgentConfig {
    /// Formats the header value as `Name/Version (+ContactURL)`
    pub fn header_value(&self) -> String {
        format!(
            "{}/{} (+{})",
            self.crawler_name, self.crawler_version, self.contact_url
        )
    }
}

/// Target page fetch configuration
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct FetcherConfig {
    /// Upper bound on total request time, in seconds
    #[serde(rename = "timeout-secs")]
    pub timeout_secs: u64,

    /// Automatic retries after a failed attempt
    #[serde(rename = "max-retries")]
    pub max_retries: u32,

    /// Pause before a retry, in milliseconds
    #[serde(rename = "retry-delay-ms")]
    pub retry_delay_ms: u64,
}

impl Default for FetcherConfig {
    fn default() -> Self {
        Self {
            timeout_secs: 15,
            max_retries: 1,
            retry_delay_ms: 300,
        }
    }
}

/// Performance-analysis API configuration
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct InsightConfig {
    /// Whether the performance lookup runs at all
    pub enabled: bool,

    /// Base endpoint of the analysis API
    pub endpoint: String,

    /// Optional API key sent as the `key` query parameter
    #[serde(rename = "api-key")]
    pub api_key: Option<String>,

    /// Upper bound on each analysis request, in seconds
    #[serde(rename = "timeout-secs")]
    pub timeout_secs: u64,

    /// Strategies tried in order until one succeeds
    pub strategies: Vec<Strategy>,
}

impl Default for InsightConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            endpoint: DEFAULT_INSIGHT_ENDPOINT.to_string(),
            api_key: None,
            timeout_secs: 60,
            strategies: vec![Strategy::Mobile, Strategy::Desktop],
        }
    }
}

/// Per-caller request rate limit
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct RateLimitConfig {
    /// Window length, in seconds
    #[serde(rename = "window-secs")]
    pub window_secs: u64,

    /// Accepted calls per identifier per window
    #[serde(rename = "max-requests")]
    pub max_requests: u32,
}

impl Default for RateLimitConfig {
    fn default() -> Self {
        Self {
            window_secs: 60,
            max_requests: 30,
        }
    }
}
