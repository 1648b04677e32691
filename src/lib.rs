//! SEO Audit: single-page on-page SEO auditor
//!
//! This crate fetches one web page, extracts the on-page SEO signals from its
//! markup, classifies its outbound links and optionally attaches a
//! performance score from an external analysis API.

pub mod audit;
pub mod config;
pub mod insight;
pub mod report;
pub mod server;
pub mod url;

use thiserror::Error;

/// Main error type for binary-level operations
#[derive(Debug, Error)]
pub enum SeoAuditError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Audit error: {0}")]
    Audit(#[from] AuditError),

    #[error("HTTP client error: {0}")]
    Reqwest(#[from] reqwest::Error),

    #[error("Report serialization error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Errors that terminate an audit without producing a report
#[derive(Debug, Error)]
pub enum AuditError {
    #[error("Invalid or missing url: {0}")]
    InvalidUrl(String),

    #[error("Fetch failed: {0}")]
    FetchFailed(#[from] FetchError),
}

impl AuditError {
    /// HTTP status code the inbound surface answers with for this error
    pub fn status_code(&self) -> u16 {
        match self {
            Self::InvalidUrl(_) => 400,
            Self::FetchFailed(_) => 502,
        }
    }
}

/// Page fetch failures
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("Request timeout for {url}")]
    Timeout { url: String },

    #[error("Unreachable {url}: {reason}")]
    Unreachable { url: String, reason: String },
}

/// Configuration-specific errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse TOML: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Invalid URL in config: {0}")]
    InvalidUrl(String),
}

/// Result type alias for binary-level operations
pub type Result<T> = std::result::Result<T, SeoAuditError>;

/// Result type alias for configuration operations
pub type ConfigResult<T> = std::result::Result<T, ConfigError>;

/// Result type alias for audit operations
pub type AuditResult<T> = std::result::Result<T, AuditError>;

// Re-export commonly used types
pub use audit::Auditor;
pub use config::Config;
pub use report::AuditReport;
pub use url::is_valid_http_url;
