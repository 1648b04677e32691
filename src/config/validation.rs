use crate::config::types::{Config, FetcherConfig, InsightConfig, RateLimitConfig, UserAgentConfig};
use crate::ConfigError;
use url::Url;

/// Validates the entire configuration
pub fn validate(config: &Config) -> Result<(), ConfigError> {
    validate_user_agent_config(&config.user_agent)?;
    validate_fetcher_config(&config.fetcher)?;
    validate_insight_config(&config.insight)?;
    validate_rate_limit_config(&config.rate_limit)?;
    Ok(())
}

/// Validates user agent configuration
fn validate_user_agent_config(config: &UserAgentConfig) -> Result<(), ConfigError> {
    // Validate crawler name: non-empty, alphanumeric + hyphens only
    if config.crawler_name.is_empty() {
        return Err(ConfigError::Validation(
            "crawler_name cannot be empty".to_string(),
        ));
    }

    if !config
        .crawler_name
        .chars()
        .all(|c| c.is_alphanumeric() || c == '-')
    {
        return Err(ConfigError::Validation(format!(
            "crawler_name must contain only alphanumeric characters and hyphens, got '{}'",
            config.crawler_name
        )));
    }

    Url::parse(&config.contact_url)
        .map_err(|e| ConfigError::InvalidUrl(format!("Invalid contact_url: {}", e)))?;

    Ok(())
}

/// Validates page fetcher configuration
fn validate_fetcher_config(config: &FetcherConfig) -> Result<(), ConfigError> {
    if config.timeout_secs == 0 {
        return Err(ConfigError::Validation(
            "fetcher timeout_secs must be >= 1".to_string(),
        ));
    }

    Ok(())
}

/// Validates performance-analysis API configuration
fn validate_insight_config(config: &InsightConfig) -> Result<(), ConfigError> {
    if config.timeout_secs == 0 {
        return Err(ConfigError::Validation(
            "insight timeout_secs must be >= 1".to_string(),
        ));
    }

    if config.strategies.is_empty() {
        return Err(ConfigError::Validation(
            "insight strategies must list at least one strategy".to_string(),
        ));
    }

    let endpoint = Url::parse(&config.endpoint)
        .map_err(|e| ConfigError::InvalidUrl(format!("Invalid insight endpoint: {}", e)))?;

    if endpoint.scheme() != "http" && endpoint.scheme() != "https" {
        return Err(ConfigError::Validation(format!(
            "insight endpoint '{}' must use http or https",
            config.endpoint
        )));
    }

    Ok(())
}

/// Validates rate limit configuration
fn validate_rate_limit_config(config: &RateLimitConfig) -> Result<(), ConfigError> {
    if config.window_secs == 0 {
        return Err(ConfigError::Validation(
            "rate-limit window_secs must be >= 1".to_string(),
        ));
    }

    if config.max_requests == 0 {
        return Err(ConfigError::Validation(
            "rate-limit max_requests must be >= 1".to_string(),
        ));
    }

    Ok(())
}
