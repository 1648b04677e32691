use crate::config::types::Config;
use crate::config::validation::validate;
use crate::ConfigError;
use sha2::{Digest, Sha256};
use std::path::Path;

/// Environment variable that overrides `insight.api-key`
pub const API_KEY_ENV: &str = "PAGESPEED_API_KEY";

/// Loads and parses a configuration file from the given path
///
/// The `PAGESPEED_API_KEY` environment variable, when set and non-empty,
/// replaces any API key given in the file.
///
/// # Arguments
///
/// * `path` - Path to the TOML configuration file
///
/// # Returns
///
/// * `Ok(Config)` - Successfully loaded and validated configuration
/// * `Err(ConfigError)` - Failed to load, parse, or validate the configuration
///
/// # Example
///
/// ```no_run
/// use std::path::Path;
/// use seo_audit::config::load_config;
///
/// let config = load_config(Path::new("seo-audit.toml")).unwrap();
/// println!("Listening on port: {}", config.server.port);
/// ```
pub fn load_config(path: &Path) -> Result<Config, ConfigError> {
    let content = std::fs::read_to_string(path)?;
    parse_config(&content)
}

/// Parses configuration from TOML text, applies environment overrides and validates it
pub fn parse_config(content: &str) -> Result<Config, ConfigError> {
    let config: Config = toml::from_str(content)?;
    let config = apply_api_key_override(config, std::env::var(API_KEY_ENV).ok());

    validate(&config)?;

    Ok(config)
}

/// Builds the configuration used when no file is given
pub fn default_config() -> Result<Config, ConfigError> {
    let config = apply_api_key_override(Config::default(), std::env::var(API_KEY_ENV).ok());
    validate(&config)?;
    Ok(config)
}

/// Replaces the configured API key with `override_key` when it is non-empty
pub fn apply_api_key_override(mut config: Config, override_key: Option<String>) -> Config {
    if let Some(key) = override_key.filter(|k| !k.trim().is_empty()) {
        config.insight.api_key = Some(key.trim().to_string());
    }
    config
}

/// Computes a SHA-256 hash of the configuration file content
///
/// # Returns
///
/// * `Ok(String)` - Hex-encoded SHA-256 hash of the file content
/// * `Err(ConfigError)` - Failed to read the file
pub fn compute_config_hash(path: &Path) -> Result<String, ConfigError> {
    let content = std::fs::read_to_string(path)?;
    let mut hasher = Sha256::new();
    hasher.update(content.as_bytes());
    let result = hasher.finalize();
    Ok(hex::encode(result))
}

/// Loads a configuration and returns both the config and its hash
pub fn load_config_with_hash(path: &Path) -> Result<(Config, String), ConfigError> {
    let config = load_config(path)?;
    let hash = compute_config_hash(path)?;
    Ok((config, hash))
}
