//! Configuration module for the auditor
//!
//! This module handles loading, parsing, and validating TOML configuration files.
//! Every section is optional and falls back to the built-in defaults.
//!
//! # Example
//!
//! ```no_run
//! use seo_audit::config::load_config;
//! use std::path::Path;
//!
//! let config = load_config(Path::new("seo-audit.toml")).unwrap();
//! println!("Page fetch timeout: {}s", config.fetcher.timeout_secs);
//! ```

mod parser;
mod types;
mod validation;

// Re-export types
pub use types::{
    Config, FetcherConfig, InsightConfig, RateLimitConfig, ServerConfig, UserAgentConfig,
    DEFAULT_INSIGHT_ENDPOINT,
};

// Re-export parser functions
pub use parser::{
    apply_api_key_override, compute_config_hash, default_config, load_config,
    load_config_with_hash, parse_config, API_KEY_ENV,
};
