//! URL handling module
//!
//! This module provides the http(s) URL validator that gates every audit and
//! the host comparison used when classifying links.

mod domain;
mod validate;

// Re-export main functions
pub use domain::{extract_host, same_host};
pub use validate::{is_valid_http_url, parse_http_url};
