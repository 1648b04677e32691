//! Performance insight module
//!
//! This module queries an external performance-analysis API
//! (PageSpeed Insights compatible) and turns its response into an optional
//! part of the audit report:
//! - `client`: ordered strategy fallback
//! - `decode`: schema-tolerant response decoding
//! - `redact`: API key scrubbing for every surfaced message

mod client;
mod decode;
mod redact;
mod types;

pub use client::{InsightClient, InsightOutcome};
pub use decode::{decode_error_message, decode_insight};
pub use redact::{redact_api_key, redact_secret, REDACTED_KEY};
pub use types::{PerformanceInsight, PerformanceInsightError, PerformanceMetrics, Strategy};
