use crate::insight::redact::redact_api_key;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Analysis profile requested from the performance API
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Strategy {
    Mobile,
    Desktop,
}

impl Strategy {
    /// Query parameter value for this strategy
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Mobile => "mobile",
            Self::Desktop => "desktop",
        }
    }
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Lab metrics reported for one strategy
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PerformanceMetrics {
    pub first_contentful_paint_ms: Option<f64>,
    pub largest_contentful_paint_ms: Option<f64>,
    pub cumulative_layout_shift: Option<f64>,
    pub total_blocking_time_ms: Option<f64>,
    pub speed_index_ms: Option<f64>,
}

/// Performance score and metrics from the first strategy that succeeded
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PerformanceInsight {
    pub strategy: Strategy,

    /// Lighthouse performance score in `[0, 1]`
    pub performance_score: Option<f64>,

    pub metrics: PerformanceMetrics,
}

/// Why no performance insight could be obtained
///
/// The message and status text are redacted on construction, so no value
/// of this type ever carries an API key.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PerformanceInsightError {
    code: Option<u16>,
    status_text: Option<String>,
    message: Option<String>,
}

impl PerformanceInsightError {
    pub fn new(code: Option<u16>, status_text: Option<String>, message: Option<String>) -> Self {
        Self {
            code,
            status_text: status_text.map(|s| redact_api_key(&s)),
            message: message.map(|m| redact_api_key(&m)),
        }
    }

    /// Error for a request that never produced an HTTP response
    pub fn transport(message: impl Into<String>) -> Self {
        Self::new(None, None, Some(message.into()))
    }

    pub fn code(&self) -> Option<u16> {
        self.code
    }

    pub fn status_text(&self) -> Option<&str> {
        self.status_text.as_deref()
    }

    pub fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }
}

impl fmt::Display for PerformanceInsightError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match (&self.message, &self.status_text, self.code) {
            (Some(message), _, _) => f.write_str(message),
            (None, status_text, code) => write!(
                f,
                "{} ({})",
                status_text.as_deref().unwrap_or("error"),
                code.map(|c| c.to_string()).unwrap_or_default()
            ),
        }
    }
}
