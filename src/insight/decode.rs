//! Permissive decoder for performance API responses
//!
//! The response shape belongs to a third party. Any field that is missing
//! or has an unexpected type is treated as absent instead of failing the
//! whole document.

use crate::insight::types::{PerformanceInsight, PerformanceMetrics, Strategy};
use serde_json::Value;

const FIRST_CONTENTFUL_PAINT: &str = "first-contentful-paint";
const LARGEST_CONTENTFUL_PAINT: &str = "largest-contentful-paint";
const CUMULATIVE_LAYOUT_SHIFT: &str = "cumulative-layout-shift";
const TOTAL_BLOCKING_TIME: &str = "total-blocking-time";
const SPEED_INDEX: &str = "speed-index";

/// Builds an insight from a response body
///
/// Returns `None` unless the body carries a
/// `lighthouseResult.categories.performance` object. Within it, a score
/// outside `[0, 1]` and any non-numeric metric are dropped individually.
pub fn decode_insight(body: &Value, strategy: Strategy) -> Option<PerformanceInsight> {
    let lighthouse = body.get("lighthouseResult").filter(|v| v.is_object())?;
    let performance = lighthouse
        .get("categories")
        .and_then(|c| c.get("performance"))
        .filter(|v| v.is_object())?;

    let performance_score = performance
        .get("score")
        .and_then(Value::as_f64)
        .filter(|score| (0.0..=1.0).contains(score));

    let audits = lighthouse.get("audits");
    let metric = |id: &str| {
        audits
            .and_then(|a| a.get(id))
            .and_then(|audit| audit.get("numericValue"))
            .and_then(Value::as_f64)
    };

    Some(PerformanceInsight {
        strategy,
        performance_score,
        metrics: PerformanceMetrics {
            first_contentful_paint_ms: metric(FIRST_CONTENTFUL_PAINT),
            largest_contentful_paint_ms: metric(LARGEST_CONTENTFUL_PAINT),
            cumulative_layout_shift: metric(CUMULATIVE_LAYOUT_SHIFT),
            total_blocking_time_ms: metric(TOTAL_BLOCKING_TIME),
            speed_index_ms: metric(SPEED_INDEX),
        },
    })
}

/// Extracts `error.message` from a Google-style API error body
pub fn decode_error_message(body: &Value) -> Option<String> {
    body.get("error")
        .and_then(|e| e.get("message"))
        .and_then(Value::as_str)
        .map(str::trim)
        .filter(|m| !m.is_empty())
        .map(str::to_string)
}
