//! Shared fixtures

use seo_audit::config::{Config, FetcherConfig};
use serde_json::{json, Value};

/// API key configured in test setups; must never appear in any output
pub const API_KEY: &str = "SECRET123";

/// Path the mock performance API is mounted on
pub const INSIGHT_PATH: &str = "/pagespeedonline/v5/runPagespeed";

/// Reference markup with one internal and one external link
pub const REFERENCE_PAGE: &str = r#"<html lang="en"><head><title>Hi</title><meta name="description" content="Desc"></head><body><a href="/x">a</a><a href="https://other.com">b</a></body></html>"#;

/// Creates a test configuration pointing the insight client at `mock_uri`
pub fn test_config(mock_uri: &str) -> Config {
    let mut config = Config::default();
    config.fetcher = FetcherConfig {
        timeout_secs: 2,
        max_retries: 1,
        retry_delay_ms: 10,
    };
    config.insight.endpoint = format!("{}{}", mock_uri, INSIGHT_PATH);
    config.insight.api_key = Some(API_KEY.to_string());
    config.insight.timeout_secs = 5;
    config
}

/// A successful performance API body
pub fn lighthouse_body(score: f64) -> Value {
    json!({
        "id": "https://site.com/",
        "lighthouseResult": {
            "categories": { "performance": { "id": "performance", "score": score } },
            "audits": {
                "first-contentful-paint": { "numericValue": 1100.0 },
                "largest-contentful-paint": { "numericValue": 2300.0 },
                "cumulative-layout-shift": { "numericValue": 0.05 },
                "total-blocking-time": { "numericValue": 120.0 },
                "speed-index": { "numericValue": 2900.0 }
            }
        }
    })
}

/// A Google-style error body echoing the request URL, key included
pub fn api_error_body(code: u16) -> Value {
    json!({
        "error": {
            "code": code,
            "message": format!(
                "Lighthouse failed for https://www.googleapis.com/pagespeedonline/v5/runPagespeed?url=x&key={}&strategy=mobile",
                API_KEY
            ),
            "status": "INVALID_ARGUMENT"
        }
    })
}
