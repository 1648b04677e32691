//! End-to-end audits against a mock site

use crate::common::{lighthouse_body, test_config, API_KEY, INSIGHT_PATH, REFERENCE_PAGE};
use seo_audit::insight::Strategy;
use seo_audit::{AuditError, Auditor, FetchError};
use std::time::Duration;
use wiremock::matchers::{header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn html(body: &str) -> ResponseTemplate {
    ResponseTemplate::new(200)
        .set_body_string(body)
        .insert_header("content-type", "text/html; charset=utf-8")
}

#[tokio::test]
async fn test_reference_page_end_to_end() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/page"))
        .respond_with(html(REFERENCE_PAGE))
        .expect(1)
        .mount(&mock_server)
        .await;

    Mock::given(method("GET"))
        .and(path(INSIGHT_PATH))
        .and(query_param("strategy", "mobile"))
        .respond_with(ResponseTemplate::new(200).set_body_json(lighthouse_body(0.91)))
        .mount(&mock_server)
        .await;

    let auditor = Auditor::new(&test_config(&mock_server.uri())).expect("Failed to build auditor");
    let page_url = format!("{}/page", mock_server.uri());
    let report = auditor.run_audit(&page_url).await.expect("Audit failed");

    assert_eq!(report.url, page_url);
    assert!(report.facts.title.ok);
    assert!(report.facts.html_lang.ok);
    assert!(report.facts.meta_description.ok);
    assert!(!report.facts.h1.ok);
    assert!(report.facts.robots_directive.ok);
    assert!(!report.facts.canonical_url.ok);
    assert_eq!(report.facts.links.internal, 1);
    assert_eq!(report.facts.links.external, 1);
    assert_eq!(report.facts.links.nofollow, 0);
    assert_eq!(report.facts.counts.total_links, 2);

    let insight = report.performance_insight.expect("Expected an insight");
    assert_eq!(insight.strategy, Strategy::Mobile);
    assert_eq!(insight.performance_score, Some(0.91));
    assert_eq!(insight.metrics.speed_index_ms, Some(2900.0));
    assert!(report.performance_insight_error.is_none());

    let json = serde_json::to_value(&report.facts).unwrap();
    assert_eq!(json["title"]["value"], "Hi");
    assert_eq!(json["h1"]["value"], serde_json::Value::Null);
}

#[tokio::test]
async fn test_sends_identifying_user_agent() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/"))
        .and(header("user-agent", "seo-toolbot/1.0 (+https://example.com)"))
        .respond_with(html("<title>UA</title>"))
        .expect(1)
        .mount(&mock_server)
        .await;

    let mut config = test_config(&mock_server.uri());
    config.insight.enabled = false;

    let auditor = Auditor::new(&config).unwrap();
    let report = auditor
        .run_audit(&format!("{}/", mock_server.uri()))
        .await
        .expect("Audit failed");

    assert_eq!(report.facts.title.value.as_deref(), Some("UA"));
    assert!(report.performance_insight.is_none());
    assert!(report.performance_insight_error.is_none());
}

#[tokio::test]
async fn test_invalid_url_makes_no_request() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .respond_with(html("<title>never</title>"))
        .expect(0)
        .mount(&mock_server)
        .await;

    let auditor = Auditor::new(&test_config(&mock_server.uri())).unwrap();
    let result = auditor.run_audit("javascript:alert(1)").await;

    assert!(matches!(result, Err(AuditError::InvalidUrl(_))));
}

#[tokio::test]
async fn test_non_success_retried_once_then_fails() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/broken"))
        .respond_with(ResponseTemplate::new(500))
        .expect(2)
        .mount(&mock_server)
        .await;

    // The insight lookup must not run when the page fetch fails
    Mock::given(method("GET"))
        .and(path(INSIGHT_PATH))
        .respond_with(ResponseTemplate::new(200).set_body_json(lighthouse_body(0.5)))
        .expect(0)
        .mount(&mock_server)
        .await;

    let auditor = Auditor::new(&test_config(&mock_server.uri())).unwrap();
    let result = auditor
        .run_audit(&format!("{}/broken", mock_server.uri()))
        .await;

    match result {
        Err(AuditError::FetchFailed(FetchError::Unreachable { reason, .. })) => {
            assert!(reason.contains("500"), "unexpected reason: {}", reason);
        }
        other => panic!("Expected FetchFailed(Unreachable), got {:?}", other),
    }
}

#[tokio::test]
async fn test_retry_recovers_from_single_failure() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/flaky"))
        .respond_with(ResponseTemplate::new(503))
        .up_to_n_times(1)
        .mount(&mock_server)
        .await;

    Mock::given(method("GET"))
        .and(path("/flaky"))
        .respond_with(html("<title>Recovered</title>"))
        .mount(&mock_server)
        .await;

    let mut config = test_config(&mock_server.uri());
    config.insight.enabled = false;

    let auditor = Auditor::new(&config).unwrap();
    let report = auditor
        .run_audit(&format!("{}/flaky", mock_server.uri()))
        .await
        .expect("Retry should have succeeded");

    assert_eq!(report.facts.title.value.as_deref(), Some("Recovered"));
}

#[tokio::test]
async fn test_slow_page_times_out() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/slow"))
        .respond_with(html("<title>Slow</title>").set_delay(Duration::from_secs(4)))
        .mount(&mock_server)
        .await;

    let mut config = test_config(&mock_server.uri());
    config.fetcher.timeout_secs = 1;
    config.fetcher.max_retries = 0;

    let auditor = Auditor::new(&config).unwrap();
    let result = auditor
        .run_audit(&format!("{}/slow", mock_server.uri()))
        .await;

    assert!(
        matches!(result, Err(AuditError::FetchFailed(FetchError::Timeout { .. }))),
        "Expected timeout, got {:?}",
        result
    );
}

#[tokio::test]
async fn test_insight_failure_does_not_fail_audit() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/"))
        .respond_with(html(REFERENCE_PAGE))
        .mount(&mock_server)
        .await;

    let mut config = test_config(&mock_server.uri());
    // Nothing listens on port 1
    config.insight.endpoint = "http://127.0.0.1:1/run".to_string();

    let auditor = Auditor::new(&config).unwrap();
    let report = auditor
        .run_audit(&format!("{}/", mock_server.uri()))
        .await
        .expect("Audit must succeed without the insight");

    assert!(report.facts.title.ok);
    assert!(report.performance_insight.is_none());

    let error = report
        .performance_insight_error
        .expect("Expected an insight error");
    let serialized = serde_json::to_string(&error).unwrap();
    assert!(!serialized.contains(API_KEY));
}
