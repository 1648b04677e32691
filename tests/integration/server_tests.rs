//! Inbound HTTP surface tests against a server bound to an ephemeral port

use crate::common::{test_config, REFERENCE_PAGE};
use seo_audit::config::Config;
use seo_audit::server::{self, AppState};
use std::sync::Arc;
use tokio::net::TcpListener;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

/// Starts the audit server in the background and returns its base URL
async fn spawn_server(config: Config) -> String {
    let listener = TcpListener::bind("127.0.0.1:0")
        .await
        .expect("Failed to bind test listener");
    let addr = listener.local_addr().expect("Failed to read local address");
    let state = Arc::new(AppState::from_config(&config).expect("Failed to build state"));

    tokio::spawn(async move {
        let _ = server::serve(listener, state).await;
    });

    format!("http://{}", addr)
}

fn offline_config(mock_uri: &str) -> Config {
    let mut config = test_config(mock_uri);
    config.insight.enabled = false;
    config
}

#[tokio::test]
async fn test_audit_returns_report() {
    let mock_server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/page"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_string(REFERENCE_PAGE)
                .insert_header("content-type", "text/html"),
        )
        .mount(&mock_server)
        .await;

    let base = spawn_server(offline_config(&mock_server.uri())).await;
    let page_url = format!("{}/page", mock_server.uri());

    let response = reqwest::Client::new()
        .get(format!("{}/audit", base))
        .query(&[("url", page_url.as_str())])
        .send()
        .await
        .expect("Request failed");

    assert_eq!(response.status().as_u16(), 200);
    assert_eq!(
        response
            .headers()
            .get("x-content-type-options")
            .and_then(|v| v.to_str().ok()),
        Some("nosniff")
    );

    let body: serde_json::Value = response.json().await.expect("Body is not JSON");
    assert_eq!(body["url"], page_url.as_str());
    assert_eq!(body["facts"]["title"]["ok"], true);
    assert_eq!(body["facts"]["htmlLang"]["ok"], true);
    assert_eq!(body["facts"]["metaDescription"]["ok"], true);
    assert_eq!(body["facts"]["h1"]["ok"], false);
    assert_eq!(body["facts"]["links"]["internal"], 1);
    assert_eq!(body["facts"]["links"]["external"], 1);
    assert!(body["performanceInsight"].is_null());
    assert!(body["performanceInsightError"].is_null());
}

#[tokio::test]
async fn test_missing_and_invalid_url_rejected() {
    let mock_server = MockServer::start().await;
    let base = spawn_server(offline_config(&mock_server.uri())).await;
    let client = reqwest::Client::new();

    let response = client.get(format!("{}/audit", base)).send().await.unwrap();
    assert_eq!(response.status().as_u16(), 400);
    let body: serde_json::Value = response.json().await.unwrap();
    assert_eq!(body["error"], "Invalid or missing url");

    let response = client
        .get(format!("{}/audit", base))
        .query(&[("url", "ftp://example.com/file")])
        .send()
        .await
        .unwrap();
    assert_eq!(response.status().as_u16(), 400);
    assert_eq!(
        response.headers().get("x-frame-options").and_then(|v| v.to_str().ok()),
        Some("DENY")
    );
}

#[tokio::test]
async fn test_fetch_failure_is_bad_gateway() {
    let mock_server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/missing"))
        .respond_with(ResponseTemplate::new(404))
        .mount(&mock_server)
        .await;

    let base = spawn_server(offline_config(&mock_server.uri())).await;

    let response = reqwest::Client::new()
        .get(format!("{}/audit", base))
        .query(&[("url", format!("{}/missing", mock_server.uri()))])
        .send()
        .await
        .unwrap();

    assert_eq!(response.status().as_u16(), 502);
    let body: serde_json::Value = response.json().await.unwrap();
    assert_eq!(body["error"], "Fetch or parse failed");
}

#[tokio::test]
async fn test_rate_limit_per_caller() {
    let mock_server = MockServer::start().await;
    let mut config = offline_config(&mock_server.uri());
    config.rate_limit.max_requests = 2;

    let base = spawn_server(config).await;
    let client = reqwest::Client::new();

    let statuses = {
        let mut statuses = Vec::new();
        for _ in 0..3 {
            let response = client
                .get(format!("{}/audit", base))
                .header("x-forwarded-for", "203.0.113.9")
                .send()
                .await
                .unwrap();
            statuses.push(response.status().as_u16());
        }
        statuses
    };
    assert_eq!(statuses, vec![400, 400, 429]);

    let response = client
        .get(format!("{}/audit", base))
        .header("x-forwarded-for", "203.0.113.10, 10.0.0.1")
        .send()
        .await
        .unwrap();
    assert_eq!(response.status().as_u16(), 400);
}

#[tokio::test]
async fn test_repeated_url_param_is_json_error_and_counted() {
    let mock_server = MockServer::start().await;
    let mut config = offline_config(&mock_server.uri());
    config.rate_limit.max_requests = 1;

    let base = spawn_server(config).await;
    let client = reqwest::Client::new();
    let target = format!("{}/audit?url=a&url=b", base);

    let response = client
        .get(&target)
        .header("x-forwarded-for", "198.51.100.4")
        .send()
        .await
        .unwrap();
    assert_eq!(response.status().as_u16(), 400);
    let content_type = response
        .headers()
        .get("content-type")
        .and_then(|v| v.to_str().ok())
        .map(str::to_string);
    assert_eq!(content_type.as_deref(), Some("application/json"));
    let body: serde_json::Value = response.json().await.unwrap();
    assert_eq!(body["error"], "Invalid or missing url");

    for _ in 0..2 {
        let response = client
            .get(&target)
            .header("x-forwarded-for", "198.51.100.4")
            .send()
            .await
            .unwrap();
        assert_eq!(response.status().as_u16(), 429);
    }
}

#[tokio::test]
async fn test_health() {
    let mock_server = MockServer::start().await;
    let base = spawn_server(offline_config(&mock_server.uri())).await;

    let response = reqwest::get(format!("{}/health", base)).await.unwrap();
    assert_eq!(response.status().as_u16(), 200);
    assert_eq!(
        response
            .headers()
            .get("referrer-policy")
            .and_then(|v| v.to_str().ok()),
        Some("strict-origin-when-cross-origin")
    );

    let body: serde_json::Value = response.json().await.unwrap();
    assert_eq!(body["status"], "ok");
}
