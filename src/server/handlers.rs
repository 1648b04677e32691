//! Request handlers for the audit API

use crate::server::AppState;
use crate::AuditError;
use axum::extract::rejection::QueryRejection;
use axum::extract::{ConnectInfo, Query, State};
use axum::http::{HeaderMap, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Deserialize;
use serde_json::{json, Value};
use std::net::SocketAddr;
use std::sync::Arc;

/// Identifier used when neither a forwarded address nor a peer address is known
const FALLBACK_IDENTIFIER: &str = "127.0.0.1";

/// Query parameters of `GET /audit`
#[derive(Debug, Default, Deserialize)]
pub struct AuditParams {
    url: Option<String>,
}

/// `GET /audit?url=...`
///
/// | Outcome | Status |
/// |---------|--------|
/// | Report produced | 200 |
/// | Missing, repeated or invalid `url` | 400 |
/// | Caller over its rate limit | 429 |
/// | Page fetch failed | 502 |
///
/// The query string is only inspected after the caller passed the rate gate.
pub async fn audit_handler(
    State(state): State<Arc<AppState>>,
    connect_info: Option<ConnectInfo<SocketAddr>>,
    headers: HeaderMap,
    query: Result<Query<AuditParams>, QueryRejection>,
) -> Response {
    let identifier = client_identifier(&headers, connect_info.map(|ConnectInfo(addr)| addr));
    if !state.gate.allow(&identifier) {
        tracing::debug!("Rate limit exceeded for {}", identifier);
        return (StatusCode::TOO_MANY_REQUESTS, "Too Many Requests").into_response();
    }

    let url = match query {
        Ok(Query(AuditParams { url: Some(url) })) => url,
        Ok(Query(AuditParams { url: None })) => {
            return error_response(&AuditError::InvalidUrl(String::new()));
        }
        Err(rejection) => {
            tracing::debug!("Rejected audit query from {}: {}", identifier, rejection);
            return error_response(&AuditError::InvalidUrl(rejection.body_text()));
        }
    };

    match state.auditor.run_audit(&url).await {
        Ok(report) => (StatusCode::OK, Json(report)).into_response(),
        Err(e) => {
            tracing::info!("Audit of {:?} failed: {}", url, e);
            error_response(&e)
        }
    }
}

/// `GET /health`
pub async fn health() -> Json<Value> {
    Json(json!({ "status": "ok" }))
}

/// JSON error body for an audit failure
fn error_response(error: &AuditError) -> Response {
    let status = StatusCode::from_u16(error.status_code()).unwrap_or(StatusCode::BAD_GATEWAY);
    let message = match error {
        AuditError::InvalidUrl(_) => "Invalid or missing url",
        AuditError::FetchFailed(_) => "Fetch or parse failed",
    };

    (status, Json(json!({ "error": message }))).into_response()
}

/// Identifies the caller for rate limiting
///
/// Uses the first `X-Forwarded-For` entry, then the peer address, then a
/// loopback placeholder.
pub fn client_identifier(headers: &HeaderMap, peer: Option<SocketAddr>) -> String {
    headers
        .get("x-forwarded-for")
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.split(',').next())
        .map(str::trim)
        .filter(|ip| !ip.is_empty())
        .map(str::to_string)
        .or_else(|| peer.map(|addr| addr.ip().to_string()))
        .unwrap_or_else(|| FALLBACK_IDENTIFIER.to_string())
}
