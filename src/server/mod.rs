//! Inbound HTTP surface
//!
//! Provides:
//! - `GET /audit?url=...` - runs one audit and returns the JSON report
//! - `GET /health` - liveness probe
//!
//! Every response carries the standard security headers. Audit requests
//! pass the per-caller rate gate before any other work.

mod handlers;
mod rate_limit;

use crate::audit::Auditor;
use crate::config::Config;
use axum::http::header::{self, HeaderName, HeaderValue};
use axum::routing::get;
use axum::Router;
use std::net::SocketAddr;
use std::sync::Arc;
use tokio::net::TcpListener;
use tower_http::set_header::SetResponseHeaderLayer;

pub use handlers::{audit_handler, client_identifier, health, AuditParams};
pub use rate_limit::{RateLimiter, RequestGate};

/// State shared by every request handler
pub struct AppState {
    pub auditor: Auditor,
    pub gate: Arc<dyn RequestGate>,
}

impl AppState {
    pub fn new(auditor: Auditor, gate: Arc<dyn RequestGate>) -> Self {
        Self { auditor, gate }
    }

    /// Builds the auditor and in-process rate limiter from configuration
    pub fn from_config(config: &Config) -> crate::Result<Self> {
        Ok(Self::new(
            Auditor::new(config)?,
            Arc::new(RateLimiter::from_config(&config.rate_limit)),
        ))
    }
}

/// Builds the router with all endpoints and security headers
pub fn router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/audit", get(audit_handler))
        .route("/health", get(health))
        .layer(SetResponseHeaderLayer::overriding(
            header::X_CONTENT_TYPE_OPTIONS,
            HeaderValue::from_static("nosniff"),
        ))
        .layer(SetResponseHeaderLayer::overriding(
            header::REFERRER_POLICY,
            HeaderValue::from_static("strict-origin-when-cross-origin"),
        ))
        .layer(SetResponseHeaderLayer::overriding(
            HeaderName::from_static("permissions-policy"),
            HeaderValue::from_static("camera=(), microphone=(), geolocation=()"),
        ))
        .layer(SetResponseHeaderLayer::overriding(
            header::X_FRAME_OPTIONS,
            HeaderValue::from_static("DENY"),
        ))
        .with_state(state)
}

/// Serves the router on an already bound listener until the server stops
pub async fn serve(listener: TcpListener, state: Arc<AppState>) -> anyhow::Result<()> {
    let app = router(state);
    axum::serve(
        listener,
        app.into_make_service_with_connect_info::<SocketAddr>(),
    )
    .await
    .map_err(|e| anyhow::anyhow!("Audit server error: {}", e))
}

/// Binds the configured address and serves the audit API
pub async fn start(config: &Config) -> anyhow::Result<()> {
    let state = Arc::new(AppState::from_config(config)?);
    let addr = format!("{}:{}", config.server.bind_address, config.server.port);

    let listener = TcpListener::bind(&addr)
        .await
        .map_err(|e| anyhow::anyhow!("Failed to bind audit server to {}: {}", addr, e))?;

    tracing::info!("Audit server listening on http://{}/", addr);
    tracing::info!("  - Audit: http://{}/audit?url=<page>", addr);
    tracing::info!("  - Health: http://{}/health", addr);

    serve(listener, state).await
}
