//! Audit pipeline
//!
//! This module contains the single-page audit logic:
//! - HTTP fetching with a bounded timeout and one retry
//! - Markup analysis into page facts
//! - Link classification by host
//! - Orchestration of the whole cycle

mod analyzer;
mod fetcher;
mod links;
mod orchestrator;

pub use analyzer::analyze;
pub use fetcher::{build_http_client, PageFetcher};
pub use links::classify;
pub use orchestrator::Auditor;
