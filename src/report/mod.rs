//! Report data model
//!
//! - `PageFacts`: raw facts extracted from one page, already normalized
//! - `CheckResult`: a fact paired with its pass/fail flag
//! - `AuditReport`: the value returned to callers

mod checks;
mod facts;

pub use checks::{AuditReport, CheckResult, OpenGraphChecks, PageChecks};
pub use facts::{normalize_text, LinkCounts, OpenGraph, PageCounts, PageFacts};
