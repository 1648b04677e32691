//! Integration tests for the audit pipeline
//!
//! These tests use wiremock to stand in for both the audited site and the
//! performance-analysis API.

mod audit_tests;
mod common;
mod server_tests;
