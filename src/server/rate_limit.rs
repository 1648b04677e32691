use crate::config::RateLimitConfig;
use dashmap::DashMap;
use std::time::{Duration, Instant};

/// Map size above which expired windows are pruned on the next call
const PRUNE_THRESHOLD: usize = 1024;

/// Admission check consulted once per inbound audit request
///
/// Implementations backed by a shared store can replace the in-process
/// [`RateLimiter`] for multi-instance deployments.
pub trait RequestGate: Send + Sync {
    /// Returns true when the caller identified by `identifier` may proceed
    fn allow(&self, identifier: &str) -> bool;
}

/// Counter for one identifier within its current window
#[derive(Debug, Clone, Copy)]
struct Window {
    count: u32,
    expires_at: Instant,
}

/// In-process per-identifier rate limiter
///
/// The first call from an identifier opens a window; up to `max_requests`
/// calls are accepted until it expires, after which the next call opens a
/// fresh window. Each identifier is locked independently.
#[derive(Debug)]
pub struct RateLimiter {
    window: Duration,
    max_requests: u32,
    hits: DashMap<String, Window>,
}

impl RateLimiter {
    pub fn new(window: Duration, max_requests: u32) -> Self {
        Self {
            window,
            max_requests,
            hits: DashMap::new(),
        }
    }

    pub fn from_config(config: &RateLimitConfig) -> Self {
        Self::new(Duration::from_secs(config.window_secs), config.max_requests)
    }

    /// Records a call at `now` and reports whether it is accepted
    pub fn allow_at(&self, identifier: &str, now: Instant) -> bool {
        // Must run before taking an entry guard; retain locks every shard
        if self.hits.len() >= PRUNE_THRESHOLD {
            self.hits.retain(|_, window| window.expires_at > now);
        }

        let fresh = Window {
            count: 0,
            expires_at: now + self.window,
        };
        let mut window = self.hits.entry(identifier.to_string()).or_insert(fresh);
        if now >= window.expires_at {
            *window = fresh;
        }

        window.count = window.count.saturating_add(1);
        window.count <= self.max_requests
    }

    /// Number of identifiers currently tracked
    pub fn tracked(&self) -> usize {
        self.hits.len()
    }
}

impl RequestGate for RateLimiter {
    fn allow(&self, identifier: &str) -> bool {
        self.allow_at(identifier, Instant::now())
    }
}
