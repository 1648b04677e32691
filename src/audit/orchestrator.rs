//! Audit orchestration
//!
//! Composes validation, fetching, analysis and the performance lookup into
//! one request/response cycle.

use crate::audit::analyzer::analyze;
use crate::audit::fetcher::PageFetcher;
use crate::config::Config;
use crate::insight::{InsightClient, InsightOutcome};
use crate::report::AuditReport;
use crate::url::parse_http_url;
use crate::{AuditError, AuditResult};

/// Runs audits; holds no per-request state and is safe to share between tasks
#[derive(Debug, Clone)]
pub struct Auditor {
    fetcher: PageFetcher,
    insight: Option<InsightClient>,
}

impl Auditor {
    /// Creates an auditor from configuration
    ///
    /// The insight client is only built when `insight.enabled` is set.
    pub fn new(config: &Config) -> crate::Result<Self> {
        let fetcher = PageFetcher::new(&config.user_agent, &config.fetcher)?;
        let insight = if config.insight.enabled {
            Some(InsightClient::new(&config.user_agent, &config.insight)?)
        } else {
            None
        };

        Ok(Self::from_parts(fetcher, insight))
    }

    /// Creates an auditor from already built collaborators
    pub fn from_parts(fetcher: PageFetcher, insight: Option<InsightClient>) -> Self {
        Self { fetcher, insight }
    }

    /// Audits the page at `raw_url`
    ///
    /// # Sequence
    ///
    /// 1. Validate the URL; on failure return `InvalidUrl` without any network access
    /// 2. Fetch the markup; failure becomes `FetchFailed`
    /// 3. Extract page facts and classify links
    /// 4. Look up the performance insight; its failures are embedded in the report
    /// 5. Assemble the report
    pub async fn run_audit(&self, raw_url: &str) -> AuditResult<AuditReport> {
        let url = parse_http_url(raw_url)
            .ok_or_else(|| AuditError::InvalidUrl(raw_url.to_string()))?;

        tracing::debug!("Auditing {}", url);
        let markup = self.fetcher.fetch(&url).await?;

        let facts = analyze(&markup, &url);
        tracing::debug!(
            "Analyzed {}: {} internal, {} external, {} nofollow links",
            url,
            facts.links.internal,
            facts.links.external,
            facts.links.nofollow
        );

        let (insight, insight_error) = self.performance_insight(url.as_str()).await;

        tracing::info!(
            "Audit complete for {} (insight: {})",
            url,
            if insight.is_some() { "yes" } else { "no" }
        );

        Ok(AuditReport::new(
            raw_url.trim(),
            facts,
            insight,
            insight_error,
        ))
    }

    async fn performance_insight(&self, target_url: &str) -> InsightOutcome {
        match &self.insight {
            Some(client) => client.fetch_insight(target_url).await,
            None => (None, None),
        }
    }
}
