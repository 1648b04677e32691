use crate::insight::{PerformanceInsight, PerformanceInsightError};
use crate::report::facts::{LinkCounts, PageCounts, PageFacts};
use chrono::{DateTime, Utc};
use serde::Serialize;

/// Directive value that makes a page non-indexable
const NOINDEX: &str = "noindex";

/// A page fact paired with whether it passes its SEO check
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CheckResult<T> {
    pub value: Option<T>,
    pub ok: bool,
}

impl CheckResult<String> {
    /// Presence check: passes when the value is present and non-empty
    pub fn presence(value: Option<String>) -> Self {
        let ok = value.as_deref().is_some_and(|v| !v.is_empty());
        Self { value, ok }
    }

    /// Robots check: passes when the directive is absent or does not contain `noindex`
    ///
    /// A missing tag means the page is indexable. The substring match is
    /// case-sensitive.
    pub fn robots(value: Option<String>) -> Self {
        let ok = value.as_deref().map_or(true, |v| !v.contains(NOINDEX));
        Self { value, ok }
    }
}

/// Open Graph checks
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OpenGraphChecks {
    pub title: CheckResult<String>,
    pub description: CheckResult<String>,
    pub url: CheckResult<String>,
}

/// Every [`PageFacts`] field wrapped into its check
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PageChecks {
    pub title: CheckResult<String>,
    pub meta_description: CheckResult<String>,
    pub h1: CheckResult<String>,
    pub robots_directive: CheckResult<String>,
    pub canonical_url: CheckResult<String>,
    pub open_graph: OpenGraphChecks,
    pub html_lang: CheckResult<String>,
    pub counts: PageCounts,
    pub links: LinkCounts,
}

impl From<PageFacts> for PageChecks {
    fn from(facts: PageFacts) -> Self {
        Self {
            title: CheckResult::presence(facts.title),
            meta_description: CheckResult::presence(facts.meta_description),
            h1: CheckResult::presence(facts.h1),
            robots_directive: CheckResult::robots(facts.robots_directive),
            canonical_url: CheckResult::presence(facts.canonical_url),
            open_graph: OpenGraphChecks {
                title: CheckResult::presence(facts.open_graph.title),
                description: CheckResult::presence(facts.open_graph.description),
                url: CheckResult::presence(facts.open_graph.url),
            },
            html_lang: CheckResult::presence(facts.html_lang),
            counts: facts.counts,
            links: facts.links,
        }
    }
}

/// Final result of one audit
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AuditReport {
    /// The audited URL as requested
    pub url: String,

    pub facts: PageChecks,

    pub performance_insight: Option<PerformanceInsight>,

    pub performance_insight_error: Option<PerformanceInsightError>,

    pub audited_at: DateTime<Utc>,
}

impl AuditReport {
    /// Assembles a report from the page facts and the insight lookup outcome
    pub fn new(
        url: impl Into<String>,
        facts: PageFacts,
        performance_insight: Option<PerformanceInsight>,
        performance_insight_error: Option<PerformanceInsightError>,
    ) -> Self {
        Self {
            url: url.into(),
            facts: facts.into(),
            performance_insight,
            performance_insight_error,
            audited_at: Utc::now(),
        }
    }
}
