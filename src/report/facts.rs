use serde::Serialize;

/// Trims a raw extracted value; empty or missing becomes `None`
///
/// This is the single normalization rule applied to every optional field
/// of [`PageFacts`], so "missing" and "empty" are never told apart downstream.
///
/// # Examples
///
/// ```
/// use seo_audit::report::normalize_text;
///
/// assert_eq!(normalize_text(Some("  Title ")), Some("Title".to_string()));
/// assert_eq!(normalize_text(Some("   ")), None);
/// assert_eq!(normalize_text(None), None);
/// ```
pub fn normalize_text(value: Option<&str>) -> Option<String> {
    value
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
}

/// Snapshot of the SEO-relevant facts extracted from one fetched page
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PageFacts {
    /// Text of the first `<title>`
    pub title: Option<String>,

    /// `content` of `<meta name="description">`
    pub meta_description: Option<String>,

    /// Text of the first `<h1>`
    pub h1: Option<String>,

    /// `content` of `<meta name="robots">`
    pub robots_directive: Option<String>,

    /// `href` of `<link rel="canonical">`, not resolved against the page URL
    pub canonical_url: Option<String>,

    pub open_graph: OpenGraph,

    /// `lang` attribute of `<html>`
    pub html_lang: Option<String>,

    pub counts: PageCounts,

    pub links: LinkCounts,
}

/// Open Graph tags describing how the page is shared
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct OpenGraph {
    pub title: Option<String>,
    pub description: Option<String>,
    pub url: Option<String>,
}

/// Element tallies
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PageCounts {
    /// Number of `<img>` elements
    pub images: usize,

    /// Number of anchors that resolved to an absolute URL
    pub total_links: usize,

    /// Number of `<h1>` elements
    pub h1_count: usize,
}

/// Outbound link classification relative to the page's own host
///
/// `nofollow` is counted independently of the internal/external split.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct LinkCounts {
    pub internal: usize,
    pub external: usize,
    pub nofollow: usize,
}

impl LinkCounts {
    /// Links that resolved and were classified as internal or external
    pub fn resolved(&self) -> usize {
        self.internal + self.external
    }
}
