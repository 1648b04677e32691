//! Outbound link classification
//!
//! Every `<a href>` is resolved against the page URL and counted as internal
//! or external by host. Fragment-only, `mailto:`, `tel:` and `javascript:`
//! references are skipped entirely.

use crate::report::LinkCounts;
use crate::url::same_host;
use scraper::{Html, Selector};
use url::Url;

/// Schemes that never point at another document
const SKIPPED_SCHEMES: &[&str] = &["mailto:", "tel:", "javascript:"];

/// Classifies the anchors in `markup` relative to `page_url`
///
/// # Example
///
/// ```
/// use seo_audit::audit::classify;
/// use url::Url;
///
/// let html = r#"<a href="/about">A</a><a href="https://other.com" rel="nofollow">B</a>"#;
/// let counts = classify(html, &Url::parse("https://site.com/").unwrap());
/// assert_eq!((counts.internal, counts.external, counts.nofollow), (1, 1, 1));
/// ```
pub fn classify(markup: &str, page_url: &Url) -> LinkCounts {
    let document = Html::parse_document(markup);
    classify_document(&document, page_url)
}

/// Classifies the anchors of an already parsed document
pub(crate) fn classify_document(document: &Html, page_url: &Url) -> LinkCounts {
    let mut counts = LinkCounts::default();

    let Ok(selector) = Selector::parse("a[href]") else {
        return counts;
    };

    for element in document.select(&selector) {
        let Some(href) = element.value().attr("href") else {
            continue;
        };

        let href = href.trim();
        if is_skipped(href) {
            continue;
        }

        if is_nofollow(element.value().attr("rel")) {
            counts.nofollow += 1;
        }

        if let Some(resolved) = resolve_link(href, page_url) {
            if same_host(&resolved, page_url) {
                counts.internal += 1;
            } else {
                counts.external += 1;
            }
        }
    }

    counts
}

/// Returns true for hrefs excluded from every count
fn is_skipped(href: &str) -> bool {
    if href.starts_with('#') {
        return true;
    }

    SKIPPED_SCHEMES.iter().any(|scheme| {
        href.get(..scheme.len())
            .is_some_and(|prefix| prefix.eq_ignore_ascii_case(scheme))
    })
}

/// Returns true when the whitespace-separated `rel` tokens include `nofollow`
fn is_nofollow(rel: Option<&str>) -> bool {
    rel.is_some_and(|rel| {
        rel.split_whitespace()
            .any(|token| token.eq_ignore_ascii_case("nofollow"))
    })
}

/// Resolves an href to an absolute URL
///
/// Returns None when the href is malformed or resolves to a URL without a
/// host.
fn resolve_link(href: &str, base_url: &Url) -> Option<Url> {
    let resolved = base_url.join(href).ok()?;
    resolved.host_str()?;
    Some(resolved)
}
