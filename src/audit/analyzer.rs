//! Markup analyzer for on-page SEO facts
//!
//! This module parses fetched HTML and extracts:
//! - Title, meta description and first heading
//! - Robots directive and canonical link
//! - Open Graph tags and document language
//! - Image, heading and link counts

use crate::audit::links::classify_document;
use crate::report::{normalize_text, OpenGraph, PageCounts, PageFacts};
use scraper::{Html, Selector};
use url::Url;

/// Parses HTML content and extracts its SEO facts
///
/// # Extraction Rules
///
/// The first element in document order wins for every single-valued field.
/// Values are trimmed and empty values become `None`. The canonical URL is
/// kept as written, not resolved against `page_url`.
///
/// | Field | Source |
/// |-------|--------|
/// | title | text of `<title>` |
/// | meta_description | `<meta name="description" content>` |
/// | h1 | text of `<h1>` |
/// | robots_directive | `<meta name="robots" content>` |
/// | canonical_url | `<link rel="canonical" href>` |
/// | open_graph | `<meta property="og:title/og:description/og:url" content>` |
/// | html_lang | `<html lang>` |
///
/// `counts.total_links` is the number of anchors that resolved to an
/// absolute URL, not the raw anchor count.
///
/// # Example
///
/// ```
/// use seo_audit::audit::analyze;
/// use url::Url;
///
/// let html = r#"<html><head><title>Test</title></head><body><h1>Hello</h1></body></html>"#;
/// let facts = analyze(html, &Url::parse("https://example.com/").unwrap());
/// assert_eq!(facts.title, Some("Test".to_string()));
/// assert_eq!(facts.counts.h1_count, 1);
/// ```
pub fn analyze(markup: &str, page_url: &Url) -> PageFacts {
    let document = Html::parse_document(markup);
    let links = classify_document(&document, page_url);

    PageFacts {
        title: normalize_text(first_text(&document, "title").as_deref()),
        meta_description: normalize_text(
            first_attr(&document, r#"meta[name="description"]"#, "content").as_deref(),
        ),
        h1: normalize_text(first_text(&document, "h1").as_deref()),
        robots_directive: normalize_text(
            first_attr(&document, r#"meta[name="robots"]"#, "content").as_deref(),
        ),
        canonical_url: normalize_text(
            first_attr(&document, r#"link[rel="canonical"]"#, "href").as_deref(),
        ),
        open_graph: OpenGraph {
            title: normalize_text(
                first_attr(&document, r#"meta[property="og:title"]"#, "content").as_deref(),
            ),
            description: normalize_text(
                first_attr(&document, r#"meta[property="og:description"]"#, "content").as_deref(),
            ),
            url: normalize_text(
                first_attr(&document, r#"meta[property="og:url"]"#, "content").as_deref(),
            ),
        },
        html_lang: normalize_text(first_attr(&document, "html", "lang").as_deref()),
        counts: PageCounts {
            images: count(&document, "img"),
            total_links: links.resolved(),
            h1_count: count(&document, "h1"),
        },
        links,
    }
}

/// Collected text of the first element matching `css`
fn first_text(document: &Html, css: &str) -> Option<String> {
    let selector = Selector::parse(css).ok()?;

    document
        .select(&selector)
        .next()
        .map(|element| element.text().collect::<String>())
}

/// Attribute value of the first element matching `css`
///
/// Only the first match is consulted, even when it lacks the attribute.
fn first_attr(document: &Html, css: &str, attr: &str) -> Option<String> {
    let selector = Selector::parse(css).ok()?;

    document
        .select(&selector)
        .next()
        .and_then(|element| element.value().attr(attr))
        .map(str::to_string)
}

/// Number of elements matching `css`
fn count(document: &Html, css: &str) -> usize {
    Selector::parse(css)
        .map(|selector| document.select(&selector).count())
        .unwrap_or(0)
}
