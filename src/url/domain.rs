use url::Url;

/// Extracts the host from a URL
///
/// The host is lowercased; the port, scheme and path play no part. URLs
/// without a host (`data:`, `about:`) return `None`.
///
/// # Examples
///
/// ```
/// use url::Url;
/// use seo_audit::url::extract_host;
///
/// let url = Url::parse("https://example.com/path").unwrap();
/// assert_eq!(extract_host(&url), Some("example.com".to_string()));
///
/// let url = Url::parse("https://EXAMPLE.COM:8443/path").unwrap();
/// assert_eq!(extract_host(&url), Some("example.com".to_string()));
/// ```
pub fn extract_host(url: &Url) -> Option<String> {
    url.host_str().map(|h| h.to_lowercase())
}

/// Returns true when both URLs carry the same host
///
/// Two host-less URLs are never considered the same host.
pub fn same_host(a: &Url, b: &Url) -> bool {
    match (extract_host(a), extract_host(b)) {
        (Some(a), Some(b)) => a == b,
        _ => false,
    }
}
