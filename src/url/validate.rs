use url::Url;

/// Parses `input` as an absolute `http` or `https` URL
///
/// Surrounding whitespace is ignored. Relative references, unparsable
/// strings and every other scheme yield `None`; this never performs
/// network access.
///
/// # Examples
///
/// ```
/// use seo_audit::url::parse_http_url;
///
/// assert!(parse_http_url("https://example.com/page").is_some());
/// assert!(parse_http_url("ftp://example.com/file").is_none());
/// assert!(parse_http_url("/relative/path").is_none());
/// ```
pub fn parse_http_url(input: &str) -> Option<Url> {
    let url = Url::parse(input.trim()).ok()?;

    match url.scheme() {
        "http" | "https" => Some(url),
        _ => None,
    }
}

/// Returns true only if `input` parses as a URL whose scheme is `http` or `https`
pub fn is_valid_http_url(input: &str) -> bool {
    parse_http_url(input).is_some()
}
