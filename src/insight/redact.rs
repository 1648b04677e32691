use regex::{Captures, Regex};
use std::sync::LazyLock;

/// Replacement written in place of an API key value
pub const REDACTED_KEY: &str = "key=REDACTED";

/// A key-bearing parameter and its value, any letter case
///
/// The name is `key`, optionally preceded by `api` (`apikey`) or by any
/// alphanumeric prefix ending in `_`/`-` (`api_key`, `x-goog-api-key`). It
/// must start at a non-alphanumeric character so `monkey=` is left alone.
/// The value runs up to the next delimiter.
static KEY_PARAM: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r##"(?i)(?P<lead>^|[^a-z0-9])(?P<name>(?:[a-z0-9]*[_-])?(?:api)?key)=[^&\s"'<>#)]*"##)
        .expect("key redaction pattern is valid")
});

/// Replaces the value of every key-bearing query parameter with `REDACTED`
///
/// A bare `key` parameter is written back as `key=REDACTED` whatever its
/// case; longer names such as `api_key` keep their spelling.
///
/// # Examples
///
/// ```
/// use seo_audit::insight::redact_api_key;
///
/// let text = "GET https://api/run?url=https://x&key=SECRET123&foo=1";
/// assert_eq!(redact_api_key(text), "GET https://api/run?url=https://x&key=REDACTED&foo=1");
/// ```
pub fn redact_api_key(text: &str) -> String {
    KEY_PARAM
        .replace_all(text, |caps: &Captures| {
            let name = &caps["name"];
            if name.eq_ignore_ascii_case("key") {
                format!("{}{}", &caps["lead"], REDACTED_KEY)
            } else {
                format!("{}{}=REDACTED", &caps["lead"], name)
            }
        })
        .into_owned()
}

/// Redacts `key=` parameters and every literal occurrence of `secret`
pub fn redact_secret(text: &str, secret: Option<&str>) -> String {
    let text = match secret.filter(|s| !s.is_empty()) {
        Some(secret) => text.replace(secret, "REDACTED"),
        None => text.to_string(),
    };
    redact_api_key(&text)
}
