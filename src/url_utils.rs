//! URL utility functions.
//!
//! Absolutization policy for extracted values, plus the host-derived
//! fallbacks used when a document offers nothing. Relative references are
//! resolved with the `url` crate's RFC 3986 algorithm, never by string
//! concatenation, so `..`, query strings, and fragments behave correctly.

use url::Url;

/// Check whether a string already carries an HTTP scheme token.
#[must_use]
pub fn has_http_scheme(s: &str) -> bool {
    s.starts_with("http://") || s.starts_with("https://")
}

/// Convert an extracted value to absolute form against the fetch URL.
///
/// Policy, in order:
/// - empty input stays empty;
/// - a value already starting with `http://` or `https://` is used as-is;
/// - a protocol-relative value (`//cdn...`) is prefixed with `https:`;
/// - anything else is resolved as a relative reference against `base`.
///
/// A value the base cannot absorb (join failure) is treated as absent and
/// comes back empty, so callers fall through to their field default rather
/// than propagate an unresolvable string.
#[must_use]
pub fn make_absolute(value: &str, base: &Url) -> String {
    let value = value.trim();

    if value.is_empty() {
        return String::new();
    }

    if has_http_scheme(value) {
        return value.to_string();
    }

    if value.starts_with("//") {
        return format!("https:{value}");
    }

    match base.join(value) {
        Ok(resolved) => resolved.to_string(),
        Err(_) => String::new(),
    }
}

/// The host substring before its first `.`, the last-resort `name` value
/// (`"example.com"` becomes `"example"`).
#[must_use]
pub fn host_label(host: &str) -> String {
    host.split('.').next().unwrap_or(host).to_string()
}

/// The conventional favicon path on the target host, the last-resort
/// `logo` value.
#[must_use]
pub fn default_favicon(host: &str) -> String {
    format!("https://{host}/favicon.ico")
}
