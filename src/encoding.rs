//! Character decoding for fetched response bodies.
//!
//! Pages declare their charset in the `Content-Type` response header, in a
//! `<meta>` tag, or not at all. Decoding tries those sources in order and
//! never fails: invalid sequences become the Unicode replacement character.

use encoding_rs::{Encoding, UTF_8};
use regex::Regex;
use std::sync::LazyLock;

/// Match `<meta charset="...">` tag
#[allow(clippy::expect_used)]
static CHARSET_META_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"(?i)<meta[^>]+charset\s*=\s*["']?([^"'\s>]+)"#).expect("valid regex")
});

/// Match the charset parameter of a Content-Type value
#[allow(clippy::expect_used)]
static CONTENT_TYPE_CHARSET_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"(?i)charset\s*=\s*["']?([^"';\s]+)"#).expect("valid regex"));

/// Decode a response body to a UTF-8 string.
///
/// Charset resolution order:
/// 1. `charset=` parameter of the `Content-Type` response header
/// 2. `<meta charset>` / `<meta http-equiv="Content-Type">` declaration in
///    the first 1024 bytes of the body
/// 3. UTF-8 with lossy replacement
#[must_use]
pub fn decode_body(body: &[u8], content_type: Option<&str>) -> String {
    let encoding = header_encoding(content_type)
        .or_else(|| sniff_meta_encoding(body))
        .unwrap_or(UTF_8);

    if encoding == UTF_8 {
        // Fast path: lossy conversion without a transcode pass
        return String::from_utf8_lossy(body).into_owned();
    }

    let (decoded, _encoding_used, _had_errors) = encoding.decode(body);
    decoded.into_owned()
}

/// Resolve the encoding declared in a Content-Type header value.
fn header_encoding(content_type: Option<&str>) -> Option<&'static Encoding> {
    let value = content_type?;
    let charset = CONTENT_TYPE_CHARSET_RE
        .captures(value)
        .and_then(|c| c.get(1))?;
    Encoding::for_label(charset.as_str().as_bytes())
}

/// Resolve an encoding declared in a meta tag near the top of the body.
///
/// Only the first 1024 bytes are examined; real declarations sit in
/// `<head>` and the limit keeps the scan off large bodies.
fn sniff_meta_encoding(body: &[u8]) -> Option<&'static Encoding> {
    let head = &body[..body.len().min(1024)];
    let head_str = String::from_utf8_lossy(head);

    let charset = CHARSET_META_RE.captures(&head_str).and_then(|c| c.get(1))?;
    Encoding::for_label(charset.as_str().as_bytes())
}
