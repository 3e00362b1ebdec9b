//! Target normalization and the single outbound page fetch.
//!
//! One invocation issues exactly one GET with browser-like headers, a fixed
//! timeout, and per-call certificate laxity. The client is built fresh for
//! every call: invocations share no state, and dropping the returned future
//! cancels the in-flight request.

use reqwest::header::{HeaderMap, HeaderValue, ACCEPT, ACCEPT_LANGUAGE, CONNECTION, CONTENT_TYPE};
use reqwest::redirect::Policy;
use url::Url;

use crate::encoding;
use crate::error::{Error, Result};
use crate::url_utils;
use crate::Options;

/// A successfully fetched page: the decoded HTML and the URL every relative
/// reference resolves against.
#[derive(Debug)]
pub struct FetchedPage {
    /// The normalized fetch URL. Resolution base for extracted values:
    /// the pre-redirect URL, matching what was requested.
    pub url: Url,

    /// Response body decoded to UTF-8.
    pub html: String,
}

/// Normalize a caller-supplied target to a fetchable URL string.
///
/// Prepends `https://` when the input does not already begin with an HTTP
/// scheme token. No other shape validation happens here: a malformed host
/// surfaces as a network-layer failure from the fetch itself.
#[must_use]
pub fn normalize_target(input: &str) -> String {
    let input = input.trim();
    if url_utils::has_http_scheme(input) {
        input.to_string()
    } else {
        format!("https://{input}")
    }
}

/// Fetch the target page and decode its body.
///
/// Terminal failures: an unparseable normalized URL, any transport error
/// (DNS, connection, TLS beyond the configured laxity), timeout expiry, and
/// a non-success status. None are retried.
pub async fn fetch_page(target: &str, options: &Options) -> Result<FetchedPage> {
    let fetch_url = normalize_target(target);
    let page_url =
        Url::parse(&fetch_url).map_err(|err| Error::Fetch(format!("invalid URL {fetch_url}: {err}")))?;

    let client = reqwest::Client::builder()
        .user_agent(options.user_agent.as_str())
        .default_headers(browser_headers())
        .timeout(options.timeout)
        .redirect(Policy::limited(options.max_redirects))
        .danger_accept_invalid_certs(options.accept_invalid_certs)
        .build()
        .map_err(|err| Error::Fetch(err.to_string()))?;

    let response = client.get(page_url.clone()).send().await.map_err(|err| {
        if err.is_timeout() {
            Error::Fetch(format!("timed out after {:?}", options.timeout))
        } else {
            Error::Fetch(err.to_string())
        }
    })?;

    let status = response.status();
    if !status.is_success() {
        return Err(Error::HttpStatus(status.as_u16()));
    }

    let content_type = response
        .headers()
        .get(CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .map(ToString::to_string);

    let body = response
        .bytes()
        .await
        .map_err(|err| Error::Fetch(err.to_string()))?;

    let html = encoding::decode_body(&body, content_type.as_deref());

    Ok(FetchedPage { url: page_url, html })
}

/// Standard headers beyond User-Agent; some sites gate content on them.
fn browser_headers() -> HeaderMap {
    let mut headers = HeaderMap::new();
    headers.insert(
        ACCEPT,
        HeaderValue::from_static(
            "text/html,application/xhtml+xml,application/xml;q=0.9,image/webp,*/*;q=0.8",
        ),
    );
    headers.insert(ACCEPT_LANGUAGE, HeaderValue::from_static("en-US,en;q=0.5"));
    headers.insert(CONNECTION, HeaderValue::from_static("keep-alive"));
    headers.insert("upgrade-insecure-requests", HeaderValue::from_static("1"));
    headers
}
