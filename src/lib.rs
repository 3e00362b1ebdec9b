//! # sitepeek
//!
//! Best-effort metadata extraction for arbitrary web pages: given a
//! hostname or URL, fetch the page over HTTPS, parse its HTML, and extract
//! a `{ name, description, logo, video, images }` record for link previews
//! and submission-form autofill. Every discovered URL comes back absolute,
//! and every field is populated, either with a value found in the markup
//! or with its defined fallback.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use sitepeek::{extract, Error};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Error> {
//!     let metadata = extract("example.com").await?;
//!
//!     println!("Name: {}", metadata.name);
//!     println!("Logo: {}", metadata.logo);
//!     Ok(())
//! }
//! ```
//!
//! ## Extraction policy
//!
//! Each field is filled from an ordered fallback chain of markup locations
//! (Open Graph tags first, then Twitter-card tags, then plain HTML), with
//! host-derived defaults when the document offers nothing. The chains are
//! explicit `(selector, attribute)` tables in [`metadata::sources`].
//!
//! ## Trust model
//!
//! The fetch deliberately accepts invalid certificates by default. This is
//! a documented relaxation for a best-effort preview tool, configured per
//! call via [`Options`], never globally. Timeouts, redirect limits, and the
//! browser-like header set are also per-call options.

mod error;
mod options;
mod result;

/// DOM operations adapter over `dom_query`.
pub mod dom;

/// Character decoding for fetched response bodies.
pub mod encoding;

/// Target normalization and the outbound page fetch.
pub mod fetch;

/// Fallback-chain metadata extraction.
pub mod metadata;

/// HTTP endpoint layer (router, handler, error bodies).
pub mod server;

/// URL absolutization and host-derived fallbacks.
pub mod url_utils;

// Public API - re-exports
pub use error::{Error, Result};
pub use options::{Options, DEFAULT_USER_AGENT};
pub use result::PageMetadata;

use dom_query::Document;
use url::Url;

/// Fetch a target and extract its metadata record using default options.
///
/// The input may be a bare host (`"example.com"`) or a full URL; anything
/// without an HTTP scheme is fetched as `https://<input>`.
///
/// # Example
///
/// ```rust,no_run
/// # async fn run() -> Result<(), sitepeek::Error> {
/// let metadata = sitepeek::extract("https://example.com/page").await?;
/// assert!(!metadata.name.is_empty());
/// # Ok(())
/// # }
/// ```
pub async fn extract(target: &str) -> Result<PageMetadata> {
    extract_with_options(target, &Options::default()).await
}

/// Fetch a target and extract its metadata record with custom options.
///
/// One outbound request per call; no retries, no caching, no state shared
/// across invocations. Dropping the returned future cancels the fetch.
pub async fn extract_with_options(target: &str, options: &Options) -> Result<PageMetadata> {
    let page = fetch::fetch_page(target, options).await?;
    Ok(extract_from_html(&page.html, &page.url))
}

/// Extract the metadata record from an already-fetched document.
///
/// `page_url` is the URL the page was fetched from: the base for
/// relative-reference resolution and the origin of the host-derived
/// fallbacks. Extraction itself never fails: missing fields degrade to
/// their defaults.
#[must_use]
pub fn extract_from_html(html: &str, page_url: &Url) -> PageMetadata {
    let doc = Document::from(html);
    metadata::extract_metadata(&doc, page_url)
}
