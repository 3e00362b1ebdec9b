//! Metadata extraction module.
//!
//! Applies the per-field fallback chains to a parsed document and
//! normalizes every selected URL against the fetch URL. Extraction never
//! fails: a field whose chain comes up empty takes its defined default, so
//! the result is always fully populated.

pub mod media;
pub mod sources;

use dom_query::Document;
use url::Url;

use crate::result::PageMetadata;
use crate::url_utils;

pub use media::collect_images;
pub use sources::{first_non_empty, Attr, Source};

/// Extract the full metadata record from a document.
///
/// `page_url` is the normalized fetch URL: the base for relative-reference
/// resolution and the origin of the host-derived fallbacks (`name` label,
/// conventional favicon).
#[must_use]
pub fn extract_metadata(doc: &Document, page_url: &Url) -> PageMetadata {
    let host = page_url.host_str().unwrap_or_default();

    let name = sources::first_non_empty(doc, sources::NAME_SOURCES)
        .unwrap_or_else(|| url_utils::host_label(host));

    let description =
        sources::first_non_empty(doc, sources::DESCRIPTION_SOURCES).unwrap_or_default();

    // A selected logo that resolves to nothing falls through to the
    // favicon default, keeping the absolute-URL invariant.
    let logo = sources::first_non_empty(doc, sources::LOGO_SOURCES)
        .map(|value| url_utils::make_absolute(&value, page_url))
        .filter(|resolved| !resolved.is_empty())
        .unwrap_or_else(|| url_utils::default_favicon(host));

    let video = sources::first_non_empty(doc, sources::VIDEO_SOURCES)
        .map(|value| url_utils::make_absolute(&value, page_url))
        .unwrap_or_default();

    let images = media::collect_images(doc, page_url);

    PageMetadata {
        name,
        description,
        logo,
        video,
        images,
    }
}
