//! Result type for metadata extraction output.
//!
//! This module defines the value object returned by extraction. It is
//! always fully populated: every field holds either a discovered value or
//! its defined default, so consumers never see a partially valid record.

use serde::{Deserialize, Serialize};

/// Metadata extracted from a fetched page.
///
/// Serializes to the wire shape `{ name, description, logo, video,
/// images }` consumed by the submission form. Every URL-valued field, when
/// non-empty, is an absolute URL resolvable independent of the page it was
/// found on.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageMetadata {
    /// Page or site name. Never empty: falls back to the fetch URL's host
    /// before its first `.` when the markup offers nothing.
    pub name: String,

    /// Page description. Empty when no description tag is present.
    pub description: String,

    /// Primary image or icon, absolute. Falls back to the conventional
    /// `https://<host>/favicon.ico` when the markup offers nothing.
    pub logo: String,

    /// Primary video, absolute, or empty when none is declared.
    pub video: String,

    /// Every `<img>` source in document order, absolutized and
    /// deduplicated (first occurrence wins).
    pub images: Vec<String>,
}
