//! DOM operations adapter.
//!
//! Thin helpers over the `dom_query` crate used by the extraction tables.

// Re-export core types for external use
pub use dom_query::{Document, Selection};

// Re-export StrTendril for external use
pub use tendril::StrTendril;

/// Get any attribute value of the first matched node.
#[inline]
#[must_use]
pub fn get_attribute(sel: &Selection, name: &str) -> Option<String> {
    sel.attr(name).map(|s| s.to_string())
}

/// Get all text content of the first matched node and its descendants.
///
/// Returns `StrTendril` for zero-copy passing. Use `.to_string()` only when
/// you need owned storage.
#[inline]
#[must_use]
pub fn text_content(sel: &Selection) -> StrTendril {
    sel.text()
}

/// First node of a document-level selection, as its own `Selection`.
#[must_use]
pub fn select_first<'a>(doc: &'a Document, selector: &str) -> Option<Selection<'a>> {
    doc.select(selector)
        .nodes()
        .first()
        .map(|node| Selection::from(*node))
}
