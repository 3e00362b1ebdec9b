//! Fallback-chain source tables.
//!
//! Each field's candidate sources are an explicit ordered list of
//! `(selector, attribute)` pairs, evaluated in sequence until one yields a
//! non-empty value. The precedence lives in these tables, not in
//! expression order, so it is directly testable.

use dom_query::Document;

use crate::dom;

/// Where a candidate's value is read from once its selector matches.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Attr {
    /// The `content` attribute of a `<meta>` tag.
    Content,
    /// The `href` attribute of a `<link>` tag.
    Href,
    /// The `src` attribute of a media element.
    Src,
    /// The element's text content.
    Text,
}

/// One candidate source: a CSS selector plus the attribute to read.
#[derive(Debug, Clone, Copy)]
pub struct Source {
    pub selector: &'static str,
    pub attr: Attr,
}

/// `name` candidates. Final fallback (host before first `.`) needs the
/// fetch URL and is applied by the orchestrator.
pub static NAME_SOURCES: &[Source] = &[
    Source { selector: "meta[property='og:title']", attr: Attr::Content },
    Source { selector: "meta[name='twitter:title']", attr: Attr::Content },
    Source { selector: "title", attr: Attr::Text },
];

/// `description` candidates. Falls back to the empty string.
pub static DESCRIPTION_SOURCES: &[Source] = &[
    Source { selector: "meta[property='og:description']", attr: Attr::Content },
    Source { selector: "meta[name='description']", attr: Attr::Content },
    Source { selector: "meta[name='twitter:description']", attr: Attr::Content },
];

/// `logo` candidates. Final fallback (`https://<host>/favicon.ico`) needs
/// the fetch URL and is applied by the orchestrator.
pub static LOGO_SOURCES: &[Source] = &[
    Source { selector: "meta[property='og:image']", attr: Attr::Content },
    Source { selector: "meta[name='twitter:image']", attr: Attr::Content },
    Source { selector: "link[rel='icon']", attr: Attr::Href },
    Source { selector: "link[rel='shortcut icon']", attr: Attr::Href },
];

/// `video` candidates. Falls back to the empty string.
pub static VIDEO_SOURCES: &[Source] = &[
    Source { selector: "meta[property='og:video']", attr: Attr::Content },
    Source { selector: "meta[property='og:video:url']", attr: Attr::Content },
    Source { selector: "video source", attr: Attr::Src },
];

/// Evaluate a source table against a document, taking the first candidate
/// whose value is non-empty after trimming.
#[must_use]
pub fn first_non_empty(doc: &Document, sources: &[Source]) -> Option<String> {
    for source in sources {
        let Some(sel) = dom::select_first(doc, source.selector) else {
            continue;
        };

        let value = match source.attr {
            Attr::Content => dom::get_attribute(&sel, "content"),
            Attr::Href => dom::get_attribute(&sel, "href"),
            Attr::Src => dom::get_attribute(&sel, "src"),
            Attr::Text => Some(dom::text_content(&sel).to_string()),
        };

        if let Some(value) = value {
            let value = value.trim();
            if !value.is_empty() {
                return Some(value.to_string());
            }
        }
    }

    None
}
