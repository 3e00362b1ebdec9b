//! Image gallery collection.

use std::collections::HashSet;

use dom_query::{Document, Selection};
use url::Url;

use crate::dom;
use crate::url_utils;

/// Collect every `<img>` source in document order, absolutized against the
/// fetch URL and deduplicated on the absolutized string. First occurrence
/// wins; entries the base cannot absorb are skipped.
#[must_use]
pub fn collect_images(doc: &Document, page_url: &Url) -> Vec<String> {
    let mut seen: HashSet<String> = HashSet::new();
    let mut images = Vec::new();

    for node in doc.select("img").nodes() {
        let img = Selection::from(*node);

        let Some(src) = dom::get_attribute(&img, "src") else {
            continue;
        };

        let absolute = url_utils::make_absolute(&src, page_url);
        if absolute.is_empty() {
            continue;
        }

        if seen.insert(absolute.clone()) {
            images.push(absolute);
        }
    }

    images
}

#[cfg(test)]
mod tests {
    use super::*;

    fn page_url() -> Url {
        match Url::parse("https://example.com/") {
            Ok(url) => url,
            Err(err) => panic!("valid page URL: {err}"),
        }
    }

    #[test]
    fn document_order_is_preserved() {
        let doc = Document::from(
            r#"<html><body>
                <img src="/one.png">
                <p><img src="/two.png"></p>
                <img src="/three.png">
            </body></html>"#,
        );

        assert_eq!(
            collect_images(&doc, &page_url()),
            vec![
                "https://example.com/one.png",
                "https://example.com/two.png",
                "https://example.com/three.png",
            ]
        );
    }

    #[test]
    fn duplicates_keep_first_occurrence() {
        let doc = Document::from(
            r#"<html><body>
                <img src="/a.png">
                <img src="/b.png">
                <img src="/a.png">
            </body></html>"#,
        );

        assert_eq!(
            collect_images(&doc, &page_url()),
            vec!["https://example.com/a.png", "https://example.com/b.png"]
        );
    }

    #[test]
    fn dedup_compares_post_absolutization() {
        // Relative and absolute spellings of the same URL collapse to one
        let doc = Document::from(
            r#"<html><body>
                <img src="/a.png">
                <img src="https://example.com/a.png">
            </body></html>"#,
        );

        assert_eq!(
            collect_images(&doc, &page_url()),
            vec!["https://example.com/a.png"]
        );
    }

    #[test]
    fn sourceless_images_are_skipped() {
        let doc = Document::from(
            r#"<html><body>
                <img alt="decorative">
                <img src="/real.png">
            </body></html>"#,
        );

        assert_eq!(
            collect_images(&doc, &page_url()),
            vec!["https://example.com/real.png"]
        );
    }

    #[test]
    fn no_images_yields_empty_gallery() {
        let doc = Document::from("<html><body><p>text only</p></body></html>");
        assert!(collect_images(&doc, &page_url()).is_empty());
    }
}
