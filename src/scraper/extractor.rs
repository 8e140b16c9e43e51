//! HTML extractor for the structured page record
//!
//! This module parses the fetched body into a queryable tree and pulls out:
//! - The page title and description (with placeholder fallbacks)
//! - Headings h1-h6 in document order
//! - Outbound links and images, resolved against the final URL
//!
//! Parsing is tolerant: malformed markup degrades to missing fields, never
//! to an error. Zero headings, links, or images is valid output.

use crate::scraper::types::{ImageEntry, LinkEntry, ScrapeResult};
use crate::url::resolve_or_raw;
use scraper::{Html, Selector};
use url::Url;

/// Placeholder title for documents without a usable <title> element
pub const NO_TITLE: &str = "no title";

/// Placeholder description for documents without a description meta tag
pub const NO_DESCRIPTION: &str = "no description";

/// Extracts the structured record from raw HTML
///
/// # Extraction Rules
///
/// 1. Title: text of the first `title` element, trimmed; placeholder if
///    empty or missing
/// 2. Description: `content` of `meta[name="description"]`, falling back to
///    `meta[property="og:description"]`, then to the placeholder
/// 3. Headings: every `h1`-`h6` in document order, trimmed, blanks skipped
/// 4. Links: every `a[href]` with non-empty trimmed text; href resolved
///    against `final_url`, kept raw when resolution fails
/// 5. Images: every `img[src]`; `alt` defaults to the empty string; src
///    resolved with the same fallback-to-raw policy
///
/// The result is unbounded; truncation happens in
/// [`apply_limits`](crate::scraper::apply_limits).
///
/// # Arguments
///
/// * `html` - The raw document body
/// * `final_url` - The URL after redirects, base for relative references
pub fn extract_content(html: &str, final_url: &Url) -> ScrapeResult {
    let document = Html::parse_document(html);

    ScrapeResult {
        title: extract_title(&document),
        description: extract_description(&document),
        headings: extract_headings(&document),
        links: extract_links(&document, final_url),
        images: extract_images(&document, final_url),
    }
}

/// Extracts the page title, substituting the placeholder when absent
fn extract_title(document: &Html) -> String {
    Selector::parse("title")
        .ok()
        .and_then(|selector| {
            document
                .select(&selector)
                .next()
                .map(|element| element.text().collect::<String>().trim().to_string())
        })
        .filter(|text| !text.is_empty())
        .unwrap_or_else(|| NO_TITLE.to_string())
}

/// Extracts the page description from meta tags
///
/// An empty or whitespace-only content attribute falls through to the next
/// candidate, matching the title's emptiness handling.
fn extract_description(document: &Html) -> String {
    meta_content(document, "meta[name=\"description\"]")
        .or_else(|| meta_content(document, "meta[property=\"og:description\"]"))
        .unwrap_or_else(|| NO_DESCRIPTION.to_string())
}

/// Returns the trimmed content attribute of the first match, if non-empty
fn meta_content(document: &Html, selector: &str) -> Option<String> {
    let selector = Selector::parse(selector).ok()?;
    document
        .select(&selector)
        .next()
        .and_then(|element| element.value().attr("content"))
        .map(|content| content.trim().to_string())
        .filter(|content| !content.is_empty())
}

/// Extracts all headings in document order, skipping blank ones
fn extract_headings(document: &Html) -> Vec<String> {
    let mut headings = Vec::new();

    if let Ok(selector) = Selector::parse("h1, h2, h3, h4, h5, h6") {
        for element in document.select(&selector) {
            let text = element.text().collect::<String>().trim().to_string();
            if !text.is_empty() {
                headings.push(text);
            }
        }
    }

    headings
}

/// Extracts all anchors with an href and non-empty text
fn extract_links(document: &Html, final_url: &Url) -> Vec<LinkEntry> {
    let mut links = Vec::new();

    if let Ok(selector) = Selector::parse("a[href]") {
        for element in document.select(&selector) {
            let text = element.text().collect::<String>().trim().to_string();
            if text.is_empty() {
                continue;
            }

            if let Some(href) = element.value().attr("href") {
                links.push(LinkEntry {
                    text,
                    href: resolve_or_raw(href, final_url),
                });
            }
        }
    }

    links
}

/// Extracts all images with a src attribute
fn extract_images(document: &Html, final_url: &Url) -> Vec<ImageEntry> {
    let mut images = Vec::new();

    if let Ok(selector) = Selector::parse("img[src]") {
        for element in document.select(&selector) {
            if let Some(src) = element.value().attr("src") {
                let alt = element.value().attr("alt").unwrap_or("").to_string();
                images.push(ImageEntry {
                    src: resolve_or_raw(src, final_url),
                    alt,
                });
            }
        }
    }

    images
}

#[cfg(test)]
mod tests {
    use super::*;

    fn final_url() -> Url {
        Url::parse("https://example.com/a/").unwrap()
    }

    #[test]
    fn test_extract_title() {
        let html = r#"<html><head><title>Test Page</title></head><body></body></html>"#;
        let result = extract_content(html, &final_url());
        assert_eq!(result.title, "Test Page");
    }

    #[test]
    fn test_title_trimmed() {
        let html = r#"<html><head><title>  Test Page  </title></head><body></body></html>"#;
        let result = extract_content(html, &final_url());
        assert_eq!(result.title, "Test Page");
    }

    #[test]
    fn test_missing_title_placeholder() {
        let html = r#"<html><head></head><body></body></html>"#;
        let result = extract_content(html, &final_url());
        assert_eq!(result.title, NO_TITLE);
    }

    #[test]
    fn test_empty_title_placeholder() {
        let html = r#"<html><head><title>   </title></head><body></body></html>"#;
        let result = extract_content(html, &final_url());
        assert_eq!(result.title, NO_TITLE);
    }

    #[test]
    fn test_description_from_meta_name() {
        let html = r#"<html><head><meta name="description" content="A page."></head><body></body></html>"#;
        let result = extract_content(html, &final_url());
        assert_eq!(result.description, "A page.");
    }

    #[test]
    fn test_description_falls_back_to_og() {
        let html = r#"<html><head><meta property="og:description" content="Social blurb."></head><body></body></html>"#;
        let result = extract_content(html, &final_url());
        assert_eq!(result.description, "Social blurb.");
    }

    #[test]
    fn test_description_prefers_meta_name_over_og() {
        let html = r#"<html><head>
            <meta name="description" content="Primary.">
            <meta property="og:description" content="Secondary.">
        </head><body></body></html>"#;
        let result = extract_content(html, &final_url());
        assert_eq!(result.description, "Primary.");
    }

    #[test]
    fn test_empty_description_content_falls_through() {
        let html = r#"<html><head>
            <meta name="description" content="">
            <meta property="og:description" content="Fallback.">
        </head><body></body></html>"#;
        let result = extract_content(html, &final_url());
        assert_eq!(result.description, "Fallback.");
    }

    #[test]
    fn test_missing_description_placeholder() {
        let html = r#"<html><head></head><body></body></html>"#;
        let result = extract_content(html, &final_url());
        assert_eq!(result.description, NO_DESCRIPTION);
    }

    #[test]
    fn test_headings_in_document_order() {
        let html = r#"<html><body>
            <h2>Second level</h2>
            <h1>First level</h1>
            <h3>Third level</h3>
        </body></html>"#;
        let result = extract_content(html, &final_url());
        assert_eq!(
            result.headings,
            vec!["Second level", "First level", "Third level"]
        );
    }

    #[test]
    fn test_blank_headings_skipped() {
        let html = r#"<html><body><h1>Real</h1><h2>   </h2><h3></h3></body></html>"#;
        let result = extract_content(html, &final_url());
        assert_eq!(result.headings, vec!["Real"]);
    }

    #[test]
    fn test_relative_link_resolved() {
        let html = r#"<html><body><a href="b.html">Next</a></body></html>"#;
        let result = extract_content(html, &final_url());
        assert_eq!(result.links.len(), 1);
        assert_eq!(result.links[0].text, "Next");
        assert_eq!(result.links[0].href, "https://example.com/a/b.html");
    }

    #[test]
    fn test_absolute_link_unchanged() {
        let html = r#"<html><body><a href="https://other.com/page">Other</a></body></html>"#;
        let result = extract_content(html, &final_url());
        assert_eq!(result.links[0].href, "https://other.com/page");
    }

    #[test]
    fn test_empty_text_link_skipped() {
        let html = r#"<html><body><a href="/x">   </a><a href="/y">Kept</a></body></html>"#;
        let result = extract_content(html, &final_url());
        assert_eq!(result.links.len(), 1);
        assert_eq!(result.links[0].text, "Kept");
    }

    #[test]
    fn test_anchor_without_href_skipped() {
        let html = r#"<html><body><a name="here">Anchor</a></body></html>"#;
        let result = extract_content(html, &final_url());
        assert!(result.links.is_empty());
    }

    #[test]
    fn test_unresolvable_href_preserved() {
        let html = r#"<html><body><a href="//[bad">Broken</a></body></html>"#;
        let result = extract_content(html, &final_url());
        assert_eq!(result.links[0].href, "//[bad");
    }

    #[test]
    fn test_image_with_alt() {
        let html = r#"<html><body><img src="logo.png" alt="Logo"></body></html>"#;
        let result = extract_content(html, &final_url());
        assert_eq!(result.images.len(), 1);
        assert_eq!(result.images[0].src, "https://example.com/a/logo.png");
        assert_eq!(result.images[0].alt, "Logo");
    }

    #[test]
    fn test_image_alt_defaults_to_empty() {
        let html = r#"<html><body><img src="/pix.gif"></body></html>"#;
        let result = extract_content(html, &final_url());
        assert_eq!(result.images[0].src, "https://example.com/pix.gif");
        assert_eq!(result.images[0].alt, "");
    }

    #[test]
    fn test_image_without_src_skipped() {
        let html = r#"<html><body><img alt="decorative"></body></html>"#;
        let result = extract_content(html, &final_url());
        assert!(result.images.is_empty());
    }

    #[test]
    fn test_malformed_markup_tolerated() {
        // Unclosed tags must degrade gracefully, never error
        let html = r#"<html><head><title>Broken</title></head><body><h1>Heading<p><a href="/x">Link</body>"#;
        let result = extract_content(html, &final_url());
        assert_eq!(result.title, "Broken");
        assert!(!result.headings.is_empty());
        assert_eq!(result.links.len(), 1);
        assert_eq!(result.links[0].href, "https://example.com/x");
    }

    #[test]
    fn test_empty_document() {
        let result = extract_content("", &final_url());
        assert_eq!(result.title, NO_TITLE);
        assert_eq!(result.description, NO_DESCRIPTION);
        assert!(result.headings.is_empty());
        assert!(result.links.is_empty());
        assert!(result.images.is_empty());
    }
}
