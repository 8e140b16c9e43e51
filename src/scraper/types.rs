use serde::Serialize;
use url::Url;

/// A single outbound link extracted from the document
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LinkEntry {
    /// The anchor's visible text, trimmed
    pub text: String,

    /// Absolute URL when resolution against the final URL succeeded,
    /// the raw href attribute otherwise
    pub href: String,
}

/// A single image reference extracted from the document
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ImageEntry {
    /// Absolute URL when resolution against the final URL succeeded,
    /// the raw src attribute otherwise
    pub src: String,

    /// Alternative text; empty string when the attribute is absent
    pub alt: String,
}

/// The structured record produced by a scrape
///
/// Collections are in document order. After bounding, their lengths never
/// exceed the configured limits.
#[derive(Debug, Clone, Serialize)]
pub struct ScrapeResult {
    pub title: String,
    pub description: String,
    pub headings: Vec<String>,
    pub links: Vec<LinkEntry>,
    pub images: Vec<ImageEntry>,
}

/// Raw document returned by the fetcher
///
/// Exists only within one request's processing.
#[derive(Debug, Clone)]
pub struct FetchedDocument {
    /// Response body decoded as text
    pub body: String,

    /// URL after following redirects; the base for resolving relative
    /// references in the document
    pub final_url: Url,
}
