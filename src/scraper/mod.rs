//! Scrape pipeline module
//!
//! This module contains the fetch-parse-extract-bound pipeline:
//! - HTTP fetching with redirect following and a raw body cap
//! - Tolerant HTML extraction of title, description, headings, links, images
//! - Truncation of extracted collections to configured limits
//! - Pipeline orchestration and the public entry points

mod extractor;
mod fetcher;
mod limits;
mod pipeline;
mod types;

pub use extractor::{extract_content, NO_DESCRIPTION, NO_TITLE};
pub use fetcher::{build_http_client, fetch_document};
pub use limits::apply_limits;
pub use pipeline::{scrape, Scraper};
pub use types::{FetchedDocument, ImageEntry, LinkEntry, ScrapeResult};
