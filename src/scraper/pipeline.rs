//! Scrape pipeline orchestration
//!
//! normalize -> fetch -> extract -> bound, strictly sequential. Any stage
//! failure short-circuits with a classified error; extraction itself is
//! total and never fails a request.

use crate::config::Config;
use crate::scraper::extractor::extract_content;
use crate::scraper::fetcher::{build_http_client, fetch_document};
use crate::scraper::limits::apply_limits;
use crate::scraper::types::ScrapeResult;
use crate::url::normalize_url;
use crate::ScrapeError;
use reqwest::Client;

/// Single-shot page scraper
///
/// Holds the HTTP client and the immutable configuration. The client is
/// built once and reused; `scrape` calls share no mutable state, so a
/// `Scraper` can serve concurrent requests without locking.
pub struct Scraper {
    client: Client,
    config: Config,
}

impl Scraper {
    /// Creates a scraper from the given configuration
    ///
    /// # Arguments
    ///
    /// * `config` - The validated configuration to run with
    ///
    /// # Returns
    ///
    /// * `Ok(Scraper)` - Ready to serve requests
    /// * `Err(ScrapeError)` - Failed to build the HTTP client
    pub fn new(config: Config) -> Result<Self, ScrapeError> {
        let client = build_http_client(&config.fetch)?;
        Ok(Self { client, config })
    }

    /// Runs the full pipeline for one URL
    ///
    /// # Pipeline
    ///
    /// 1. Normalize the raw input into an absolute HTTP(S) URL
    /// 2. Fetch the document, following redirects
    /// 3. Extract title, description, headings, links, images; relative
    ///    references are resolved against the post-redirect URL
    /// 4. Truncate each collection to its configured limit
    ///
    /// # Arguments
    ///
    /// * `raw_url` - The caller-supplied URL string, scheme optional
    ///
    /// # Returns
    ///
    /// * `Ok(ScrapeResult)` - The bounded structured record
    /// * `Err(ScrapeError)` - The first stage failure, classified
    pub async fn scrape(&self, raw_url: &str) -> Result<ScrapeResult, ScrapeError> {
        let url = normalize_url(raw_url)?;
        tracing::debug!("Normalized {:?} to {}", raw_url, url);

        let document = fetch_document(&self.client, &self.config.fetch, &url).await?;

        let mut result = extract_content(&document.body, &document.final_url);
        apply_limits(&mut result, &self.config.limits);

        tracing::info!(
            "Scraped {}: {} headings, {} links, {} images",
            document.final_url,
            result.headings.len(),
            result.links.len(),
            result.images.len()
        );

        Ok(result)
    }

    /// Returns the configuration this scraper was built with
    pub fn config(&self) -> &Config {
        &self.config
    }
}

/// Convenience entry point: builds a one-shot scraper and runs one scrape
///
/// # Arguments
///
/// * `raw_url` - The caller-supplied URL string
/// * `config` - The configuration to run with
pub async fn scrape(raw_url: &str, config: &Config) -> Result<ScrapeResult, ScrapeError> {
    let scraper = Scraper::new(config.clone())?;
    scraper.scrape(raw_url).await
}
