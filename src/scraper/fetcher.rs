//! HTTP fetcher implementation
//!
//! This module handles the single outbound request of a scrape, including:
//! - Building HTTP clients with the configured user agent and timeout
//! - GET requests with transparent redirect following
//! - Enforcing the raw body size cap
//! - Classifying transport failures into the caller-facing taxonomy

use crate::config::FetchConfig;
use crate::scraper::types::FetchedDocument;
use crate::ScrapeError;
use reqwest::{redirect::Policy, Client};
use std::time::Duration;
use url::Url;

/// Builds an HTTP client from the fetch configuration
///
/// The client is built once per [`Scraper`](crate::Scraper) and reused
/// across requests; it holds no per-request state.
///
/// # Arguments
///
/// * `config` - The fetch configuration
///
/// # Returns
///
/// * `Ok(Client)` - Successfully built HTTP client
/// * `Err(ScrapeError::InternalError)` - Failed to build the client
pub fn build_http_client(config: &FetchConfig) -> Result<Client, ScrapeError> {
    Client::builder()
        .user_agent(config.user_agent.as_str())
        .timeout(Duration::from_millis(config.timeout_ms))
        .connect_timeout(Duration::from_secs(10))
        .redirect(Policy::limited(config.max_redirects))
        .gzip(true)
        .brotli(true)
        .build()
        .map_err(|e| ScrapeError::InternalError(format!("Failed to build HTTP client: {}", e)))
}

/// Fetches a normalized URL and returns the raw document
///
/// Redirects are followed transparently; the URL after the last redirect
/// becomes `final_url`. The body cap is checked twice: against the
/// Content-Length header before reading, and against the decoded text
/// afterwards, since not every response declares a length.
///
/// # Error Classification
///
/// | Condition | Kind |
/// |-----------|------|
/// | Timeout elapsed | `Timeout` |
/// | DNS failure / connection refused | `NotFound` |
/// | Non-2xx status | `FetchFailed` |
/// | Body exceeds cap | `FetchFailed` |
/// | Any other transport failure | `FetchFailed` |
///
/// No retries; a failed fetch is reported once.
///
/// # Arguments
///
/// * `client` - The HTTP client to use
/// * `config` - The fetch configuration
/// * `url` - The normalized URL to fetch
pub async fn fetch_document(
    client: &Client,
    config: &FetchConfig,
    url: &Url,
) -> Result<FetchedDocument, ScrapeError> {
    let response = client
        .get(url.as_str())
        .send()
        .await
        .map_err(|e| classify_transport_error(url, &e))?;

    let status = response.status();
    if !status.is_success() {
        return Err(ScrapeError::FetchFailed(format!(
            "{}: status {}",
            url,
            status.as_u16()
        )));
    }

    if let Some(length) = response.content_length() {
        if length as usize > config.max_body_bytes {
            return Err(ScrapeError::FetchFailed(format!(
                "{}: declared body of {} bytes exceeds cap of {}",
                url, length, config.max_body_bytes
            )));
        }
    }

    let final_url = response.url().clone();

    let body = response
        .text()
        .await
        .map_err(|e| classify_transport_error(url, &e))?;

    if body.len() > config.max_body_bytes {
        return Err(ScrapeError::FetchFailed(format!(
            "{}: body of {} bytes exceeds cap of {}",
            url,
            body.len(),
            config.max_body_bytes
        )));
    }

    tracing::debug!("Fetched {} -> {} ({} bytes)", url, final_url, body.len());

    Ok(FetchedDocument { body, final_url })
}

/// Classifies a transport-level error into the caller-facing taxonomy
///
/// DNS resolution failures and connection refusals both surface through
/// `is_connect` and map to `NotFound`. Unrecognized causes only ever
/// downgrade to `FetchFailed`, never to a more specific kind.
fn classify_transport_error(url: &Url, error: &reqwest::Error) -> ScrapeError {
    if error.is_timeout() {
        ScrapeError::Timeout(url.to_string())
    } else if error.is_connect() {
        ScrapeError::NotFound(format!("{}: {}", url, error))
    } else {
        ScrapeError::FetchFailed(format!("{}: {}", url, error))
    }
}
