//! Pagelens: a single-shot web page extractor
//!
//! This crate fetches one remote document over HTTP(S), parses it as HTML,
//! and extracts a bounded structured record (title, description, headings,
//! links, images) for downstream consumption. One URL in, one record or one
//! classified error out.

pub mod config;
pub mod scraper;
pub mod url;

use thiserror::Error;

/// Main error type for scrape operations
///
/// Each variant carries a human-readable message; the variant itself is the
/// caller-facing error kind. Kinds map to status-like codes via
/// [`ScrapeError::status_code`].
#[derive(Debug, Error)]
pub enum ScrapeError {
    /// Empty or unparsable URL, rejected before any network call
    #[error("Invalid URL: {0}")]
    InvalidInput(String),

    /// DNS resolution failure or connection refusal
    #[error("Website not found or unreachable: {0}")]
    NotFound(String),

    /// Fetch exceeded the configured timeout
    #[error("Request timeout for {0}")]
    Timeout(String),

    /// Any other transport-level failure (TLS, oversized body, protocol)
    #[error("Fetch failed: {0}")]
    FetchFailed(String),

    /// Unexpected failure outside the network path
    #[error("Internal error: {0}")]
    InternalError(String),
}

impl ScrapeError {
    /// Returns the status-like code callers see for this error kind
    pub fn status_code(&self) -> u16 {
        match self {
            ScrapeError::InvalidInput(_) => 400,
            ScrapeError::NotFound(_) => 404,
            ScrapeError::Timeout(_) => 408,
            ScrapeError::FetchFailed(_) => 500,
            ScrapeError::InternalError(_) => 500,
        }
    }

    /// Returns the short name of the error kind, for logs and serialization
    pub fn kind(&self) -> &'static str {
        match self {
            ScrapeError::InvalidInput(_) => "invalid-input",
            ScrapeError::NotFound(_) => "not-found",
            ScrapeError::Timeout(_) => "timeout",
            ScrapeError::FetchFailed(_) => "fetch-failed",
            ScrapeError::InternalError(_) => "internal-error",
        }
    }
}

/// Configuration-specific errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse TOML: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Validation error: {0}")]
    Validation(String),
}

/// Result type alias for scrape operations
pub type Result<T> = std::result::Result<T, ScrapeError>;

/// Result type alias for configuration operations
pub type ConfigResult<T> = std::result::Result<T, ConfigError>;

// Re-export commonly used types
pub use config::Config;
pub use scraper::{scrape, ImageEntry, LinkEntry, ScrapeResult, Scraper};
pub use url::normalize_url;
