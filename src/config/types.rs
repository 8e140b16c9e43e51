use serde::Deserialize;

/// Default outbound User-Agent header value
pub const DEFAULT_USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/91.0.4472.124 Safari/537.36";

/// Main configuration structure for Pagelens
///
/// Every field has a default, so an empty (or absent) configuration file
/// yields the built-in process-wide defaults. The loaded value is immutable
/// and injected into the pipeline at construction.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    pub fetch: FetchConfig,
    pub limits: LimitsConfig,
}

/// Fetch behavior configuration
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct FetchConfig {
    /// Request timeout in milliseconds
    #[serde(rename = "timeout-ms")]
    pub timeout_ms: u64,

    /// Maximum raw response body size in bytes
    #[serde(rename = "max-body-bytes")]
    pub max_body_bytes: usize,

    /// Maximum number of redirects to follow transparently
    #[serde(rename = "max-redirects")]
    pub max_redirects: usize,

    /// Outbound User-Agent header
    #[serde(rename = "user-agent")]
    pub user_agent: String,
}

impl Default for FetchConfig {
    fn default() -> Self {
        Self {
            timeout_ms: 10_000,
            max_body_bytes: 10 * 1024 * 1024,
            max_redirects: 10,
            user_agent: DEFAULT_USER_AGENT.to_string(),
        }
    }
}

/// Output truncation limits
///
/// Each extracted collection keeps at most this many entries, first in
/// document order.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct LimitsConfig {
    /// Maximum number of headings in the output record
    #[serde(rename = "max-headings")]
    pub max_headings: usize,

    /// Maximum number of links in the output record
    #[serde(rename = "max-links")]
    pub max_links: usize,

    /// Maximum number of images in the output record
    #[serde(rename = "max-images")]
    pub max_images: usize,
}

impl Default for LimitsConfig {
    fn default() -> Self {
        Self {
            max_headings: 20,
            max_links: 50,
            max_images: 20,
        }
    }
}
