use crate::ScrapeError;
use url::Url;

/// Normalizes a raw, untrusted URL string into an absolute HTTP(S) URL
///
/// # Normalization Steps
///
/// 1. Reject empty (or whitespace-only) input
/// 2. Parse the string as an absolute URL
/// 3. If parsing fails, or the result is not HTTP(S) with a host, retry with
///    an `https://` prefix (covers scheme-less input like `example.com`)
/// 4. Reject if both attempts fail
///
/// This stage is pure and synchronous; no network access occurs here.
/// Downstream stages never receive a scheme-less or unparsable URL.
///
/// # Arguments
///
/// * `raw` - The URL string as supplied by the caller
///
/// # Returns
///
/// * `Ok(Url)` - Canonical absolute URL with scheme and host
/// * `Err(ScrapeError::InvalidInput)` - Empty or unparsable input
///
/// # Examples
///
/// ```
/// use pagelens::url::normalize_url;
///
/// let url = normalize_url("example.com").unwrap();
/// assert_eq!(url.as_str(), "https://example.com/");
/// ```
pub fn normalize_url(raw: &str) -> Result<Url, ScrapeError> {
    let raw = raw.trim();

    // Step 1: Reject empty input before touching the parser
    if raw.is_empty() {
        return Err(ScrapeError::InvalidInput("URL is required".to_string()));
    }

    // Step 2: Parse as-is
    if let Ok(url) = Url::parse(raw) {
        if is_http(&url) {
            return Ok(url);
        }
    }

    // Step 3: Assume a missing scheme and default to https. Only input that
    // does not already name a scheme is rescued; this also covers
    // "example.com:8080", which the first attempt parses with "example.com"
    // as the scheme.
    if !raw.contains("://") {
        let prefixed = format!("https://{}", raw);
        if let Ok(url) = Url::parse(&prefixed) {
            if is_http(&url) {
                return Ok(url);
            }
        }
    }

    Err(ScrapeError::InvalidInput(format!(
        "Cannot parse URL: {}",
        raw
    )))
}

/// Checks that a parsed URL is usable for an HTTP(S) fetch
fn is_http(url: &Url) -> bool {
    (url.scheme() == "http" || url.scheme() == "https") && url.has_host()
}
