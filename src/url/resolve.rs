use url::Url;

/// Resolves a possibly-relative reference against a base URL
///
/// Returns the absolute URL string when resolution succeeds. A reference
/// that cannot be resolved is returned verbatim instead of being dropped,
/// so one malformed href or src never fails the surrounding extraction.
///
/// # Arguments
///
/// * `reference` - The raw href/src attribute value
/// * `base` - The document's final URL, after redirects
pub fn resolve_or_raw(reference: &str, base: &Url) -> String {
    match base.join(reference) {
        Ok(absolute) => absolute.to_string(),
        Err(_) => reference.to_string(),
    }
}
