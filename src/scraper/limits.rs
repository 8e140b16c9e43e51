use crate::config::LimitsConfig;
use crate::scraper::types::ScrapeResult;

/// Truncates each extracted collection to its configured maximum
///
/// Keeps the first entries in document order; no sampling, no dedup. Pure
/// and total: a record already within limits is left unchanged.
pub fn apply_limits(result: &mut ScrapeResult, limits: &LimitsConfig) {
    result.headings.truncate(limits.max_headings);
    result.links.truncate(limits.max_links);
    result.images.truncate(limits.max_images);
}
