//! URL handling module for Pagelens
//!
//! This module provides normalization for caller-supplied URL strings and
//! relative-reference resolution against the fetched document's final URL.

mod normalize;
mod resolve;

// Re-export main functions
pub use normalize::normalize_url;
pub use resolve::resolve_or_raw;
