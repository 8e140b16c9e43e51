//! Configuration module for Pagelens
//!
//! This module handles loading, parsing, and validating TOML configuration
//! files. All fields have defaults, so callers may also construct
//! [`Config::default`] directly and skip the file entirely.
//!
//! # Example
//!
//! ```no_run
//! use pagelens::config::load_config;
//! use std::path::Path;
//!
//! let config = load_config(Path::new("config.toml")).unwrap();
//! println!("Fetch timeout: {}ms", config.fetch.timeout_ms);
//! ```

mod parser;
mod types;
mod validation;

// Re-export types
pub use types::{Config, FetchConfig, LimitsConfig, DEFAULT_USER_AGENT};

// Re-export parser functions
pub use parser::{compute_config_hash, load_config, load_config_with_hash};
