//! Pagelens main entry point
//!
//! Command-line interface for the single-shot page extractor: one URL in,
//! one JSON record on stdout.

use anyhow::Context;
use clap::Parser;
use pagelens::config::{load_config_with_hash, Config};
use pagelens::scraper::Scraper;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

/// Pagelens: single-shot web page extractor
///
/// Fetches one page over HTTP(S) and prints its title, description,
/// headings, links, and images as JSON.
#[derive(Parser, Debug)]
#[command(name = "pagelens")]
#[command(version = "0.1.0")]
#[command(about = "Single-shot web page extractor", long_about = None)]
struct Cli {
    /// URL to scrape (scheme optional, defaults to https)
    #[arg(value_name = "URL")]
    url: String,

    /// Path to TOML configuration file (built-in defaults when omitted)
    #[arg(short, long, value_name = "CONFIG")]
    config: Option<PathBuf>,

    /// Pretty-print the JSON output
    #[arg(long)]
    pretty: bool,

    /// Increase logging verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Suppress non-error output
    #[arg(short, long, conflicts_with = "verbose")]
    quiet: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Setup logging based on verbosity
    setup_logging(cli.verbose, cli.quiet);

    // Load configuration, or run with the built-in defaults
    let config = match &cli.config {
        Some(path) => {
            tracing::info!("Loading configuration from: {}", path.display());
            let (config, hash) = load_config_with_hash(path)
                .with_context(|| format!("failed to load configuration from {}", path.display()))?;
            tracing::info!("Configuration loaded successfully (hash: {})", hash);
            config
        }
        None => Config::default(),
    };

    let scraper = Scraper::new(config).context("failed to build scraper")?;

    match scraper.scrape(&cli.url).await {
        Ok(result) => {
            let json = if cli.pretty {
                serde_json::to_string_pretty(&result)?
            } else {
                serde_json::to_string(&result)?
            };
            println!("{}", json);
            Ok(())
        }
        Err(e) => {
            tracing::error!("Scrape failed ({} {}): {}", e.status_code(), e.kind(), e);
            Err(e.into())
        }
    }
}

/// Sets up the logging/tracing subscriber based on verbosity level
fn setup_logging(verbose: u8, quiet: bool) {
    let filter = if quiet {
        // Only show errors
        EnvFilter::new("error")
    } else {
        match verbose {
            0 => EnvFilter::new("pagelens=info,warn"),
            1 => EnvFilter::new("pagelens=debug,info"),
            2 => EnvFilter::new("pagelens=trace,debug"),
            _ => EnvFilter::new("trace"),
        }
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_thread_ids(false)
        .with_file(false)
        .init();
}
