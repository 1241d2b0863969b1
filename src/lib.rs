//! Seedwalk: a randomized web seed sampler
//!
//! This crate performs an unbounded, randomized walk of the public web starting
//! from a handful of seed sites and collects a flat list of reachable URLs, up to
//! a fixed limit, for use as a seed corpus by other tools.

pub mod config;
pub mod crawler;
pub mod output;
pub mod url;

use thiserror::Error;

/// Main error type for Seedwalk operations
#[derive(Debug, Error)]
pub enum SeedwalkError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("HTTP client error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
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

    #[error("Invalid URL in config: {0}")]
    InvalidUrl(String),
}

/// Errors raised while fetching or extracting a single page
///
/// These never abort a crawl: the coordinator logs them and moves on to the
/// next URL with zero discoveries for the failed iteration.
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("Request timeout for {url}")]
    Timeout { url: String },

    #[error("Connection failed for {url}: {message}")]
    Connect { url: String, message: String },

    #[error("Request failed for {url}: {message}")]
    Request { url: String, message: String },

    #[error("Failed to read body of {url}: {message}")]
    Body { url: String, message: String },

    #[error("Link extraction failed for {url}: {message}")]
    Extract { url: String, message: String },
}

/// Result type alias for Seedwalk operations
pub type Result<T> = std::result::Result<T, SeedwalkError>;

/// Result type alias for per-page fetch operations
pub type FetchResult<T> = std::result::Result<T, FetchError>;

// Re-export commonly used types
pub use config::Config;
pub use crawler::{Coordinator, CrawlReport, Termination};
pub use crate::url::{has_registrable_domain, is_crawlable_link, is_valid_url};
