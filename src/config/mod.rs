//! Configuration module for Seedwalk
//!
//! This module handles loading, parsing, and validating TOML configuration files.
//! Every key has a default, so an empty file (or no file at all) yields the
//! stock crawl settings.
//!
//! # Example
//!
//! ```no_run
//! use seedwalk::config::load_config;
//! use std::path::Path;
//!
//! let config = load_config(Path::new("seedwalk.toml")).unwrap();
//! println!("Crawl will stop after {} URLs", config.crawler.crawl_limit);
//! ```

mod parser;
mod types;
mod validation;

// Re-export types
pub use types::{Config, CrawlerConfig, OutputConfig, UserAgentConfig};

// Re-export parser functions
pub use parser::{compute_config_hash, load_config, load_config_with_hash};
pub use validation::validate;
