//! Crawler module for web page fetching and processing
//!
//! This module contains the core crawling logic, including:
//! - HTTP fetching behind the `Transport` trait
//! - HTML link extraction behind the `LinkExtractor` trait
//! - Frontier scheduling and seed list collection
//! - Politeness delays
//! - Overall crawl coordination

mod coordinator;
mod fetcher;
mod parser;
mod scheduler;
mod throttle;

pub use coordinator::{Coordinator, CrawlReport, PageOutcome};
pub use fetcher::{build_http_client, FetchedPage, HttpTransport, Transport};
pub use parser::{extract_links, HtmlLinkExtractor, LinkExtractor};
pub use scheduler::{Admission, Scheduler, Termination};
pub use throttle::Throttle;

use crate::config::Config;

/// Runs a complete crawl operation over HTTP
///
/// This is the main entry point for starting a crawl. It will:
/// 1. Build the HTTP client from the configuration
/// 2. Seed the frontier
/// 3. Fetch pages, extract and admit links until the seed list is full or
///    the frontier is empty
///
/// # Returns
///
/// * `Ok(CrawlReport)` - The collected seed list and run statistics
/// * `Err(SeedwalkError)` - The crawl could not be set up
pub async fn crawl(config: &Config) -> crate::Result<CrawlReport> {
    let coordinator = Coordinator::new(config)?;
    Ok(coordinator.run().await)
}
