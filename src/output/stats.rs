//! Crawl statistics
//!
//! Counters accumulated by the coordinator during a run. They are for
//! reporting only and never influence crawl control.

use crate::crawler::Termination;
use chrono::{DateTime, Utc};

/// Crawl statistics summary
#[derive(Debug, Clone)]
pub struct CrawlStats {
    /// URLs dequeued and fetched (or attempted)
    pub visited: usize,

    /// URLs in the final seed list
    pub collected: usize,

    /// Fetches that returned HTML and had their links admitted
    pub fetched_html: usize,

    /// Fetches skipped because the response was not HTML
    pub skipped_non_html: usize,

    /// Fetches or extractions that failed
    pub failures: usize,

    /// Why the crawl stopped, set when the run completes
    pub termination: Option<Termination>,

    pub started_at: DateTime<Utc>,
    pub finished_at: Option<DateTime<Utc>>,
}

impl CrawlStats {
    pub fn new() -> Self {
        Self {
            visited: 0,
            collected: 0,
            fetched_html: 0,
            skipped_non_html: 0,
            failures: 0,
            termination: None,
            started_at: Utc::now(),
            finished_at: None,
        }
    }

    /// Wall-clock duration of the run, once finished
    pub fn duration_seconds(&self) -> Option<i64> {
        self.finished_at
            .map(|finished| (finished - self.started_at).num_seconds())
    }
}

impl Default for CrawlStats {
    fn default() -> Self {
        Self::new()
    }
}

/// Prints statistics to stdout in a formatted manner
pub fn print_statistics(stats: &CrawlStats) {
    println!("=== Crawl Statistics ===\n");

    println!("Overview:");
    println!("  Pages visited: {}", stats.visited);
    println!("  URLs collected: {}", stats.collected);
    println!();

    println!("Fetch Outcomes:");
    println!("  HTML pages processed: {}", stats.fetched_html);
    println!("  Non-HTML skipped: {}", stats.skipped_non_html);
    println!("  Failures: {}", stats.failures);
    println!();

    match stats.termination {
        Some(Termination::LimitReached) => println!("Stopped: crawl limit reached"),
        Some(Termination::FrontierExhausted) => println!("Stopped: frontier exhausted"),
        None => println!("Stopped: incomplete"),
    }

    if let Some(seconds) = stats.duration_seconds() {
        println!("Duration: {}s", seconds);
    }
}
