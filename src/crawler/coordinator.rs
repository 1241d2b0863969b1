//! Crawler coordinator - main crawl orchestration logic
//!
//! Each iteration of the crawl loop:
//! 1. Selects a random URL from the frontier and marks it visited
//! 2. Fetches it and, if the response is HTML, extracts its links
//! 3. Admits the discoveries into the frontier and the seed list
//! 4. Waits out the politeness delay
//!
//! Fetch and extraction failures are contained within the iteration that
//! raised them; nothing inside the loop can abort the crawl.

use crate::config::Config;
use crate::crawler::fetcher::{HttpTransport, Transport};
use crate::crawler::parser::{HtmlLinkExtractor, LinkExtractor};
use crate::crawler::scheduler::{Scheduler, Termination};
use crate::crawler::throttle::Throttle;
use crate::output::CrawlStats;
use crate::url::is_valid_url;
use crate::{FetchError, FetchResult};
use chrono::Utc;
use std::collections::BTreeSet;
use url::Url;

/// What the fetch/extract phase produced for one URL
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PageOutcome {
    /// The response was not HTML; nothing to admit
    Skipped { content_type: String },
    /// Links found on an HTML page
    Discoveries(BTreeSet<String>),
}

/// Result of a completed crawl
#[derive(Debug, Clone)]
pub struct CrawlReport {
    /// Collected URLs in insertion order
    pub seed_list: Vec<String>,
    pub stats: CrawlStats,
}

impl CrawlReport {
    pub fn termination(&self) -> Option<Termination> {
        self.stats.termination
    }
}

/// Main crawler coordinator structure
pub struct Coordinator<T = HttpTransport, E = HtmlLinkExtractor> {
    scheduler: Scheduler,
    transport: T,
    extractor: E,
    throttle: Throttle,
    stats: CrawlStats,
}

impl Coordinator {
    /// Creates a coordinator that fetches over HTTP and parses HTML anchors
    ///
    /// # Returns
    ///
    /// * `Ok(Coordinator)` - Successfully created coordinator
    /// * `Err(SeedwalkError)` - The HTTP client could not be built
    pub fn new(config: &Config) -> crate::Result<Self> {
        let transport = HttpTransport::from_config(config)?;
        Ok(Self::with_parts(config, transport, HtmlLinkExtractor))
    }
}

impl<T: Transport, E: LinkExtractor> Coordinator<T, E> {
    /// Creates a coordinator around an arbitrary transport and extractor
    pub fn with_parts(config: &Config, transport: T, extractor: E) -> Self {
        let (min_delay, max_delay) = config.crawler.politeness_range();

        // Keep the delay stream independent of selection order
        let throttle_seed = config.crawler.rng_seed.map(|seed| seed.wrapping_add(1));

        Self {
            scheduler: Scheduler::new(&config.crawler),
            transport,
            extractor,
            throttle: Throttle::new(min_delay, max_delay, throttle_seed),
            stats: CrawlStats::new(),
        }
    }

    /// Runs the crawl loop until the seed list is full or the frontier is empty
    pub async fn run(mut self) -> CrawlReport {
        tracing::info!(
            "Starting crawl with {} seed URLs",
            self.scheduler.frontier_size()
        );

        let termination = loop {
            if let Some(termination) = self.scheduler.termination() {
                break termination;
            }

            let url = match self.scheduler.select_next() {
                Some(url) => url,
                None => break Termination::FrontierExhausted,
            };

            if !self.scheduler.mark_visited(&url) {
                tracing::debug!("Skipping already visited {}", url);
                continue;
            }

            self.process_url(&url).await;
            self.throttle.wait().await;
        };

        match termination {
            Termination::LimitReached => {
                tracing::info!("Crawl limit reached after {} pages", self.scheduler.visited_count())
            }
            Termination::FrontierExhausted => tracing::info!(
                "Frontier exhausted with {} URLs collected",
                self.scheduler.collected_count()
            ),
        }

        self.stats.visited = self.scheduler.visited_count();
        self.stats.collected = self.scheduler.collected_count();
        self.stats.termination = Some(termination);
        self.stats.finished_at = Some(Utc::now());

        CrawlReport {
            seed_list: self.scheduler.into_seed_list(),
            stats: self.stats,
        }
    }

    /// Processes a single URL: fetch, extract and admit
    async fn process_url(&mut self, url: &str) {
        tracing::debug!("Processing URL: {}", url);

        match self.fetch_page(url).await {
            Ok(PageOutcome::Skipped { content_type }) => {
                tracing::debug!("Skipping {}: content type '{}'", url, content_type);
                self.stats.skipped_non_html += 1;
            }
            Ok(PageOutcome::Discoveries(links)) => {
                let admission = self.scheduler.admit_discoveries(&links);
                self.stats.fetched_html += 1;

                tracing::debug!(
                    "{}: {} links, {} new, {} queued, {} collected",
                    url,
                    links.len(),
                    admission.new_links,
                    admission.frontier_added,
                    admission.collected_added
                );
                tracing::info!(
                    "Visited: {} | Collected: {}",
                    self.scheduler.visited_count(),
                    self.scheduler.collected_count()
                );
            }
            Err(e) => {
                tracing::warn!("Error with {}: {}", url, e);
                self.stats.failures += 1;
            }
        }
    }

    /// Fetches a URL and extracts validated links if the response is HTML
    async fn fetch_page(&self, url: &str) -> FetchResult<PageOutcome> {
        let page = self.transport.fetch(url).await?;

        if !page.is_html() {
            return Ok(PageOutcome::Skipped {
                content_type: page.content_type,
            });
        }

        let base_url = Url::parse(url).map_err(|e| FetchError::Request {
            url: url.to_string(),
            message: e.to_string(),
        })?;

        let mut links = self.extractor.extract_links(&base_url, &page.body)?;
        links.retain(|link| is_valid_url(link));

        Ok(PageOutcome::Discoveries(links))
    }
}
