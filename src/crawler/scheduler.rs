//! Scheduler for managing the crawl frontier and the collected seed list
//!
//! This module owns all mutable crawl state:
//! - The visited set (URLs dequeued for fetching)
//! - The frontier (URLs pending fetch, selected in random order)
//! - The seed list (distinct discovered URLs, in insertion order, capped)
//!
//! Discoveries from one page feed the frontier and the seed list differently:
//! at most `fan_out_cap` randomly chosen new links become crawl candidates,
//! while every new link may be appended to the seed list until the crawl limit
//! is hit.

use crate::config::CrawlerConfig;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use std::collections::{BTreeSet, HashSet};
use url::Url;

/// Why a crawl stopped
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Termination {
    /// The seed list reached the crawl limit
    LimitReached,
    /// The frontier ran out of URLs before the limit was reached
    FrontierExhausted,
}

/// Counts of what one `admit_discoveries` call changed
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Admission {
    /// Links that were not yet visited
    pub new_links: usize,
    /// Links newly inserted into the frontier
    pub frontier_added: usize,
    /// Links newly appended to the seed list
    pub collected_added: usize,
}

/// Frontier scheduler
///
/// Selection is random rather than FIFO or priority based, driven by a
/// seedable RNG so runs can be replayed.
pub struct Scheduler {
    /// URLs that have been dequeued for fetching
    visited: HashSet<String>,

    /// Frontier members, indexed for O(1) random removal
    frontier: Vec<String>,

    /// Membership mirror of `frontier`
    frontier_index: HashSet<String>,

    /// Crawl output, in insertion order
    seed_list: Vec<String>,

    /// Membership mirror of `seed_list`
    collected: HashSet<String>,

    crawl_limit: usize,
    fan_out_cap: usize,
    rng: StdRng,
}

impl Scheduler {
    /// Creates a scheduler whose frontier holds the configured seeds
    ///
    /// Duplicate seeds collapse; seeds are not part of the seed list unless
    /// they are rediscovered on a fetched page.
    pub fn new(config: &CrawlerConfig) -> Self {
        let rng = match config.rng_seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };

        let mut scheduler = Self {
            visited: HashSet::new(),
            frontier: Vec::with_capacity(config.seeds.len()),
            frontier_index: HashSet::new(),
            seed_list: Vec::new(),
            collected: HashSet::new(),
            crawl_limit: config.crawl_limit,
            fan_out_cap: config.fan_out_cap,
            rng,
        };

        // Store seeds in the same serialized form extracted links take, so a
        // rediscovered `https://host/` matches a configured `https://host`
        for seed in &config.seeds {
            let seed = Url::parse(seed)
                .map(|url| url.to_string())
                .unwrap_or_else(|_| seed.clone());
            scheduler.push_frontier(&seed);
        }

        scheduler
    }

    /// Removes and returns a random frontier member
    ///
    /// # Returns
    ///
    /// * `Some(String)` - The URL to process next
    /// * `None` - The frontier is empty
    pub fn select_next(&mut self) -> Option<String> {
        if self.frontier.is_empty() {
            return None;
        }

        let index = self.rng.gen_range(0..self.frontier.len());
        let url = self.frontier.swap_remove(index);
        self.frontier_index.remove(&url);

        tracing::trace!("Selected {} ({} left in frontier)", url, self.frontier.len());
        Some(url)
    }

    /// Records that a URL has been dequeued for fetching
    ///
    /// Returns false if the URL was already visited, in which case it must
    /// not be fetched again.
    pub fn mark_visited(&mut self, url: &str) -> bool {
        self.visited.insert(url.to_string())
    }

    /// Returns true if the URL has already been dequeued for fetching
    pub fn is_visited(&self, url: &str) -> bool {
        self.visited.contains(url)
    }

    /// Admits the links discovered on one page
    ///
    /// 1. Drops links already visited (links sitting in the frontier are kept,
    ///    re-inserting them is a no-op)
    /// 2. Shuffles the rest and inserts at most `fan_out_cap` into the frontier
    /// 3. Appends every remaining link not yet collected to the seed list, in
    ///    shuffled order, stopping at the crawl limit
    pub fn admit_discoveries(&mut self, links: &BTreeSet<String>) -> Admission {
        let mut new_links: Vec<&String> = links
            .iter()
            .filter(|link| !self.visited.contains(link.as_str()))
            .collect();
        new_links.shuffle(&mut self.rng);

        let mut admission = Admission {
            new_links: new_links.len(),
            ..Admission::default()
        };

        for link in new_links.iter().take(self.fan_out_cap) {
            if self.push_frontier(link) {
                admission.frontier_added += 1;
            }
        }

        for link in &new_links {
            if self.seed_list.len() >= self.crawl_limit {
                break;
            }
            if self.collected.insert((*link).clone()) {
                self.seed_list.push((*link).clone());
                admission.collected_added += 1;
            }
        }

        admission
    }

    /// Returns true when the crawl loop should stop
    pub fn is_exhausted(&self) -> bool {
        self.termination().is_some()
    }

    /// Returns the reason the crawl would stop now, if any
    ///
    /// Reaching the limit takes precedence over an empty frontier.
    pub fn termination(&self) -> Option<Termination> {
        if self.seed_list.len() >= self.crawl_limit {
            Some(Termination::LimitReached)
        } else if self.frontier.is_empty() {
            Some(Termination::FrontierExhausted)
        } else {
            None
        }
    }

    /// Returns the number of URLs dequeued so far
    pub fn visited_count(&self) -> usize {
        self.visited.len()
    }

    /// Returns the number of URLs collected so far
    pub fn collected_count(&self) -> usize {
        self.seed_list.len()
    }

    /// Returns the number of URLs in the frontier
    pub fn frontier_size(&self) -> usize {
        self.frontier.len()
    }

    /// Returns whether a URL is currently pending in the frontier
    pub fn in_frontier(&self, url: &str) -> bool {
        self.frontier_index.contains(url)
    }

    /// Returns the seed list collected so far
    pub fn seed_list(&self) -> &[String] {
        &self.seed_list
    }

    /// Consumes the scheduler and returns the seed list
    pub fn into_seed_list(self) -> Vec<String> {
        self.seed_list
    }

    fn push_frontier(&mut self, url: &str) -> bool {
        if self.visited.contains(url) || !self.frontier_index.insert(url.to_string()) {
            return false;
        }
        self.frontier.push(url.to_string());
        true
    }
}
