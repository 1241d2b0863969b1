use serde::Deserialize;
use std::time::Duration;

/// Main configuration structure for Seedwalk
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub crawler: CrawlerConfig,
    #[serde(rename = "user-agent", default)]
    pub user_agent: UserAgentConfig,
    #[serde(default)]
    pub output: OutputConfig,
}

/// Crawl control configuration
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct CrawlerConfig {
    /// URLs the frontier starts with
    pub seeds: Vec<String>,

    /// Maximum number of URLs collected into the seed list
    #[serde(rename = "crawl-limit")]
    pub crawl_limit: usize,

    /// Maximum number of new links admitted to the frontier per page
    #[serde(rename = "fan-out-cap")]
    pub fan_out_cap: usize,

    /// Per-request timeout (milliseconds)
    #[serde(rename = "request-timeout-ms")]
    pub request_timeout_ms: u64,

    /// Lower bound of the politeness delay between fetches (milliseconds)
    #[serde(rename = "politeness-min-ms")]
    pub politeness_min_ms: u64,

    /// Upper bound of the politeness delay between fetches (milliseconds)
    #[serde(rename = "politeness-max-ms")]
    pub politeness_max_ms: u64,

    /// Seed for the random source; entropy is used when absent
    #[serde(rename = "rng-seed")]
    pub rng_seed: Option<u64>,
}

impl CrawlerConfig {
    pub fn request_timeout(&self) -> Duration {
        Duration::from_millis(self.request_timeout_ms)
    }

    pub fn politeness_range(&self) -> (Duration, Duration) {
        (
            Duration::from_millis(self.politeness_min_ms),
            Duration::from_millis(self.politeness_max_ms),
        )
    }
}

impl Default for CrawlerConfig {
    fn default() -> Self {
        Self {
            seeds: vec![
                "https://en.wikipedia.org".to_string(),
                "https://www.bbc.com".to_string(),
                "https://www.reddit.com".to_string(),
            ],
            crawl_limit: 10_000,
            fan_out_cap: 50,
            request_timeout_ms: 5_000,
            politeness_min_ms: 500,
            politeness_max_ms: 1_500,
            rng_seed: None,
        }
    }
}

/// Client identification configuration
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct UserAgentConfig {
    /// Value of the User-Agent header sent with every request
    pub header: String,
}

impl Default for UserAgentConfig {
    fn default() -> Self {
        Self {
            header: "Mozilla/5.0 (compatible; RandomCrawler/1.0)".to_string(),
        }
    }
}

/// Output configuration
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    /// Path of the seed list file written after the crawl
    pub path: String,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            path: "seedList.txt".to_string(),
        }
    }
}
