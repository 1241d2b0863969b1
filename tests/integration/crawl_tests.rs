//! Integration tests for the crawler
//!
//! Most tests drive the coordinator with an in-memory transport so that
//! discovered links never leave the process. One test goes through reqwest
//! against a wiremock server.

use async_trait::async_trait;
use seedwalk::config::Config;
use seedwalk::crawler::{Coordinator, FetchedPage, HtmlLinkExtractor, Termination, Transport};
use seedwalk::output::write_seed_list;
use seedwalk::{FetchError, FetchResult};
use std::collections::{HashMap, HashSet};
use std::sync::{Arc, Mutex};
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

/// Canned response for a mock URL
#[derive(Clone)]
enum MockPage {
    Html(String),
    Other(&'static str),
    Timeout,
}

/// In-memory transport that records every fetch
///
/// URLs without a registered page fail with a connection error, unless a
/// fallback page is set.
#[derive(Default)]
struct MockTransport {
    pages: HashMap<String, MockPage>,
    fallback: Option<MockPage>,
    log: Arc<Mutex<Vec<String>>>,
}

impl MockTransport {
    fn with_page(mut self, url: &str, page: MockPage) -> Self {
        self.pages.insert(url.to_string(), page);
        self
    }

    fn with_fallback(mut self, page: MockPage) -> Self {
        self.fallback = Some(page);
        self
    }

    fn fetch_log(&self) -> Arc<Mutex<Vec<String>>> {
        Arc::clone(&self.log)
    }
}

#[async_trait]
impl Transport for MockTransport {
    async fn fetch(&self, url: &str) -> FetchResult<FetchedPage> {
        self.log.lock().unwrap().push(url.to_string());

        let page = self.pages.get(url).or(self.fallback.as_ref()).cloned();
        match page {
            Some(MockPage::Html(body)) => Ok(FetchedPage {
                status_code: 200,
                content_type: "text/html; charset=utf-8".to_string(),
                body,
            }),
            Some(MockPage::Other(content_type)) => Ok(FetchedPage {
                status_code: 200,
                content_type: content_type.to_string(),
                body: String::new(),
            }),
            Some(MockPage::Timeout) => Err(FetchError::Timeout {
                url: url.to_string(),
            }),
            None => Err(FetchError::Connect {
                url: url.to_string(),
                message: "connection refused".to_string(),
            }),
        }
    }
}

/// Builds an HTML page linking to each URL
fn page_with_links(links: &[String]) -> String {
    let anchors: String = links
        .iter()
        .map(|link| format!(r#"<a href="{}">link</a>"#, link))
        .collect();
    format!("<html><body>{}</body></html>", anchors)
}

fn site_links(prefix: &str, count: usize) -> Vec<String> {
    (0..count)
        .map(|i| format!("https://{}{}.example.com/", prefix, i))
        .collect()
}

/// Creates a test configuration with no politeness delay
fn create_test_config(seeds: &[&str], crawl_limit: usize, rng_seed: u64) -> Config {
    let mut config = Config::default();
    config.crawler.seeds = seeds.iter().map(|s| s.to_string()).collect();
    config.crawler.crawl_limit = crawl_limit;
    config.crawler.request_timeout_ms = 1_000;
    config.crawler.politeness_min_ms = 0;
    config.crawler.politeness_max_ms = 0;
    config.crawler.rng_seed = Some(rng_seed);
    config.user_agent.header = "TestBot/1.0".to_string();
    config
}

#[tokio::test]
async fn test_crawl_stops_at_limit() {
    let links = site_links("site", 10);
    let transport = MockTransport::default().with_fallback(MockPage::Html(page_with_links(&links)));
    let config = create_test_config(&["https://a.test"], 5, 42);

    let report = Coordinator::with_parts(&config, transport, HtmlLinkExtractor)
        .run()
        .await;

    assert_eq!(report.seed_list.len(), 5);
    assert_eq!(report.termination(), Some(Termination::LimitReached));

    let unique: HashSet<&String> = report.seed_list.iter().collect();
    assert_eq!(unique.len(), 5);
    for url in &report.seed_list {
        assert!(links.contains(url), "{} was not on the page", url);
    }
}

#[tokio::test]
async fn test_limit_scenario_writes_output_file() {
    let links = site_links("site", 10);
    let transport = MockTransport::default().with_fallback(MockPage::Html(page_with_links(&links)));
    let config = create_test_config(&["https://a.test"], 5, 42);

    let report = Coordinator::with_parts(&config, transport, HtmlLinkExtractor)
        .run()
        .await;

    let dir = tempfile::tempdir().unwrap();
    let output = dir.path().join("seedList.txt");
    write_seed_list(&output, &report.seed_list).unwrap();

    let content = std::fs::read_to_string(&output).unwrap();
    let lines: Vec<&str> = content.lines().collect();
    assert_eq!(lines.len(), 5);
    assert!(content.ends_with('\n'));

    let unique: HashSet<&str> = lines.iter().copied().collect();
    assert_eq!(unique.len(), 5);
    for line in lines {
        assert!(links.iter().any(|link| link == line));
    }
}

async fn crawl_with_seed(links: &[String], rng_seed: u64) -> Vec<String> {
    let transport = MockTransport::default().with_fallback(MockPage::Html(page_with_links(links)));
    let config = create_test_config(&["https://a.test", "https://b.test"], 25, rng_seed);
    Coordinator::with_parts(&config, transport, HtmlLinkExtractor)
        .run()
        .await
        .seed_list
}

#[tokio::test]
async fn test_seeded_crawls_are_reproducible() {
    let links = site_links("site", 40);

    let first = crawl_with_seed(&links, 9).await;
    let second = crawl_with_seed(&links, 9).await;

    assert_eq!(first.len(), 25);
    assert_eq!(first, second);
}

#[tokio::test]
async fn test_crawl_reports_frontier_exhaustion() {
    let transport = MockTransport::default()
        .with_page("https://a.test/", MockPage::Html("<html><body>nothing here</body></html>".to_string()));
    let config = create_test_config(&["https://a.test"], 100, 1);

    let report = Coordinator::with_parts(&config, transport, HtmlLinkExtractor)
        .run()
        .await;

    assert!(report.seed_list.is_empty());
    assert_eq!(report.termination(), Some(Termination::FrontierExhausted));
    assert_eq!(report.stats.visited, 1);
    assert_eq!(report.stats.failures, 0);
}

#[tokio::test]
async fn test_crawl_survives_fetch_failure() {
    let links = site_links("found", 3);
    let transport = MockTransport::default()
        .with_page("https://a.test/", MockPage::Timeout)
        .with_page("https://b.test/", MockPage::Html(page_with_links(&links)));
    let config = create_test_config(&["https://a.test", "https://b.test"], 100, 3);

    let report = Coordinator::with_parts(&config, transport, HtmlLinkExtractor)
        .run()
        .await;

    let collected: HashSet<&String> = report.seed_list.iter().collect();
    let expected: HashSet<&String> = links.iter().collect();
    assert_eq!(collected, expected);
    assert!(report.stats.failures >= 1);
    assert_eq!(report.termination(), Some(Termination::FrontierExhausted));
}

#[tokio::test]
async fn test_non_html_response_is_skipped() {
    let transport = MockTransport::default()
        .with_page("https://a.test/", MockPage::Other("application/pdf"));
    let config = create_test_config(&["https://a.test"], 100, 4);

    let report = Coordinator::with_parts(&config, transport, HtmlLinkExtractor)
        .run()
        .await;

    assert!(report.seed_list.is_empty());
    assert_eq!(report.stats.skipped_non_html, 1);
    assert_eq!(report.stats.fetched_html, 0);
    assert_eq!(report.stats.failures, 0);
}

#[tokio::test]
async fn test_no_url_is_fetched_twice() {
    // Every page links to every other page, including itself and the seed
    let mut pages = site_links("ring", 8);
    pages.push("https://a.test/".to_string());
    let body = page_with_links(&pages);

    let mut transport = MockTransport::default();
    for page in &pages {
        transport = transport.with_page(page, MockPage::Html(body.clone()));
    }
    let log = transport.fetch_log();
    let config = create_test_config(&["https://a.test/"], 1_000, 5);

    let report = Coordinator::with_parts(&config, transport, HtmlLinkExtractor)
        .run()
        .await;

    let fetched = log.lock().unwrap();
    let unique: HashSet<&String> = fetched.iter().collect();
    assert_eq!(unique.len(), fetched.len(), "duplicate fetch in {:?}", fetched);
    assert_eq!(fetched.len(), pages.len());
    assert_eq!(report.stats.visited, pages.len());
    assert_eq!(report.termination(), Some(Termination::FrontierExhausted));
}

#[tokio::test]
async fn test_seed_without_trailing_slash_is_fetched_once() {
    // The seed page links back to its own root in serialized form
    let transport = MockTransport::default().with_fallback(MockPage::Html(page_with_links(&[
        "https://a.example.com/".to_string(),
    ])));
    let log = transport.fetch_log();
    let config = create_test_config(&["https://a.example.com"], 100, 8);

    let report = Coordinator::with_parts(&config, transport, HtmlLinkExtractor)
        .run()
        .await;

    assert_eq!(*log.lock().unwrap(), vec!["https://a.example.com/".to_string()]);
    assert_eq!(report.stats.visited, 1);
    assert!(report.seed_list.is_empty());
    assert_eq!(report.termination(), Some(Termination::FrontierExhausted));
}

#[tokio::test]
async fn test_fan_out_cap_limits_pages_visited() {
    // Only the seed page has links; all of them are dead ends
    let links = site_links("wide", 200);
    let transport = MockTransport::default()
        .with_page("https://a.test/", MockPage::Html(page_with_links(&links)))
        .with_fallback(MockPage::Html("<html></html>".to_string()));
    let log = transport.fetch_log();
    let mut config = create_test_config(&["https://a.test"], 10_000, 6);
    config.crawler.fan_out_cap = 50;

    let report = Coordinator::with_parts(&config, transport, HtmlLinkExtractor)
        .run()
        .await;

    // All 200 are reported, only 50 are explored
    assert_eq!(report.seed_list.len(), 200);
    assert_eq!(log.lock().unwrap().len(), 51);
}

#[tokio::test]
async fn test_end_to_end_over_http() {
    let mock_server = MockServer::start().await;
    let links = site_links("remote", 3);

    Mock::given(method("GET"))
        .and(path("/"))
        .respond_with(ResponseTemplate::new(200).set_body_raw(page_with_links(&links), "text/html"))
        .expect(1)
        .mount(&mock_server)
        .await;

    let seed = format!("{}/", mock_server.uri());
    let config = create_test_config(&[seed.as_str()], 3, 8);

    // Limit equals the number of links, so the crawl stops before any of
    // the discovered hosts would be contacted
    let report = Coordinator::new(&config)
        .expect("Failed to create coordinator")
        .run()
        .await;

    let collected: HashSet<&String> = report.seed_list.iter().collect();
    let expected: HashSet<&String> = links.iter().collect();
    assert_eq!(collected, expected);
    assert_eq!(report.termination(), Some(Termination::LimitReached));
}
