//! HTML link extraction
//!
//! Given a base URL and an HTML document, produces the set of absolute,
//! crawlable URLs the document links to. The crawl loop depends only on the
//! `LinkExtractor` trait.

use crate::url::{is_crawlable_link, is_valid_url};
use crate::{FetchError, FetchResult};
use scraper::{Html, Selector};
use std::collections::BTreeSet;
use url::Url;

/// Maps a fetched document to the links it references
///
/// Implementations return absolute URLs, deduplicated within one call. The set
/// is ordered so that a seeded crawl replays identically.
pub trait LinkExtractor: Send + Sync {
    fn extract_links(&self, base_url: &Url, html: &str) -> FetchResult<BTreeSet<String>>;
}

/// `LinkExtractor` that reads `<a href>` anchors with scraper
#[derive(Debug, Clone, Copy, Default)]
pub struct HtmlLinkExtractor;

impl LinkExtractor for HtmlLinkExtractor {
    fn extract_links(&self, base_url: &Url, html: &str) -> FetchResult<BTreeSet<String>> {
        extract_links(base_url, html)
    }
}

/// Extracts every crawlable anchor target from an HTML document
///
/// Each `href` is resolved against `base_url`; the result is kept only if it is
/// an `http`/`https` URL whose host has a registrable domain under a known
/// public suffix. Fragments and query strings are preserved as written.
///
/// # Example
///
/// ```
/// use seedwalk::crawler::extract_links;
/// use url::Url;
///
/// let html = r#"<a href="/about">About</a><a href="mailto:x@example.com">Mail</a>"#;
/// let base = Url::parse("https://example.com/").unwrap();
/// let links = extract_links(&base, html).unwrap();
/// assert!(links.contains("https://example.com/about"));
/// assert_eq!(links.len(), 1);
/// ```
pub fn extract_links(base_url: &Url, html: &str) -> FetchResult<BTreeSet<String>> {
    let selector = Selector::parse("a[href]").map_err(|e| FetchError::Extract {
        url: base_url.to_string(),
        message: format!("invalid anchor selector: {:?}", e),
    })?;

    let document = Html::parse_document(html);
    let mut links = BTreeSet::new();

    for element in document.select(&selector) {
        if let Some(href) = element.value().attr("href") {
            if let Some(absolute_url) = resolve_link(href, base_url) {
                links.insert(absolute_url);
            }
        }
    }

    Ok(links)
}

/// Resolves an href to an absolute URL and applies the crawlability filter
fn resolve_link(href: &str, base_url: &Url) -> Option<String> {
    let resolved = base_url.join(href.trim()).ok()?;
    let absolute = resolved.to_string();

    if is_valid_url(&absolute) && is_crawlable_link(&resolved) {
        Some(absolute)
    } else {
        None
    }
}
