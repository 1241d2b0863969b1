//! URL handling module for Seedwalk
//!
//! This module classifies candidate strings as crawlable URLs. Nothing here
//! returns an error: a candidate that fails to parse is simply not valid, and
//! callers discard it.

mod domain;

use ::url::Url;

pub use domain::has_registrable_domain;

/// Returns true if the candidate parses as an absolute `http` or `https` URL
///
/// # Examples
///
/// ```
/// use seedwalk::url::is_valid_url;
///
/// assert!(is_valid_url("https://example.com/a"));
/// assert!(!is_valid_url("javascript:void(0)"));
/// assert!(!is_valid_url("not a url"));
/// ```
pub fn is_valid_url(candidate: &str) -> bool {
    match Url::parse(candidate) {
        Ok(url) => is_web_scheme(&url),
        Err(_) => false,
    }
}

/// Returns true if an already-parsed URL is worth admitting to a crawl
///
/// On top of the scheme check this requires a registrable domain under a
/// known public suffix, which drops hosts such as `localhost`, bare IPs and
/// the leftovers of `mailto:`/`javascript:` hrefs after resolution.
pub fn is_crawlable_link(url: &Url) -> bool {
    is_web_scheme(url) && has_registrable_domain(url)
}

fn is_web_scheme(url: &Url) -> bool {
    matches!(url.scheme(), "http" | "https")
}
