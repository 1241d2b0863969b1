use url::{Host, Url};

/// Returns true if the URL's host has a registrable domain under a known
/// public suffix
///
/// `www.bbc.co.uk` passes (registrable `bbc.co.uk`, suffix `co.uk`), while
/// IP addresses, single-label hosts, bare suffixes and hosts under a TLD that
/// is not on the public suffix list do not.
pub fn has_registrable_domain(url: &Url) -> bool {
    let host = match url.host() {
        Some(Host::Domain(host)) => host.trim_end_matches('.').to_lowercase(),
        _ => return false,
    };

    psl::domain(host.as_bytes())
        .map(|domain| domain.suffix().is_known())
        .unwrap_or(false)
}
