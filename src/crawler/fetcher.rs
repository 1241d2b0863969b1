//! HTTP fetcher implementation
//!
//! This module handles all HTTP requests for the crawler:
//! - Building an HTTP client with the configured user agent and timeout
//! - Issuing GET requests and capturing status, Content-Type and body
//! - Classifying transport failures into `FetchError` variants
//!
//! The crawl loop only sees the `Transport` trait, so tests can replace the
//! network with canned pages.

use crate::config::Config;
use crate::{FetchError, FetchResult};
use async_trait::async_trait;
use reqwest::header::CONTENT_TYPE;
use reqwest::Client;

/// A fetched response, reduced to what the crawl loop inspects
#[derive(Debug, Clone)]
pub struct FetchedPage {
    /// HTTP status code (informational only)
    pub status_code: u16,

    /// Content-Type header value, empty when the header is missing
    pub content_type: String,

    /// Decoded body text
    pub body: String,
}

impl FetchedPage {
    /// Returns true if the declared Content-Type is HTML
    pub fn is_html(&self) -> bool {
        self.content_type.contains("text/html")
    }
}

/// Issues a single GET for a URL
#[async_trait]
pub trait Transport: Send + Sync {
    async fn fetch(&self, url: &str) -> FetchResult<FetchedPage>;
}

/// Builds an HTTP client with proper configuration
///
/// # Example
///
/// ```no_run
/// use seedwalk::config::Config;
/// use seedwalk::crawler::build_http_client;
///
/// let client = build_http_client(&Config::default()).unwrap();
/// ```
pub fn build_http_client(config: &Config) -> Result<Client, reqwest::Error> {
    let timeout = config.crawler.request_timeout();

    Client::builder()
        .user_agent(config.user_agent.header.as_str())
        .timeout(timeout)
        .connect_timeout(timeout)
        .gzip(true)
        .brotli(true)
        .build()
}

/// `Transport` backed by a reqwest client
#[derive(Debug, Clone)]
pub struct HttpTransport {
    client: Client,
}

impl HttpTransport {
    pub fn new(client: Client) -> Self {
        Self { client }
    }

    /// Builds the client from configuration and wraps it
    pub fn from_config(config: &Config) -> Result<Self, reqwest::Error> {
        Ok(Self::new(build_http_client(config)?))
    }
}

#[async_trait]
impl Transport for HttpTransport {
    async fn fetch(&self, url: &str) -> FetchResult<FetchedPage> {
        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| classify_error(url, e))?;

        let status_code = response.status().as_u16();
        let content_type = response
            .headers()
            .get(CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .unwrap_or("")
            .to_string();

        // Non-HTML bodies are never read
        if !content_type.contains("text/html") {
            return Ok(FetchedPage {
                status_code,
                content_type,
                body: String::new(),
            });
        }

        let body = response.text().await.map_err(|e| {
            if e.is_timeout() {
                FetchError::Timeout {
                    url: url.to_string(),
                }
            } else {
                FetchError::Body {
                    url: url.to_string(),
                    message: e.to_string(),
                }
            }
        })?;

        Ok(FetchedPage {
            status_code,
            content_type,
            body,
        })
    }
}

fn classify_error(url: &str, error: reqwest::Error) -> FetchError {
    if error.is_timeout() {
        FetchError::Timeout {
            url: url.to_string(),
        }
    } else if error.is_connect() {
        FetchError::Connect {
            url: url.to_string(),
            message: error.to_string(),
        }
    } else {
        FetchError::Request {
            url: url.to_string(),
            message: error.to_string(),
        }
    }
}
