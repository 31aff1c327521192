//! HTTP fetcher
//!
//! A thin transport used by the reference orchestrator. It builds the client
//! from configuration and turns one request into a `CrawledPage`; transport
//! errors are recorded on the page instead of being returned.

use crate::config::Config;
use crate::page::{CrawledPage, PageToCrawl, ResponseSummary, TransportFailure};
use reqwest::{redirect::Policy, Client};
use std::time::Duration;

/// Result of a single fetch attempt
#[derive(Debug)]
pub struct FetchOutcome {
    /// The crawled page, with either a response summary or a transport failure
    pub page: CrawledPage,

    /// The live response, still holding its unread body
    pub response: Option<reqwest::Response>,
}

/// Builds an HTTP client with proper configuration
///
/// The user agent is `CrawlerName/Version (+ContactURL; ContactEmail)`, the
/// request timeout comes from the crawl configuration, and redirects are
/// followed up to `max-auto-redirects` hops.
///
/// # Example
///
/// ```no_run
/// use crawl_gate::config::Config;
/// use crawl_gate::crawler::build_http_client;
///
/// let client = build_http_client(&Config::default()).unwrap();
/// ```
pub fn build_http_client(config: &Config) -> Result<Client, reqwest::Error> {
    let timeout = Duration::from_secs(config.crawler.request_timeout_secs);

    Client::builder()
        .user_agent(config.user_agent.header_value())
        .timeout(timeout)
        .connect_timeout(timeout.min(Duration::from_secs(10)))
        .redirect(Policy::limited(config.crawler.max_auto_redirects as usize))
        .gzip(true)
        .brotli(true)
        .build()
}

/// Issues a GET for `page` and records the outcome
///
/// # Arguments
///
/// * `client` - The HTTP client to use
/// * `page` - The candidate to fetch
/// * `retry_count` - Retries already spent on this page
pub async fn fetch_page(client: &Client, page: PageToCrawl, retry_count: u32) -> FetchOutcome {
    let crawled = CrawledPage::new(page).with_retry_count(retry_count);

    match client.get(crawled.page.uri.clone()).send().await {
        Ok(response) => {
            tracing::debug!("{} -> HTTP {}", crawled.page.uri, response.status());
            FetchOutcome {
                page: crawled.with_response(ResponseSummary::from_response(&response)),
                response: Some(response),
            }
        }
        Err(e) => {
            let failure = TransportFailure::from(&e);
            tracing::warn!("Request to {} failed: {}", crawled.page.uri, failure);
            FetchOutcome {
                page: crawled.with_transport_failure(failure),
                response: None,
            }
        }
    }
}
