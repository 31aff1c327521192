//! Reference orchestration of a single page through the decision engine
//!
//! `probe` walks one candidate through the pipeline the engine is designed for:
//! crawl decision, fetch, download decision, extraction, link decision, or the
//! recrawl decision when the transport fails. It never re-queues anything;
//! acting on the verdicts is the caller's job.

use crate::content::WebContentExtractor;
use crate::crawler::fetcher::fetch_page;
use crate::decision::{CrawlDecision, DecisionMaker};
use crate::page::{CrawledPage, PageToCrawl};
use crate::state::CrawlContext;
use reqwest::Client;

/// Every verdict produced while probing one page
#[derive(Debug)]
pub struct ProbeReport {
    /// The candidate that was probed
    pub candidate: PageToCrawl,

    /// Verdict on fetching the candidate
    pub crawl: CrawlDecision,

    /// Verdict on downloading the body (only when a response arrived)
    pub download: Option<CrawlDecision>,

    /// Verdict on following links (only when a response arrived)
    pub crawl_links: Option<CrawlDecision>,

    /// Verdict on retrying (only when the transport failed)
    pub recrawl: Option<CrawlDecision>,

    /// The crawled page, if a fetch was attempted
    pub page: Option<CrawledPage>,
}

impl ProbeReport {
    fn denied(candidate: PageToCrawl, crawl: CrawlDecision) -> Self {
        Self {
            candidate,
            crawl,
            download: None,
            crawl_links: None,
            recrawl: None,
            page: None,
        }
    }

    /// Returns true if a fetch was attempted
    pub fn was_fetched(&self) -> bool {
        self.page.is_some()
    }
}

/// Runs one candidate through the decision pipeline
///
/// # Arguments
///
/// * `client` - HTTP client used for the fetch
/// * `context` - Current session state (read only)
/// * `decisions` - The policy to consult
/// * `extractor` - Body decoder
/// * `candidate` - The page to probe
/// * `retry_count` - Retries already spent on this page
pub async fn probe(
    client: &Client,
    context: &CrawlContext,
    decisions: &dyn DecisionMaker,
    extractor: &WebContentExtractor,
    candidate: PageToCrawl,
    retry_count: u32,
) -> ProbeReport {
    let crawl = decisions.should_crawl_page(Some(&candidate), Some(context));
    if !crawl.allow {
        tracing::debug!("Not crawling {}: {}", candidate.uri, crawl.reason);
        return ProbeReport::denied(candidate, crawl);
    }

    let outcome = fetch_page(client, candidate.clone(), retry_count).await;
    let crawled = outcome.page;

    let Some(response) = outcome.response else {
        let recrawl = decisions.should_recrawl_page(Some(&crawled), Some(context));
        tracing::debug!("Recrawl verdict for {}: {}", candidate.uri, recrawl);
        return ProbeReport {
            candidate,
            crawl,
            download: None,
            crawl_links: None,
            recrawl: Some(recrawl),
            page: Some(crawled),
        };
    };

    let download = decisions.should_download_page_content(Some(&crawled), Some(context));
    if download.allow {
        let content = extractor.get_content(response).await;
        tracing::debug!(
            "Extracted {} bytes from {} (charset {:?}, encoding {})",
            content.bytes.len(),
            candidate.uri,
            content.charset,
            content.encoding.name()
        );
        // A freshly fetched page has no content yet, so this cannot be rejected
        let _ = crawled.set_content(content);
    } else {
        tracing::debug!("Not downloading {}: {}", candidate.uri, download.reason);
        drop(response);
    }

    let crawl_links = decisions.should_crawl_page_links(Some(&crawled), Some(context));
    if !crawl_links.allow {
        tracing::debug!("Not crawling links of {}: {}", candidate.uri, crawl_links.reason);
    }

    ProbeReport {
        candidate,
        crawl,
        download: Some(download),
        crawl_links: Some(crawl_links),
        recrawl: None,
        page: Some(crawled),
    }
}
