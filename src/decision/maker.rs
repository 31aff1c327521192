use crate::decision::CrawlDecision;
use crate::page::{authority, CrawledPage, PageToCrawl};
use crate::state::CrawlContext;
use reqwest::StatusCode;

/// The four lifecycle decisions
///
/// `CrawlDecisionMaker` is the only policy; the trait exists so orchestrators
/// can substitute a double in their own tests.
pub trait DecisionMaker: Send + Sync {
    /// Decides whether a candidate page should be fetched
    fn should_crawl_page(
        &self,
        page: Option<&PageToCrawl>,
        context: Option<&CrawlContext>,
    ) -> CrawlDecision;

    /// Decides whether the links on a crawled page should be followed
    fn should_crawl_page_links(
        &self,
        page: Option<&CrawledPage>,
        context: Option<&CrawlContext>,
    ) -> CrawlDecision;

    /// Decides whether a crawled page's body should be downloaded
    fn should_download_page_content(
        &self,
        page: Option<&CrawledPage>,
        context: Option<&CrawlContext>,
    ) -> CrawlDecision;

    /// Decides whether a failed page may be retried
    fn should_recrawl_page(
        &self,
        page: Option<&CrawledPage>,
        context: Option<&CrawlContext>,
    ) -> CrawlDecision;
}

/// Stateless crawl policy
///
/// Every operation only reads its arguments, so the same inputs always
/// produce the same verdict and calls may run concurrently without locking.
#[derive(Debug, Clone, Copy, Default)]
pub struct CrawlDecisionMaker;

impl CrawlDecisionMaker {
    pub fn new() -> Self {
        Self
    }
}

impl DecisionMaker for CrawlDecisionMaker {
    /// Guards, in order:
    /// 1. missing page or context
    /// 2. redirect hop beyond the redirect limit
    /// 3. depth strictly above the max crawl depth
    /// 4. scheme not starting with "http"
    /// 5. global page budget (counting this page as already queued)
    /// 6. per-authority page budget
    /// 7. external page while external crawling is disabled
    ///
    /// Retries are exempt from both budgets.
    fn should_crawl_page(
        &self,
        page: Option<&PageToCrawl>,
        context: Option<&CrawlContext>,
    ) -> CrawlDecision {
        let Some(page) = page else {
            return CrawlDecision::deny("Null page to crawl");
        };
        let Some(context) = context else {
            return CrawlDecision::deny("Null crawl context");
        };
        let config = &context.config;

        if let Some(redirect) = &page.redirect {
            if redirect.position > config.max_auto_redirects {
                return CrawlDecision::deny(format!(
                    "Max auto redirects limit of [{}] has been reached",
                    config.max_auto_redirects
                ));
            }
        }

        if page.crawl_depth > config.max_crawl_depth {
            return CrawlDecision::deny("Crawl depth is above max");
        }

        if !page.uri.scheme().starts_with("http") {
            return CrawlDecision::deny("Scheme does not begin with http");
        }

        if !page.is_retry
            && config.max_pages_to_crawl > 0
            && context
                .crawled_count
                .saturating_add(context.pending_count())
                .saturating_add(1)
                > config.max_pages_to_crawl
        {
            return CrawlDecision::deny(format!(
                "Max pages to crawl limit of [{}] has been reached",
                config.max_pages_to_crawl
            ));
        }

        if !page.is_retry && config.max_pages_to_crawl_per_domain > 0 {
            let domain = authority(&page.uri);
            // A zero counter behaves exactly like no counter at all
            if let Some(crawled) = context.crawl_count_by_domain.get(&domain) {
                if crawled > 0 && crawled >= config.max_pages_to_crawl_per_domain {
                    return CrawlDecision::deny(format!(
                        "Max pages to crawl per domain limit of [{}] has been reached for domain [{}]",
                        config.max_pages_to_crawl_per_domain, domain
                    ));
                }
            }
        }

        if !config.external_page_crawling_enabled && !page.is_internal {
            return CrawlDecision::deny("Link is external");
        }

        CrawlDecision::allow()
    }

    /// Unlike `should_crawl_page`, the depth bound here is inclusive: a page at
    /// exactly the max depth is fetched but its links are not followed.
    fn should_crawl_page_links(
        &self,
        page: Option<&CrawledPage>,
        context: Option<&CrawlContext>,
    ) -> CrawlDecision {
        let Some(page) = page else {
            return CrawlDecision::deny("Null crawled page");
        };
        let Some(context) = context else {
            return CrawlDecision::deny("Null crawl context");
        };
        let config = &context.config;

        let has_text = page
            .content()
            .is_some_and(|content| !content.text.trim().is_empty());
        if !has_text {
            return CrawlDecision::deny("Page has no content");
        }

        if !config.external_page_links_crawling_enabled && !page.is_internal() {
            return CrawlDecision::deny("Link is external");
        }

        if page.crawl_depth() >= config.max_crawl_depth {
            return CrawlDecision::deny("Crawl depth is above max");
        }

        CrawlDecision::allow()
    }

    fn should_download_page_content(
        &self,
        page: Option<&CrawledPage>,
        context: Option<&CrawlContext>,
    ) -> CrawlDecision {
        let Some(page) = page else {
            return CrawlDecision::deny("Null crawled page");
        };
        let Some(context) = context else {
            return CrawlDecision::deny("Null crawl context");
        };
        let Some(response) = &page.response else {
            return CrawlDecision::deny("Null response");
        };
        let config = &context.config;

        if response.status != StatusCode::OK.as_u16() {
            return CrawlDecision::deny("HTTP status code is not 200");
        }

        let page_content_type = response
            .content_type
            .as_deref()
            .unwrap_or_default()
            .trim()
            .to_lowercase();
        let allowed = config.downloadable_content_types();
        let is_downloadable = allowed
            .iter()
            .any(|allowed_type| page_content_type.contains(&allowed_type.to_lowercase()));
        if !is_downloadable {
            return CrawlDecision::deny(format!(
                "Content type is not any of the following: {}",
                allowed.join(",")
            ));
        }

        if config.max_page_size_in_bytes > 0 {
            if let Some(length) = response.content_length {
                if length > config.max_page_size_in_bytes {
                    return CrawlDecision::deny(format!(
                        "Page size of [{}] bytes is above the max allowable of [{}] bytes",
                        length, config.max_page_size_in_bytes
                    ));
                }
            }
        }

        CrawlDecision::allow()
    }

    /// A retry is only ever considered in response to a recorded transport failure.
    fn should_recrawl_page(
        &self,
        page: Option<&CrawledPage>,
        context: Option<&CrawlContext>,
    ) -> CrawlDecision {
        let Some(page) = page else {
            return CrawlDecision::deny("Null crawled page");
        };
        let Some(context) = context else {
            return CrawlDecision::deny("Null crawl context");
        };
        let config = &context.config;

        if page.transport_failure.is_none() {
            return CrawlDecision::deny("No transport failure occurred");
        }

        if config.max_retry_count < 1 {
            return CrawlDecision::deny("Max retry count is less than 1");
        }

        if page.retry_count >= config.max_retry_count {
            return CrawlDecision::deny("Max retry count has been reached");
        }

        CrawlDecision::allow()
    }
}
