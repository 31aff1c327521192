//! Page types flowing through the crawl lifecycle
//!
//! - `PageToCrawl`: a candidate URI created by the scheduler or link harvester
//! - `CrawledPage`: a candidate after its fetch attempt, carrying the response
//!   summary, any transport failure and (once extracted) the decoded content
//!
//! Both are read-only from the decision engine's point of view.

mod authority;
mod crawled_page;
mod page_to_crawl;

pub use authority::authority;
pub use crawled_page::{CrawledPage, ResponseSummary, TransportFailure};
pub use page_to_crawl::{PageToCrawl, RedirectLineage};
