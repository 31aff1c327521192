//! Decision engine: gates the four transitions of a page's lifecycle
//!
//! - `should_crawl_page`: fetch a candidate at all?
//! - `should_download_page_content`: buffer the response body?
//! - `should_crawl_page_links`: follow the decoded page's links?
//! - `should_recrawl_page`: retry after a transport failure?
//!
//! Each operation checks an ordered chain of guards and returns the first
//! failing guard's verdict; if none fail, the page is allowed. Missing inputs
//! are the first guard of every chain.

mod maker;
mod verdict;

pub use maker::{CrawlDecisionMaker, DecisionMaker};
pub use verdict::CrawlDecision;
