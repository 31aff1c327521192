//! State module for tracking crawl session progress
//!
//! # Components
//!
//! - `CrawlContext`: per-session counters, scheduler handle and configuration
//! - `DomainCounts`: pages crawled per authority
//!
//! The orchestrator owns and mutates this state; the decision engine only reads it.

mod crawl_context;
mod domain_counts;

// Re-export main types
pub use crawl_context::CrawlContext;
pub use domain_counts::DomainCounts;
