//! Crawler plumbing around the decision engine
//!
//! This module contains:
//! - The `Scheduler` handle the decision engine reads pending counts from,
//!   plus an in-memory priority frontier implementing it
//! - A reqwest-based fetcher producing `CrawledPage`s
//! - `probe`, a reference orchestrator running one page through every decision

mod fetcher;
mod probe;
mod scheduler;

pub use fetcher::{build_http_client, fetch_page, FetchOutcome};
pub use probe::{probe, ProbeReport};
pub use scheduler::{FrontierScheduler, Scheduler};
