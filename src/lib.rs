//! Crawl-Gate: the policy and decoding core of a web crawler
//!
//! This crate decides, at each stage of a page's lifecycle, whether crawl work
//! should proceed, and turns raw HTTP response bodies into correctly decoded text.
//! Fetching, scheduling and persistence belong to the orchestrator; the bundled
//! `crawler` module provides a minimal reference orchestrator for probing URLs.

pub mod config;
pub mod content;
pub mod crawler;
pub mod decision;
pub mod page;
pub mod state;

use thiserror::Error;

/// Main error type for Crawl-Gate operations
///
/// Decision and extraction never produce errors; these cover the surrounding
/// plumbing (configuration, client construction, URL parsing).
#[derive(Debug, Error)]
pub enum CrawlGateError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("HTTP client error: {0}")]
    Reqwest(#[from] reqwest::Error),

    #[error("URL parse error: {0}")]
    UrlParse(#[from] ::url::ParseError),
}

/// Configuration-specific errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse TOML: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Invalid URL in config: {0}")]
    InvalidUrl(String),
}

/// Result type alias for Crawl-Gate operations
pub type Result<T> = std::result::Result<T, CrawlGateError>;

// Re-export commonly used types
pub use config::{Config, CrawlConfiguration};
pub use content::{PageContent, WebContentExtractor};
pub use crawler::{FrontierScheduler, Scheduler};
pub use decision::{CrawlDecision, CrawlDecisionMaker, DecisionMaker};
pub use page::{CrawledPage, PageToCrawl, RedirectLineage, ResponseSummary, TransportFailure};
pub use state::{CrawlContext, DomainCounts};
