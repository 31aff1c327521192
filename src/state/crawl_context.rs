use crate::config::CrawlConfiguration;
use crate::crawler::Scheduler;
use crate::page::authority;
use crate::state::DomainCounts;
use chrono::{DateTime, Utc};
use std::fmt;
use std::sync::Arc;
use url::Url;

/// Per-session crawl state
///
/// Created once per session and updated by the orchestrator as pages complete.
/// Decisions read it; nothing in the decision engine writes to it.
#[derive(Clone)]
pub struct CrawlContext {
    /// Session configuration
    pub config: Arc<CrawlConfiguration>,

    /// Pages crawled so far in this session
    pub crawled_count: u64,

    /// Pages crawled so far, per authority
    pub crawl_count_by_domain: DomainCounts,

    /// Handle to the scheduler, used for its pending-item count
    pub scheduler: Arc<dyn Scheduler>,

    /// When the session started
    pub started_at: DateTime<Utc>,
}

impl CrawlContext {
    pub fn new(config: Arc<CrawlConfiguration>, scheduler: Arc<dyn Scheduler>) -> Self {
        Self {
            config,
            crawled_count: 0,
            crawl_count_by_domain: DomainCounts::new(),
            scheduler,
            started_at: Utc::now(),
        }
    }

    /// Records a completed page against the global and per-authority counters
    pub fn record_crawled(&mut self, uri: &Url) {
        self.crawled_count += 1;
        self.crawl_count_by_domain.record(&authority(uri));
    }

    /// Pages waiting in the scheduler right now
    pub fn pending_count(&self) -> u64 {
        self.scheduler.count() as u64
    }
}

impl fmt::Debug for CrawlContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CrawlContext")
            .field("config", &self.config)
            .field("crawled_count", &self.crawled_count)
            .field("crawl_count_by_domain", &self.crawl_count_by_domain)
            .field("pending_count", &self.pending_count())
            .field("started_at", &self.started_at)
            .finish()
    }
}
