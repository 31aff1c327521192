//! Scheduler handle and an in-memory crawl frontier
//!
//! The decision engine only needs the number of pending items, exposed through
//! the `Scheduler` trait. `FrontierScheduler` is a thread-safe priority queue an
//! orchestrator can use directly:
//! - Shallower pages are dequeued first (breadth-first)
//! - Retries go ahead of fresh pages at the same depth
//! - Ties are broken by insertion order

use crate::page::PageToCrawl;
use std::cmp::Ordering;
use std::collections::BinaryHeap;
use std::sync::{Mutex, MutexGuard};

/// Anything that can report how many pages are waiting to be crawled
pub trait Scheduler: Send + Sync {
    /// Number of pending items
    fn count(&self) -> usize;
}

/// A page queued in the frontier with its ordering key
#[derive(Debug, Clone)]
struct QueuedPage {
    page: PageToCrawl,

    /// Insertion sequence number
    seq: u64,
}

// Lower depth, then retries, then older entries are popped first from the max-heap
impl Ord for QueuedPage {
    fn cmp(&self, other: &Self) -> Ordering {
        other
            .page
            .crawl_depth
            .cmp(&self.page.crawl_depth)
            .then_with(|| self.page.is_retry.cmp(&other.page.is_retry))
            .then_with(|| other.seq.cmp(&self.seq))
    }
}

impl PartialOrd for QueuedPage {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl PartialEq for QueuedPage {
    fn eq(&self, other: &Self) -> bool {
        self.seq == other.seq
    }
}

impl Eq for QueuedPage {}

#[derive(Debug, Default)]
struct Frontier {
    heap: BinaryHeap<QueuedPage>,
    next_seq: u64,
}

/// In-memory priority frontier of pages to crawl
#[derive(Debug, Default)]
pub struct FrontierScheduler {
    frontier: Mutex<Frontier>,
}

impl FrontierScheduler {
    /// Creates an empty frontier
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a frontier seeded with the given pages
    pub fn with_pages(pages: impl IntoIterator<Item = PageToCrawl>) -> Self {
        let scheduler = Self::new();
        for page in pages {
            scheduler.add(page);
        }
        scheduler
    }

    /// Adds a page to the frontier
    pub fn add(&self, page: PageToCrawl) {
        let mut frontier = self.lock();
        let seq = frontier.next_seq;
        frontier.next_seq += 1;
        tracing::trace!("Queueing {} at depth {}", page.uri, page.crawl_depth);
        frontier.heap.push(QueuedPage { page, seq });
    }

    /// Removes and returns the next page to crawl
    pub fn next(&self) -> Option<PageToCrawl> {
        let page = self.lock().heap.pop().map(|queued| queued.page);
        if let Some(page) = &page {
            tracing::trace!("Dequeued {}", page.uri);
        }
        page
    }

    /// Drops every pending page
    pub fn clear(&self) {
        self.lock().heap.clear();
    }

    pub fn is_empty(&self) -> bool {
        self.lock().heap.is_empty()
    }

    // A poisoned lock only means another worker panicked mid-push; the heap is still usable.
    fn lock(&self) -> MutexGuard<'_, Frontier> {
        self.frontier
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

impl Scheduler for FrontierScheduler {
    fn count(&self) -> usize {
        self.lock().heap.len()
    }
}
