use crate::content::PageContent;
use crate::page::PageToCrawl;
use reqwest::header::{HeaderMap, CONTENT_TYPE};
use std::fmt;
use std::sync::OnceLock;

/// Status line and headers of a completed HTTP response
///
/// Kept separate from the transport's own response type so decisions can be
/// made (and tested) without a live connection.
#[derive(Debug, Clone, Default)]
pub struct ResponseSummary {
    /// HTTP status code
    pub status: u16,

    /// All response headers
    pub headers: HeaderMap,

    /// Content-Type header value, if present
    pub content_type: Option<String>,

    /// Declared Content-Length, if present
    pub content_length: Option<u64>,
}

impl ResponseSummary {
    /// Captures the status and headers of a response without consuming its body
    pub fn from_response(response: &reqwest::Response) -> Self {
        let content_type = response
            .headers()
            .get(CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .map(|v| v.to_string());

        Self {
            status: response.status().as_u16(),
            headers: response.headers().clone(),
            content_type,
            content_length: response.content_length(),
        }
    }
}

/// A transport-level failure recorded against a fetch attempt
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransportFailure {
    /// Error description
    pub message: String,

    /// Whether the failure was a timeout
    pub timed_out: bool,
}

impl TransportFailure {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            timed_out: false,
        }
    }

    pub fn timeout(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            timed_out: true,
        }
    }
}

impl From<&reqwest::Error> for TransportFailure {
    fn from(err: &reqwest::Error) -> Self {
        Self {
            message: err.to_string(),
            timed_out: err.is_timeout(),
        }
    }
}

impl fmt::Display for TransportFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.timed_out {
            write!(f, "timeout: {}", self.message)
        } else {
            write!(f, "{}", self.message)
        }
    }
}

/// A candidate page that has completed an HTTP fetch attempt
#[derive(Debug, Clone)]
pub struct CrawledPage {
    /// The candidate this fetch was made for
    pub page: PageToCrawl,

    /// Response status and headers; absent when the request never completed
    pub response: Option<ResponseSummary>,

    /// Transport failure recorded for this attempt
    pub transport_failure: Option<TransportFailure>,

    /// Number of retries already spent on this page
    pub retry_count: u32,

    content: OnceLock<PageContent>,
}

impl CrawledPage {
    pub fn new(page: PageToCrawl) -> Self {
        Self {
            page,
            response: None,
            transport_failure: None,
            retry_count: 0,
            content: OnceLock::new(),
        }
    }

    pub fn with_response(mut self, response: ResponseSummary) -> Self {
        self.response = Some(response);
        self
    }

    pub fn with_transport_failure(mut self, failure: TransportFailure) -> Self {
        self.transport_failure = Some(failure);
        self
    }

    pub fn with_retry_count(mut self, retry_count: u32) -> Self {
        self.retry_count = retry_count;
        self
    }

    /// Attaches the decoded content
    ///
    /// Content is written exactly once; a second attempt hands the rejected
    /// value back and leaves the original untouched.
    pub fn set_content(&self, content: PageContent) -> Result<(), PageContent> {
        self.content.set(content)
    }

    /// The decoded content, once extracted
    pub fn content(&self) -> Option<&PageContent> {
        self.content.get()
    }

    pub fn crawl_depth(&self) -> u32 {
        self.page.crawl_depth
    }

    pub fn is_internal(&self) -> bool {
        self.page.is_internal
    }
}
