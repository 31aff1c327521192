use serde::Deserialize;

/// Main configuration structure for Crawl-Gate
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub crawler: CrawlConfiguration,
    #[serde(rename = "user-agent", default)]
    pub user_agent: UserAgentConfig,
}

/// Crawl policy knobs, supplied once per session and never mutated afterwards
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct CrawlConfiguration {
    /// Maximum position a page may hold within a redirect chain
    pub max_auto_redirects: u32,

    /// Maximum link-hops from the seed a page may be fetched at
    pub max_crawl_depth: u32,

    /// Global page budget for the session (0 = unlimited)
    pub max_pages_to_crawl: u64,

    /// Page budget per authority (0 = unlimited)
    pub max_pages_to_crawl_per_domain: u64,

    /// Whether pages flagged external may be fetched
    pub external_page_crawling_enabled: bool,

    /// Whether links found on external pages may be followed
    pub external_page_links_crawling_enabled: bool,

    /// Comma-separated media-type substrings whose bodies are downloaded
    pub downloadable_content_types: String,

    /// Largest declared content-length accepted for download (0 = unlimited)
    pub max_page_size_in_bytes: u64,

    /// Number of retries permitted after a transport failure (0 disables retries)
    pub max_retry_count: u32,

    /// Request timeout used by the bundled fetcher (seconds)
    pub request_timeout_secs: u64,
}

impl CrawlConfiguration {
    /// Returns the cleaned download allow-list: split on commas, trimmed, empties discarded
    pub fn downloadable_content_types(&self) -> Vec<&str> {
        self.downloadable_content_types
            .split(',')
            .map(str::trim)
            .filter(|t| !t.is_empty())
            .collect()
    }
}

impl Default for CrawlConfiguration {
    fn default() -> Self {
        Self {
            max_auto_redirects: 7,
            max_crawl_depth: 100,
            max_pages_to_crawl: 1000,
            max_pages_to_crawl_per_domain: 0,
            external_page_crawling_enabled: false,
            external_page_links_crawling_enabled: false,
            downloadable_content_types: "text/html".to_string(),
            max_page_size_in_bytes: 0,
            max_retry_count: 0,
            request_timeout_secs: 15,
        }
    }
}

/// User agent identification configuration
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct UserAgentConfig {
    /// Name of the crawler
    #[serde(rename = "crawler-name")]
    pub crawler_name: String,

    /// Version of the crawler
    #[serde(rename = "crawler-version")]
    pub crawler_version: String,

    /// URL with information about the crawler
    #[serde(rename = "contact-url")]
    pub contact_url: String,

    /// Email address for crawler-related contact
    #[serde(rename = "contact-email")]
    pub contact_email: String,
}

impl UserAgentConfig {
    /// Formats the header value: `Name/Version (+ContactURL; ContactEmail)`
    pub fn header_value(&self) -> String {
        format!(
            "{}/{} (+{}; {})",
            self.crawler_name, self.crawler_version, self.contact_url, self.contact_email
        )
    }
}

impl Default for UserAgentConfig {
    fn default() -> Self {
        Self {
            crawler_name: "CrawlGate".to_string(),
            crawler_version: env!("CARGO_PKG_VERSION").to_string(),
            contact_url: "https://example.com/crawler".to_string(),
            contact_email: "crawler@example.com".to_string(),
        }
    }
}
