use url::Url;

/// Where a page sits within a chain of HTTP redirects
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RedirectLineage {
    /// The page whose response redirected to this one
    pub redirected_from: Url,

    /// 1-based index of this page within the redirect chain
    pub position: u32,
}

/// A candidate URI awaiting a crawl-eligibility decision
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageToCrawl {
    /// The URI to fetch
    pub uri: Url,

    /// The page this URI was discovered on, if any
    pub parent_uri: Option<Url>,

    /// Number of link-hops from the seed
    pub crawl_depth: u32,

    /// Whether the URI belongs to the crawl's own site
    pub is_internal: bool,

    /// Whether this candidate is a retry of a failed fetch
    pub is_retry: bool,

    /// Redirect lineage, present only for redirect hops
    pub redirect: Option<RedirectLineage>,
}

impl PageToCrawl {
    /// Creates a seed page: depth 0, internal, no lineage
    pub fn seed(uri: Url) -> Self {
        Self {
            uri,
            parent_uri: None,
            crawl_depth: 0,
            is_internal: true,
            is_retry: false,
            redirect: None,
        }
    }

    /// Creates a page discovered as a link on `parent`, one hop deeper
    pub fn child(parent: &PageToCrawl, uri: Url, is_internal: bool) -> Self {
        Self {
            uri,
            parent_uri: Some(parent.uri.clone()),
            crawl_depth: parent.crawl_depth.saturating_add(1),
            is_internal,
            is_retry: false,
            redirect: None,
        }
    }

    /// Creates the redirect hop `target` reached from `source` at `position` in the chain
    ///
    /// A redirect hop stays at the source's depth; it is the same logical page.
    pub fn redirect_hop(source: &PageToCrawl, target: Url, position: u32) -> Self {
        Self {
            uri: target,
            parent_uri: source.parent_uri.clone(),
            crawl_depth: source.crawl_depth,
            is_internal: source.is_internal,
            is_retry: false,
            redirect: Some(RedirectLineage {
                redirected_from: source.uri.clone(),
                position,
            }),
        }
    }

    /// Returns a copy of this page flagged as a retry
    pub fn as_retry(&self) -> Self {
        Self {
            is_retry: true,
            ..self.clone()
        }
    }

    /// Returns true if this page was reached through a redirect
    pub fn is_redirect_hop(&self) -> bool {
        self.redirect.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn url(s: &str) -> Url {
        Url::parse(s).unwrap()
    }

    #[test]
    fn test_seed_defaults() {
        let page = PageToCrawl::seed(url("https://example.com/"));
        assert_eq!(page.crawl_depth, 0);
        assert!(page.is_internal);
        assert!(!page.is_retry);
        assert!(page.parent_uri.is_none());
        assert!(!page.is_redirect_hop());
    }

    #[test]
    fn test_child_is_one_hop_deeper() {
        let seed = PageToCrawl::seed(url("https://example.com/"));
        let child = PageToCrawl::child(&seed, url("https://other.org/a"), false);

        assert_eq!(child.crawl_depth, 1);
        assert!(!child.is_internal);
        assert_eq!(child.parent_uri, Some(seed.uri.clone()));
    }

    #[test]
    fn test_redirect_hop_keeps_depth() {
        let seed = PageToCrawl::seed(url("https://example.com/"));
        let child = PageToCrawl::child(&seed, url("https://example.com/old"), true);
        let hop = PageToCrawl::redirect_hop(&child, url("https://example.com/new"), 1);

        assert_eq!(hop.crawl_depth, 1);
        assert!(hop.is_redirect_hop());
        let lineage = hop.redirect.unwrap();
        assert_eq!(lineage.redirected_from, url("https://example.com/old"));
        assert_eq!(lineage.position, 1);
    }

    #[test]
    fn test_as_retry() {
        let seed = PageToCrawl::seed(url("https://example.com/"));
        let retry = seed.as_retry();
        assert!(retry.is_retry);
        assert!(!seed.is_retry);
        assert_eq!(retry.uri, seed.uri);
    }
}
