use url::Url;

/// Extracts the authority (host plus non-default port) from a URL
///
/// This is the key under which per-domain crawl counts are stored. The host is
/// lowercased; the port is only appended when it differs from the scheme default,
/// so `https://example.com:443/` and `https://example.com/` share one counter.
///
/// # Examples
///
/// ```
/// use url::Url;
/// use crawl_gate::page::authority;
///
/// let url = Url::parse("https://EXAMPLE.com/path").unwrap();
/// assert_eq!(authority(&url), "example.com");
///
/// let url = Url::parse("http://example.com:8080/").unwrap();
/// assert_eq!(authority(&url), "example.com:8080");
/// ```
pub fn authority(url: &Url) -> String {
    let host = url.host_str().unwrap_or_default().to_lowercase();
    match url.port() {
        Some(port) => format!("{}:{}", host, port),
        None => host,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_simple_authority() {
        let url = Url::parse("https://example.com/").unwrap();
        assert_eq!(authority(&url), "example.com");
    }

    #[test]
    fn test_subdomain_is_distinct() {
        let url = Url::parse("https://blog.example.com/post").unwrap();
        assert_eq!(authority(&url), "blog.example.com");
    }

    #[test]
    fn test_non_default_port_kept() {
        let url = Url::parse("https://example.com:8443/").unwrap();
        assert_eq!(authority(&url), "example.com:8443");
    }

    #[test]
    fn test_default_port_dropped() {
        let url = Url::parse("https://example.com:443/").unwrap();
        assert_eq!(authority(&url), "example.com");
    }

    #[test]
    fn test_ip_with_port() {
        let url = Url::parse("http://127.0.0.1:4000/a").unwrap();
        assert_eq!(authority(&url), "127.0.0.1:4000");
    }

    #[test]
    fn test_no_host() {
        let url = Url::parse("mailto:someone@example.com").unwrap();
        assert_eq!(authority(&url), "");
    }
}
