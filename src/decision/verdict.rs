use std::fmt;

/// Allow-or-deny outcome of a crawl decision
///
/// A denial always carries a non-empty reason; an allow carries none.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CrawlDecision {
    pub allow: bool,
    pub reason: String,
}

impl CrawlDecision {
    /// An unconditional allow
    pub fn allow() -> Self {
        Self {
            allow: true,
            reason: String::new(),
        }
    }

    /// A denial with the given reason
    pub fn deny(reason: impl Into<String>) -> Self {
        let reason = reason.into();
        debug_assert!(!reason.is_empty(), "a denial must explain itself");
        Self {
            allow: false,
            reason,
        }
    }

    pub fn is_allowed(&self) -> bool {
        self.allow
    }
}

impl fmt::Display for CrawlDecision {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.allow {
            write!(f, "allow")
        } else {
            write!(f, "deny: {}", self.reason)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_allow_has_no_reason() {
        let decision = CrawlDecision::allow();
        assert!(decision.is_allowed());
        assert!(decision.reason.is_empty());
        assert_eq!(decision.to_string(), "allow");
    }

    #[test]
    fn test_deny_keeps_reason() {
        let decision = CrawlDecision::deny("Crawl depth is above max");
        assert!(!decision.is_allowed());
        assert_eq!(decision.reason, "Crawl depth is above max");
        assert_eq!(decision.to_string(), "deny: Crawl depth is above max");
    }
}
