use std::collections::HashMap;

/// Tracks how many pages have been crawled per authority
///
/// An authority absent from the map and an authority recorded with zero pages
/// are treated identically by the per-domain budget check.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DomainCounts {
    counts: HashMap<String, u64>,
}

impl DomainCounts {
    /// Creates an empty counter map
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the stored counter for an authority, if one exists
    pub fn get(&self, authority: &str) -> Option<u64> {
        self.counts.get(authority).copied()
    }

    /// Records one more crawled page for the authority and returns the new count
    pub fn record(&mut self, authority: &str) -> u64 {
        let count = self.counts.entry(authority.to_string()).or_insert(0);
        *count += 1;
        *count
    }

    /// Overwrites the counter for an authority (e.g. when resuming a session)
    pub fn set(&mut self, authority: impl Into<String>, count: u64) {
        self.counts.insert(authority.into(), count);
    }

    /// Returns the number of pages remaining for an authority under `limit`
    pub fn remaining(&self, authority: &str, limit: u64) -> u64 {
        limit.saturating_sub(self.get(authority).unwrap_or(0))
    }

    /// Number of authorities with a stored counter
    pub fn len(&self) -> usize {
        self.counts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    /// Sum of all per-authority counters
    pub fn total(&self) -> u64 {
        self.counts.values().sum()
    }
}

impl FromIterator<(String, u64)> for DomainCounts {
    fn from_iter<I: IntoIterator<Item = (String, u64)>>(iter: I) -> Self {
        Self {
            counts: iter.into_iter().collect(),
        }
    }
}
