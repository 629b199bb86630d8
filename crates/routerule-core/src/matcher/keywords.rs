//! Keyword (substring) filter list for domain targets

/// Built-in keywords
pub const DEFAULT_FILTERS: &[&str] = &["baidu", "shifen", "csdn", "qq", "libp2p", "z2pyw", "ddys.pro"];

/// Ordered list of substrings that mark a domain as filtered.
///
/// Matching is case-sensitive and performs no normalization of the input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterList {
    entries: Vec<String>,
}

impl Default for FilterList {
    fn default() -> Self {
        Self::new(DEFAULT_FILTERS.iter().copied())
    }
}

impl FilterList {
    /// Create a list from keywords, keeping their order.
    ///
    /// Empty keywords are dropped: an empty substring would match every
    /// domain.
    pub fn new<I, S>(entries: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            entries: entries
                .into_iter()
                .map(Into::into)
                .filter(|e: &String| !e.is_empty())
                .collect(),
        }
    }

    /// Return the first keyword (in list order) contained in `domain`
    pub fn find(&self, domain: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|keyword| domain.contains(keyword.as_str()))
            .map(String::as_str)
    }

    /// Check if `domain` contains any keyword
    pub fn matches(&self, domain: &str) -> bool {
        self.find(domain).is_some()
    }

    /// Keywords in list order
    pub fn entries(&self) -> &[String] {
        &self.entries
    }

    /// Number of keywords
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check if the list is empty
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
