//! Country-code filter set for IPv4 targets

use crate::error::Result;
use crate::lookup::CountryLookup;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::net::Ipv4Addr;

/// Built-in region codes
pub const DEFAULT_REGIONS: &[&str] = &["CN"];

/// What to decide when the country lookup itself fails
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LookupFailurePolicy {
    /// Treat the address as not filtered (fail-open)
    #[default]
    Pass,
    /// Treat the address as filtered (fail-closed)
    Filter,
}

/// Outcome of looking an address up against the region set
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RegionMatch {
    /// Country is in the set
    Listed(String),
    /// Country is known but not in the set
    Unlisted(String),
    /// Lookup had no country for the address
    Unknown,
}

impl RegionMatch {
    /// Check if this outcome filters the address
    pub fn is_filtered(&self) -> bool {
        matches!(self, RegionMatch::Listed(_))
    }
}

/// Set of country codes whose addresses are filtered.
///
/// Codes compare by exact string equality; `"cn"` does not match `"CN"`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterRegions {
    codes: BTreeSet<String>,
}

impl Default for FilterRegions {
    fn default() -> Self {
        Self::new(DEFAULT_REGIONS.iter().copied())
    }
}

impl FilterRegions {
    /// Create a region set from country codes
    pub fn new<I, S>(codes: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            codes: codes.into_iter().map(Into::into).collect(),
        }
    }

    /// Check if `country` is in the set
    pub fn contains(&self, country: &str) -> bool {
        self.codes.contains(country)
    }

    /// Resolve `ip` through `lookup` and test the result for membership.
    ///
    /// An empty country code is treated the same as an unknown one.
    pub fn evaluate(&self, ip: Ipv4Addr, lookup: &dyn CountryLookup) -> Result<RegionMatch> {
        let outcome = match lookup.country(ip)? {
            Some(code) if code.is_empty() => RegionMatch::Unknown,
            Some(code) if self.contains(&code) => RegionMatch::Listed(code),
            Some(code) => RegionMatch::Unlisted(code),
            None => RegionMatch::Unknown,
        };
        Ok(outcome)
    }

    /// Codes in sorted order
    pub fn codes(&self) -> impl Iterator<Item = &str> {
        self.codes.iter().map(String::as_str)
    }

    /// Number of codes
    pub fn len(&self) -> usize {
        self.codes.len()
    }

    /// Check if the set is empty
    pub fn is_empty(&self) -> bool {
        self.codes.is_empty()
    }
}
