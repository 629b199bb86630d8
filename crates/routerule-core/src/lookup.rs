//! Country lookup for IPv4 targets
//!
//! The matcher never resolves countries itself. Embedders supply a
//! [`CountryLookup`] (usually backed by a GeoIP database); this module ships
//! the two lookups that need no external data.

use crate::error::Result;
use std::collections::HashMap;
use std::net::Ipv4Addr;
use tracing::warn;

/// Resolves an IPv4 address to an ISO-3166 alpha-2 country code.
///
/// `Ok(None)` means the address is not in the lookup's data. `Err` is a
/// failure of the lookup itself (closed database, I/O, timeout).
#[cfg_attr(test, mockall::automock)]
pub trait CountryLookup: Send + Sync {
    /// Get the country code for `ip`
    fn country(&self, ip: Ipv4Addr) -> Result<Option<String>>;
}

impl<F> CountryLookup for F
where
    F: Fn(Ipv4Addr) -> Result<Option<String>> + Send + Sync,
{
    fn country(&self, ip: Ipv4Addr) -> Result<Option<String>> {
        self(ip)
    }
}

/// Lookup used when no country data is configured.
///
/// Every address is unknown, so no IP is ever region-filtered.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoLookup;

impl CountryLookup for NoLookup {
    fn country(&self, _ip: Ipv4Addr) -> Result<Option<String>> {
        Ok(None)
    }
}

/// Fixed address → country table
#[derive(Debug, Clone, Default)]
pub struct StaticLookup {
    table: HashMap<Ipv4Addr, String>,
}

impl StaticLookup {
    /// Create an empty table
    pub fn new() -> Self {
        Self::default()
    }

    /// Add or replace an entry
    pub fn with_entry(mut self, ip: Ipv4Addr, country: impl Into<String>) -> Self {
        self.table.insert(ip, country.into());
        self
    }

    /// Build from string pairs as they appear in `[lookup.static_table]`.
    ///
    /// Keys that are not IPv4 addresses are skipped with a warning.
    pub fn from_pairs<'a, I>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (&'a String, &'a String)>,
    {
        let mut table = HashMap::new();
        for (addr, country) in pairs {
            match crate::matcher::parse_ipv4(addr) {
                Some(ip) => {
                    table.insert(ip, country.clone());
                }
                None => warn!("Ignoring static lookup entry with invalid address: {}", addr),
            }
        }
        Self { table }
    }

    /// Number of entries
    pub fn len(&self) -> usize {
        self.table.len()
    }

    /// Check if the table is empty
    pub fn is_empty(&self) -> bool {
        self.table.is_empty()
    }
}

impl CountryLookup for StaticLookup {
    fn country(&self, ip: Ipv4Addr) -> Result<Option<String>> {
        Ok(self.table.get(&ip).cloned())
    }
}
