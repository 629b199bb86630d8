//! Domain matcher implementation
//!
//! Dispatches a target to the region filter (IPv4 literals) or the keyword
//! filter (everything else).

use super::ipv4::parse_ipv4;
use super::keywords::FilterList;
use super::regions::{FilterRegions, LookupFailurePolicy, RegionMatch};
use crate::config::MatcherConfig;
use crate::error::Result;
use crate::lookup::{CountryLookup, NoLookup};
use std::fmt;
use std::net::Ipv4Addr;
use std::sync::Arc;
use tracing::{debug, warn};

/// Why a target was or was not filtered
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MatchReason {
    /// Domain contains this keyword
    Keyword(String),
    /// Address resolved to this listed country
    Region(String),
    /// Domain without keywords, or address in an unlisted country
    NoMatch,
    /// Lookup had no country for the address
    UnknownCountry,
    /// Lookup failed; the failure policy decided
    LookupFailed,
    /// Target rejected by hostname validation
    InvalidTarget,
}

/// Result of evaluating a target
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Verdict {
    /// Should the target be filtered
    pub filtered: bool,
    /// What decided it
    pub reason: MatchReason,
}

impl Verdict {
    fn block(reason: MatchReason) -> Self {
        Self { filtered: true, reason }
    }

    fn pass(reason: MatchReason) -> Self {
        Self { filtered: false, reason }
    }

    pub(crate) fn invalid_target() -> Self {
        Self::pass(MatchReason::InvalidTarget)
    }
}

impl fmt::Display for Verdict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let action = if self.filtered { "filtered" } else { "passed" };
        match &self.reason {
            MatchReason::Keyword(k) => write!(f, "{action} (keyword '{k}')"),
            MatchReason::Region(c) => write!(f, "{action} (region {c})"),
            MatchReason::NoMatch => write!(f, "{action} (no match)"),
            MatchReason::UnknownCountry => write!(f, "{action} (unknown country)"),
            MatchReason::LookupFailed => write!(f, "{action} (lookup failed)"),
            MatchReason::InvalidTarget => write!(f, "{action} (invalid target)"),
        }
    }
}

/// Matcher deciding whether a domain or IPv4 address is filtered
///
/// Holds only immutable lists and a shared lookup, so it is cheap to clone
/// and safe to use from many threads at once.
#[derive(Clone)]
pub struct DomainMatcher {
    filters: FilterList,
    regions: FilterRegions,
    lookup: Arc<dyn CountryLookup>,
    failure_policy: LookupFailurePolicy,
}

impl fmt::Debug for DomainMatcher {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DomainMatcher")
            .field("filters", &self.filters)
            .field("regions", &self.regions)
            .field("failure_policy", &self.failure_policy)
            .finish_non_exhaustive()
    }
}

impl Default for DomainMatcher {
    fn default() -> Self {
        Self::new(FilterList::default(), FilterRegions::default(), Arc::new(NoLookup))
    }
}

impl DomainMatcher {
    /// Create a matcher from explicit lists and a lookup
    pub fn new(filters: FilterList, regions: FilterRegions, lookup: Arc<dyn CountryLookup>) -> Self {
        Self {
            filters,
            regions,
            lookup,
            failure_policy: LookupFailurePolicy::default(),
        }
    }

    /// Start building a matcher from the built-in lists
    pub fn builder() -> DomainMatcherBuilder {
        DomainMatcherBuilder::default()
    }

    /// Create from matcher configuration
    pub fn from_config(config: &MatcherConfig, lookup: Arc<dyn CountryLookup>) -> Self {
        Self::new(
            FilterList::new(config.filters.iter().cloned()),
            FilterRegions::new(config.regions.iter().cloned()),
            lookup,
        )
        .with_failure_policy(config.on_lookup_error)
    }

    /// Set what a lookup failure decides
    pub fn with_failure_policy(mut self, policy: LookupFailurePolicy) -> Self {
        self.failure_policy = policy;
        self
    }

    /// Keyword list
    pub fn filters(&self) -> &FilterList {
        &self.filters
    }

    /// Region set
    pub fn regions(&self) -> &FilterRegions {
        &self.regions
    }

    /// Current lookup failure policy
    pub fn failure_policy(&self) -> LookupFailurePolicy {
        self.failure_policy
    }

    /// Check if a domain or IPv4 literal should be filtered
    pub fn match_domain(&self, input: &str) -> bool {
        self.evaluate(input).filtered
    }

    /// Evaluate a target, resolving lookup failures by the failure policy
    pub fn evaluate(&self, input: &str) -> Verdict {
        match parse_ipv4(input) {
            Some(ip) => match self.evaluate_ip(ip) {
                Ok(verdict) => verdict,
                Err(e) => {
                    let filtered = self.failure_policy == LookupFailurePolicy::Filter;
                    warn!(
                        "Country lookup failed for {}, treating as {}: {}",
                        input,
                        if filtered { "filtered" } else { "not filtered" },
                        e
                    );
                    Verdict {
                        filtered,
                        reason: MatchReason::LookupFailed,
                    }
                }
            },
            None => self.evaluate_domain(input),
        }
    }

    /// Evaluate a target, returning lookup failures to the caller
    pub fn try_evaluate(&self, input: &str) -> Result<Verdict> {
        match parse_ipv4(input) {
            Some(ip) => self.evaluate_ip(ip),
            None => Ok(self.evaluate_domain(input)),
        }
    }

    fn evaluate_ip(&self, ip: Ipv4Addr) -> Result<Verdict> {
        let verdict = match self.regions.evaluate(ip, self.lookup.as_ref())? {
            RegionMatch::Listed(code) => {
                debug!("Address {} is in filtered region {}", ip, code);
                Verdict::block(MatchReason::Region(code))
            }
            RegionMatch::Unlisted(_) => Verdict::pass(MatchReason::NoMatch),
            RegionMatch::Unknown => {
                debug!("No country known for {}", ip);
                Verdict::pass(MatchReason::UnknownCountry)
            }
        };
        Ok(verdict)
    }

    fn evaluate_domain(&self, domain: &str) -> Verdict {
        match self.filters.find(domain) {
            Some(keyword) => {
                debug!("Domain {} matches keyword {}", domain, keyword);
                Verdict::block(MatchReason::Keyword(keyword.to_string()))
            }
            None => Verdict::pass(MatchReason::NoMatch),
        }
    }
}

/// Builder for [`DomainMatcher`]
pub struct DomainMatcherBuilder {
    filters: FilterList,
    regions: FilterRegions,
    lookup: Arc<dyn CountryLookup>,
    failure_policy: LookupFailurePolicy,
}

impl Default for DomainMatcherBuilder {
    fn default() -> Self {
        Self {
            filters: FilterList::default(),
            regions: FilterRegions::default(),
            lookup: Arc::new(NoLookup),
            failure_policy: LookupFailurePolicy::default(),
        }
    }
}

impl DomainMatcherBuilder {
    /// Replace the keyword list
    pub fn filters(mut self, filters: FilterList) -> Self {
        self.filters = filters;
        self
    }

    /// Replace the region set
    pub fn regions(mut self, regions: FilterRegions) -> Self {
        self.regions = regions;
        self
    }

    /// Use this country lookup
    pub fn lookup<L: CountryLookup + 'static>(mut self, lookup: L) -> Self {
        self.lookup = Arc::new(lookup);
        self
    }

    /// Set what a lookup failure decides
    pub fn failure_policy(mut self, policy: LookupFailurePolicy) -> Self {
        self.failure_policy = policy;
        self
    }

    /// Build the matcher
    pub fn build(self) -> DomainMatcher {
        DomainMatcher::new(self.filters, self.regions, self.lookup).with_failure_policy(self.failure_policy)
    }
}
