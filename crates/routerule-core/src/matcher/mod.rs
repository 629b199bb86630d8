//! Target matching for routing rules
//!
//! A target is either an IPv4 literal or a domain name:
//! - IPv4 literals are resolved to a country and checked against
//!   [`FilterRegions`]
//! - Everything else is checked for a keyword from [`FilterList`]
//!
//! Both lists are fixed once the [`DomainMatcher`] is built.

mod domain_matcher;
mod ipv4;
mod keywords;
mod regions;

pub use domain_matcher::{DomainMatcher, DomainMatcherBuilder, MatchReason, Verdict};
pub use ipv4::{is_ipv4, parse_ipv4};
pub use keywords::{FilterList, DEFAULT_FILTERS};
pub use regions::{FilterRegions, LookupFailurePolicy, RegionMatch, DEFAULT_REGIONS};
