//! # routerule core
//!
//! Decides whether a routing target (a domain name or an IPv4 literal)
//! should be filtered.
//!
//! ## Architecture
//!
//! This crate provides:
//! - **Matching** - keyword list for domains, region set for addresses
//! - **Country lookup** - injected [`CountryLookup`] capability
//! - **Rules** - named matchers with hostname validation
//! - **Configuration** - TOML configuration with built-in defaults
//!
//! ## Example
//!
//! ```rust
//! use routerule_core::{DomainMatcher, StaticLookup};
//! use std::net::Ipv4Addr;
//!
//! let matcher = DomainMatcher::builder()
//!     .lookup(StaticLookup::new().with_entry(Ipv4Addr::new(1, 2, 3, 4), "CN"))
//!     .build();
//!
//! assert!(matcher.match_domain("www.baidu.com"));
//! assert!(matcher.match_domain("1.2.3.4"));
//! assert!(!matcher.match_domain("example.com"));
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

pub mod config;
pub mod error;
pub mod logging;
pub mod lookup;
pub mod matcher;
pub mod rule;
pub mod validate;

// Re-exports for convenience
pub use config::Config;
pub use error::{Error, Result};
pub use lookup::{CountryLookup, NoLookup, StaticLookup};
pub use matcher::{DomainMatcher, FilterList, FilterRegions, LookupFailurePolicy, MatchReason, Verdict};
pub use rule::Rule;
