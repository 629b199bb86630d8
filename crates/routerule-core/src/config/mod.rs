//! Configuration management for routerule
//!
//! Provides a strongly-typed configuration system with TOML support.
//! Every section has defaults, so an empty file yields the built-in
//! keyword list and region set.

use crate::error::{Error, Result};
use crate::lookup::StaticLookup;
use crate::matcher::{parse_ipv4, LookupFailurePolicy, DEFAULT_FILTERS, DEFAULT_REGIONS};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::net::Ipv4Addr;
use std::path::Path;

/// Main configuration structure
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Rule identity
    pub rule: RuleConfig,

    /// Keyword and region lists
    pub matcher: MatcherConfig,

    /// Built-in country lookup data
    pub lookup: LookupConfig,

    /// Logging configuration
    pub logging: LoggingConfig,
}

impl Config {
    /// Load configuration from a TOML file
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|_| Error::ConfigNotFound {
            path: path.display().to_string(),
        })?;
        Self::from_toml(&content)
    }

    /// Parse configuration from TOML string
    pub fn from_toml(content: &str) -> Result<Self> {
        toml::from_str(content).map_err(Error::from)
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<()> {
        if self.rule.name.trim().is_empty() {
            return Err(Error::config_value("rule.name", "Must not be empty"));
        }

        if let Some(i) = self.matcher.filters.iter().position(String::is_empty) {
            return Err(Error::config_value(
                "matcher.filters",
                format!("Entry {i} is empty and would match every domain"),
            ));
        }

        for code in &self.matcher.regions {
            if code.len() != 2 || !code.bytes().all(|b| b.is_ascii_uppercase()) {
                return Err(Error::config_value(
                    "matcher.regions",
                    format!("'{code}' is not an upper-case two-letter country code"),
                ));
            }
        }

        let mut seen: BTreeMap<Ipv4Addr, &str> = BTreeMap::new();
        for addr in self.lookup.static_table.keys() {
            let Some(ip) = parse_ipv4(addr) else {
                return Err(Error::config_value(
                    "lookup.static_table",
                    format!("'{addr}' is not an IPv4 address"),
                ));
            };
            // Zero-padded keys can name an address already in the table
            if let Some(other) = seen.insert(ip, addr.as_str()) {
                return Err(Error::config_value(
                    "lookup.static_table",
                    format!("'{other}' and '{addr}' both name {ip}"),
                ));
            }
        }

        Ok(())
    }

    /// Serialize to TOML string
    pub fn to_toml(&self) -> Result<String> {
        toml::to_string_pretty(self).map_err(Error::from)
    }
}

/// Rule identity
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct RuleConfig {
    /// Rule name used in log output
    pub name: String,
}

impl Default for RuleConfig {
    fn default() -> Self {
        Self {
            name: "main_rule".to_string(),
        }
    }
}

/// Keyword list, region set and lookup failure policy
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct MatcherConfig {
    /// Substrings that mark a domain as filtered
    pub filters: Vec<String>,
    /// Country codes whose addresses are filtered
    pub regions: Vec<String>,
    /// Decision when the country lookup fails
    pub on_lookup_error: LookupFailurePolicy,
}

impl Default for MatcherConfig {
    fn default() -> Self {
        Self {
            filters: DEFAULT_FILTERS.iter().map(|s| s.to_string()).collect(),
            regions: DEFAULT_REGIONS.iter().map(|s| s.to_string()).collect(),
            on_lookup_error: LookupFailurePolicy::default(),
        }
    }
}

/// Country data that needs no external database
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct LookupConfig {
    /// Address → country code
    pub static_table: BTreeMap<String, String>,
}

impl LookupConfig {
    /// Build a lookup from the static table
    pub fn to_lookup(&self) -> StaticLookup {
        StaticLookup::from_pairs(&self.static_table)
    }
}

/// Logging configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Log level
    pub level: String,
    /// Log file path (None = stderr only)
    pub file: Option<String>,
    /// Enable JSON format logging
    pub json_format: bool,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            file: None,
            json_format: false,
        }
    }
}
