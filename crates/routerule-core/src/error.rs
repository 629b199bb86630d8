//! Error types for routerule-core
//!
//! Centralized error handling using `thiserror` for ergonomic error definitions.

use std::net::Ipv4Addr;
use thiserror::Error;

/// Main error type for routerule-core operations
#[derive(Error, Debug)]
pub enum Error {
    /// Configuration file not found
    #[error("Configuration file not found: {path}")]
    ConfigNotFound {
        /// Path to the missing config file
        path: String,
    },

    /// Invalid configuration value
    #[error("Invalid configuration value for '{key}': {message}")]
    ConfigValue {
        /// Configuration key
        key: String,
        /// Error message
        message: String,
    },

    /// Hostname failed label/character validation
    #[error("Invalid domain '{name}': {reason}")]
    InvalidDomain {
        /// The rejected name
        name: String,
        /// Why it was rejected
        reason: String,
    },

    /// Country lookup failed for an address
    #[error("Country lookup failed for {ip}: {reason}")]
    Lookup {
        /// Address that was looked up
        ip: Ipv4Addr,
        /// Failure reason reported by the lookup
        reason: String,
    },

    /// Logging subscriber could not be installed
    #[error("Logging initialization failed: {0}")]
    Logging(String),

    /// I/O error wrapper
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// TOML parsing error
    #[error("TOML parsing error: {0}")]
    TomlParse(#[from] toml::de::Error),

    /// TOML serialization error
    #[error("TOML serialization error: {0}")]
    TomlSerialize(#[from] toml::ser::Error),
}

/// Result type alias using our Error type
pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    /// Create a config value error
    pub fn config_value(key: impl Into<String>, message: impl Into<String>) -> Self {
        Self::ConfigValue {
            key: key.into(),
            message: message.into(),
        }
    }

    /// Create a lookup error
    pub fn lookup(ip: Ipv4Addr, reason: impl Into<String>) -> Self {
        Self::Lookup {
            ip,
            reason: reason.into(),
        }
    }

    /// Create an invalid domain error
    pub fn invalid_domain(name: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidDomain {
            name: name.into(),
            reason: reason.into(),
        }
    }
}
