//! Logging initialization
//!
//! The library itself only emits `tracing` events. Embedders that have no
//! subscriber of their own can install one from [`LoggingConfig`].

use crate::config::LoggingConfig;
use crate::error::{Error, Result};
use std::fs::File;
use std::sync::Mutex;
use tracing::Level;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Install a global subscriber based on the logging configuration.
///
/// `RUST_LOG` directives take precedence over `config.level`. Fails if a
/// global subscriber is already set.
pub fn init(config: &LoggingConfig) -> Result<()> {
    let level: Level = config
        .level
        .parse()
        .map_err(|_| Error::config_value("logging.level", format!("Unknown level '{}'", config.level)))?;

    // Build env filter
    let env_filter = EnvFilter::builder()
        .with_default_directive(level.into())
        .from_env_lossy();

    let file = match config.file {
        Some(ref path) => Some(Mutex::new(File::create(path)?)),
        None => None,
    };

    let result = if config.json_format {
        let file_layer = file.map(|f| fmt::layer().json().with_writer(f));
        tracing_subscriber::registry()
            .with(env_filter)
            .with(fmt::layer().json().with_writer(std::io::stderr))
            .with(file_layer)
            .try_init()
    } else {
        let file_layer = file.map(|f| fmt::layer().with_ansi(false).with_writer(f));
        tracing_subscriber::registry()
            .with(env_filter)
            .with(fmt::layer().with_writer(std::io::stderr))
            .with(file_layer)
            .try_init()
    };

    result.map_err(|e| Error::Logging(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unknown_level_rejected() {
        let config = LoggingConfig {
            level: "chatty".to_string(),
            ..LoggingConfig::default()
        };
        match init(&config) {
            Err(Error::ConfigValue { key, .. }) => assert_eq!(key, "logging.level"),
            other => panic!("expected config error, got {:?}", other),
        }
    }
}
