//! Named routing rule
//!
//! A [`Rule`] wraps a [`DomainMatcher`] with a name and an input guard:
//! targets that are neither hostnames nor IPv4 literals are never filtered.

use crate::config::Config;
use crate::error::Result;
use crate::lookup::CountryLookup;
use crate::matcher::{DomainMatcher, Verdict};
use crate::validate::is_valid_target;
use std::sync::Arc;
use tracing::{debug, info};

/// Named, validated rule
#[derive(Debug, Clone)]
pub struct Rule {
    name: String,
    matcher: DomainMatcher,
}

impl Rule {
    /// Create a rule from a matcher
    pub fn new(name: impl Into<String>, matcher: DomainMatcher) -> Self {
        Self {
            name: name.into(),
            matcher,
        }
    }

    /// Create from configuration.
    ///
    /// `lookup` is used for IPv4 targets; pass
    /// `Arc::new(config.lookup.to_lookup())` to use the static table.
    pub fn from_config(config: &Config, lookup: Arc<dyn CountryLookup>) -> Result<Self> {
        config.validate()?;

        let matcher = DomainMatcher::from_config(&config.matcher, lookup);
        info!(
            "Rule {} loaded: {} keywords, {} regions",
            config.rule.name,
            matcher.filters().len(),
            matcher.regions().len()
        );

        Ok(Self::new(config.rule.name.clone(), matcher))
    }

    /// Rule name
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Underlying matcher
    pub fn matcher(&self) -> &DomainMatcher {
        &self.matcher
    }

    /// Check if a target should be filtered
    pub fn match_domain(&self, input: &str) -> bool {
        self.evaluate(input).filtered
    }

    /// Evaluate a target with its reason
    pub fn evaluate(&self, input: &str) -> Verdict {
        if !is_valid_target(input) {
            debug!("[{}] domain not valid: {:?}", self.name, input);
            return Verdict::invalid_target();
        }

        let verdict = self.matcher.evaluate(input);
        debug!("[{}] {} {}", self.name, input, verdict);
        verdict
    }
}
