//! Configuration management and validation.
//!
//! Provides the store configuration with defaults, builder-style overrides
//! and an environment layer applied on top of the defaults.

use crate::constants::{DEFAULT_CAPACITY, DEFAULT_HALT_KEYWORD, ENV_CAPACITY, ENV_HALT_KEYWORD};
use crate::error::{Result, StoreError};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Configuration for a record store
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StoreConfig {
    /// Maximum number of records the store may hold (0 is legal)
    pub capacity: usize,

    /// Content substring that aborts processing of remainder-1 records
    pub halt_keyword: String,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            capacity: DEFAULT_CAPACITY,
            halt_keyword: DEFAULT_HALT_KEYWORD.to_string(),
        }
    }
}

impl StoreConfig {
    /// Create configuration with custom capacity
    pub fn with_capacity(mut self, capacity: usize) -> Self {
        self.capacity = capacity;
        self
    }

    /// Create configuration with a custom halt keyword
    pub fn with_halt_keyword(mut self, keyword: impl Into<String>) -> Self {
        self.halt_keyword = keyword.into();
        self
    }

    /// Load defaults overlaid with `RECORD_STORE_*` environment variables
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load defaults overlaid with values from an arbitrary key lookup
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(raw) = lookup(ENV_CAPACITY) {
            config.capacity = raw.trim().parse().map_err(|e| {
                StoreError::configuration(format!(
                    "{} must be a non-negative integer, got '{}': {}",
                    ENV_CAPACITY, raw, e
                ))
            })?;
            debug!("Capacity overridden from environment: {}", config.capacity);
        }

        if let Some(keyword) = lookup(ENV_HALT_KEYWORD) {
            config.halt_keyword = keyword;
            debug!(
                "Halt keyword overridden from environment: {:?}",
                config.halt_keyword
            );
        }

        config.validate()?;
        Ok(config)
    }

    /// Check the configuration for values the store cannot work with
    pub fn validate(&self) -> Result<()> {
        // An empty keyword would match every remainder-1 record.
        if self.halt_keyword.is_empty() {
            return Err(StoreError::configuration("halt keyword must not be empty"));
        }
        Ok(())
    }
}
