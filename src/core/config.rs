//! Tracker configuration with documented constants
//!
//! The tracker has very few knobs. Both of them are collected here with an
//! explanation of how they shape inference.

use crate::core::error::{Result, TrackerError};
use crate::core::types::Tick;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Configuration for the pouch tracker
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TrackerConfig {
    /// How many ticks a speculative operation may wait for confirmation
    ///
    /// An operation issued at tick `t` stays valid up to and including tick
    /// `t + expiry_window`. The host usually answers a fill, empty or check
    /// within one or two ticks; 3 leaves a little slack for lag.
    /// Larger = late confirmations still count, but abandoned clicks linger
    /// Smaller = abandoned clicks vanish sooner, but laggy answers get dropped
    pub expiry_window: Tick,

    /// Whether the "pouch has decayed" chat notice is surfaced to the host
    pub notify_on_decay: bool,
}

impl Default for TrackerConfig {
    fn default() -> Self {
        Self {
            expiry_window: 3,
            notify_on_decay: true,
        }
    }
}

impl TrackerConfig {
    /// Create a new config with default values
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_expiry_window(mut self, window: Tick) -> Self {
        self.expiry_window = window;
        self
    }

    pub fn with_notify_on_decay(mut self, notify: bool) -> Self {
        self.notify_on_decay = notify;
        self
    }

    /// Validate configuration for internal consistency
    pub fn validate(&self) -> Result<()> {
        // A zero window expires every operation on the tick after it was issued
        if self.expiry_window == 0 {
            return Err(TrackerError::InvalidConfig(
                "expiry_window must be at least 1 tick".into(),
            ));
        }
        Ok(())
    }

    /// Parse and validate a TOML document
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let config: TrackerConfig = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Load and validate a TOML config file
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        Self::from_toml_str(&content)
    }
}
