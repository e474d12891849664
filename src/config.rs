//! Engine configuration.
//!
//! Defaults reproduce the stock behavior: a ten-year expiry horizon, a 20%
//! LIVE rate and no delay between batch records. With the `json` feature the
//! whole set can be loaded from a document such as:
//!
//! ```json
//! {
//!   "validator": { "max_years_ahead": 10 },
//!   "batch": { "live_probability": 0.2, "record_delay_ms": 150, "seed": 7 }
//! }
//! ```

use std::time::Duration;

use crate::error::ConfigError;
use crate::expiry::DEFAULT_MAX_YEARS_AHEAD;
use crate::outcome::DEFAULT_LIVE_PROBABILITY;

/// Settings for single-record validation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct ValidatorConfig {
    /// How many years past the current one an expiry may lie.
    pub max_years_ahead: u16,
}

impl Default for ValidatorConfig {
    fn default() -> Self {
        Self {
            max_years_ahead: DEFAULT_MAX_YEARS_AHEAD,
        }
    }
}

/// Settings for batch runs.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct BatchConfig {
    /// Probability that a valid record is labelled LIVE.
    pub live_probability: f64,
    /// Pause after each record, in milliseconds. Zero only yields.
    pub record_delay_ms: u64,
    /// Fixed seed for outcome draws. `None` seeds from the OS.
    pub seed: Option<u64>,
}

impl BatchConfig {
    /// Pause after each record.
    #[inline]
    pub fn record_delay(&self) -> Duration {
        Duration::from_millis(self.record_delay_ms)
    }

    /// Checks that the values are usable.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(0.0..=1.0).contains(&self.live_probability) {
            return Err(ConfigError::LiveProbabilityOutOfRange(self.live_probability));
        }
        Ok(())
    }
}

impl Default for BatchConfig {
    fn default() -> Self {
        Self {
            live_probability: DEFAULT_LIVE_PROBABILITY,
            record_delay_ms: 0,
            seed: None,
        }
    }
}

/// Top-level configuration document.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct CheckerConfig {
    /// Single-record settings.
    pub validator: ValidatorConfig,
    /// Batch settings.
    pub batch: BatchConfig,
}

impl CheckerConfig {
    /// Parses and validates a JSON configuration document.
    ///
    /// Missing keys take their defaults.
    #[cfg(feature = "json")]
    pub fn from_json_str(input: &str) -> Result<Self, ConfigError> {
        let config: Self =
            serde_json::from_str(input).map_err(|e| ConfigError::Parse(e.to_string()))?;
        config.batch.validate()?;
        Ok(config)
    }
}
