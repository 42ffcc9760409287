//! Workspace configuration.
//!
//! Every knob defaults to the pinned product constants; a TOML file can
//! override the timing knobs, but the statistical thresholds are product
//! decisions and stay put unless explicitly reconfigured.

mod guardrail_config;
mod narrative_config;
mod polling_config;

pub use guardrail_config::GuardrailConfig;
pub use narrative_config::NarrativeConfig;
pub use polling_config::PollingConfig;

use serde::{Deserialize, Serialize};

use crate::errors::ConfigError;

/// Default values shared between config structs and constants.
pub mod defaults {
    pub use crate::constants::*;
}

/// Top-level Lumen configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct LumenConfig {
    pub polling: PollingConfig,
    pub guardrails: GuardrailConfig,
    pub narrative: NarrativeConfig,
}

impl LumenConfig {
    /// Parse a config from TOML text. Missing tables and fields fall back
    /// to the defaults.
    pub fn from_toml_str(text: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if self.polling.interval_ms == 0 {
            return Err(ConfigError::InvalidValue {
                field: "polling.interval_ms".into(),
                reason: "must be positive".into(),
            });
        }
        if !(0.0..=1.0).contains(&self.guardrails.low_coverage_threshold) {
            return Err(ConfigError::InvalidValue {
                field: "guardrails.low_coverage_threshold".into(),
                reason: "must be within [0, 1]".into(),
            });
        }
        if !(0.0..=1.0).contains(&self.narrative.primary_importance_cutoff) {
            return Err(ConfigError::InvalidValue {
                field: "narrative.primary_importance_cutoff".into(),
                reason: "must be within [0, 1]".into(),
            });
        }
        Ok(())
    }
}
