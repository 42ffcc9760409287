use serde::{Deserialize, Serialize};

use super::defaults;

/// Run-status polling configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct PollingConfig {
    /// Interval between polls (milliseconds).
    pub interval_ms: u64,
    /// How many not-found responses to tolerate before failing.
    pub not_found_max_retries: u32,
    /// Delay between not-found retries (milliseconds).
    pub not_found_retry_delay_ms: u64,
}

impl Default for PollingConfig {
    fn default() -> Self {
        Self {
            interval_ms: defaults::POLL_INTERVAL_MS,
            not_found_max_retries: defaults::NOT_FOUND_MAX_RETRIES,
            not_found_retry_delay_ms: defaults::NOT_FOUND_RETRY_DELAY_MS,
        }
    }
}
