use serde::{Deserialize, Serialize};

use super::defaults;

/// Statistical guardrail thresholds.
///
/// These are embedded product decisions; tests pin to the defaults.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct GuardrailConfig {
    /// Minimum backing sample size before severity may stay non-neutral.
    pub min_sample_size: u64,
    /// Coverage below this counts as thin evidence.
    pub low_coverage_threshold: f64,
    /// Variance above this counts as unstable evidence.
    pub high_variance_threshold: f64,
    /// Confidence multiplier under thin evidence.
    pub thin_evidence_confidence_factor: f64,
    /// Evidence confidence floor (percent) for visibility.
    pub min_confidence: f64,
}

impl Default for GuardrailConfig {
    fn default() -> Self {
        Self {
            min_sample_size: defaults::MIN_SAMPLE_SIZE,
            low_coverage_threshold: defaults::LOW_COVERAGE_THRESHOLD,
            high_variance_threshold: defaults::HIGH_VARIANCE_THRESHOLD,
            thin_evidence_confidence_factor: defaults::THIN_EVIDENCE_CONFIDENCE_FACTOR,
            min_confidence: defaults::MIN_CONFIDENCE,
        }
    }
}
