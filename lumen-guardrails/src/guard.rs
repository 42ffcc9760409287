//! The uniform guardrail post-pass.
//!
//! Applied after classification, never inside it: a small backing sample
//! forces severity to neutral, and thin coverage combined with high
//! variance discounts the confidence.

use lumen_core::config::GuardrailConfig;
use lumen_core::models::{Insight, SampleProfile, Severity};
use tracing::debug;

/// Apply the guardrails with the default (pinned) thresholds.
pub fn apply_guardrails(insight: Insight, profile: &SampleProfile) -> Insight {
    apply_guardrails_with(insight, profile, &GuardrailConfig::default())
}

/// Apply the guardrails with explicit thresholds.
pub fn apply_guardrails_with(
    mut insight: Insight,
    profile: &SampleProfile,
    config: &GuardrailConfig,
) -> Insight {
    if let Some(sample_size) = profile.sample_size {
        if sample_size < config.min_sample_size && insight.severity != Severity::Neutral {
            debug!(
                sample_size,
                min = config.min_sample_size,
                "sample too small; severity capped at neutral"
            );
            insight.severity = Severity::Neutral;
        }
    }

    if let (Some(coverage), Some(variance)) = (profile.coverage, profile.variance) {
        if coverage < config.low_coverage_threshold && variance > config.high_variance_threshold {
            if let Some(confidence) = insight.confidence {
                let discounted = confidence * config.thin_evidence_confidence_factor;
                debug!(coverage, variance, confidence, discounted, "thin evidence; confidence discounted");
                insight.confidence = Some(discounted);
            }
        }
    }

    insight
}
