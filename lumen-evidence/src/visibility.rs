//! Confidence-gated visibility.

use lumen_core::config::GuardrailConfig;
use lumen_core::constants::MIN_CONFIDENCE;
use lumen_core::models::{ArtifactStatus, EvidenceSummary};
use tracing::debug;

/// Fixed explanation rendered in place of a gated section. The UI must
/// show this rather than approximate missing evidence.
pub const GATED_MESSAGE: &str =
    "This section is hidden because the supporting evidence did not meet the confidence bar.";

/// Whether an evidence-backed section may be shown.
///
/// Visible only when the artifact is available and valid and the evidence
/// confidence reaches the floor (boundary inclusive, so exactly 50 shows).
pub fn is_visible(artifact: ArtifactStatus, evidence: &EvidenceSummary) -> bool {
    is_visible_with(artifact, evidence, MIN_CONFIDENCE)
}

/// Visibility with an explicit confidence floor (percent).
pub fn is_visible_with(artifact: ArtifactStatus, evidence: &EvidenceSummary, floor: f64) -> bool {
    if !artifact.is_usable() {
        return false;
    }
    let confidence = evidence.confidence.as_percent();
    let visible = confidence >= floor;
    if !visible {
        debug!(
            evidence_id = %evidence.id,
            confidence,
            floor,
            "evidence below confidence floor; section gated"
        );
    }
    visible
}

/// Visibility using a guardrail config's floor.
pub fn is_visible_configured(
    artifact: ArtifactStatus,
    evidence: &EvidenceSummary,
    config: &GuardrailConfig,
) -> bool {
    is_visible_with(artifact, evidence, config.min_confidence)
}
