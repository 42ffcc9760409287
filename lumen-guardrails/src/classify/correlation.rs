//! Correlation classification.

use std::cmp::Ordering;

use lumen_core::models::{ArtifactSlot, CorrelationAnalysis, Insight, Severity};

use super::usable;

/// Classify a correlation artifact by its strongest |r|.
///
/// |r| > 0.8 flags possible redundancy between the pair; |r| > 0.5 is a
/// moderate relationship; otherwise only the aggregate count is reported.
pub fn classify(slot: &ArtifactSlot<CorrelationAnalysis>) -> Option<Insight> {
    let artifact = usable(slot)?;
    if artifact.pairs.is_empty() {
        return None;
    }

    let strongest = artifact
        .pairs
        .iter()
        .max_by(|x, y| {
            x.r.abs()
                .partial_cmp(&y.r.abs())
                .unwrap_or(Ordering::Equal)
        })?;

    if strongest.r.abs() > 0.8 {
        return Some(
            Insight::new(
                format!(
                    "{} and {} move together almost identically (r = {:.2}); one may be redundant",
                    strongest.a, strongest.b, strongest.r
                ),
                Severity::Warning,
            )
            .with_confidence(0.7),
        );
    }
    if strongest.r.abs() > 0.5 {
        return Some(
            Insight::new(
                format!(
                    "{} and {} show a moderate relationship (r = {:.2})",
                    strongest.a, strongest.b, strongest.r
                ),
                Severity::Neutral,
            )
            .with_confidence(0.6),
        );
    }
    Some(
        Insight::new(
            format!(
                "{} variable pairs examined; no strong relationships found",
                artifact.pairs.len()
            ),
            Severity::Neutral,
        )
        .with_confidence(0.5),
    )
}
