//! Driver-importance classification.

use std::cmp::Ordering;

use lumen_core::models::{ArtifactSlot, FeatureImportance, Insight, Severity};

use super::usable;

/// Classify a driver-importance artifact.
///
/// The top feature outweighing the runner-up by more than 2× reads as a
/// dominant driver; anything flatter reads as distributed power.
pub fn classify(slot: &ArtifactSlot<FeatureImportance>) -> Option<Insight> {
    let artifact = usable(slot)?;
    if artifact.features.is_empty() {
        return None;
    }

    let mut ranked: Vec<_> = artifact.features.iter().collect();
    ranked.sort_by(|a, b| {
        b.importance
            .partial_cmp(&a.importance)
            .unwrap_or(Ordering::Equal)
    });

    let top = ranked[0];
    let second = ranked.get(1).map(|f| f.importance).unwrap_or(0.0);

    if top.importance > 2.0 * second {
        return Some(
            Insight::new(
                format!("{} is the dominant driver of this outcome", top.feature),
                Severity::Positive,
            )
            .with_confidence(0.8),
        );
    }

    let top_three: Vec<&str> = ranked
        .iter()
        .take(3)
        .map(|f| f.feature.as_str())
        .collect();
    Some(
        Insight::new(
            format!(
                "Power is distributed across the top three drivers: {}",
                top_three.join(", ")
            ),
            Severity::Neutral,
        )
        .with_confidence(0.6),
    )
}
