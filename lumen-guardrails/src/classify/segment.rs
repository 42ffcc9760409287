//! Segment-structure classification.

use std::cmp::Ordering;

use lumen_core::models::{ArtifactSlot, Insight, SegmentAnalysis, Severity};

use super::usable;

/// Top-three shares within this ratio of each other count as roughly even.
const EVEN_SHARE_RATIO: f64 = 1.5;

/// Classify a segment artifact.
///
/// One segment holding more than half the total is a clear anchor
/// audience; three or more roughly-even segments suggest targeting lift;
/// anything else is reported plainly.
pub fn classify(slot: &ArtifactSlot<SegmentAnalysis>) -> Option<Insight> {
    let artifact = usable(slot)?;
    if artifact.segments.is_empty() {
        return None;
    }
    let total: f64 = artifact.segments.iter().map(|s| s.size).sum();
    if total <= 0.0 {
        return None;
    }

    let mut ranked: Vec<_> = artifact.segments.iter().collect();
    ranked.sort_by(|a, b| b.size.partial_cmp(&a.size).unwrap_or(Ordering::Equal));

    let largest = ranked[0];
    let largest_share = largest.size / total;
    if largest_share > 0.5 {
        return Some(
            Insight::new(
                format!(
                    "{} is your anchor audience, covering {:.0}% of records",
                    largest.name,
                    largest_share * 100.0
                ),
                Severity::Positive,
            )
            .with_confidence(0.7),
        );
    }

    if ranked.len() >= 3 {
        let top_three: Vec<f64> = ranked.iter().take(3).map(|s| s.size / total).collect();
        let max = top_three[0];
        let min = top_three[2];
        if min > 0.0 && max / min <= EVEN_SHARE_RATIO {
            return Some(
                Insight::new(
                    format!(
                        "Records split into {} comparable segments with no single majority",
                        ranked.len()
                    ),
                    Severity::Neutral,
                )
                .with_confidence(0.6)
                .with_watch_item(
                    "Evenly sized segments often respond differently; targeted treatment may lift results",
                ),
            );
        }
    }

    Some(
        Insight::new(
            format!("{} segments identified", ranked.len()),
            Severity::Neutral,
        )
        .with_confidence(0.5),
    )
}
