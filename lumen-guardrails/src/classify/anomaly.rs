//! Anomaly classification over raw scanned values.

use lumen_core::models::{AnomalyScan, ArtifactSlot, Insight, Severity};

use super::usable;

/// Minimum points for an anomaly verdict to mean anything.
const MIN_POINTS: usize = 10;

/// Outlier fraction above this is flagged.
const OUTLIER_FRACTION_THRESHOLD: f64 = 0.05;

/// Classify an anomaly scan.
///
/// Needs at least 10 points. Zero values beyond 3σ is a clean bill; an
/// outlier fraction above 5% is flagged; a small tail is reported
/// neutrally.
pub fn classify(slot: &ArtifactSlot<AnomalyScan>) -> Option<Insight> {
    let scan = usable(slot)?;
    let n = scan.values.len();
    if n < MIN_POINTS {
        return None;
    }

    let mean = scan.values.iter().sum::<f64>() / n as f64;
    let variance = scan
        .values
        .iter()
        .map(|v| (v - mean).powi(2))
        .sum::<f64>()
        / n as f64;
    let std_dev = variance.sqrt();

    let outliers = scan
        .values
        .iter()
        .filter(|v| (**v - mean).abs() > 3.0 * std_dev)
        .count();

    if outliers == 0 {
        return Some(
            Insight::new(
                "No extreme outliers detected; the data looks stable",
                Severity::Positive,
            )
            .with_confidence(0.75),
        );
    }

    let fraction = outliers as f64 / n as f64;
    if fraction > OUTLIER_FRACTION_THRESHOLD {
        return Some(
            Insight::new(
                format!(
                    "{:.1}% of values are extreme outliers; investigate before trusting aggregates",
                    fraction * 100.0
                ),
                Severity::Warning,
            )
            .with_confidence(0.7),
        );
    }

    Some(
        Insight::new(
            format!("{outliers} isolated outliers found in {n} values"),
            Severity::Neutral,
        )
        .with_confidence(0.6),
    )
}
