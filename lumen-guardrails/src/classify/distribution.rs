//! Distribution-shape classification.

use lumen_core::models::{ArtifactSlot, DistributionStats, Insight, Severity};

use super::usable;

/// Classify a distribution summary.
///
/// Coefficient of variation above 1.0 flags high dispersion; a
/// mean/median gap above half a standard deviation gets a skew watch-item;
/// otherwise the distribution reads as approximately normal.
///
/// Divisions follow IEEE semantics on purpose: a zero mean with nonzero
/// spread yields an infinite cv (flagged), and a zero std with zero gap
/// yields NaN, which fails every comparison and lands on "approximately
/// normal".
pub fn classify(slot: &ArtifactSlot<DistributionStats>) -> Option<Insight> {
    let stats = usable(slot)?;

    let cv = stats.std_dev / stats.mean.abs();
    if cv > 1.0 {
        return Some(
            Insight::new(
                format!(
                    "Values are highly dispersed (cv = {:.2}); averages alone will mislead",
                    cv
                ),
                Severity::Warning,
            )
            .with_confidence(0.65),
        );
    }

    let skew = (stats.mean - stats.median).abs() / stats.std_dev;
    if skew > 0.5 {
        return Some(
            Insight::new(
                "The distribution is close to normal but leans to one side",
                Severity::Neutral,
            )
            .with_confidence(0.65)
            .with_watch_item(format!(
                "Mean and median differ by {:.2} standard deviations; check for a skewed tail",
                skew
            )),
        );
    }

    Some(
        Insight::new(
            "Values are approximately normally distributed",
            Severity::Neutral,
        )
        .with_confidence(0.65),
    )
}
