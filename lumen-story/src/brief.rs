//! The executive brief: at most three lines, always padded.

use lumen_core::constants::EXECUTIVE_BRIEF_MAX;

/// Data-quality ratio at or above this reads as ready for decisions.
const QUALITY_OK_THRESHOLD: f64 = 0.5;

/// Padding line when fewer than three entries result.
pub const EXPLORE_LINE: &str = "Explore the full report for the complete picture.";

/// System/validation phrasing filtered out of summary sentences.
const SYSTEM_PHRASES: &[&str] = &["validation", "safe mode", "system", "diagnostic"];

/// Build the executive brief from the data-quality ratio and the leftover
/// summary sentences.
///
/// Always: a status line, a data-quality percentage line, then up to two
/// summary sentences with system phrasing filtered out; padded with the
/// explore line when short. Never longer than three entries.
pub fn executive_brief(data_quality_ratio: f64, summary_sentences: &[String]) -> Vec<String> {
    let mut brief = Vec::with_capacity(EXECUTIVE_BRIEF_MAX);

    if data_quality_ratio >= QUALITY_OK_THRESHOLD {
        brief.push("Your data passed quality checks and is ready for decisions.".to_string());
    } else {
        brief.push("Data quality needs attention before acting on these results.".to_string());
    }
    brief.push(format!(
        "Data quality score: {:.0}%",
        data_quality_ratio * 100.0
    ));

    for sentence in summary_sentences
        .iter()
        .filter(|s| {
            let lower = s.to_lowercase();
            !SYSTEM_PHRASES.iter().any(|phrase| lower.contains(phrase))
        })
        .take(2)
    {
        brief.push(format!("{sentence}."));
    }

    while brief.len() < EXECUTIVE_BRIEF_MAX {
        brief.push(EXPLORE_LINE.to_string());
    }
    brief.truncate(EXECUTIVE_BRIEF_MAX);
    brief
}
