//! Metric cards: total records, data quality, confidence.

use serde_json::Value;
use tracing::warn;

use lumen_core::models::{BackendRunData, MetricCard, ReportSection, StatusTier};

/// Build the metric cards for a run.
///
/// The total-records card depends on a JSON blob embedded in a metadata
/// section; any parse failure is logged and the card silently omitted.
pub fn metric_cards(data: &BackendRunData) -> Vec<MetricCard> {
    let mut cards = Vec::with_capacity(3);

    if let Some(total) = total_records(&data.sections) {
        cards.push(MetricCard {
            label: "Records Analyzed".to_string(),
            value: total.to_string(),
            status: StatusTier::Success,
            trend: None,
        });
    }

    let quality = data.diagnostics.data_quality.score.as_percent();
    cards.push(MetricCard {
        label: "Data Quality".to_string(),
        value: format!("{quality:.0}%"),
        status: if quality > 80.0 {
            StatusTier::Success
        } else if quality > 50.0 {
            StatusTier::Warning
        } else {
            StatusTier::Risk
        },
        trend: None,
    });

    let confidence = data.confidence_score.as_percent();
    cards.push(MetricCard {
        label: "AI Confidence".to_string(),
        value: format!("{confidence:.0}%"),
        status: if confidence > 80.0 {
            StatusTier::Success
        } else {
            StatusTier::Warning
        },
        trend: None,
    });

    cards
}

/// Total record count from the metadata section's embedded JSON, if it
/// parses.
fn total_records(sections: &[ReportSection]) -> Option<u64> {
    let metadata = sections.iter().find(|section| {
        section.section_type.eq_ignore_ascii_case("metadata")
            || section.id.to_lowercase().contains("metadata")
    })?;

    let payload = strip_code_fence(&metadata.content);
    match serde_json::from_str::<Value>(payload) {
        Ok(value) => value
            .get("total_records")
            .or_else(|| value.get("row_count"))
            .and_then(Value::as_u64),
        Err(err) => {
            warn!(section_id = %metadata.id, %err, "metadata JSON did not parse; omitting records card");
            None
        }
    }
}

/// Tolerate a fenced-code wrapper around the embedded JSON.
fn strip_code_fence(content: &str) -> &str {
    let trimmed = content.trim();
    let Some(rest) = trimmed.strip_prefix("```") else {
        return trimmed;
    };
    // Skip an optional language tag on the fence line.
    let body = match rest.split_once('\n') {
        Some((_, body)) => body,
        None => rest,
    };
    body.strip_suffix("```").unwrap_or(body).trim()
}
