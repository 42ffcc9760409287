//! Lineage projection for the "view source" affordance.

use lumen_core::models::{EvidenceSummary, LineageDetail};

/// Project an evidence record into the lineage payload the detail panel
/// renders.
pub fn lineage_detail(evidence: &EvidenceSummary) -> LineageDetail {
    LineageDetail {
        method: evidence.method.clone(),
        columns: evidence.columns.clone(),
        data_source: evidence.data_source_id.clone(),
        notes: evidence.notes.clone(),
        code: evidence.source_code.clone(),
    }
}
