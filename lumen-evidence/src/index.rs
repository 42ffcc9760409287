//! Per-payload scope index.

use std::collections::HashMap;

use lumen_core::models::{EvidenceSummary, StorySection};

/// Index evidence records by scope.
///
/// Rebuilt from scratch for every payload; holds no state across
/// snapshots. When several records share a scope, the one with the
/// lexicographically smallest id wins, so the index is deterministic.
/// Records with an empty scope are skipped.
pub fn index_by_scope(evidence: &HashMap<String, EvidenceSummary>) -> HashMap<String, String> {
    let mut ids: Vec<&String> = evidence.keys().collect();
    ids.sort();

    let mut index: HashMap<String, String> = HashMap::new();
    for id in ids {
        let record = &evidence[id];
        if record.scope.is_empty() {
            continue;
        }
        index.entry(record.scope.clone()).or_insert_with(|| id.clone());
    }
    index
}

/// Annotate story sections with the evidence record backing them.
///
/// A section's category is its scope; sections with no matching record
/// keep `evidence_id = None` and render without a "view source"
/// affordance. Already-linked sections are left alone.
pub fn link_sections(sections: &mut [StorySection], index: &HashMap<String, String>) {
    for section in sections.iter_mut() {
        if section.evidence_id.is_some() {
            continue;
        }
        section.evidence_id = index.get(&section.section_type).cloned();
    }
}
