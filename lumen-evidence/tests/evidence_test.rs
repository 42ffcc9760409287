//! Scope indexing, visibility gating, and lineage projection.

use std::collections::HashMap;

use lumen_core::models::{ArtifactStatus, EvidenceSummary, Sentiment, StorySection};
use lumen_evidence::{index_by_scope, is_visible, lineage_detail, link_sections, GATED_MESSAGE};

fn evidence(id: &str, scope: &str, confidence: f64) -> EvidenceSummary {
    EvidenceSummary {
        id: id.into(),
        title: format!("Evidence {id}"),
        scope: scope.into(),
        confidence: confidence.into(),
        data_source_id: "ds-main".into(),
        method: "pearson".into(),
        columns: vec!["revenue".into(), "churn".into()],
        source_code: Some("df.corr()".into()),
        notes: Some("pairwise complete".into()),
    }
}

fn usable() -> ArtifactStatus {
    ArtifactStatus {
        available: true,
        valid: true,
    }
}

#[test]
fn index_maps_scope_to_evidence_id() {
    let mut records = HashMap::new();
    records.insert("ev-1".to_string(), evidence("ev-1", "correlation", 70.0));
    records.insert("ev-2".to_string(), evidence("ev-2", "segments", 60.0));
    let index = index_by_scope(&records);
    assert_eq!(index["correlation"], "ev-1");
    assert_eq!(index["segments"], "ev-2");
}

#[test]
fn index_skips_empty_scope_and_is_deterministic_on_ties() {
    let mut records = HashMap::new();
    records.insert("ev-b".to_string(), evidence("ev-b", "correlation", 70.0));
    records.insert("ev-a".to_string(), evidence("ev-a", "correlation", 80.0));
    records.insert("ev-c".to_string(), evidence("ev-c", "", 90.0));
    let index = index_by_scope(&records);
    assert_eq!(index.len(), 1);
    assert_eq!(index["correlation"], "ev-a");
}

#[test]
fn link_sections_annotates_by_category_and_respects_existing_links() {
    let mut records = HashMap::new();
    records.insert("ev-1".to_string(), evidence("ev-1", "correlation", 70.0));
    let index = index_by_scope(&records);

    let story_section = |section_type: &str, evidence_id: Option<&str>| StorySection {
        title: "Findings".to_string(),
        content: "Revenue and churn move together.".to_string(),
        sentiment: Sentiment::Neutral,
        section_type: section_type.to_string(),
        impact: None,
        evidence_id: evidence_id.map(str::to_string),
        checklist: Vec::new(),
    };

    let mut sections = vec![
        story_section("correlation", None),
        story_section("segments", None),
        story_section("correlation", Some("ev-9")),
    ];
    link_sections(&mut sections, &index);

    assert_eq!(sections[0].evidence_id.as_deref(), Some("ev-1"));
    assert_eq!(sections[1].evidence_id, None);
    assert_eq!(sections[2].evidence_id.as_deref(), Some("ev-9"));
}

#[test]
fn confidence_floor_is_boundary_inclusive() {
    assert!(!is_visible(usable(), &evidence("ev-1", "s", 49.0)));
    assert!(is_visible(usable(), &evidence("ev-1", "s", 50.0)));
}

#[test]
fn ratio_scaled_confidence_is_normalized_before_gating() {
    // 0.49 and 0.50 are ratios, not percentages.
    assert!(!is_visible(usable(), &evidence("ev-1", "s", 0.49)));
    assert!(is_visible(usable(), &evidence("ev-1", "s", 0.50)));
}

#[test]
fn unavailable_or_invalid_artifact_hides_regardless_of_confidence() {
    let high = evidence("ev-1", "s", 99.0);
    let unavailable = ArtifactStatus {
        available: false,
        valid: true,
    };
    let invalid = ArtifactStatus {
        available: true,
        valid: false,
    };
    assert!(!is_visible(unavailable, &high));
    assert!(!is_visible(invalid, &high));
}

#[test]
fn gated_message_is_nonempty_and_fixed() {
    assert!(GATED_MESSAGE.contains("confidence"));
}

#[test]
fn lineage_projects_all_source_descriptors() {
    let detail = lineage_detail(&evidence("ev-1", "correlation", 70.0));
    assert_eq!(detail.method, "pearson");
    assert_eq!(detail.data_source, "ds-main");
    assert_eq!(detail.columns, vec!["revenue", "churn"]);
    assert_eq!(detail.code.as_deref(), Some("df.corr()"));
    assert_eq!(detail.notes.as_deref(), Some("pairwise complete"));
}
