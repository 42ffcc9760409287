//! Tests for the safe-defaults guard: totality, deep-merge behavior,
//! and idempotence.

use lumen_core::defaults::{canonical_report, ensure_safe_report, DEEP_MERGE_FIELDS};
use proptest::prelude::*;
use serde_json::{json, Value};

#[test]
fn empty_input_yields_canonical_shape() {
    let out = ensure_safe_report(&json!({}));
    assert_eq!(out, canonical_report());
}

#[test]
fn non_object_input_yields_canonical_shape() {
    for input in [json!(null), json!(42), json!("report"), json!([1, 2])] {
        assert_eq!(ensure_safe_report(&input), canonical_report());
    }
}

#[test]
fn top_level_fields_shallow_merge() {
    let out = ensure_safe_report(&json!({ "run_id": "r-9", "confidence_score": 0.8 }));
    assert_eq!(out["run_id"], "r-9");
    assert_eq!(out["confidence_score"], 0.8);
    // Untouched siblings keep their defaults.
    assert_eq!(out["created_at"], "");
    assert_eq!(out["sections"], json!([]));
}

#[test]
fn partial_nested_object_keeps_sibling_defaults() {
    let out = ensure_safe_report(&json!({
        "view_model": { "headline": "Revenue grew 20%" }
    }));
    assert_eq!(out["view_model"]["headline"], "Revenue grew 20%");
    // Deep merge preserved the nested defaults the input omitted.
    assert_eq!(out["view_model"]["subheadline"], "");
    assert_eq!(out["view_model"]["meta"]["safe_mode"], false);
    assert_eq!(out["view_model"]["traceability"]["evidence"], json!({}));
}

#[test]
fn nested_meta_merges_two_levels_down() {
    let out = ensure_safe_report(&json!({
        "view_model": { "meta": { "confidence": 0.92 } }
    }));
    assert_eq!(out["view_model"]["meta"]["confidence"], 0.92);
    assert_eq!(out["view_model"]["meta"]["data_quality"], 0.0);
    assert_eq!(out["view_model"]["headline"], "");
}

#[test]
fn null_values_never_erase_defaults() {
    let out = ensure_safe_report(&json!({
        "run_id": null,
        "metrics": { "total_records": null, "confidence": 0.5 }
    }));
    assert_eq!(out["run_id"], "");
    assert_eq!(out["metrics"]["total_records"], 0);
    assert_eq!(out["metrics"]["confidence"], 0.5);
}

#[test]
fn no_null_anywhere_in_output() {
    fn assert_no_null(value: &Value) {
        match value {
            Value::Null => panic!("null leaked into safe report"),
            Value::Object(map) => map.values().for_each(assert_no_null),
            Value::Array(items) => items.iter().for_each(assert_no_null),
            _ => {}
        }
    }
    let out = ensure_safe_report(&json!({
        "run_context": { "error": null, "status": "running" },
        "narrative_summary": null
    }));
    assert_no_null(&out);
}

#[test]
fn second_application_is_a_noop() {
    let input = json!({
        "run_id": "r-1",
        "metrics": { "total_records": 500 },
        "view_model": { "headline": "h" }
    });
    let once = ensure_safe_report(&input);
    let twice = ensure_safe_report(&once);
    assert_eq!(once, twice);
}

#[test]
fn deep_merge_fields_cover_every_nested_default() {
    let canonical = canonical_report();
    for field in DEEP_MERGE_FIELDS {
        assert!(
            canonical.get(*field).is_some(),
            "deep-merge field {field} missing from canonical shape"
        );
    }
}

// Small JSON documents shaped like partial payloads.
fn arb_leaf() -> impl Strategy<Value = Value> {
    prop_oneof![
        Just(Value::Null),
        any::<bool>().prop_map(Value::from),
        (0..10_000i64).prop_map(Value::from),
        (0.0..1.0f64).prop_map(Value::from),
        "[a-z ]{0,12}".prop_map(Value::from),
    ]
}

fn arb_partial_report() -> impl Strategy<Value = Value> {
    let keys = prop_oneof![
        Just("run_id".to_string()),
        Just("metrics".to_string()),
        Just("view_model".to_string()),
        Just("run_context".to_string()),
        Just("extra_field".to_string()),
    ];
    let nested = prop::collection::btree_map("[a-z_]{1,8}", arb_leaf(), 0..4)
        .prop_map(|m| Value::Object(m.into_iter().collect()));
    let field = prop_oneof![arb_leaf(), nested];
    prop::collection::btree_map(keys, field, 0..5)
        .prop_map(|m| Value::Object(m.into_iter().collect()))
}

proptest! {
    #[test]
    fn ensure_safe_report_is_idempotent(input in arb_partial_report()) {
        let once = ensure_safe_report(&input);
        let twice = ensure_safe_report(&once);
        prop_assert_eq!(once, twice);
    }

    #[test]
    fn every_canonical_field_survives(input in arb_partial_report()) {
        let out = ensure_safe_report(&input);
        let canonical = canonical_report();
        for key in canonical.as_object().unwrap().keys() {
            prop_assert!(out.get(key).is_some(), "field {} missing", key);
        }
    }
}
