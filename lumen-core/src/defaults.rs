//! Safe-defaults guard: merges any partial or absent payload into the
//! canonical, fully-populated report shape.
//!
//! Total and idempotent. Downstream code reads the result without null
//! checks; nothing in the output is ever null.

use serde_json::{json, Map, Value};

/// Top-level fields that deep-merge instead of shallow overwrite, so a
/// partially-populated nested object cannot erase sibling defaults.
pub const DEEP_MERGE_FIELDS: &[&str] = &[
    "metrics",
    "executive_brief",
    "view_model",
    "run_context",
    "narrative_summary",
];

/// The canonical report document every payload is merged over.
pub fn canonical_report() -> Value {
    json!({
        "run_id": "",
        "created_at": "",
        "confidence_score": 0.0,
        "sections": [],
        "diagnostics": { "data_quality": { "score": 0.0 } },
        "metrics": {
            "total_records": 0,
            "total_columns": 0,
            "data_quality": 0.0,
            "confidence": 0.0
        },
        "executive_brief": [],
        "view_model": {
            "headline": "",
            "subheadline": "",
            "metric_cards": [],
            "sections": [],
            "meta": {
                "data_quality": 0.0,
                "confidence": 0.0,
                "safe_mode": false,
                "run_id": "",
                "date": ""
            },
            "traceability": {
                "evidence": {},
                "scope_index": {}
            }
        },
        "run_context": {
            "run_id": "",
            "status": "queued",
            "current_step": "",
            "steps_completed": [],
            "error": ""
        },
        "narrative_summary": {
            "governing_thought": "",
            "primary": [],
            "appendix": []
        }
    })
}

/// Merge a partial payload over the canonical defaults.
///
/// Top-level fields shallow-merge; the fields in [`DEEP_MERGE_FIELDS`]
/// deep-merge. Null values in the input are ignored so no default is ever
/// erased. Non-object input yields the canonical document unchanged.
pub fn ensure_safe_report(input: &Value) -> Value {
    let mut report = canonical_report();
    let Some(incoming) = input.as_object() else {
        return report;
    };
    if let Some(base) = report.as_object_mut() {
        merge_top_level(base, incoming);
    }
    report
}

fn merge_top_level(base: &mut Map<String, Value>, incoming: &Map<String, Value>) {
    for (key, value) in incoming {
        if value.is_null() {
            continue;
        }
        if DEEP_MERGE_FIELDS.contains(&key.as_str()) {
            if let Some(slot) = base.get_mut(key) {
                deep_merge(slot, value);
                continue;
            }
        }
        base.insert(key.clone(), value.clone());
    }
}

/// Recursive merge: objects merge per key, anything else overwrites.
fn deep_merge(base: &mut Value, overlay: &Value) {
    if let Some(incoming) = overlay.as_object() {
        if let Some(existing) = base.as_object_mut() {
            for (key, value) in incoming {
                if value.is_null() {
                    continue;
                }
                match existing.get_mut(key) {
                    Some(slot) => deep_merge(slot, value),
                    None => {
                        existing.insert(key.clone(), value.clone());
                    }
                }
            }
            return;
        }
    }
    if !overlay.is_null() {
        *base = overlay.clone();
    }
}
