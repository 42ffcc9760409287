//! Step-state derivation and progress calculation.
//!
//! Pure functions over the latest run snapshot; re-derived on every poll.

use std::collections::{HashMap, HashSet};

use lumen_core::models::{RunState, RunStatus};

use crate::steps::{PipelineStep, StepState, PIPELINE_STEPS};

/// Derive per-step states from a run snapshot.
///
/// First pass, in fixed step order: a step whose backend tokens are all in
/// `steps_completed` is Completed; otherwise the first step with a token
/// case-insensitively contained in `current_step` becomes Active; the rest
/// are Pending. Second pass: if no signal marked a step Active, the first
/// Pending step in order becomes Active, so a live run is never shown as
/// all-pending. At most one step ends up Active.
pub fn derive_step_states(state: &RunState) -> HashMap<&'static str, StepState> {
    let current = state.current_step.to_ascii_lowercase();
    let completed: HashSet<String> = state
        .steps_completed
        .iter()
        .map(|t| t.to_ascii_lowercase())
        .collect();

    let mut states: HashMap<&'static str, StepState> =
        HashMap::with_capacity(PIPELINE_STEPS.len());
    let mut active_assigned = false;

    for step in &PIPELINE_STEPS {
        let all_completed = step
            .backend_tokens
            .iter()
            .all(|token| completed.contains(*token));
        if all_completed {
            states.insert(step.key, StepState::Completed);
            continue;
        }
        let active_signal = step.backend_tokens.iter().any(|t| current.contains(t));
        if active_signal && !active_assigned {
            states.insert(step.key, StepState::Active);
            active_assigned = true;
        } else {
            states.insert(step.key, StepState::Pending);
        }
    }

    // Fallback: the first pending step becomes active.
    if !active_assigned {
        for step in &PIPELINE_STEPS {
            if states.get(step.key) == Some(&StepState::Pending) {
                states.insert(step.key, StepState::Active);
                break;
            }
        }
    }

    tracing::debug!(
        run_id = %state.run_id,
        completed = states.values().filter(|s| **s == StepState::Completed).count(),
        "derived step states"
    );

    states
}

/// Progress percentage in [0, 100].
///
/// Completed steps contribute their full share; an active step contributes
/// half a share. Terminal success is forced to exactly 100 regardless of
/// `steps_completed`; a failed run keeps its computed value so the failure
/// point stays visible.
pub fn calculate_progress(states: &HashMap<&'static str, StepState>, status: RunStatus) -> f64 {
    if status.is_success() {
        return 100.0;
    }
    let total = PIPELINE_STEPS.len() as f64;
    let completed = states
        .values()
        .filter(|s| **s == StepState::Completed)
        .count() as f64;
    let any_active = states.values().any(|s| *s == StepState::Active);

    let mut progress = (completed / total) * 100.0;
    if any_active {
        progress += (0.5 / total) * 100.0;
    }
    progress.min(100.0)
}

/// Step states in display order, for rendering.
pub fn ordered_states(
    states: &HashMap<&'static str, StepState>,
) -> Vec<(&'static PipelineStep, StepState)> {
    PIPELINE_STEPS
        .iter()
        .map(|step| {
            let state = states
                .get(step.key)
                .copied()
                .unwrap_or(StepState::Pending);
            (step, state)
        })
        .collect()
}
