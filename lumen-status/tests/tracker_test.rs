//! Step-state derivation and progress scenarios.

use lumen_core::models::{RunState, RunStatus};
use lumen_status::{calculate_progress, derive_step_states, ordered_states, StepState};
use lumen_status::{PipelineStep, PIPELINE_STEPS};
use std::collections::HashSet;

fn run(
    status: RunStatus,
    current_step: &str,
    steps_completed: &[&str],
) -> RunState {
    RunState {
        run_id: "r-1".into(),
        status,
        current_step: current_step.into(),
        steps_completed: steps_completed.iter().map(|s| s.to_string()).collect(),
        error: None,
    }
}

#[test]
fn step_keys_are_unique() {
    let keys: HashSet<&str> = PIPELINE_STEPS.iter().map(|s: &PipelineStep| s.key).collect();
    assert_eq!(keys.len(), PIPELINE_STEPS.len());
}

#[test]
fn fresh_run_marks_first_step_active_via_fallback() {
    let states = derive_step_states(&run(RunStatus::Running, "", &[]));
    assert_eq!(states["ingest"], StepState::Active);
    for step in &PIPELINE_STEPS[1..] {
        assert_eq!(states[step.key], StepState::Pending);
    }
}

#[test]
fn completed_tokens_complete_their_step_and_signal_marks_active() {
    // Pinned scenario: ingestion done, schema stage partially done, the
    // interpreter is running.
    let states = derive_step_states(&run(
        RunStatus::Running,
        "interpreter",
        &["ingestion", "type_identifier", "scanner"],
    ));
    assert_eq!(states["ingest"], StepState::Completed);
    assert_eq!(states["schema"], StepState::Active);
    for step in &PIPELINE_STEPS[2..] {
        assert_eq!(states[step.key], StepState::Pending);
    }
}

#[test]
fn active_signal_is_case_insensitive_substring() {
    let states = derive_step_states(&run(
        RunStatus::Running,
        "Running Type_Identifier pass 2",
        &["ingestion"],
    ));
    assert_eq!(states["schema"], StepState::Active);
}

#[test]
fn no_signal_falls_back_to_first_pending() {
    let states = derive_step_states(&run(
        RunStatus::Running,
        "warming caches",
        &["ingestion", "type_identifier", "scanner", "interpreter"],
    ));
    assert_eq!(states["ingest"], StepState::Completed);
    assert_eq!(states["schema"], StepState::Completed);
    assert_eq!(states["quality"], StepState::Active);
}

#[test]
fn at_most_one_step_is_active() {
    // Both the quality and statistics tokens appear in the free text; only
    // the first in step order wins.
    let states = derive_step_states(&run(
        RunStatus::Running,
        "profiler and correlation running",
        &["ingestion"],
    ));
    let active: Vec<_> = states
        .values()
        .filter(|s| **s == StepState::Active)
        .collect();
    assert_eq!(active.len(), 1);
    assert_eq!(states["quality"], StepState::Active);
}

#[test]
fn progress_counts_completed_plus_half_for_active() {
    let states = derive_step_states(&run(
        RunStatus::Running,
        "interpreter",
        &["ingestion", "type_identifier", "scanner"],
    ));
    let progress = calculate_progress(&states, RunStatus::Running);
    // 1 of 8 completed plus half a share for the active step.
    assert!((progress - (12.5 + 6.25)).abs() < 1e-9);
}

#[test]
fn progress_is_monotone_as_steps_complete() {
    let mut done: Vec<&str> = Vec::new();
    let mut last = -1.0;
    let all_tokens: Vec<&str> = PIPELINE_STEPS
        .iter()
        .flat_map(|s| s.backend_tokens.iter().copied())
        .collect();
    for token in all_tokens {
        done.push(token);
        let states = derive_step_states(&run(RunStatus::Running, "", &done));
        let progress = calculate_progress(&states, RunStatus::Running);
        assert!(
            progress >= last,
            "progress regressed: {progress} < {last} after {token}"
        );
        last = progress;
    }
}

#[test]
fn terminal_success_forces_progress_to_hundred() {
    let states = derive_step_states(&run(RunStatus::Completed, "", &["ingestion"]));
    assert_eq!(calculate_progress(&states, RunStatus::Completed), 100.0);
    assert_eq!(
        calculate_progress(&states, RunStatus::CompleteWithErrors),
        100.0
    );
}

#[test]
fn failed_run_keeps_computed_progress() {
    let states = derive_step_states(&run(
        RunStatus::Failed,
        "",
        &["ingestion", "type_identifier", "scanner", "interpreter"],
    ));
    let progress = calculate_progress(&states, RunStatus::Failed);
    assert!(progress < 100.0);
    // 2 completed of 8 plus the fallback-active half share.
    assert!((progress - (25.0 + 6.25)).abs() < 1e-9);
}

#[test]
fn ordered_states_follow_display_order() {
    let states = derive_step_states(&run(RunStatus::Running, "", &[]));
    let ordered = ordered_states(&states);
    assert_eq!(ordered.len(), PIPELINE_STEPS.len());
    for (given, expected) in ordered.iter().zip(PIPELINE_STEPS.iter()) {
        assert_eq!(given.0.key, expected.key);
    }
}
