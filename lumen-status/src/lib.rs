//! # lumen-status
//!
//! Derives the discrete pipeline-progress state machine from noisy backend
//! run-status snapshots, and owns the polling loop's timing contract.

pub mod poller;
pub mod steps;
pub mod tracker;

pub use poller::{PollEvent, StatusFetch, StatusPoller};
pub use steps::{PipelineStep, StepState, PIPELINE_STEPS};
pub use tracker::{calculate_progress, derive_step_states, ordered_states};
