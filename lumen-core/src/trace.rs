//! Tracing setup and span definitions per subsystem: status, guardrails,
//! evidence, narrative, story.

use tracing_subscriber::{fmt, EnvFilter};

/// Initialize the global tracing subscriber.
///
/// Honors `RUST_LOG`; defaults to `info` for the lumen crates. Safe to call
/// more than once; later calls are ignored.
pub fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("lumen=info"));
    let _ = fmt().with_env_filter(filter).try_init();
}

/// Create a status-derivation span.
#[macro_export]
macro_rules! status_span {
    ($run_id:expr) => {
        tracing::info_span!("lumen.status", run_id = %$run_id)
    };
}

/// Create a guardrail classification span.
#[macro_export]
macro_rules! guardrail_span {
    ($category:expr) => {
        tracing::info_span!("lumen.guardrails", category = %$category)
    };
}

/// Create an evidence-governance span.
#[macro_export]
macro_rules! evidence_span {
    ($scope:expr) => {
        tracing::info_span!("lumen.evidence", scope = %$scope)
    };
}

/// Create a narrative-assembly span.
#[macro_export]
macro_rules! narrative_span {
    ($section_count:expr) => {
        tracing::info_span!("lumen.narrative", section_count = $section_count)
    };
}

/// Create a story-transform span.
#[macro_export]
macro_rules! story_span {
    ($run_id:expr) => {
        tracing::info_span!("lumen.story", run_id = %$run_id)
    };
}

/// Span names as constants for programmatic use.
pub mod names {
    pub const STATUS: &str = "lumen.status";
    pub const GUARDRAILS: &str = "lumen.guardrails";
    pub const EVIDENCE: &str = "lumen.evidence";
    pub const NARRATIVE: &str = "lumen.narrative";
    pub const STORY: &str = "lumen.story";
}
