//! # lumen-core
//!
//! Foundation crate for the Lumen report layer.
//! Defines the shared models, errors, config, constants, score
//! normalization, and the safe-defaults guard.
//! Every other crate in the workspace depends on this.

pub mod config;
pub mod constants;
pub mod defaults;
pub mod errors;
pub mod models;
pub mod score;
pub mod trace;

// Re-export the most commonly used types at the crate root.
pub use config::LumenConfig;
pub use defaults::ensure_safe_report;
pub use errors::{LumenError, LumenResult};
pub use models::{
    BackendRunData, EvidenceSummary, Insight, ReportSection, RunState, RunStatus, Severity,
    StoryViewModel,
};
pub use score::Score;
