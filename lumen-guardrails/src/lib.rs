//! # lumen-guardrails
//!
//! Derives plain-language insights from pre-scored analytic artifacts,
//! then suppresses overconfident claims when the evidence is thin.
//!
//! Classification and guardrails are deliberately separate passes: every
//! classifier is a pure function of its artifact, and the guardrail pass
//! applies uniformly afterwards.

pub mod classify;
pub mod engine;
pub mod guard;

pub use engine::InsightEngine;
pub use guard::{apply_guardrails, apply_guardrails_with};
