//! # lumen-narrative
//!
//! Rewrites raw report sections into ranked
//! Situation-Complication-Question-Answer modules and elevates one
//! governing thought above them all.

pub mod assemble;
pub mod scqa;
pub mod sentences;

pub use assemble::{assemble_narrative, assemble_narrative_with};
pub use scqa::{build_module, NarrativeOptions, COMPLICATION_KEYWORDS};
pub use sentences::{split_sentences, strip_markdown};
