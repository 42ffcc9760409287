//! # lumen-evidence
//!
//! Decides which evidence-backed sections may be shown, serves lineage
//! detail for "view source" affordances, and broadcasts focus requests.
//!
//! The governor never fabricates missing evidence: a section that fails
//! the gate renders a fixed placeholder instead.

pub mod focus;
pub mod index;
pub mod lineage;
pub mod visibility;

pub use focus::{FocusBus, FocusRequest, Highlight};
pub use index::{index_by_scope, link_sections};
pub use lineage::lineage_detail;
pub use visibility::{is_visible, GATED_MESSAGE};
