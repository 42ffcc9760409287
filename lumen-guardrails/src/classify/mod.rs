//! One classifier per analytic category.
//!
//! Each is a pure `artifact -> Option<Insight>`; None whenever the
//! artifact is absent, unavailable, invalid, or empty. Thresholds are
//! embedded product decisions and tests pin to them.

pub mod anomaly;
pub mod correlation;
pub mod distribution;
pub mod driver;
pub mod segment;

use lumen_core::models::ArtifactSlot;

/// The payload of a usable artifact slot, or None.
pub(crate) fn usable<T>(slot: &ArtifactSlot<T>) -> Option<&T> {
    if slot.status.is_usable() {
        slot.data.as_ref()
    } else {
        None
    }
}
