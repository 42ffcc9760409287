//! The focus protocol: fire-and-forget broadcast of "scroll here and
//! highlight" requests.
//!
//! A request names a section and optionally the evidence record whose
//! lineage detail should open. Requests are unordered beyond "most recent
//! wins" for the highlight timer; there is no acknowledgment and no
//! back-pressure.

use std::time::{Duration, Instant};

use tokio::sync::broadcast;
use tracing::debug;

use lumen_core::constants::HIGHLIGHT_DURATION_MS;

/// A focus request targeting one section.
#[derive(Debug, Clone)]
pub struct FocusRequest {
    pub section_key: String,
    /// When present, the lineage detail for this evidence opens too.
    pub evidence_id: Option<String>,
}

/// Broadcast channel for focus requests.
///
/// Sending never blocks and never fails the caller; with no subscribers
/// the request is simply dropped, and lagged subscribers miss old
/// requests rather than erroring the sender.
pub struct FocusBus {
    tx: broadcast::Sender<FocusRequest>,
}

impl FocusBus {
    pub fn new(capacity: usize) -> Self {
        let (tx, _) = broadcast::channel(capacity);
        Self { tx }
    }

    pub fn subscribe(&self) -> broadcast::Receiver<FocusRequest> {
        self.tx.subscribe()
    }

    /// Fire a focus request.
    pub fn focus(&self, request: FocusRequest) {
        debug!(section = %request.section_key, "focus requested");
        let _ = self.tx.send(request);
    }
}

impl Default for FocusBus {
    fn default() -> Self {
        Self::new(16)
    }
}

/// The transient highlight window on the focused section.
///
/// Each trigger resets the timer; rapid repeated requests just extend the
/// window instead of queueing.
#[derive(Debug, Clone, Copy, Default)]
pub struct Highlight {
    until: Option<Instant>,
}

impl Highlight {
    /// How long the highlight lasts after the most recent trigger.
    pub const DURATION: Duration = Duration::from_millis(HIGHLIGHT_DURATION_MS);

    pub fn new() -> Self {
        Self::default()
    }

    /// Start or reset the highlight window.
    pub fn trigger(&mut self, now: Instant) {
        self.until = Some(now + Self::DURATION);
    }

    /// Whether the highlight is still showing.
    pub fn is_active(&self, now: Instant) -> bool {
        self.until.is_some_and(|until| now < until)
    }

    pub fn clear(&mut self) {
        self.until = None;
    }
}
