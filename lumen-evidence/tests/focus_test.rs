//! Focus bus and highlight-timer behavior.

use std::time::{Duration, Instant};

use lumen_evidence::{FocusBus, FocusRequest, Highlight};

fn request(section: &str, evidence: Option<&str>) -> FocusRequest {
    FocusRequest {
        section_key: section.into(),
        evidence_id: evidence.map(String::from),
    }
}

#[tokio::test]
async fn subscribers_receive_focus_requests() {
    let bus = FocusBus::default();
    let mut rx = bus.subscribe();
    bus.focus(request("correlation", Some("ev-1")));
    let received = rx.recv().await.unwrap();
    assert_eq!(received.section_key, "correlation");
    assert_eq!(received.evidence_id.as_deref(), Some("ev-1"));
}

#[tokio::test]
async fn sending_without_subscribers_does_not_panic() {
    let bus = FocusBus::default();
    bus.focus(request("segments", None));
}

#[tokio::test]
async fn every_subscriber_sees_the_broadcast() {
    let bus = FocusBus::default();
    let mut rx1 = bus.subscribe();
    let mut rx2 = bus.subscribe();
    bus.focus(request("anomalies", None));
    assert_eq!(rx1.recv().await.unwrap().section_key, "anomalies");
    assert_eq!(rx2.recv().await.unwrap().section_key, "anomalies");
}

#[test]
fn highlight_window_expires() {
    let start = Instant::now();
    let mut highlight = Highlight::new();
    assert!(!highlight.is_active(start));

    highlight.trigger(start);
    assert!(highlight.is_active(start + Duration::from_millis(2000)));
    assert!(!highlight.is_active(start + Duration::from_millis(2300)));
}

#[test]
fn rapid_triggers_reset_the_timer() {
    let start = Instant::now();
    let mut highlight = Highlight::new();
    highlight.trigger(start);
    // A second request 2s in extends the window past the first deadline.
    highlight.trigger(start + Duration::from_millis(2000));
    assert!(highlight.is_active(start + Duration::from_millis(4000)));
    assert!(!highlight.is_active(start + Duration::from_millis(4300)));
}

#[test]
fn clear_ends_the_highlight() {
    let start = Instant::now();
    let mut highlight = Highlight::new();
    highlight.trigger(start);
    highlight.clear();
    assert!(!highlight.is_active(start));
}
