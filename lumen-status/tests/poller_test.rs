//! Polling-loop timing contract: terminal stop, bounded not-found retries,
//! immediate surfacing of other errors, teardown cancellation.

use std::collections::VecDeque;
use std::sync::Mutex;

use tokio::sync::mpsc;

use lumen_core::config::PollingConfig;
use lumen_core::errors::StatusError;
use lumen_core::models::{RunState, RunStatus};
use lumen_status::{PollEvent, StatusFetch, StatusPoller};

/// Replays a scripted sequence of fetch outcomes.
struct ScriptedFetch {
    script: Mutex<VecDeque<Result<RunState, StatusError>>>,
}

impl ScriptedFetch {
    fn new(script: Vec<Result<RunState, StatusError>>) -> Self {
        Self {
            script: Mutex::new(script.into()),
        }
    }
}

impl StatusFetch for ScriptedFetch {
    async fn fetch(&self, run_id: &str) -> Result<RunState, StatusError> {
        self.script
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or(Err(StatusError::NotFound {
                run_id: run_id.to_string(),
            }))
    }
}

fn snapshot(status: RunStatus) -> RunState {
    RunState {
        run_id: "r-1".into(),
        status,
        current_step: String::new(),
        steps_completed: vec![],
        error: None,
    }
}

fn fast_config() -> PollingConfig {
    PollingConfig {
        interval_ms: 1,
        not_found_max_retries: 2,
        not_found_retry_delay_ms: 1,
    }
}

async fn collect(fetcher: ScriptedFetch) -> Vec<PollEvent> {
    let (tx, mut rx) = mpsc::channel(16);
    StatusPoller::new(fast_config()).run(&fetcher, "r-1", tx).await;
    let mut events = Vec::new();
    while let Ok(event) = rx.try_recv() {
        events.push(event);
    }
    events
}

#[tokio::test]
async fn stops_on_terminal_status() {
    let events = collect(ScriptedFetch::new(vec![
        Ok(snapshot(RunStatus::Running)),
        Ok(snapshot(RunStatus::Completed)),
    ]))
    .await;
    assert_eq!(events.len(), 2);
    assert!(matches!(&events[0], PollEvent::Snapshot(s) if s.status == RunStatus::Running));
    assert!(matches!(&events[1], PollEvent::Finished(s) if s.status == RunStatus::Completed));
}

#[tokio::test]
async fn not_found_retries_then_connects() {
    let events = collect(ScriptedFetch::new(vec![
        Err(StatusError::NotFound { run_id: "r-1".into() }),
        Err(StatusError::NotFound { run_id: "r-1".into() }),
        Ok(snapshot(RunStatus::Completed)),
    ]))
    .await;
    assert!(matches!(events[0], PollEvent::Connecting { attempt: 1 }));
    assert!(matches!(events[1], PollEvent::Connecting { attempt: 2 }));
    assert!(matches!(&events[2], PollEvent::Finished(_)));
}

#[tokio::test]
async fn not_found_budget_exhaustion_fails() {
    let events = collect(ScriptedFetch::new(vec![
        Err(StatusError::NotFound { run_id: "r-1".into() }),
        Err(StatusError::NotFound { run_id: "r-1".into() }),
        Err(StatusError::NotFound { run_id: "r-1".into() }),
    ]))
    .await;
    assert_eq!(events.len(), 3);
    assert!(matches!(events[0], PollEvent::Connecting { .. }));
    assert!(matches!(events[1], PollEvent::Connecting { .. }));
    match &events[2] {
        PollEvent::Failed(message) => assert!(message.contains("not found")),
        other => panic!("expected Failed, got {other:?}"),
    }
}

#[tokio::test]
async fn other_errors_surface_immediately_without_retry() {
    let events = collect(ScriptedFetch::new(vec![
        Err(StatusError::Fetch {
            message: "503 upstream".into(),
        }),
        Ok(snapshot(RunStatus::Completed)),
    ]))
    .await;
    // The loop stopped at the first error; the scripted success was never
    // fetched.
    assert_eq!(events.len(), 1);
    match &events[0] {
        PollEvent::Failed(message) => assert!(message.contains("503 upstream")),
        other => panic!("expected Failed, got {other:?}"),
    }
}

#[tokio::test]
async fn snapshot_resets_the_not_found_budget() {
    let events = collect(ScriptedFetch::new(vec![
        Err(StatusError::NotFound { run_id: "r-1".into() }),
        Err(StatusError::NotFound { run_id: "r-1".into() }),
        Ok(snapshot(RunStatus::Running)),
        Err(StatusError::NotFound { run_id: "r-1".into() }),
        Err(StatusError::NotFound { run_id: "r-1".into() }),
        Ok(snapshot(RunStatus::Completed)),
    ]))
    .await;
    let connecting = events
        .iter()
        .filter(|e| matches!(e, PollEvent::Connecting { .. }))
        .count();
    assert_eq!(connecting, 4);
    assert!(matches!(events.last(), Some(PollEvent::Finished(_))));
}

#[tokio::test]
async fn receiver_drop_cancels_the_loop() {
    let fetcher = ScriptedFetch::new(vec![
        Ok(snapshot(RunStatus::Running)),
        Ok(snapshot(RunStatus::Running)),
    ]);
    let (tx, rx) = mpsc::channel(16);
    drop(rx);
    // Returns promptly instead of looping on a closed channel.
    StatusPoller::new(fast_config()).run(&fetcher, "r-1", tx).await;
}
