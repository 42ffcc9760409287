//! Fixed-interval run-status polling with bounded not-found retries.
//!
//! The fetch itself is an external collaborator behind [`StatusFetch`];
//! this module owns only the timing contract: poll while non-terminal,
//! stop on any terminal status, retry NotFound a bounded number of times
//! surfacing a non-fatal Connecting state, and surface any other error
//! immediately. Consumer teardown (receiver drop) cancels the loop.

use tokio::sync::mpsc;
use tokio::time::{sleep, Duration};
use tracing::{debug, error, warn};

use lumen_core::config::PollingConfig;
use lumen_core::errors::StatusError;
use lumen_core::models::RunState;

/// Fetches the current run state from the status endpoint.
pub trait StatusFetch: Send + Sync {
    async fn fetch(&self, run_id: &str) -> Result<RunState, StatusError>;
}

/// Events emitted by the polling loop.
#[derive(Debug, Clone)]
pub enum PollEvent {
    /// The run is not known to the backend yet; attempt is 1-based.
    Connecting { attempt: u32 },
    /// A non-terminal snapshot.
    Snapshot(RunState),
    /// Terminal snapshot; polling has stopped.
    Finished(RunState),
    /// Polling failed; the message is surfaced verbatim.
    Failed(String),
}

/// The polling loop.
pub struct StatusPoller {
    config: PollingConfig,
}

impl StatusPoller {
    pub fn new(config: PollingConfig) -> Self {
        Self { config }
    }

    /// Poll until a terminal status, an unrecoverable error, or consumer
    /// teardown. Each outcome is sent over `events`; a closed channel ends
    /// the loop silently.
    pub async fn run<F: StatusFetch>(
        &self,
        fetcher: &F,
        run_id: &str,
        events: mpsc::Sender<PollEvent>,
    ) {
        let mut not_found_attempts: u32 = 0;
        loop {
            match fetcher.fetch(run_id).await {
                Ok(state) => {
                    not_found_attempts = 0;
                    if state.status.is_terminal() {
                        debug!(run_id, status = %state.status, "run reached terminal status");
                        let _ = events.send(PollEvent::Finished(state)).await;
                        return;
                    }
                    if events.send(PollEvent::Snapshot(state)).await.is_err() {
                        return;
                    }
                    sleep(Duration::from_millis(self.config.interval_ms)).await;
                }
                Err(StatusError::NotFound { .. }) => {
                    not_found_attempts += 1;
                    if not_found_attempts > self.config.not_found_max_retries {
                        let err = StatusError::RetriesExhausted {
                            run_id: run_id.to_string(),
                            attempts: self.config.not_found_max_retries,
                        };
                        error!(run_id, %err, "not-found retries exhausted");
                        let _ = events.send(PollEvent::Failed(err.to_string())).await;
                        return;
                    }
                    warn!(run_id, attempt = not_found_attempts, "run not found yet");
                    if events
                        .send(PollEvent::Connecting {
                            attempt: not_found_attempts,
                        })
                        .await
                        .is_err()
                    {
                        return;
                    }
                    sleep(Duration::from_millis(self.config.not_found_retry_delay_ms)).await;
                }
                Err(err) => {
                    error!(run_id, %err, "status fetch failed");
                    let _ = events.send(PollEvent::Failed(err.to_string())).await;
                    return;
                }
            }
        }
    }
}
