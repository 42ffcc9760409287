/// Errors at the run-status polling boundary.
#[derive(Debug, thiserror::Error)]
pub enum StatusError {
    /// The run is not known to the backend yet. Retried a bounded number
    /// of times before surfacing.
    #[error("run {run_id} not found")]
    NotFound { run_id: String },

    /// Retry budget for not-found responses exhausted.
    #[error("run {run_id} still not found after {attempts} attempts")]
    RetriesExhausted { run_id: String, attempts: u32 },

    /// Any other backend failure. Surfaced immediately, no retry.
    #[error("status fetch failed: {message}")]
    Fetch { message: String },
}
