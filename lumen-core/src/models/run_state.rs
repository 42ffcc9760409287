use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;

/// Discrete run status derived from the backend's status string.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum RunStatus {
    Queued,
    Running,
    Completed,
    CompleteWithErrors,
    Failed,
}

impl RunStatus {
    /// Map a raw backend status string to a discrete status.
    ///
    /// The backend is eventually consistent and its status vocabulary has
    /// drifted over time, so matching is case-insensitive with known
    /// aliases. An unrecognized string maps to `Queued`, treated as
    /// "not started yet" rather than an error.
    pub fn from_raw(raw: &str) -> Self {
        match raw.trim().to_ascii_lowercase().as_str() {
            "queued" | "pending" => Self::Queued,
            "running" | "processing" | "in_progress" => Self::Running,
            "completed" | "complete" | "success" => Self::Completed,
            "complete_with_errors" | "completed_with_errors" => Self::CompleteWithErrors,
            "failed" | "error" => Self::Failed,
            _ => Self::Queued,
        }
    }

    /// Whether polling should stop.
    pub fn is_terminal(self) -> bool {
        matches!(
            self,
            Self::Completed | Self::CompleteWithErrors | Self::Failed
        )
    }

    /// Terminal success, including completion with partial errors.
    pub fn is_success(self) -> bool {
        matches!(self, Self::Completed | Self::CompleteWithErrors)
    }
}

impl<'de> Deserialize<'de> for RunStatus {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        Ok(Self::from_raw(&raw))
    }
}

impl fmt::Display for RunStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::Queued => "queued",
            Self::Running => "running",
            Self::Completed => "completed",
            Self::CompleteWithErrors => "complete_with_errors",
            Self::Failed => "failed",
        };
        write!(f, "{s}")
    }
}

/// Snapshot of a run as reported by the polled status endpoint.
///
/// Read-only: re-derived on every poll, never written back.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RunState {
    pub run_id: String,
    pub status: RunStatus,
    /// Free-text description of the step the backend is currently on.
    #[serde(default)]
    pub current_step: String,
    /// Backend step tokens reported as finished.
    #[serde(default)]
    pub steps_completed: Vec<String>,
    /// Verbatim backend error text, surfaced without interpretation.
    #[serde(default)]
    pub error: Option<String>,
}
