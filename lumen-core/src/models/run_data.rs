use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::section::ReportSection;
use crate::score::Score;

/// Data-quality score from the diagnostics stage.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct DataQuality {
    #[serde(default)]
    pub score: Score,
}

/// Diagnostics bundle attached to a finished run.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Diagnostics {
    #[serde(default)]
    pub data_quality: DataQuality,
}

/// The report endpoint payload for a finished (or finishing) run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BackendRunData {
    pub run_id: String,
    pub created_at: DateTime<Utc>,
    /// Overall model confidence (0–1 as documented, but normalized anyway).
    #[serde(default)]
    pub confidence_score: Score,
    #[serde(default)]
    pub sections: Vec<ReportSection>,
    #[serde(default)]
    pub diagnostics: Diagnostics,
}
