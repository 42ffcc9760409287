use serde::{Deserialize, Serialize};

use crate::score::Score;

/// An evidence record backing a displayed claim, keyed by id and looked up
/// by scope.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EvidenceSummary {
    pub id: String,
    #[serde(default)]
    pub title: String,
    /// Named category linking a section to the artifact backing it.
    #[serde(default)]
    pub scope: String,
    /// Confidence as the backend reports it (0–1 or 0–100).
    #[serde(default)]
    pub confidence: Score,
    #[serde(default)]
    pub data_source_id: String,
    /// Analysis method descriptor ("pearson", "isolation_forest", ...).
    #[serde(default)]
    pub method: String,
    /// Columns the artifact was computed over.
    #[serde(default)]
    pub columns: Vec<String>,
    /// Source code that produced the artifact, when captured.
    #[serde(default)]
    pub source_code: Option<String>,
    #[serde(default)]
    pub notes: Option<String>,
}

/// Lineage payload served to the "view source" affordance.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LineageDetail {
    pub method: String,
    pub columns: Vec<String>,
    pub data_source: String,
    #[serde(default)]
    pub notes: Option<String>,
    #[serde(default)]
    pub code: Option<String>,
}
