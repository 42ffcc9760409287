use serde::{Deserialize, Serialize};

/// A free-text report section as produced by the analysis backend.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReportSection {
    pub id: String,
    #[serde(default)]
    pub title: String,
    /// Backend category tag ("executive_summary", "metadata", ...).
    #[serde(rename = "type", default)]
    pub section_type: String,
    #[serde(default)]
    pub content: String,
    /// Backend-assigned importance in [0, 1], when scored.
    #[serde(default)]
    pub importance: Option<f64>,
}

impl ReportSection {
    /// Whether the section carries any displayable text.
    pub fn is_empty(&self) -> bool {
        self.content.trim().is_empty()
    }
}
