use serde::{Deserialize, Serialize};

/// How strongly an insight should be flagged in the UI.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Positive,
    Neutral,
    Warning,
    Risk,
}

/// A plain-language insight derived from one analytic artifact.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Insight {
    pub text: String,
    pub severity: Severity,
    /// Confidence ratio in [0, 1], when the classifier can estimate one.
    #[serde(default)]
    pub confidence: Option<f64>,
    /// A secondary observation worth monitoring, not strong enough to
    /// change the severity.
    #[serde(default)]
    pub watch_item: Option<String>,
}

impl Insight {
    pub fn new(text: impl Into<String>, severity: Severity) -> Self {
        Self {
            text: text.into(),
            severity,
            confidence: None,
            watch_item: None,
        }
    }

    pub fn with_confidence(mut self, confidence: f64) -> Self {
        self.confidence = Some(confidence);
        self
    }

    pub fn with_watch_item(mut self, watch_item: impl Into<String>) -> Self {
        self.watch_item = Some(watch_item.into());
        self
    }
}
