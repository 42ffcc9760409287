use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Traffic-light tier for a metric card.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StatusTier {
    Success,
    Warning,
    Risk,
}

/// Sentiment classification for a story section.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Sentiment {
    Negative,
    Positive,
    Caution,
    Neutral,
}

/// One headline metric rendered as a card.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MetricCard {
    pub label: String,
    pub value: String,
    pub status: StatusTier,
    #[serde(default)]
    pub trend: Option<String>,
}

/// One body section of the story view.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StorySection {
    pub title: String,
    pub content: String,
    pub sentiment: Sentiment,
    pub section_type: String,
    /// "Why this matters" statement; omitted for neutral sections and in
    /// safe mode.
    #[serde(default)]
    pub impact: Option<String>,
    /// Evidence record backing this section, when one is linked.
    #[serde(default)]
    pub evidence_id: Option<String>,
    /// Action lines extracted from recommendation sections.
    #[serde(default)]
    pub checklist: Vec<String>,
}

/// Report-level metadata shown alongside the story.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StoryMeta {
    /// Data quality as a 0–1 ratio.
    pub data_quality: f64,
    /// Overall confidence as a 0–1 ratio.
    pub confidence: f64,
    /// Degraded display: predictive claims suppressed.
    pub safe_mode: bool,
    pub run_id: String,
    pub date: DateTime<Utc>,
}

/// The final display object consumed by rendering.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StoryViewModel {
    pub headline: String,
    pub subheadline: String,
    pub metric_cards: Vec<MetricCard>,
    pub sections: Vec<StorySection>,
    /// At most three lines; padded, never empty.
    pub executive_brief: Vec<String>,
    pub meta: StoryMeta,
}
