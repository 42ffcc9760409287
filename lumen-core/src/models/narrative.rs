use serde::{Deserialize, Serialize};

/// Situation-Complication-Question-Answer quadruple for one section.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Scqa {
    pub situation: String,
    pub complication: String,
    pub question: String,
    /// Quantitative claim when one exists; None when the section offers
    /// nothing answer-shaped.
    #[serde(default)]
    pub answer: Option<String>,
}

/// One ranked narrative module derived from a report section.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NarrativeModule {
    pub id: String,
    pub title: String,
    pub importance: f64,
    pub scqa: Scqa,
    pub excerpt: String,
    pub source_section_id: String,
}

/// The assembled narrative: one governing thought, ranked modules.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NarrativeOutline {
    /// The single headline claim elevated above all others. Never empty.
    pub governing_thought: String,
    pub primary: Vec<NarrativeModule>,
    pub appendix: Vec<NarrativeModule>,
}

/// The strongest single insight, fed in by the caller to anchor fallbacks.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct HeroInsight {
    pub key_statement: String,
    #[serde(default)]
    pub context: Option<String>,
    #[serde(default)]
    pub recommendation: Option<String>,
}
