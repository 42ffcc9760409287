//! First-match sentiment classification.
//!
//! Keyword priority is fixed: negative beats positive beats caution;
//! anything unmatched is neutral.

use lumen_core::models::Sentiment;

pub const NEGATIVE_KEYWORDS: &[&str] = &["risk", "decline", "drop", "issue"];
pub const POSITIVE_KEYWORDS: &[&str] = &["growth", "improvement", "success", "gain"];
pub const CAUTION_KEYWORDS: &[&str] = &["caution", "monitor", "audit"];

/// Classify text by the first keyword group that matches.
pub fn classify(text: &str) -> Sentiment {
    let lower = text.to_lowercase();
    if NEGATIVE_KEYWORDS.iter().any(|kw| lower.contains(kw)) {
        return Sentiment::Negative;
    }
    if POSITIVE_KEYWORDS.iter().any(|kw| lower.contains(kw)) {
        return Sentiment::Positive;
    }
    if CAUTION_KEYWORDS.iter().any(|kw| lower.contains(kw)) {
        return Sentiment::Caution;
    }
    Sentiment::Neutral
}
