//! Per-section SCQA derivation.

use lumen_core::constants::{DEFAULT_SECTION_IMPORTANCE, EXCERPT_MAX_CHARS};
use lumen_core::models::{HeroInsight, NarrativeModule, ReportSection, Scqa};

use crate::sentences::{first_with_digit, split_sentences, strip_markdown};

/// Keywords that mark a sentence as the complication. Fixed product
/// vocabulary; matching is case-insensitive substring.
pub const COMPLICATION_KEYWORDS: &[&str] = &[
    "risk",
    "decline",
    "decrease",
    "drop",
    "spike",
    "surge",
    "gap",
    "issue",
    "warning",
    "delay",
    "missing",
    "shortfall",
    "inflation",
    "bottleneck",
    "volatile",
    "churn",
    "attrition",
    "overrun",
    "underperform",
];

/// Caller-supplied anchors for the narrative.
#[derive(Debug, Clone, Default)]
pub struct NarrativeOptions {
    pub hero_insight: Option<HeroInsight>,
    /// The business question the analysis was asked to answer.
    pub primary_question: Option<String>,
    /// What the requester said success looks like.
    pub success_criteria: Option<String>,
}

/// Build one SCQA module from a section.
///
/// `index` is the section's position in the original order; it keys the
/// alternating question templates.
pub fn build_module(
    section: &ReportSection,
    index: usize,
    options: &NarrativeOptions,
) -> NarrativeModule {
    let sentences = split_sentences(&section.content);
    let title = strip_markdown(&section.title);

    let situation = sentences
        .first()
        .cloned()
        .unwrap_or_else(|| title.clone());

    let complication = find_complication(&sentences)
        .or_else(|| sentences.get(1).cloned())
        .or_else(|| {
            options
                .hero_insight
                .as_ref()
                .and_then(|hero| hero.context.clone())
        })
        .unwrap_or_else(|| title.clone());

    let question = derive_question(&title, index, options);

    let answer = first_with_digit(&sentences)
        .or(sentences.last())
        .cloned()
        .or_else(|| {
            options
                .hero_insight
                .as_ref()
                .and_then(|hero| hero.recommendation.clone())
        });

    let excerpt = if sentences.is_empty() {
        section.content.chars().take(EXCERPT_MAX_CHARS).collect()
    } else {
        sentences
            .iter()
            .take(2)
            .cloned()
            .collect::<Vec<_>>()
            .join(". ")
    };

    NarrativeModule {
        id: format!("scqa-{}", section.id),
        title,
        importance: section.importance.unwrap_or(DEFAULT_SECTION_IMPORTANCE),
        scqa: Scqa {
            situation,
            complication,
            question,
            answer,
        },
        excerpt,
        source_section_id: section.id.clone(),
    }
}

fn find_complication(sentences: &[String]) -> Option<String> {
    sentences
        .iter()
        .find(|sentence| {
            let lower = sentence.to_lowercase();
            COMPLICATION_KEYWORDS.iter().any(|kw| lower.contains(kw))
        })
        .cloned()
}

fn derive_question(title: &str, index: usize, options: &NarrativeOptions) -> String {
    if let Some(question) = &options.primary_question {
        return format!("What does {title} tell us about: {question}");
    }
    if let Some(criteria) = &options.success_criteria {
        return format!("Does {title} move us toward {criteria}?");
    }
    // Two fixed templates, alternating by section position.
    if index % 2 == 0 {
        format!("What is driving the pattern in {title}?")
    } else {
        format!("What should we do about {title}?")
    }
}
