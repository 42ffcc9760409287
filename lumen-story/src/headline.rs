//! Headline and subheadline mining from the executive-summary section.

use lumen_core::constants::HEADLINE_MAX_CHARS;
use lumen_core::models::ReportSection;
use lumen_narrative::split_sentences;

/// Fallback when no usable first sentence exists.
pub const HEADLINE_FALLBACK: &str = "Your analysis is ready";

/// Generic label forced in when a meta-phrase leaks into the headline.
pub const HEADLINE_GENERIC: &str = "Analysis overview";

pub const SUBHEADLINE_FALLBACK: &str = "Here's what we found in your data";

/// Internal phrasing that must never surface as a user-facing headline.
pub const META_PHRASES: &[&str] = &["validation mode", "limitations"];

/// Headline, subheadline, and the remaining summary sentences (fed to the
/// executive brief).
#[derive(Debug, Clone)]
pub struct Headline {
    pub headline: String,
    pub subheadline: String,
    pub remaining: Vec<String>,
}

/// The executive-summary-like section, located by category, id, or title.
pub fn find_executive_summary(sections: &[ReportSection]) -> Option<&ReportSection> {
    sections.iter().find(|section| {
        let id = section.id.to_lowercase();
        let title = section.title.to_lowercase();
        section.section_type.eq_ignore_ascii_case("executive_summary")
            || id.contains("executive")
            || id.contains("summary")
            || title.contains("executive summary")
    })
}

/// Mine the headline pair from the sections.
pub fn derive_headline(sections: &[ReportSection]) -> Headline {
    let Some(summary) = find_executive_summary(sections) else {
        return Headline {
            headline: HEADLINE_FALLBACK.to_string(),
            subheadline: SUBHEADLINE_FALLBACK.to_string(),
            remaining: Vec::new(),
        };
    };

    let sentences = split_sentences(&summary.content);

    let mut headline = match sentences.first() {
        Some(first) if first.chars().count() < HEADLINE_MAX_CHARS => first.clone(),
        _ => HEADLINE_FALLBACK.to_string(),
    };
    let lower = headline.to_lowercase();
    if META_PHRASES.iter().any(|phrase| lower.contains(phrase)) {
        headline = HEADLINE_GENERIC.to_string();
    }

    let subheadline = sentences
        .get(1)
        .cloned()
        .unwrap_or_else(|| SUBHEADLINE_FALLBACK.to_string());

    Headline {
        headline,
        subheadline,
        remaining: sentences.into_iter().skip(2).collect(),
    }
}
