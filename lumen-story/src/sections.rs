//! Body section construction: jargon translation, sentiment, impact
//! statements, and recommendation checklists.

use std::sync::OnceLock;

use regex::Regex;

use lumen_core::models::{ReportSection, Sentiment, StorySection};

use crate::{jargon, sentiment};

/// Section categories that never render as story body sections.
const EXCLUDED_TYPES: &[&str] = &["metadata", "diagnostics", "executive_summary"];

fn checklist_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"(?m)^\s*(?:\d+[.)]|[-*•])\s*(.+)$").expect("valid checklist regex"))
}

/// Build the story body sections.
///
/// The executive summary is consumed by the headline, not the body; the
/// original section is re-inserted verbatim at the front so nothing the
/// backend wrote is lost.
pub fn story_sections(sections: &[ReportSection], safe_mode: bool) -> Vec<StorySection> {
    let mut out = Vec::new();

    for section in sections {
        if is_excluded(section) || section.is_empty() {
            continue;
        }
        out.push(build_section(section, safe_mode));
    }

    if let Some(summary) = crate::headline::find_executive_summary(sections) {
        out.insert(
            0,
            StorySection {
                title: summary.title.clone(),
                content: summary.content.clone(),
                sentiment: Sentiment::Neutral,
                section_type: summary.section_type.clone(),
                impact: None,
                evidence_id: None,
                checklist: Vec::new(),
            },
        );
    }

    out
}

fn is_excluded(section: &ReportSection) -> bool {
    let id = section.id.to_lowercase();
    EXCLUDED_TYPES.iter().any(|excluded| {
        section.section_type.eq_ignore_ascii_case(excluded) || id.contains(excluded)
    })
}

fn build_section(section: &ReportSection, safe_mode: bool) -> StorySection {
    let title = jargon::translate(&section.title);
    let content = jargon::translate(&section.content);

    let is_recommendation = section.section_type.to_lowercase().contains("recommend")
        || title.to_lowercase().contains("recommend");

    let tone = if is_recommendation {
        Sentiment::Positive
    } else {
        sentiment::classify(&format!("{title} {content}"))
    };

    let checklist = if is_recommendation {
        extract_checklist(&content)
    } else {
        Vec::new()
    };

    let impact = if safe_mode {
        None
    } else {
        impact_statement(tone)
    };

    StorySection {
        title,
        content,
        sentiment: tone,
        section_type: section.section_type.clone(),
        impact,
        evidence_id: None,
        checklist,
    }
}

/// Fixed "why this matters" line per sentiment; neutral sections get none.
fn impact_statement(tone: Sentiment) -> Option<String> {
    match tone {
        Sentiment::Negative => Some(
            "This finding points to a risk worth addressing before it affects your results."
                .to_string(),
        ),
        Sentiment::Positive => Some(
            "This is working in your favor; consider how to build on it.".to_string(),
        ),
        Sentiment::Caution => Some(
            "Keep an eye on this area; it may need attention as conditions change.".to_string(),
        ),
        Sentiment::Neutral => None,
    }
}

/// Numbered or bulleted lines become checklist actions.
fn extract_checklist(content: &str) -> Vec<String> {
    checklist_re()
        .captures_iter(content)
        .map(|cap| cap[1].trim().to_string())
        .filter(|line| !line.is_empty())
        .collect()
}
