//! Module ranking and the governing thought.

use std::cmp::Ordering;

use lumen_core::config::NarrativeConfig;
use lumen_core::models::{NarrativeModule, NarrativeOutline, ReportSection};
use tracing::debug;

use crate::scqa::{build_module, NarrativeOptions};

/// How many modules the fallback promotes when nothing clears the cutoff.
const FALLBACK_PRIMARY_COUNT: usize = 2;

/// Assemble the narrative with the default (pinned) ranking thresholds.
pub fn assemble_narrative(
    sections: &[ReportSection],
    options: &NarrativeOptions,
) -> NarrativeOutline {
    assemble_narrative_with(sections, options, &NarrativeConfig::default())
}

/// Assemble the narrative with explicit ranking thresholds.
///
/// Non-empty sections become SCQA modules, ranked by importance
/// descending. Modules at or above the cutoff become primary (capped);
/// the rest land in the appendix. If nothing clears the cutoff, the top
/// two by rank are promoted so the report always leads with something.
pub fn assemble_narrative_with(
    sections: &[ReportSection],
    options: &NarrativeOptions,
    config: &NarrativeConfig,
) -> NarrativeOutline {
    let span = lumen_core::narrative_span!(sections.len());
    let _guard = span.enter();

    let mut modules: Vec<NarrativeModule> = sections
        .iter()
        .enumerate()
        .filter(|(_, section)| !section.is_empty())
        .map(|(index, section)| {
            let mut module = build_module(section, index, options);
            if section.importance.is_none() {
                module.importance = config.default_section_importance;
            }
            module
        })
        .collect();

    modules.sort_by(|a, b| {
        b.importance
            .partial_cmp(&a.importance)
            .unwrap_or(Ordering::Equal)
    });

    let qualifying = modules
        .iter()
        .filter(|m| m.importance >= config.primary_importance_cutoff)
        .count();
    let primary_count = if qualifying == 0 {
        FALLBACK_PRIMARY_COUNT.min(modules.len())
    } else {
        qualifying.min(config.primary_module_cap)
    };

    let appendix = modules.split_off(primary_count);
    let primary = modules;

    debug!(
        primary = primary.len(),
        appendix = appendix.len(),
        "narrative assembled"
    );

    let governing_thought = governing_thought(&primary, options);

    NarrativeOutline {
        governing_thought,
        primary,
        appendix,
    }
}

/// The fallback chain for the single elevated claim. Never empty.
fn governing_thought(primary: &[NarrativeModule], options: &NarrativeOptions) -> String {
    if let Some(hero) = &options.hero_insight {
        if !hero.key_statement.trim().is_empty() {
            return hero.key_statement.clone();
        }
    }
    if let Some(top) = primary.first() {
        if let Some(answer) = &top.scqa.answer {
            if !answer.trim().is_empty() {
                return answer.clone();
            }
        }
        if !top.scqa.situation.trim().is_empty() {
            return top.scqa.situation.clone();
        }
    }
    if let Some(question) = &options.primary_question {
        return format!("The analysis examined: {question}");
    }
    "Your analysis is complete; explore the full report for details.".to_string()
}
