//! Top-level run-data-to-story transformation.

use tracing::debug;

use lumen_core::constants::SAFE_MODE_CONFIDENCE_CUTOFF;
use lumen_core::models::{BackendRunData, StoryMeta, StoryViewModel};
use lumen_core::story_span;

use crate::{brief, cards, headline, sections};

/// Transform the backend payload into the display object.
///
/// Safe mode engages when overall confidence drops below the cutoff;
/// it suppresses impact statements but never hides backend content.
pub fn transform_to_story(data: &BackendRunData) -> StoryViewModel {
    let span = story_span!(data.run_id);
    let _guard = span.enter();

    let data_quality = data.diagnostics.data_quality.score.as_ratio();
    let confidence = data.confidence_score.as_ratio();
    let safe_mode = confidence < SAFE_MODE_CONFIDENCE_CUTOFF;
    if safe_mode {
        debug!(confidence, "confidence below cutoff; safe mode engaged");
    }

    let mined = headline::derive_headline(&data.sections);
    let executive_brief = brief::executive_brief(data_quality, &mined.remaining);
    let metric_cards = cards::metric_cards(data);
    let sections = sections::story_sections(&data.sections, safe_mode);

    StoryViewModel {
        headline: mined.headline,
        subheadline: mined.subheadline,
        metric_cards,
        sections,
        executive_brief,
        meta: StoryMeta {
            data_quality,
            confidence,
            safe_mode,
            run_id: data.run_id.clone(),
            date: data.created_at,
        },
    }
}
