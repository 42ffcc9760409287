//! Shared models for the Lumen report layer.
//!
//! Everything here is a plain serde struct mirroring the wire payloads or
//! the derived view objects. Nothing holds behavior beyond small helpers;
//! the transformation crates own the logic.

pub mod artifacts;
pub mod evidence;
pub mod insight;
pub mod narrative;
pub mod run_data;
pub mod run_state;
pub mod section;
pub mod story;

pub use artifacts::{
    AnomalyScan, ArtifactSlot, ArtifactStatus, CorrelationAnalysis, CorrelationPair,
    DistributionStats, EnhancedAnalytics, FeatureImportance, FeatureWeight, SampleProfile,
    Segment, SegmentAnalysis,
};
pub use evidence::{EvidenceSummary, LineageDetail};
pub use insight::{Insight, Severity};
pub use narrative::{HeroInsight, NarrativeModule, NarrativeOutline, Scqa};
pub use run_data::{BackendRunData, DataQuality, Diagnostics};
pub use run_state::{RunState, RunStatus};
pub use section::ReportSection;
pub use story::{MetricCard, Sentiment, StatusTier, StoryMeta, StorySection, StoryViewModel};
