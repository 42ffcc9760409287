//! The fixed pipeline-step table.
//!
//! Eight display steps, each aggregating one or more backend step tokens.
//! The sequence defines both display order and fallback priority; keys are
//! unique.

/// Derived state of one display step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepState {
    Pending,
    Active,
    Completed,
}

/// One display step aggregating backend tokens.
#[derive(Debug, Clone, Copy)]
pub struct PipelineStep {
    pub key: &'static str,
    pub label: &'static str,
    pub description: &'static str,
    /// Backend step tokens this step aggregates, lowercase.
    pub backend_tokens: &'static [&'static str],
}

/// The fixed step sequence.
pub const PIPELINE_STEPS: [PipelineStep; 8] = [
    PipelineStep {
        key: "ingest",
        label: "Ingesting data",
        description: "Reading and validating the uploaded dataset",
        backend_tokens: &["ingestion"],
    },
    PipelineStep {
        key: "schema",
        label: "Mapping the schema",
        description: "Identifying column types and semantic roles",
        backend_tokens: &["type_identifier", "scanner", "interpreter"],
    },
    PipelineStep {
        key: "quality",
        label: "Auditing data quality",
        description: "Profiling completeness, duplicates, and consistency",
        backend_tokens: &["quality_auditor", "profiler"],
    },
    PipelineStep {
        key: "statistics",
        label: "Measuring relationships",
        description: "Computing distributions and correlations",
        backend_tokens: &["statistics", "correlation"],
    },
    PipelineStep {
        key: "segments",
        label: "Finding segments",
        description: "Clustering records into behavioral groups",
        backend_tokens: &["clustering", "segmentation"],
    },
    PipelineStep {
        key: "anomalies",
        label: "Scanning for anomalies",
        description: "Flagging outliers and unusual patterns",
        backend_tokens: &["anomaly_detector", "outlier_scan"],
    },
    PipelineStep {
        key: "drivers",
        label: "Ranking drivers",
        description: "Scoring which features move the outcome",
        backend_tokens: &["feature_importance", "driver_ranking"],
    },
    PipelineStep {
        key: "narrative",
        label: "Writing the report",
        description: "Assembling sections and the executive summary",
        backend_tokens: &["narrative_generator", "report_builder"],
    },
];
