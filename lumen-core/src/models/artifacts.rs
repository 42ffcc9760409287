//! Pre-scored analytic artifacts from the enhanced-analytics payload.
//!
//! Lumen never computes these; it only classifies and gates what the
//! backend already scored.

use serde::{Deserialize, Serialize};

/// Availability/validity flags attached to every enhanced artifact.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct ArtifactStatus {
    #[serde(default)]
    pub available: bool,
    #[serde(default)]
    pub valid: bool,
}

impl ArtifactStatus {
    /// Usable for display and classification.
    pub fn is_usable(self) -> bool {
        self.available && self.valid
    }
}

/// One feature with its importance weight.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FeatureWeight {
    pub feature: String,
    pub importance: f64,
}

/// Driver-importance artifact: features ranked by weight.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct FeatureImportance {
    #[serde(default)]
    pub features: Vec<FeatureWeight>,
}

/// A correlated variable pair.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CorrelationPair {
    pub a: String,
    pub b: String,
    /// Pearson r in [-1, 1].
    pub r: f64,
}

/// Correlation artifact: pairs the backend found notable.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CorrelationAnalysis {
    #[serde(default)]
    pub pairs: Vec<CorrelationPair>,
}

/// Distribution summary for one numeric column.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DistributionStats {
    pub mean: f64,
    pub median: f64,
    pub std_dev: f64,
}

/// One behavioral segment with its size.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Segment {
    pub name: String,
    pub size: f64,
}

/// Segment artifact from the clustering stage.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SegmentAnalysis {
    #[serde(default)]
    pub segments: Vec<Segment>,
}

/// Raw values scanned for anomalies.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AnomalyScan {
    #[serde(default)]
    pub values: Vec<f64>,
}

/// Evidence-thinness signals feeding the guardrail post-pass.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct SampleProfile {
    #[serde(default)]
    pub sample_size: Option<u64>,
    /// Fraction of rows the artifact actually covered.
    #[serde(default)]
    pub coverage: Option<f64>,
    #[serde(default)]
    pub variance: Option<f64>,
}

/// One named artifact slot: status flags plus the payload, when present.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ArtifactSlot<T> {
    #[serde(flatten)]
    pub status: ArtifactStatus,
    #[serde(default)]
    pub data: Option<T>,
}

/// The enhanced-analytics payload: named sub-artifacts, each independently
/// available or not.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct EnhancedAnalytics {
    #[serde(default)]
    pub business_intelligence: ArtifactSlot<SegmentAnalysis>,
    #[serde(default)]
    pub feature_importance: ArtifactSlot<FeatureImportance>,
    #[serde(default)]
    pub correlation_analysis: ArtifactSlot<CorrelationAnalysis>,
    #[serde(default)]
    pub behavioral_clusters: ArtifactSlot<SegmentAnalysis>,
    #[serde(default)]
    pub distribution: ArtifactSlot<DistributionStats>,
    #[serde(default)]
    pub anomaly_scan: ArtifactSlot<AnomalyScan>,
    #[serde(default)]
    pub sample_profile: SampleProfile,
}
