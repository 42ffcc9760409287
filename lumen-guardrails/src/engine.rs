//! InsightEngine: runs every classifier over the enhanced-analytics
//! bundle and applies the guardrail post-pass uniformly.

use lumen_core::config::GuardrailConfig;
use lumen_core::models::{EnhancedAnalytics, Insight};

use crate::classify::{anomaly, correlation, distribution, driver, segment};
use crate::guard;

/// The insight derivation engine.
pub struct InsightEngine {
    config: GuardrailConfig,
}

impl InsightEngine {
    pub fn new(config: GuardrailConfig) -> Self {
        Self { config }
    }

    /// Derive guarded insights from the full analytics bundle, in fixed
    /// category order. Absent artifacts simply contribute nothing.
    pub fn insights(&self, analytics: &EnhancedAnalytics) -> Vec<Insight> {
        let span = lumen_core::guardrail_span!("bundle");
        let _guard = span.enter();

        let profile = &analytics.sample_profile;
        let raw = [
            driver::classify(&analytics.feature_importance),
            correlation::classify(&analytics.correlation_analysis),
            distribution::classify(&analytics.distribution),
            self.segment_insight(analytics),
            anomaly::classify(&analytics.anomaly_scan),
        ];

        raw.into_iter()
            .flatten()
            .map(|insight| guard::apply_guardrails_with(insight, profile, &self.config))
            .collect()
    }

    /// Segment structure comes from business intelligence when available,
    /// falling back to the behavioral clusters.
    fn segment_insight(&self, analytics: &EnhancedAnalytics) -> Option<Insight> {
        segment::classify(&analytics.business_intelligence)
            .or_else(|| segment::classify(&analytics.behavioral_clusters))
    }
}

impl Default for InsightEngine {
    fn default() -> Self {
        Self::new(GuardrailConfig::default())
    }
}
