use serde::{Deserialize, Serialize};

use super::defaults;

/// Narrative assembly configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct NarrativeConfig {
    /// Importance cutoff for a module to rank as primary.
    pub primary_importance_cutoff: f64,
    /// Maximum number of primary modules.
    pub primary_module_cap: usize,
    /// Importance assumed for unscored sections.
    pub default_section_importance: f64,
}

impl Default for NarrativeConfig {
    fn default() -> Self {
        Self {
            primary_importance_cutoff: defaults::PRIMARY_IMPORTANCE_CUTOFF,
            primary_module_cap: defaults::PRIMARY_MODULE_CAP,
            default_section_importance: defaults::DEFAULT_SECTION_IMPORTANCE,
        }
    }
}
