/// Lumen version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Minimum backing sample size before an insight may keep a non-neutral
/// severity. Below this, severity is forced to neutral.
pub const MIN_SAMPLE_SIZE: u64 = 100;

/// Coverage below this counts as thin evidence.
pub const LOW_COVERAGE_THRESHOLD: f64 = 0.7;

/// Variance above this counts as unstable evidence.
pub const HIGH_VARIANCE_THRESHOLD: f64 = 1.0;

/// Confidence multiplier applied when coverage is low and variance is high.
pub const THIN_EVIDENCE_CONFIDENCE_FACTOR: f64 = 0.6;

/// Evidence confidence floor (percent, inclusive) for section visibility.
pub const MIN_CONFIDENCE: f64 = 50.0;

/// Importance cutoff for a narrative module to rank as primary.
pub const PRIMARY_IMPORTANCE_CUTOFF: f64 = 0.45;

/// Overall confidence ratio below which the report enters safe mode.
pub const SAFE_MODE_CONFIDENCE_CUTOFF: f64 = 0.1;

/// Maximum number of primary narrative modules.
pub const PRIMARY_MODULE_CAP: usize = 4;

/// Importance assumed for sections the backend did not score.
pub const DEFAULT_SECTION_IMPORTANCE: f64 = 0.3;

/// Maximum headline length before falling back to the generic phrase.
pub const HEADLINE_MAX_CHARS: usize = 100;

/// Maximum number of executive brief entries.
pub const EXECUTIVE_BRIEF_MAX: usize = 3;

/// Maximum excerpt length when a section yields no sentences.
pub const EXCERPT_MAX_CHARS: usize = 140;

/// Duration of the transient evidence-focus highlight.
pub const HIGHLIGHT_DURATION_MS: u64 = 2200;

/// Interval between run-status polls.
pub const POLL_INTERVAL_MS: u64 = 2000;

/// How many not-found responses the poller tolerates before failing.
pub const NOT_FOUND_MAX_RETRIES: u32 = 5;

/// Delay between not-found retries.
pub const NOT_FOUND_RETRY_DELAY_MS: u64 = 1500;
