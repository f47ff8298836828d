//! Configuration and constants for the CLI.

/// Current JSON report schema version
pub const REPORT_SCHEMA_VERSION: &str = "1.0.0";

// Valid range for the minimum coverage threshold (percent, inclusive)
pub const MIN_THRESHOLD_PERCENT: f64 = 0.0;
pub const MAX_THRESHOLD_PERCENT: f64 = 100.0;

/// Header line prefix of a Go cover profile
pub const MODE_PREFIX: &str = "mode: ";

// Environment fallbacks for the CLI flags
pub const ENV_COVER_FILE: &str = "GO_AGG_COV_COVER_FILE";
pub const ENV_BUSINESS_LOGIC_FILE: &str = "GO_AGG_COV_BUSINESS_LOGIC_FILE";
pub const ENV_MIN_THRESHOLD: &str = "GO_AGG_COV_MIN_THRESHOLD";
