//! Minimum coverage threshold gate.

use super::coverage::AggregationResult;
use crate::utils::config::{MAX_THRESHOLD_PERCENT, MIN_THRESHOLD_PERCENT};
use crate::utils::error::{ConfigError, GateError};

/// Validate a configured threshold
///
/// **Public** - called while validating CLI arguments
///
/// # Errors
/// * `ConfigError::ThresholdOutOfRange` - outside [0, 100] or not finite
pub fn validate_threshold(threshold: Option<f64>) -> Result<(), ConfigError> {
    match threshold {
        Some(t) if !(MIN_THRESHOLD_PERCENT..=MAX_THRESHOLD_PERCENT).contains(&t) => {
            Err(ConfigError::ThresholdOutOfRange(t))
        }
        _ => Ok(()),
    }
}

/// Check an aggregation result against an optional minimum
///
/// **Public** - the pass/fail gate
///
/// A NaN percentage always fails, whether or not a threshold is set.
/// With no threshold the gate is otherwise disabled.
///
/// # Errors
/// * `GateError::NotANumber` - no statements were considered
/// * `GateError::ThresholdNotReached` - percentage below the minimum
pub fn check_threshold(
    result: &AggregationResult,
    min_threshold: Option<f64>,
) -> Result<(), GateError> {
    if result.is_degenerate() {
        return Err(GateError::NotANumber);
    }

    match min_threshold {
        Some(minimum) if result.percentage < minimum => Err(GateError::ThresholdNotReached {
            actual: result.percentage,
            minimum,
        }),
        _ => Ok(()),
    }
}
