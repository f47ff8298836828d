//! Aggregation of parsed profiles into a coverage percentage.
//!
//! This module provides:
//! - File selection (whole repository or business-logic files only)
//! - Statement coverage totals and per-file breakdown
//! - The minimum threshold gate

pub mod coverage;
pub mod filter;
pub mod threshold;

// Re-export main types and functions
pub use coverage::{aggregate, file_breakdown, AggregationResult, FileCoverage};
pub use filter::FileFilter;
pub use threshold::{check_threshold, validate_threshold};
