//! Statement coverage aggregation.
//!
//! Sums statement counts over every block of every selected profile.
//! A block counts as covered when it executed at least once.

use super::filter::FileFilter;
use crate::parser::schema::{Block, Profile};
use crate::utils::error::InputError;
use log::debug;

/// Aggregated statement counts
///
/// **Public** - returned from aggregate
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AggregationResult {
    /// Statements in the selected profiles
    pub statements_total: u64,

    /// Statements in blocks with a non-zero execution count
    pub statements_covered: u64,

    /// `100 * covered / total`, NaN when `statements_total == 0`
    pub percentage: f64,
}

impl AggregationResult {
    fn from_counts(statements_total: u64, statements_covered: u64) -> Self {
        Self {
            statements_total,
            statements_covered,
            percentage: (statements_covered as f64 / statements_total as f64) * 100.0,
        }
    }

    /// True when no statement was considered and the percentage is NaN
    pub fn is_degenerate(&self) -> bool {
        self.percentage.is_nan()
    }

    /// Percentage, or `None` when degenerate
    pub fn percentage_opt(&self) -> Option<f64> {
        if self.is_degenerate() {
            None
        } else {
            Some(self.percentage)
        }
    }
}

/// Aggregate coverage across profiles
///
/// **Public** - main entry point for the computation
///
/// # Arguments
/// * `profiles` - Parsed profiles, in any order
/// * `filter` - Which profiles to count
///
/// # Returns
/// Totals and percentage. A filter matching no profile yields a NaN percentage,
/// which callers must check (see `is_degenerate`).
///
/// # Errors
/// * `InputError::StatementCountOverflow` - statement sums exceed `u64`
pub fn aggregate(profiles: &[Profile], filter: &FileFilter) -> Result<AggregationResult, InputError> {
    let mut total: u64 = 0;
    let mut covered: u64 = 0;

    for profile in profiles.iter().filter(|p| filter.includes(&p.file_name)) {
        let overflow = || InputError::StatementCountOverflow {
            file: profile.file_name.clone(),
        };
        let (pt, pc) = count_blocks(&profile.blocks).ok_or_else(overflow)?;
        total = total.checked_add(pt).ok_or_else(overflow)?;
        covered = covered.checked_add(pc).ok_or_else(overflow)?;
    }

    let result = AggregationResult::from_counts(total, covered);
    debug!(
        "Aggregated {} profiles with {}: {}/{} statements covered",
        profiles.len(),
        filter.describe(),
        result.statements_covered,
        result.statements_total
    );
    Ok(result)
}

/// Coverage of a single source file
#[derive(Debug, Clone, PartialEq)]
pub struct FileCoverage {
    pub file_name: String,
    pub result: AggregationResult,
}

/// Per-file coverage for every profile the filter selects, in input order
///
/// **Public** - sums over the returned entries equal `aggregate`'s totals
pub fn file_breakdown(profiles: &[Profile], filter: &FileFilter) -> Result<Vec<FileCoverage>, InputError> {
    profiles
        .iter()
        .filter(|p| filter.includes(&p.file_name))
        .map(|p| {
            let (total, covered) =
                count_blocks(&p.blocks).ok_or_else(|| InputError::StatementCountOverflow {
                    file: p.file_name.clone(),
                })?;
            Ok(FileCoverage {
                file_name: p.file_name.clone(),
                result: AggregationResult::from_counts(total, covered),
            })
        })
        .collect()
}

/// (statements, covered statements) for a block list, `None` on overflow
///
/// **Private** - shared by aggregate and file_breakdown
fn count_blocks(blocks: &[Block]) -> Option<(u64, u64)> {
    blocks.iter().try_fold((0u64, 0u64), |(total, covered), block| {
        let covered = if block.is_covered() {
            covered.checked_add(block.num_stmt)?
        } else {
            covered
        };
        Some((total.checked_add(block.num_stmt)?, covered))
    })
}
