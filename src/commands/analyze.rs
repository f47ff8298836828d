//! Analyze command implementation.
//!
//! The analyze command:
//! 1. Reads the business-logic list (if any)
//! 2. Parses the cover profile
//! 3. Aggregates statement coverage
//! 4. Reports the result (stdout, optional JSON)
//! 5. Applies the threshold gate

use super::models::AnalyzeArgs;
use crate::aggregator::{aggregate, check_threshold, file_breakdown, validate_threshold, AggregationResult};
use crate::output::{format_file_table, format_result, write_report, CoverageReport};
use crate::parser::{load_business_logic, parse_profiles};
use crate::utils::error::ConfigError;
use anyhow::{Context, Result};
use log::{debug, info};

/// Execute the analyze command
///
/// **Public** - main entry point called from main.rs
///
/// The result is printed (and written to JSON if requested) before the
/// gate runs, so a failing run still reports its numbers.
///
/// # Errors
/// * Business-logic list or cover profile cannot be read/parsed
/// * Report cannot be written
/// * Percentage is NaN or below the configured minimum
pub fn execute_analyze(args: &AnalyzeArgs) -> Result<AggregationResult> {
    info!("Analyzing file {}", args.cover_file.display());
    match &args.business_logic_file {
        Some(path) => info!("Business Logic file {}", path.display()),
        None => info!("Business Logic file not set, using all files"),
    }
    match args.min_threshold {
        Some(t) => info!("Minimum coverage threshold percentage {:.2} %", t),
        None => info!("Minimum coverage threshold not set"),
    }

    let filter = load_business_logic(args.business_logic_file.as_deref())
        .context("Failed to load business logic file")?;

    let profiles = parse_profiles(&args.cover_file).with_context(|| {
        format!("Failed to parse cover profile {}", args.cover_file.display())
    })?;

    debug!("Computing coverage on {}", filter.describe());
    let result = aggregate(&profiles, &filter).context("Failed to aggregate coverage")?;

    println!("{}", format_result(&result));

    let files = file_breakdown(&profiles, &filter).context("Failed to compute per-file coverage")?;

    if args.print_summary {
        println!("\n{}", format_file_table(&files));
    }

    if let Some(path) = &args.output_json {
        let mode = profiles.first().map(|p| p.mode);
        let report = CoverageReport::new(
            args.cover_file.display().to_string(),
            mode,
            &filter,
            &result,
            &files,
            args.min_threshold,
        );
        write_report(&report, path).context("Failed to write coverage report JSON")?;
        info!("✓ Report written to: {}", path.display());
    }

    check_threshold(&result, args.min_threshold)?;

    Ok(result)
}

/// Validate analyze arguments
///
/// **Public** - can be called before execute_analyze for early validation
pub fn validate_args(args: &AnalyzeArgs) -> Result<(), ConfigError> {
    if args.cover_file.as_os_str().is_empty() {
        return Err(ConfigError::MissingCoverFile);
    }

    validate_threshold(args.min_threshold)
}
