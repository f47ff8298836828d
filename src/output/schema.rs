//! JSON report schema.
//!
//! Schema is versioned to allow future evolution.

use crate::aggregator::{AggregationResult, FileCoverage, FileFilter};
use crate::parser::schema::CoverMode;
use crate::utils::config::REPORT_SCHEMA_VERSION;
use serde::{Deserialize, Serialize};

/// Top-level report written to JSON
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CoverageReport {
    /// Schema version for compatibility checking
    pub version: String,

    /// Cover profile that was analyzed
    pub cover_file: String,

    /// Cover mode of the profile, absent when it had no blocks
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mode: Option<CoverMode>,

    /// Business-logic files, `None` when every file was counted
    pub business_logic_files: Option<Vec<String>>,

    pub statements: u64,
    pub statements_covered: u64,

    /// `null` when no statement was considered
    pub percentage: Option<f64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub min_threshold: Option<f64>,

    /// Per-file breakdown of the counted profiles
    pub files: Vec<FileReport>,

    /// Timestamp when report was generated
    pub generated_at: String,
}

/// Coverage of one file
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FileReport {
    pub file: String,
    pub statements: u64,
    pub statements_covered: u64,
    pub percentage: Option<f64>,
}

impl From<&FileCoverage> for FileReport {
    fn from(fc: &FileCoverage) -> Self {
        Self {
            file: fc.file_name.clone(),
            statements: fc.result.statements_total,
            statements_covered: fc.result.statements_covered,
            percentage: fc.result.percentage_opt(),
        }
    }
}

impl CoverageReport {
    /// Assemble a report from an aggregation run
    pub fn new(
        cover_file: impl Into<String>,
        mode: Option<CoverMode>,
        filter: &FileFilter,
        result: &AggregationResult,
        files: &[FileCoverage],
        min_threshold: Option<f64>,
    ) -> Self {
        let business_logic_files = match filter {
            FileFilter::AllFiles => None,
            FileFilter::OnlyListed(names) => Some(names.iter().cloned().collect()),
        };

        Self {
            version: REPORT_SCHEMA_VERSION.to_string(),
            cover_file: cover_file.into(),
            mode,
            business_logic_files,
            statements: result.statements_total,
            statements_covered: result.statements_covered,
            percentage: result.percentage_opt(),
            min_threshold,
            files: files.iter().map(FileReport::from).collect(),
            generated_at: chrono::Utc::now().to_rfc3339(),
        }
    }
}
