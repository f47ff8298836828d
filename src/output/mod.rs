//! Output of coverage results.
//!
//! This module handles:
//! - JSON reports (write and read back)
//! - Text summaries for stdout

pub mod json;
pub mod schema;
pub mod text;

// Re-export main functions
pub use json::{read_report, report_to_string, write_report};
pub use schema::{CoverageReport, FileReport};
pub use text::{format_file_table, format_result};
