//! Reader for the business-logic file list.
//!
//! One file name per line, matched exactly against profile file names.

use crate::aggregator::FileFilter;
use crate::utils::error::InputError;
use log::{debug, warn};
use std::path::Path;

/// Load the business-logic list into a filter
///
/// **Public** - `None` means no list was configured
///
/// A list without entries falls back to `FileFilter::AllFiles`.
///
/// # Errors
/// * `InputError::BusinessLogicUnreadable` - file cannot be opened or read
pub fn load_business_logic(path: Option<&Path>) -> Result<FileFilter, InputError> {
    let Some(path) = path else {
        return Ok(FileFilter::AllFiles);
    };

    debug!("Reading business logic list: {}", path.display());

    let content =
        std::fs::read_to_string(path).map_err(|source| InputError::BusinessLogicUnreadable {
            path: path.display().to_string(),
            source,
        })?;

    let filter = parse_business_logic(&content);
    if filter.is_all() {
        warn!(
            "Business logic file {} has no entries, computing coverage on all files",
            path.display()
        );
    }

    Ok(filter)
}

/// Parse list content; blank lines are skipped, entries are trimmed
pub fn parse_business_logic(content: &str) -> FileFilter {
    let names: Vec<&str> = content
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .collect();

    if names.is_empty() {
        FileFilter::AllFiles
    } else {
        FileFilter::only(names)
    }
}
