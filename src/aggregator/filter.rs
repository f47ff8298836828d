//! Selection of which profiles count toward the aggregate.

use std::collections::BTreeSet;

/// File filter applied before aggregation
///
/// `OnlyListed` with an empty set matches nothing; it is never
/// interpreted as "everything".
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum FileFilter {
    /// Whole-repository mode
    #[default]
    AllFiles,

    /// Only the listed business-logic files (exact name match)
    OnlyListed(BTreeSet<String>),
}

impl FileFilter {
    /// Build an `OnlyListed` filter from any iterator of names
    pub fn only<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        FileFilter::OnlyListed(names.into_iter().map(Into::into).collect())
    }

    /// Whether a profile for `file_name` contributes to the aggregate
    pub fn includes(&self, file_name: &str) -> bool {
        match self {
            FileFilter::AllFiles => true,
            FileFilter::OnlyListed(names) => names.contains(file_name),
        }
    }

    pub fn is_all(&self) -> bool {
        matches!(self, FileFilter::AllFiles)
    }

    /// Short description for logs
    pub fn describe(&self) -> String {
        match self {
            FileFilter::AllFiles => "all files".to_string(),
            FileFilter::OnlyListed(names) => format!("{} business logic files", names.len()),
        }
    }
}
