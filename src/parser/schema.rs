//! In-memory data model for parsed Go cover profiles.
//!
//! A report is a list of `Profile`s, one per source file, each owning the
//! coverage `Block`s recorded for that file.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Cover mode declared on the first line of a profile
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CoverMode {
    /// Block executed or not (count is 0 or 1)
    Set,
    /// Number of executions
    Count,
    /// Number of executions, thread-safe counters
    Atomic,
}

impl CoverMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            CoverMode::Set => "set",
            CoverMode::Count => "count",
            CoverMode::Atomic => "atomic",
        }
    }
}

impl fmt::Display for CoverMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for CoverMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "set" => Ok(CoverMode::Set),
            "count" => Ok(CoverMode::Count),
            "atomic" => Ok(CoverMode::Atomic),
            other => Err(other.to_string()),
        }
    }
}

/// A contiguous code region and how often it ran
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Block {
    pub start_line: u32,
    pub start_col: u32,
    pub end_line: u32,
    pub end_col: u32,

    /// Number of statements in the region
    pub num_stmt: u64,

    /// Execution count (0 = never executed)
    pub count: u64,
}

impl Block {
    /// Block without a source span, handy when only the counts matter
    pub fn new(num_stmt: u64, count: u64) -> Self {
        Self {
            start_line: 0,
            start_col: 0,
            end_line: 0,
            end_col: 0,
            num_stmt,
            count,
        }
    }

    pub fn is_covered(&self) -> bool {
        self.count > 0
    }

    pub(crate) fn same_span(&self, other: &Block) -> bool {
        self.start_line == other.start_line
            && self.start_col == other.start_col
            && self.end_line == other.end_line
            && self.end_col == other.end_col
    }
}

/// Coverage data for one source file
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Profile {
    pub file_name: String,
    pub mode: CoverMode,
    pub blocks: Vec<Block>,
}

impl Profile {
    pub fn new(file_name: impl Into<String>, mode: CoverMode, blocks: Vec<Block>) -> Self {
        Self {
            file_name: file_name.into(),
            mode,
            blocks,
        }
    }
}
