//! Error types for the entire application.
//!
//! We use `thiserror` for library-style errors with custom types,
//! and `anyhow` for application-level error propagation in main.rs and commands.

use thiserror::Error;

/// Errors in the CLI configuration, raised before any input is read
#[derive(Error, Debug, PartialEq)]
pub enum ConfigError {
    #[error("Cover file is mandatory")]
    MissingCoverFile,

    #[error("Minimum coverage threshold must be in range [0-100], got {0}")]
    ThresholdOutOfRange(f64),
}

/// Errors that can occur while parsing a Go cover profile
#[derive(Error, Debug)]
pub enum ParseError {
    #[error("Failed to read cover profile: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Cover profile is empty")]
    Empty,

    #[error("Line {line}: expected 'mode: <set|count|atomic>', found {found:?}")]
    MissingMode { line: usize, found: String },

    #[error("Line {line}: unknown cover mode {mode:?}")]
    UnknownMode { line: usize, mode: String },

    #[error("Line {line}: mode {found:?} conflicts with {expected:?}")]
    ModeMismatch {
        line: usize,
        expected: String,
        found: String,
    },

    #[error("Line {line}: invalid block format: {reason}")]
    InvalidLine { line: usize, reason: String },

    #[error("Inconsistent statement count for {file}:{start_line}.{start_col}")]
    InconsistentStatements {
        file: String,
        start_line: u32,
        start_col: u32,
    },
}

/// Errors reading auxiliary inputs such as the business-logic list
#[derive(Error, Debug)]
pub enum InputError {
    #[error("Failed to read business logic file {path}: {source}")]
    BusinessLogicUnreadable {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Statement count overflow while summing {file}")]
    StatementCountOverflow { file: String },
}

/// Failures of the post-aggregation gate
#[derive(Error, Debug, PartialEq)]
pub enum GateError {
    #[error("Wrong configuration: coverage percentage Not a Number (no statements considered)")]
    NotANumber,

    #[error("Minimum coverage threshold not reached: {actual:.2}% < {minimum:.2}%")]
    ThresholdNotReached { actual: f64, minimum: f64 },
}

/// Errors that can occur during file output
#[derive(Error, Debug)]
pub enum OutputError {
    #[error("Failed to write file: {0}")]
    WriteFailed(#[from] std::io::Error),

    #[error("Failed to serialize JSON: {0}")]
    SerializationFailed(#[from] serde_json::Error),

    #[error("Invalid output path: {0}")]
    InvalidPath(String),
}
