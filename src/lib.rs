//! go-agg-cov
//!
//! Computes a single coverage percentage from a Go cover profile,
//! optionally restricted to a list of business logic files, and
//! optionally fails when coverage is under a minimum threshold.
//!
//! This crate provides the core implementation for the
//! `go-agg-cov` CLI tool.
//!
//! ## Getting Started
//!
//! ```bash
//! go test ./... -coverprofile=cover.out
//! go-agg-cov --cover-file cover.out --min-coverage-threshold 80
//! ```

pub mod aggregator;
pub mod commands;
pub mod output;
pub mod parser;
pub mod utils;
