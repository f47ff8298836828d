//! Input parsing and data model.
//!
//! This module handles:
//! - Parsing Go cover profiles into `Profile`/`Block` values
//! - Reading the business-logic file list into a filter

pub mod business_logic;
pub mod go_cover;
pub mod schema;

// Re-export main types
pub use business_logic::{load_business_logic, parse_business_logic};
pub use go_cover::{parse_profiles, parse_profiles_str};
pub use schema::{Block, CoverMode, Profile};
