use std::path::PathBuf;

/// Arguments for the analyze command
///
/// **Public** - used by main.rs to construct from CLI args
#[derive(Debug, Clone, Default)]
pub struct AnalyzeArgs {
    /// Go cover profile to scan
    pub cover_file: PathBuf,

    /// Optional list of business logic files
    pub business_logic_file: Option<PathBuf>,

    /// Optional minimum coverage percentage, in [0, 100]
    pub min_threshold: Option<f64>,

    /// Optional path for the JSON report
    pub output_json: Option<PathBuf>,

    /// Print per-file table to stdout
    pub print_summary: bool,
}
