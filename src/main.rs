//! go-agg-cov CLI
//!
//! Calculates a single coverage percentage from a Go coverage file and an
//! optional list of Go files representing the business logic.

use anyhow::Result;
use clap::Parser;
use env_logger::Env;
use std::path::PathBuf;

use go_agg_cov::commands::{execute_analyze, validate_args, AnalyzeArgs};
use go_agg_cov::utils::config::{ENV_BUSINESS_LOGIC_FILE, ENV_COVER_FILE, ENV_MIN_THRESHOLD};

/// go-agg-cov - aggregate Go coverage with an optional threshold gate
#[derive(Parser, Debug)]
#[command(name = "go-agg-cov")]
#[command(version, about, long_about = None)]
struct Cli {
    /// Coverage file to scan
    #[arg(long, alias = "coverFile", env = ENV_COVER_FILE)]
    cover_file: PathBuf,

    /// Optional file containing list of business logic files
    #[arg(long, alias = "businessLogicFile", env = ENV_BUSINESS_LOGIC_FILE)]
    business_logic_file: Option<PathBuf>,

    /// Optional minimum coverage threshold percentage (fails if under this value)
    #[arg(long, alias = "minCoverageThreshold", env = ENV_MIN_THRESHOLD)]
    min_coverage_threshold: Option<f64>,

    /// Output path for a JSON report (optional)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Print per-file coverage table to stdout
    #[arg(long)]
    summary: bool,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<()> {
    // Parse CLI arguments
    let cli = Cli::parse();

    // Setup logging
    let log_level = if cli.verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(Env::default().default_filter_or(log_level)).init();

    let args = AnalyzeArgs {
        cover_file: cli.cover_file,
        business_logic_file: cli.business_logic_file,
        min_threshold: cli.min_coverage_threshold,
        output_json: cli.output,
        print_summary: cli.summary,
    };

    // Validate args first
    validate_args(&args)?;

    execute_analyze(&args)?;

    Ok(())
}
