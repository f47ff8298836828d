use go_agg_cov::commands::{execute_analyze, validate_args, AnalyzeArgs};
use go_agg_cov::output::read_report;
use go_agg_cov::utils::{ConfigError, GateError, InputError, ParseError};
use std::io::Write;
use std::path::PathBuf;
use tempfile::NamedTempFile;

fn write_temp(content: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(content.as_bytes()).unwrap();
    file
}

fn cover_file() -> NamedTempFile {
    write_temp("mode: set\nx.go:1.1,3.2 10 1\nx.go:4.1,6.2 5 0\ny.go:1.1,2.2 10 0\n")
}

#[test]
fn test_validate_args_rejects_bad_threshold() {
    let args = AnalyzeArgs {
        cover_file: PathBuf::from("cover.out"),
        min_threshold: Some(101.0),
        ..Default::default()
    };

    assert_eq!(validate_args(&args), Err(ConfigError::ThresholdOutOfRange(101.0)));
}

#[test]
fn test_analyze_all_files() {
    let cover = cover_file();
    let args = AnalyzeArgs {
        cover_file: cover.path().to_path_buf(),
        ..Default::default()
    };

    let result = execute_analyze(&args).unwrap();
    assert_eq!(result.statements_total, 25);
    assert_eq!(result.statements_covered, 10);
    assert_eq!(result.percentage, 40.0);
}

#[test]
fn test_analyze_business_logic_passes_threshold() {
    let cover = cover_file();
    let list = write_temp("x.go\n");
    let args = AnalyzeArgs {
        cover_file: cover.path().to_path_buf(),
        business_logic_file: Some(list.path().to_path_buf()),
        min_threshold: Some(60.0),
        ..Default::default()
    };

    let result = execute_analyze(&args).unwrap();
    assert_eq!(result.statements_total, 15);
    assert_eq!(result.statements_covered, 10);
}

#[test]
fn test_analyze_threshold_breach() {
    let cover = cover_file();
    let args = AnalyzeArgs {
        cover_file: cover.path().to_path_buf(),
        min_threshold: Some(80.0),
        ..Default::default()
    };

    let err = execute_analyze(&args).unwrap_err();
    assert!(matches!(
        err.downcast_ref::<GateError>(),
        Some(GateError::ThresholdNotReached { .. })
    ));
}

#[test]
fn test_analyze_filter_matching_nothing() {
    let cover = cover_file();
    let list = write_temp("z.go\n");
    let args = AnalyzeArgs {
        cover_file: cover.path().to_path_buf(),
        business_logic_file: Some(list.path().to_path_buf()),
        ..Default::default()
    };

    let err = execute_analyze(&args).unwrap_err();
    assert_eq!(err.downcast_ref::<GateError>(), Some(&GateError::NotANumber));
}

#[test]
fn test_analyze_missing_business_logic_file() {
    let cover = cover_file();
    let args = AnalyzeArgs {
        cover_file: cover.path().to_path_buf(),
        business_logic_file: Some(PathBuf::from("/nonexistent/business.txt")),
        ..Default::default()
    };

    let err = execute_analyze(&args).unwrap_err();
    assert!(err.downcast_ref::<InputError>().is_some());
}

#[test]
fn test_analyze_unparsable_cover_file() {
    let cover = write_temp("not a cover profile\n");
    let args = AnalyzeArgs {
        cover_file: cover.path().to_path_buf(),
        ..Default::default()
    };

    let err = execute_analyze(&args).unwrap_err();
    assert!(matches!(
        err.downcast_ref::<ParseError>(),
        Some(ParseError::MissingMode { .. })
    ));
}

#[test]
fn test_analyze_writes_report_even_when_gate_fails() {
    let cover = cover_file();
    let dir = tempfile::tempdir().unwrap();
    let report_path = dir.path().join("out/coverage.json");
    let args = AnalyzeArgs {
        cover_file: cover.path().to_path_buf(),
        min_threshold: Some(90.0),
        output_json: Some(report_path.clone()),
        print_summary: true,
        ..Default::default()
    };

    assert!(execute_analyze(&args).is_err());

    let report = read_report(&report_path).unwrap();
    assert_eq!(report.statements, 25);
    assert_eq!(report.statements_covered, 10);
    assert_eq!(report.percentage, Some(40.0));
    assert_eq!(report.min_threshold, Some(90.0));
    assert_eq!(report.business_logic_files, None);
    assert_eq!(report.files.len(), 2);
}

#[test]
fn test_analyze_statement_overflow_is_input_error() {
    let cover = write_temp("mode: set\na.go:1.1,2.2 18446744073709551615 1\na.go:3.1,4.2 1 1\n");
    let args = AnalyzeArgs {
        cover_file: cover.path().to_path_buf(),
        ..Default::default()
    };

    let err = execute_analyze(&args).unwrap_err();
    assert!(matches!(
        err.downcast_ref::<InputError>(),
        Some(InputError::StatementCountOverflow { .. })
    ));
    assert!(err.downcast_ref::<GateError>().is_none());
}
