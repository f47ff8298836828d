//! Plain-text rendering of coverage results for stdout.

use crate::aggregator::{AggregationResult, FileCoverage};

/// One-line result: statements, covered statements, percentage
pub fn format_result(result: &AggregationResult) -> String {
    match result.percentage_opt() {
        Some(pct) => format!(
            "Nb Statements: {} Covered: {} Coverage percentage: {:.2} %",
            result.statements_total, result.statements_covered, pct
        ),
        None => format!(
            "Nb Statements: {} Covered: {} Coverage percentage: NaN",
            result.statements_total, result.statements_covered
        ),
    }
}

/// Per-file table, worst coverage first
pub fn format_file_table(files: &[FileCoverage]) -> String {
    let mut rows: Vec<&FileCoverage> = files.iter().collect();
    rows.sort_by(|a, b| {
        let pa = a.result.percentage_opt().unwrap_or(f64::INFINITY);
        let pb = b.result.percentage_opt().unwrap_or(f64::INFINITY);
        pa.total_cmp(&pb).then_with(|| a.file_name.cmp(&b.file_name))
    });

    let width = rows
        .iter()
        .map(|f| f.file_name.len())
        .max()
        .unwrap_or(0)
        .max("File".len());

    let mut out = format!("{:<width$}  {:>10}  {:>10}  {:>8}\n", "File", "Statements", "Covered", "Percent");
    for f in rows {
        let pct = f
            .result
            .percentage_opt()
            .map(|p| format!("{:.2}%", p))
            .unwrap_or_else(|| "-".to_string());
        out.push_str(&format!(
            "{:<width$}  {:>10}  {:>10}  {:>8}\n",
            f.file_name, f.result.statements_total, f.result.statements_covered, pct
        ));
    }
    out
}
