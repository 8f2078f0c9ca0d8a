use colored::Colorize;

use loupe_core::types::{AnalysisResult, BatchResult};

/// Format a batch result for terminal output.
pub fn format_report(batch: &BatchResult) -> String {
    let mut out = String::new();

    out.push_str(&format!(
        "\n{}\n",
        "loupe - Component Structure Analysis".bold()
    ));
    out.push_str(&format!("{}\n\n", "=".repeat(44)));

    for (path, result) in &batch.results {
        out.push_str(&format_file_line(path, result));
    }

    out.push_str(&format!(
        "\n{}: {}/{} files analyzed\n",
        "Summary".bold(),
        batch.succeeded,
        batch.total,
    ));

    out
}

fn format_file_line(path: &str, result: &AnalysisResult) -> String {
    let mut out = String::new();

    if result.success {
        let (props, bindings, children) = result
            .structure
            .as_ref()
            .map(|s| {
                (
                    s.props.len(),
                    s.bindings.len(),
                    s.composition.child_components.len(),
                )
            })
            .unwrap_or((0, 0, 0));
        out.push_str(&format!(
            "  {} {path}: {props} props, {bindings} bindings, {children} children, \
             cyclomatic {}, MI {}\n",
            "PASS".green().bold(),
            result.metrics.cyclomatic,
            result.metrics.maintainability_index,
        ));
    } else {
        let detail = result
            .errors
            .first()
            .map(|f| f.to_string())
            .unwrap_or_else(|| "unknown failure".to_string());
        out.push_str(&format!("  {} {path}: {detail}\n", "FAIL".red().bold()));
    }

    for warning in &result.warnings {
        out.push_str(&format!("       {} {warning}\n", "warn:".yellow()));
    }

    out
}

/// Format a check result. Returns (report, passed); a check passes only when
/// every file analyzed successfully.
pub fn format_check(batch: &BatchResult) -> (String, bool) {
    let mut out = format_report(batch);
    let passed = batch.succeeded == batch.total;

    if passed {
        out.push_str(&format!("\n{}\n", "CHECK PASSED".green().bold()));
    } else {
        out.push_str(&format!(
            "\n{} ({} of {} files failed)\n",
            "CHECK FAILED".red().bold(),
            batch.total - batch.succeeded,
            batch.total,
        ));
    }

    (out, passed)
}

/// Format the full result map as JSON.
pub fn format_json(batch: &BatchResult, compact: bool) -> String {
    if compact {
        serde_json::to_string(batch).expect("BatchResult should be serializable")
    } else {
        serde_json::to_string_pretty(batch).expect("BatchResult should be serializable")
    }
}
