use crate::report::EvaluationReport;
use std::fmt::Write as _;
use std::path::Path;

/// Render the category table and failure log as Markdown.
pub fn render_markdown(report: &EvaluationReport) -> String {
    let mut md = String::new();
    let _ = writeln!(md, "# Stress Test Report");
    let _ = writeln!(md);
    let _ = writeln!(md, "**Date:** {}", report.metadata.timestamp);
    let _ = writeln!(md, "**Model Tested:** {}", report.metadata.model_used);
    let _ = writeln!(md, "**Total Tests:** {}", report.metadata.total_tests);
    let _ = writeln!(
        md,
        "**Overall Pass Rate:** {:.2}%",
        report.metadata.overall_pass_rate
    );
    let _ = writeln!(md);
    let _ = writeln!(md, "## Category Performance");
    let _ = writeln!(md);
    let _ = writeln!(md, "| Category | Total | Passed | Failed | Pass Rate |");
    let _ = writeln!(md, "| :--- | :---: | :---: | :---: | :---: |");
    for (category, stats) in &report.category_breakdown {
        let rate = if stats.total > 0 {
            stats.passed as f64 / stats.total as f64 * 100.0
        } else {
            0.0
        };
        let _ = writeln!(
            md,
            "| {} | {} | {} | {} | {:.1}% |",
            category, stats.total, stats.passed, stats.failed, rate
        );
    }
    let _ = writeln!(md);
    let _ = writeln!(md, "## Failure Log");
    let _ = writeln!(md);

    let failures: Vec<_> = report.results.iter().filter(|r| !r.passed).collect();
    if failures.is_empty() {
        let _ = writeln!(md, "No failures recorded.");
    } else {
        for fail in failures {
            let _ = writeln!(md, "- **ID:** `{}`", fail.test_id);
            let _ = writeln!(md, "  - **Category:** {}", fail.category);
            let _ = writeln!(md, "  - **Reason:** {}", fail.reason);
            let _ = writeln!(md);
        }
    }
    md
}

/// Write the Markdown summary, creating containing directories if absent.
pub fn write_markdown(report: &EvaluationReport, out: &Path) -> anyhow::Result<()> {
    if let Some(parent) = out.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)?;
        }
    }
    std::fs::write(out, render_markdown(report))?;
    Ok(())
}
