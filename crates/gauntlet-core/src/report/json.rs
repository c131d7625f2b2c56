use crate::report::EvaluationReport;
use std::path::Path;

/// Well-known location for the latest run's structured results.
pub const DEFAULT_REPORT_PATH: &str = "reports/latest_evaluation_run.json";

/// Write the report as pretty JSON, creating containing directories if
/// absent.
pub fn write_report(report: &EvaluationReport, out: &Path) -> anyhow::Result<()> {
    if let Some(parent) = out.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)?;
        }
    }
    std::fs::write(out, serde_json::to_string_pretty(report)?)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn writes_report_and_creates_directories() {
        let dir = tempfile::tempdir().expect("tempdir");
        let out = dir.path().join("reports/latest_evaluation_run.json");

        let report = EvaluationReport::from_results(Vec::new(), "mock".into());
        write_report(&report, &out).expect("write succeeds");

        let raw = std::fs::read_to_string(&out).expect("report exists");
        let parsed: EvaluationReport = serde_json::from_str(&raw).expect("round-trips");
        assert_eq!(parsed.metadata.model_used, "mock");
        assert_eq!(parsed.metadata.total_tests, 0);
    }
}
