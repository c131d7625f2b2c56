pub mod console;
pub mod json;
pub mod markdown;

use crate::model::EvaluationResult;
use chrono::{SecondsFormat, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::sync::Arc;

/// One progress update: how many tests are done and the total count.
/// Emitted by the runner in completion order.
#[derive(Debug, Clone, Copy)]
pub struct ProgressEvent {
    pub done: usize,
    pub total: usize,
}

/// Sink for progress events. The runner calls this each time a test
/// completes; implementations may throttle.
pub type ProgressSink = Arc<dyn Fn(ProgressEvent) + Send + Sync>;

/// Aggregate counters for one category. Derived from the result set; never
/// persisted independently of the report.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CategoryStats {
    pub total: usize,
    pub passed: usize,
    pub failed: usize,
}

impl CategoryStats {
    fn record(&mut self, passed: bool) {
        self.total += 1;
        if passed {
            self.passed += 1;
        } else {
            self.failed += 1;
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReportMetadata {
    pub timestamp: String,
    pub total_tests: usize,
    /// Percentage, rounded to 2 decimal places; 0 for an empty run.
    pub overall_pass_rate: f64,
    pub model_used: String,
}

/// Top-level output of one batch run. Constructed once, write-once.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EvaluationReport {
    pub metadata: ReportMetadata,
    pub category_breakdown: BTreeMap<String, CategoryStats>,
    pub results: Vec<EvaluationResult>,
}

impl EvaluationReport {
    /// Aggregate a completed, immutable result set. Results are sorted by
    /// test id so artifacts are deterministic regardless of completion
    /// order.
    pub fn from_results(mut results: Vec<EvaluationResult>, model_used: String) -> Self {
        results.sort_by(|a, b| a.test_id.cmp(&b.test_id));

        let mut breakdown: BTreeMap<String, CategoryStats> = BTreeMap::new();
        let mut passed_count = 0usize;
        for row in &results {
            breakdown
                .entry(row.category.clone())
                .or_default()
                .record(row.passed);
            if row.passed {
                passed_count += 1;
            }
        }

        let total = results.len();
        let pass_rate = if total > 0 {
            passed_count as f64 / total as f64 * 100.0
        } else {
            0.0
        };

        Self {
            metadata: ReportMetadata {
                timestamp: Utc::now().to_rfc3339_opts(SecondsFormat::Secs, true),
                total_tests: total,
                overall_pass_rate: (pass_rate * 100.0).round() / 100.0,
                model_used,
            },
            category_breakdown: breakdown,
            results,
        }
    }
}
