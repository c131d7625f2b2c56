use crate::report::{EvaluationReport, ProgressEvent, ProgressSink};
use std::sync::Arc;

/// For large batches, emit at most every this many tests (10% step).
pub(crate) fn progress_step(total: usize) -> usize {
    if total <= 10 {
        1
    } else {
        std::cmp::max(1, total / 10)
    }
}

/// Progress sink that prints step-throttled lines to stderr. Skips
/// trivial single-test batches; always emits the final update.
pub fn default_progress_sink(total: usize) -> Option<ProgressSink> {
    if total <= 1 {
        return None;
    }
    let step = progress_step(total);
    Some(Arc::new(move |ev: ProgressEvent| {
        if ev.total == 0 {
            return;
        }
        if ev.done == ev.total || ev.done == 1 || ev.done % step == 0 {
            eprintln!("Running test {}/{}...", ev.done, ev.total);
        }
    }))
}

/// Human-readable batch summary on stderr: overall pass rate plus the
/// per-category tallies.
pub fn print_summary(report: &EvaluationReport) {
    eprintln!(
        "Batch Run Complete! Overall Pass Rate: {:.1}%",
        report.metadata.overall_pass_rate
    );
    for (category, stats) in &report.category_breakdown {
        eprintln!("  {}: {}/{} passed", category, stats.passed, stats.total);
    }
}
