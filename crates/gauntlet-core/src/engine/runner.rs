use crate::config::HarnessConfig;
use crate::engine::retry::RetryPolicy;
use crate::errors::ModelError;
use crate::model::{EvaluationResult, TestCase};
use crate::providers::llm::ModelClient;
use crate::report::{EvaluationReport, ProgressEvent, ProgressSink};
use crate::scoring;
use std::collections::HashSet;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::Semaphore;
use tokio::task::JoinSet;
use tokio::time::{timeout, timeout_at, Instant};
use tracing::{error, info};

/// Batch runner: dispatches test cases to the model with bounded
/// parallelism, routes responses to the scorer, and aggregates one report.
pub struct Runner {
    pub client: Arc<dyn ModelClient>,
    pub retry: RetryPolicy,
    pub config: HarnessConfig,
}

impl Runner {
    pub fn new(client: Arc<dyn ModelClient>, config: HarnessConfig) -> Self {
        Self {
            client,
            retry: RetryPolicy::default(),
            config,
        }
    }

    pub fn with_retry(mut self, retry: RetryPolicy) -> Self {
        self.retry = retry;
        self
    }

    /// Run the batch; results are collected in completion order and sorted
    /// by test id for deterministic artifacts. Every admitted test yields
    /// exactly one result, pass or fail — a per-test failure never aborts
    /// the batch. If `progress` is set, it is called after each completion.
    pub async fn run(
        &self,
        tests: &[TestCase],
        progress: Option<ProgressSink>,
    ) -> anyhow::Result<EvaluationReport> {
        let selected: Vec<TestCase> = match self.config.limit {
            Some(limit) => tests.iter().take(limit).cloned().collect(),
            None => tests.to_vec(),
        };
        let total = selected.len();
        info!(
            total,
            model = %self.config.model,
            provider = self.client.provider_name(),
            "starting evaluation batch"
        );

        let sem = Arc::new(Semaphore::new(self.config.concurrency.max(1)));
        let mut join_set = JoinSet::new();
        for tc in selected.iter().cloned() {
            let sem = sem.clone();
            let client = self.client.clone();
            let retry = self.retry.clone();
            let request_timeout = self.config.request_timeout;
            join_set.spawn(async move {
                // Admission gate: held for the full call, released on every
                // exit path via drop.
                let _permit = match sem.acquire_owned().await {
                    Ok(permit) => permit,
                    Err(_) => return failure_result(&tc, "admission gate closed", "API Exception"),
                };
                evaluate_one(client.as_ref(), &retry, request_timeout, &tc).await
            });
        }

        let deadline = self.config.deadline.map(|d| Instant::now() + d);
        let mut results: Vec<EvaluationResult> = Vec::with_capacity(total);
        let mut completed: HashSet<String> = HashSet::new();
        let mut deadline_hit = false;

        while !join_set.is_empty() {
            let next = match deadline {
                Some(at) => match timeout_at(at, join_set.join_next()).await {
                    Ok(next) => next,
                    Err(_) => {
                        deadline_hit = true;
                        join_set.abort_all();
                        // Tasks that finished before the abort landed still
                        // count; cancelled ones are synthesized below.
                        while let Some(res) = join_set.join_next().await {
                            if let Ok(row) = res {
                                completed.insert(row.test_id.clone());
                                results.push(row);
                            }
                        }
                        break;
                    }
                },
                None => join_set.join_next().await,
            };
            let Some(res) = next else { break };
            let row = match res {
                Ok(row) => row,
                Err(e) => {
                    error!(error = %e, "evaluation task failed to join");
                    EvaluationResult {
                        test_id: "unknown".into(),
                        category: "Uncategorized".into(),
                        prompt: String::new(),
                        expected_answer: String::new(),
                        actual_answer: format!("ERROR: {}", e),
                        score: 0.0,
                        passed: false,
                        reason: "API Exception".into(),
                    }
                }
            };
            completed.insert(row.test_id.clone());
            results.push(row);
            if let Some(sink) = &progress {
                sink(ProgressEvent {
                    done: results.len(),
                    total,
                });
            }
        }

        if deadline_hit {
            for tc in &selected {
                if !completed.contains(&tc.id) {
                    error!(test_id = %tc.id, "test still in flight at deadline");
                    results.push(failure_result(
                        tc,
                        "run deadline exceeded",
                        "Deadline Exceeded",
                    ));
                }
            }
        }

        let model_used = if self.config.use_mock() {
            "mock".to_string()
        } else {
            self.config.model.clone()
        };
        Ok(EvaluationReport::from_results(results, model_used))
    }
}

async fn evaluate_one(
    client: &dyn ModelClient,
    retry: &RetryPolicy,
    request_timeout: Duration,
    tc: &TestCase,
) -> EvaluationResult {
    info!(test_id = %tc.id, "sending prompt to model");
    let outcome = retry
        .call(|| {
            let call = client.complete(&tc.prompt);
            async move {
                match timeout(request_timeout, call).await {
                    Ok(res) => res,
                    Err(_) => Err(ModelError::Timeout(request_timeout)),
                }
            }
        })
        .await;

    match outcome {
        Ok(text) => {
            let graded = scoring::evaluate(&tc.category, &tc.prompt, &text, &tc.expected_answer);
            let passed = graded.score == 1.0;
            info!(test_id = %tc.id, passed, "received response");
            EvaluationResult {
                test_id: tc.id.clone(),
                category: tc.category.clone(),
                prompt: tc.prompt.clone(),
                expected_answer: tc.expected_answer.clone(),
                actual_answer: text,
                score: graded.score,
                passed,
                reason: graded.reason,
            }
        }
        Err(e) => {
            error!(test_id = %tc.id, error = %e, "evaluation failed");
            failure_result(tc, &e.to_string(), "API Exception")
        }
    }
}

fn failure_result(tc: &TestCase, message: &str, reason: &str) -> EvaluationResult {
    EvaluationResult {
        test_id: tc.id.clone(),
        category: tc.category.clone(),
        prompt: tc.prompt.clone(),
        expected_answer: tc.expected_answer.clone(),
        actual_answer: format!("ERROR: {}", message),
        score: 0.0,
        passed: false,
        reason: reason.to_string(),
    }
}
