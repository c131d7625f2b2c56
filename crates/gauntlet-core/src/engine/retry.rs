use std::fmt::Display;
use std::future::Future;
use std::time::Duration;
use tracing::warn;

/// Bounded-attempt exponential backoff around a fallible async call:
/// 2 total attempts, base delay 1s, doubling per attempt, capped at 3s.
/// Every error is treated as retryable; after the cap the final error
/// propagates to the caller unmodified.
#[derive(Debug, Clone)]
pub struct RetryPolicy {
    pub max_attempts: u32,
    pub base_delay: Duration,
    pub multiplier: u32,
    pub max_delay: Duration,
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self {
            max_attempts: 2,
            base_delay: Duration::from_secs(1),
            multiplier: 2,
            max_delay: Duration::from_secs(3),
        }
    }
}

impl RetryPolicy {
    /// Delay slept after failed attempt `attempt` (1-based).
    pub fn backoff_for(&self, attempt: u32) -> Duration {
        let exp = self.multiplier.saturating_pow(attempt.saturating_sub(1));
        self.base_delay.saturating_mul(exp).min(self.max_delay)
    }

    pub async fn call<T, E, F, Fut>(&self, mut f: F) -> Result<T, E>
    where
        F: FnMut() -> Fut,
        Fut: Future<Output = Result<T, E>>,
        E: Display,
    {
        let mut attempt = 1u32;
        loop {
            match f().await {
                Ok(value) => return Ok(value),
                Err(e) if attempt < self.max_attempts => {
                    let delay = self.backoff_for(attempt);
                    warn!(
                        attempt,
                        delay_ms = delay.as_millis() as u64,
                        error = %e,
                        "model call failed, retrying"
                    );
                    tokio::time::sleep(delay).await;
                    attempt += 1;
                }
                Err(e) => return Err(e),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};

    fn fast_policy() -> RetryPolicy {
        RetryPolicy {
            max_attempts: 2,
            base_delay: Duration::from_millis(1),
            multiplier: 2,
            max_delay: Duration::from_millis(3),
        }
    }

    #[test]
    fn backoff_doubles_and_caps() {
        let policy = RetryPolicy::default();
        assert_eq!(policy.backoff_for(1), Duration::from_secs(1));
        assert_eq!(policy.backoff_for(2), Duration::from_secs(2));
        assert_eq!(policy.backoff_for(3), Duration::from_secs(3));
        assert_eq!(policy.backoff_for(4), Duration::from_secs(3));
    }

    #[tokio::test]
    async fn first_success_makes_a_single_attempt() {
        let calls = AtomicUsize::new(0);
        let calls = &calls;
        let res: Result<u32, String> = fast_policy()
            .call(|| async move {
                calls.fetch_add(1, Ordering::SeqCst);
                Ok(7)
            })
            .await;
        assert_eq!(res.expect("succeeds"), 7);
        assert_eq!(calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn failure_then_success_recovers_on_second_attempt() {
        let calls = AtomicUsize::new(0);
        let calls = &calls;
        let res: Result<u32, String> = fast_policy()
            .call(|| async move {
                if calls.fetch_add(1, Ordering::SeqCst) == 0 {
                    Err("transient".to_string())
                } else {
                    Ok(7)
                }
            })
            .await;
        assert_eq!(res.expect("second attempt succeeds"), 7);
        assert_eq!(calls.load(Ordering::SeqCst), 2);
    }

    #[tokio::test]
    async fn exhausted_attempts_propagate_the_final_error() {
        let calls = AtomicUsize::new(0);
        let calls = &calls;
        let res: Result<u32, String> = fast_policy()
            .call(|| async move {
                let n = calls.fetch_add(1, Ordering::SeqCst);
                Err::<u32, String>(format!("boom {}", n))
            })
            .await;
        assert_eq!(calls.load(Ordering::SeqCst), 2);
        assert_eq!(res.expect_err("exhausts attempts"), "boom 1");
    }
}
