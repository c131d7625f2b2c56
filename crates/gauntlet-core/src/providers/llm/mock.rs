use super::ModelClient;
use crate::errors::ModelError;
use async_trait::async_trait;
use std::time::Duration;

const DEFAULT_LATENCY: Duration = Duration::from_millis(500);

/// Deterministic offline adapter. Pattern-matches on the prompt to return
/// one of a small fixed set of canned responses after a simulated network
/// delay; never fails.
#[derive(Debug)]
pub struct MockClient {
    model: String,
    latency: Duration,
}

impl MockClient {
    pub fn new(model: String) -> Self {
        Self {
            model,
            latency: DEFAULT_LATENCY,
        }
    }

    pub fn with_latency(mut self, latency: Duration) -> Self {
        self.latency = latency;
        self
    }

    pub fn model(&self) -> &str {
        &self.model
    }

    fn canned_response(prompt: &str) -> &'static str {
        let lower = prompt.to_lowercase();
        // Location question first: it necessarily contains the letter 't',
        // so the constraint branch would otherwise shadow it.
        if prompt.contains("Where is the") {
            "The coin is in the pocket."
        } else if lower.contains('z') || lower.contains('t') || prompt.contains("Exactly") {
            "This response contains the letter t. Or fails the rule."
        } else {
            "This is a perfect response that is likely to pass basic inclusion checks."
        }
    }
}

#[async_trait]
impl ModelClient for MockClient {
    async fn complete(&self, prompt: &str) -> Result<String, ModelError> {
        // Simulate network latency; the only suspension point in mock mode.
        tokio::time::sleep(self.latency).await;
        Ok(Self::canned_response(prompt).to_string())
    }

    fn provider_name(&self) -> &'static str {
        "mock"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn canned_responses_are_deterministic() {
        let client = MockClient::new("gemini-2.0-flash".into()).with_latency(Duration::ZERO);
        let a = client.complete("Where is the coin right now?").await.expect("mock never fails");
        let b = client.complete("Where is the coin right now?").await.expect("mock never fails");
        assert_eq!(a, b);
        assert_eq!(a, "The coin is in the pocket.");
    }

    #[tokio::test]
    async fn constraint_prompts_get_the_violating_response() {
        let client = MockClient::new("gemini-2.0-flash".into()).with_latency(Duration::ZERO);
        let res = client
            .complete("Do not use the letter 'z' anywhere in your response.")
            .await
            .expect("mock never fails");
        assert!(res.contains("letter t"));
    }

    #[tokio::test]
    async fn bland_prompts_get_the_inclusion_friendly_response() {
        let client = MockClient::new("gemini-2.0-flash".into()).with_latency(Duration::ZERO);
        let res = client.complete("Describe a sunny day.").await.expect("mock never fails");
        assert!(res.contains("perfect response"));
    }
}
