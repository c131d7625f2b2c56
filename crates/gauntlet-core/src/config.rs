use std::time::Duration;

pub const DEFAULT_MODEL: &str = "gemini-2.0-flash";
pub const DEFAULT_CONCURRENCY: usize = 5;
pub const DEFAULT_REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Explicit run configuration passed into the runner's constructor. The
/// core never reads the process environment; `from_env` exists for the CLI
/// layer and library callers that want the conventional variable.
#[derive(Debug, Clone)]
pub struct HarnessConfig {
    /// API credential for the live endpoint. Absent (or a "mock"-prefixed
    /// placeholder) forces the offline adapter with no network code path.
    pub api_key: Option<String>,
    /// Target model identifier, fixed at construction.
    pub model: String,
    /// Maximum simultaneous in-flight model calls.
    pub concurrency: usize,
    /// When set, only the first `limit` tests (in input order) are run.
    pub limit: Option<usize>,
    /// Per-call ceiling around each adapter attempt.
    pub request_timeout: Duration,
    /// Optional wall-clock ceiling for the whole batch. Unbounded when
    /// absent; tests still in flight at the deadline are marked failed.
    pub deadline: Option<Duration>,
    /// Force the deterministic offline adapter even with a credential.
    pub mock: bool,
}

impl Default for HarnessConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            model: DEFAULT_MODEL.to_string(),
            concurrency: DEFAULT_CONCURRENCY,
            limit: None,
            request_timeout: DEFAULT_REQUEST_TIMEOUT,
            deadline: None,
            mock: false,
        }
    }
}

impl HarnessConfig {
    /// Defaults plus the `GEMINI_API_KEY` credential, when present.
    pub fn from_env() -> Self {
        Self {
            api_key: std::env::var("GEMINI_API_KEY").ok(),
            ..Self::default()
        }
    }

    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }

    pub fn with_concurrency(mut self, concurrency: usize) -> Self {
        self.concurrency = concurrency;
        self
    }

    pub fn with_limit(mut self, limit: Option<usize>) -> Self {
        self.limit = limit;
        self
    }

    pub fn with_deadline(mut self, deadline: Option<Duration>) -> Self {
        self.deadline = deadline;
        self
    }

    /// Adapter selection happens once, at construction of the client.
    pub fn use_mock(&self) -> bool {
        self.mock
            || match &self.api_key {
                None => true,
                Some(key) => key.starts_with("mock"),
            }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_credential_forces_mock_mode() {
        let cfg = HarnessConfig::default();
        assert!(cfg.use_mock());
    }

    #[test]
    fn placeholder_credential_forces_mock_mode() {
        let cfg = HarnessConfig {
            api_key: Some("mock-gemini-key".into()),
            ..HarnessConfig::default()
        };
        assert!(cfg.use_mock());
    }

    #[test]
    fn real_credential_selects_live_mode() {
        let cfg = HarnessConfig {
            api_key: Some("AIza-real-key".into()),
            ..HarnessConfig::default()
        };
        assert!(!cfg.use_mock());
        assert!(cfg.with_model("gemini-1.5-pro").model == "gemini-1.5-pro");
    }
}
