pub mod gemini;
pub mod mock;

use crate::config::HarnessConfig;
use crate::errors::ModelError;
use async_trait::async_trait;
use std::sync::Arc;

/// Uniform asynchronous interface over a text-generation endpoint.
#[async_trait]
pub trait ModelClient: Send + Sync {
    async fn complete(&self, prompt: &str) -> Result<String, ModelError>;
    fn provider_name(&self) -> &'static str;
}

/// Select the adapter variant once, at construction. Mock mode never
/// constructs a transport, so no code path can attempt network access.
pub fn client_for(cfg: &HarnessConfig) -> Arc<dyn ModelClient> {
    if cfg.use_mock() {
        Arc::new(mock::MockClient::new(cfg.model.clone()))
    } else {
        Arc::new(gemini::GeminiClient::new(
            cfg.model.clone(),
            cfg.api_key.clone().unwrap_or_default(),
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_without_credential_selects_mock() {
        let client = client_for(&HarnessConfig::default());
        assert_eq!(client.provider_name(), "mock");
    }

    #[test]
    fn config_with_credential_selects_gemini() {
        let cfg = HarnessConfig {
            api_key: Some("AIza-test".into()),
            ..HarnessConfig::default()
        };
        let client = client_for(&cfg);
        assert_eq!(client.provider_name(), "gemini");
    }
}
