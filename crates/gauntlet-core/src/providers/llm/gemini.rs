use super::ModelClient;
use crate::errors::ModelError;
use async_trait::async_trait;
use serde_json::json;

/// Harm categories whose provider-side blocking is disabled. The harness
/// is adversarial by design and must observe unfiltered model behavior.
const UNBLOCKED_HARM_CATEGORIES: [&str; 4] = [
    "HARM_CATEGORY_HATE_SPEECH",
    "HARM_CATEGORY_HARASSMENT",
    "HARM_CATEGORY_SEXUALLY_EXPLICIT",
    "HARM_CATEGORY_DANGEROUS_CONTENT",
];

pub struct GeminiClient {
    pub model: String,
    api_key: String,
    client: reqwest::Client,
}

impl GeminiClient {
    pub fn new(model: String, api_key: String) -> Self {
        Self {
            model,
            api_key,
            client: reqwest::Client::new(),
        }
    }
}

#[async_trait]
impl ModelClient for GeminiClient {
    async fn complete(&self, prompt: &str) -> Result<String, ModelError> {
        let url = format!(
            "https://generativelanguage.googleapis.com/v1beta/models/{}:generateContent",
            self.model
        );

        let safety_settings: Vec<serde_json::Value> = UNBLOCKED_HARM_CATEGORIES
            .iter()
            .map(|category| json!({ "category": category, "threshold": "BLOCK_NONE" }))
            .collect();

        let body = json!({
            "contents": [{ "parts": [{ "text": prompt }] }],
            "safetySettings": safety_settings,
        });

        let resp = self
            .client
            .post(&url)
            .header("x-goog-api-key", &self.api_key)
            .header("Content-Type", "application/json")
            .json(&body)
            .send()
            .await?;

        let status = resp.status();
        if !status.is_success() {
            let body = resp.text().await.unwrap_or_else(|_| String::new());
            return Err(ModelError::Endpoint {
                status: status.as_u16(),
                body,
            });
        }

        let json: serde_json::Value = resp.json().await?;

        // Parse candidates[0].content.parts[0].text
        json.pointer("/candidates/0/content/parts/0/text")
            .and_then(|v| v.as_str())
            .map(str::to_string)
            .ok_or(ModelError::MalformedPayload)
    }

    fn provider_name(&self) -> &'static str {
        "gemini"
    }
}
