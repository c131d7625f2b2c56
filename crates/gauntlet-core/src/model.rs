use serde::{Deserialize, Serialize};

fn default_test_id() -> String {
    "unknown".to_string()
}

fn default_category() -> String {
    "Uncategorized".to_string()
}

/// One evaluation unit: a generated prompt plus its scoring context.
/// Produced by the generator or loaded from a prompt document; immutable
/// once admitted to a batch run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TestCase {
    #[serde(default = "default_test_id")]
    pub id: String,
    /// Free-text tag selecting the grading strategy. Preserved verbatim in
    /// results and the category breakdown.
    #[serde(default = "default_category")]
    pub category: String,
    /// Sent to the model verbatim.
    #[serde(default)]
    pub prompt: String,
    /// Ground-truth string or descriptive rubric, depending on category.
    #[serde(default)]
    pub expected_answer: String,
    /// Documentation only; never consumed by scoring.
    #[serde(default)]
    pub common_failure_mode: String,
    /// Present only for multimodal categories; rendering concern.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
}

/// Outcome of scoring one test case. Created exactly once per admitted
/// test, pass or fail, and never mutated afterwards.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EvaluationResult {
    pub test_id: String,
    pub category: String,
    pub prompt: String,
    pub expected_answer: String,
    /// Raw model output, or "ERROR: <message>" when the call ultimately
    /// failed after retries.
    pub actual_answer: String,
    pub score: f64,
    pub passed: bool,
    pub reason: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_case_defaults_fill_missing_fields() {
        let tc: TestCase = serde_json::from_str("{}").expect("empty object parses");
        assert_eq!(tc.id, "unknown");
        assert_eq!(tc.category, "Uncategorized");
        assert_eq!(tc.prompt, "");
        assert_eq!(tc.expected_answer, "");
        assert!(tc.image_url.is_none());
    }

    #[test]
    fn image_url_is_omitted_when_absent() {
        let tc = TestCase {
            id: "t1".into(),
            category: "State-Tracking".into(),
            prompt: "Where is the coin?".into(),
            expected_answer: "The coin is in the pocket.".into(),
            common_failure_mode: String::new(),
            image_url: None,
        };
        let json = serde_json::to_string(&tc).expect("serializes");
        assert!(!json.contains("image_url"));
    }
}
