use std::time::Duration;
use thiserror::Error;

/// The adapter's underlying call failed. Retried locally by the retry
/// policy; once attempts are exhausted the batch runner converts it into a
/// failed result rather than aborting the batch.
#[derive(Debug, Error)]
pub enum ModelError {
    #[error("request transport failed: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("model endpoint returned status {status}: {body}")]
    Endpoint { status: u16, body: String },
    #[error("model response missing candidate text")]
    MalformedPayload,
    #[error("model call timed out after {0:?}")]
    Timeout(Duration),
}

/// Malformed or unreadable input document. Fatal: surfaced to the operator
/// before any dispatch begins.
#[derive(Debug, Error)]
pub enum DatasetError {
    #[error("failed to read {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse {path}: {source}")]
    Parse {
        path: String,
        #[source]
        source: serde_json::Error,
    },
}
