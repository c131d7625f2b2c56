use super::ReasoningDataset;
use crate::errors::DatasetError;
use crate::model::TestCase;
use serde::Deserialize;
use std::path::Path;
use tracing::info;

/// Accepted document shapes, normalized to one flat sequence: an object
/// wrapping tests under "tests", a bare sequence, or a single bare record.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum PromptDocument {
    Wrapped(ReasoningDataset),
    List(Vec<TestCase>),
    Single(Box<TestCase>),
}

impl PromptDocument {
    fn into_tests(self) -> Vec<TestCase> {
        match self {
            Self::Wrapped(dataset) => dataset.tests,
            Self::List(tests) => tests,
            Self::Single(tc) => vec![*tc],
        }
    }
}

/// Load one dataset document. Malformed JSON is fatal: there is nothing
/// meaningful to evaluate.
pub fn load_file(path: &Path) -> Result<Vec<TestCase>, DatasetError> {
    let raw = std::fs::read_to_string(path).map_err(|source| DatasetError::Io {
        path: path.display().to_string(),
        source,
    })?;
    let doc: PromptDocument =
        serde_json::from_str(&raw).map_err(|source| DatasetError::Parse {
            path: path.display().to_string(),
            source,
        })?;
    let tests = doc.into_tests();
    info!(count = tests.len(), path = %path.display(), "loaded tests");
    Ok(tests)
}

/// Merge every `*.json` document found in a directory, in lexicographic
/// order so runs are reproducible.
pub fn load_dir(dir: &Path) -> Result<Vec<TestCase>, DatasetError> {
    let entries = std::fs::read_dir(dir).map_err(|source| DatasetError::Io {
        path: dir.display().to_string(),
        source,
    })?;

    let mut paths: Vec<_> = entries
        .filter_map(|entry| entry.ok().map(|e| e.path()))
        .filter(|p| p.extension().is_some_and(|ext| ext == "json"))
        .collect();
    paths.sort();

    let mut tests = Vec::new();
    for path in &paths {
        tests.extend(load_file(path)?);
    }
    info!(count = tests.len(), dir = %dir.display(), "loaded tests from directory");
    Ok(tests)
}
