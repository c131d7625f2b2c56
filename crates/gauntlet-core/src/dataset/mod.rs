pub mod generator;
pub mod loader;

use crate::model::TestCase;
use serde::{Deserialize, Serialize};

/// Canonical on-disk shape of a generated dataset: tests wrapped under a
/// "tests" key. The loader additionally tolerates bare sequences and bare
/// single records.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReasoningDataset {
    pub tests: Vec<TestCase>,
}
