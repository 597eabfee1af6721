//! Case files.
//!
//! JSON problem records: a list of `{ input, expectedOutput, isHidden }`
//! cases plus an optional per-case time budget.

use std::path::Path;

use serde::{Deserialize, Serialize};

use katabox_core::{Error, Result};

/// Default per-case wall-clock budget, in milliseconds.
pub const DEFAULT_TIME_LIMIT_MS: u64 = 2000;

/// One input/expected-output pair.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TestCase {
    pub input: String,
    #[serde(rename = "expectedOutput")]
    pub expected_output: String,
    /// Hidden cases are graded like any other but their expected and
    /// actual output never appear in reports.
    #[serde(default, rename = "isHidden")]
    pub is_hidden: bool,
}

/// A judge case file for a single exercise.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CaseFile {
    pub cases: Vec<TestCase>,
    #[serde(default = "default_time_limit", rename = "timeLimitMs")]
    pub time_limit_ms: u64,
}

fn default_time_limit() -> u64 {
    DEFAULT_TIME_LIMIT_MS
}

impl CaseFile {
    /// Load and validate a case file.
    pub fn load(path: &Path) -> Result<Self> {
        let raw = std::fs::read_to_string(path)?;
        let file: CaseFile = serde_json::from_str(&raw)?;
        if file.cases.is_empty() {
            return Err(Error::Cases(format!(
                "{}: contains no cases",
                path.display()
            )));
        }
        Ok(file)
    }
}
