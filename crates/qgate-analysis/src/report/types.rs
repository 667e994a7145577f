//! Core types for analysis reports.
//!
//! A report is produced by an external analyzer, one record per analyzed
//! source file:
//!
//! ```json
//! [ { "overallScore": 82, "results": [ { "dimension": "Security", "score": 90 } ] } ]
//! ```

use serde::{Deserialize, Serialize};

/// Score for one quality dimension of one file.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DimensionResult {
    pub dimension: String,
    pub score: f64,
}

impl DimensionResult {
    pub fn new(dimension: impl Into<String>, score: f64) -> Self {
        Self {
            dimension: dimension.into(),
            score,
        }
    }
}

/// Validated analysis record for one file.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FileAnalysis {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub file: Option<String>,
    pub overall_score: f64,
    pub results: Vec<DimensionResult>,
}

impl FileAnalysis {
    pub fn new(overall_score: f64, results: Vec<DimensionResult>) -> Self {
        Self {
            file: None,
            overall_score,
            results,
        }
    }

    pub fn with_file(mut self, file: impl Into<String>) -> Self {
        self.file = Some(file.into());
        self
    }
}

/// An immutable, validated analysis report in producer order.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AnalysisReport {
    pub files: Vec<FileAnalysis>,
}

impl AnalysisReport {
    pub fn new(files: Vec<FileAnalysis>) -> Self {
        Self { files }
    }

    pub fn len(&self) -> usize {
        self.files.len()
    }

    pub fn is_empty(&self) -> bool {
        self.files.is_empty()
    }
}
