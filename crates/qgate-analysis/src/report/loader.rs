//! Report loading and validation.
//!
//! Records are deserialized with every field optional, then validated one by
//! one so that a missing field is reported with its record index instead of
//! silently skewing an average.

use std::io::ErrorKind;
use std::path::Path;

use qgate_core::errors::ReportError;
use serde::Deserialize;

use super::types::{AnalysisReport, DimensionResult, FileAnalysis};

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawFileAnalysis {
    #[serde(default, alias = "path", alias = "filePath")]
    file: Option<String>,
    #[serde(default)]
    overall_score: Option<f64>,
    #[serde(default)]
    results: Option<Vec<RawDimensionResult>>,
}

#[derive(Debug, Deserialize)]
struct RawDimensionResult {
    #[serde(default)]
    dimension: Option<String>,
    #[serde(default)]
    score: Option<f64>,
}

/// Read and validate the report at `path`.
pub fn load_report(path: &Path) -> Result<AnalysisReport, ReportError> {
    let text = std::fs::read_to_string(path).map_err(|e| match e.kind() {
        ErrorKind::NotFound => ReportError::NotFound {
            path: path.display().to_string(),
        },
        _ => ReportError::Io {
            path: path.display().to_string(),
            source: e,
        },
    })?;
    let report = parse_report(&text, &path.display().to_string())?;
    tracing::info!(
        path = %path.display(),
        files = report.len(),
        "loaded analysis report"
    );
    Ok(report)
}

/// Parse and validate report JSON. `origin` labels parse errors.
pub fn parse_report(text: &str, origin: &str) -> Result<AnalysisReport, ReportError> {
    let raw: Vec<RawFileAnalysis> =
        serde_json::from_str(text).map_err(|e| ReportError::Parse {
            path: origin.to_string(),
            message: e.to_string(),
        })?;

    if raw.is_empty() {
        return Err(ReportError::Empty);
    }

    let files = raw
        .into_iter()
        .enumerate()
        .map(|(index, record)| validate_record(index, record))
        .collect::<Result<Vec<_>, _>>()?;

    Ok(AnalysisReport::new(files))
}

fn validate_record(index: usize, raw: RawFileAnalysis) -> Result<FileAnalysis, ReportError> {
    let file = raw.file;
    let overall_score = raw.overall_score.ok_or_else(|| ReportError::MissingField {
        index,
        file: file.clone(),
        field: "overallScore",
    })?;
    check_range(index, &file, "overallScore", overall_score)?;

    let raw_results = raw.results.ok_or_else(|| ReportError::MissingField {
        index,
        file: file.clone(),
        field: "results",
    })?;

    let mut results = Vec::with_capacity(raw_results.len());
    for result in raw_results {
        let dimension = result.dimension.ok_or_else(|| ReportError::MissingField {
            index,
            file: file.clone(),
            field: "results.dimension",
        })?;
        if dimension.trim().is_empty() {
            return Err(ReportError::BlankDimension { index, file });
        }
        let score = result.score.ok_or_else(|| ReportError::MissingField {
            index,
            file: file.clone(),
            field: "results.score",
        })?;
        check_range(index, &file, &format!("{dimension} score"), score)?;
        results.push(DimensionResult { dimension, score });
    }

    Ok(FileAnalysis {
        file,
        overall_score,
        results,
    })
}

fn check_range(
    index: usize,
    file: &Option<String>,
    field: &str,
    value: f64,
) -> Result<(), ReportError> {
    if value.is_finite() && (0.0..=100.0).contains(&value) {
        Ok(())
    } else {
        Err(ReportError::ScoreOutOfRange {
            index,
            file: file.clone(),
            field: field.to_string(),
            value,
        })
    }
}
