//! Score aggregation across all files of a report.
//!
//! overall   = mean(overallScore) over every file
//! dimension = mean(per-file dimension score) over the files reporting it
//!
//! A file that reports a dimension more than once contributes the mean of
//! its own entries, so every file carries equal weight.

use std::collections::BTreeMap;

use qgate_core::errors::ReportError;
use serde::{Deserialize, Serialize};

use super::types::AnalysisReport;

/// Aggregate score for one dimension.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DimensionAggregate {
    pub mean: f64,
    /// Number of files that reported this dimension.
    pub files: usize,
}

/// Aggregates computed once per report and shared by every gate.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReportAggregates {
    pub file_count: usize,
    pub overall: f64,
    pub dimensions: BTreeMap<String, DimensionAggregate>,
}

impl ReportAggregates {
    /// Mean score for `dimension`, if any file reported it.
    pub fn dimension(&self, dimension: &str) -> Option<f64> {
        self.dimensions.get(dimension).map(|d| d.mean)
    }

    /// Resolve a gate target: a dimension aggregate, or the overall score.
    pub fn resolve(&self, dimension: Option<&str>) -> Option<f64> {
        match dimension {
            Some(d) => self.dimension(d),
            None => Some(self.overall),
        }
    }
}

#[derive(Default)]
struct Accumulator {
    sum: f64,
    count: usize,
}

impl Accumulator {
    fn add(&mut self, value: f64) {
        self.sum += value;
        self.count += 1;
    }

    fn mean(&self) -> f64 {
        self.sum / self.count as f64
    }
}

/// Compute overall and per-dimension aggregates.
///
/// Fails only for an empty report, where no mean is defined.
pub fn aggregate(report: &AnalysisReport) -> Result<ReportAggregates, ReportError> {
    if report.is_empty() {
        return Err(ReportError::Empty);
    }

    let mut overall = Accumulator::default();
    let mut across_files: BTreeMap<&str, Accumulator> = BTreeMap::new();

    for file in &report.files {
        overall.add(file.overall_score);

        let mut within_file: BTreeMap<&str, Accumulator> = BTreeMap::new();
        for result in &file.results {
            within_file
                .entry(result.dimension.as_str())
                .or_default()
                .add(result.score);
        }
        for (dimension, acc) in within_file {
            across_files.entry(dimension).or_default().add(acc.mean());
        }
    }

    let dimensions: BTreeMap<String, DimensionAggregate> = across_files
        .into_iter()
        .map(|(dimension, acc)| {
            (
                dimension.to_string(),
                DimensionAggregate {
                    mean: acc.mean(),
                    files: acc.count,
                },
            )
        })
        .collect();

    for (dimension, agg) in &dimensions {
        tracing::debug!(dimension = %dimension, mean = agg.mean, files = agg.files, "dimension aggregate");
    }
    tracing::debug!(overall = overall.mean(), files = overall.count, "overall aggregate");

    Ok(ReportAggregates {
        file_count: overall.count,
        overall: overall.mean(),
        dimensions,
    })
}
