//! Analysis report errors.

use super::error_code::{self, QgateErrorCode};

/// Errors that can occur while reading or validating an analysis report.
#[derive(Debug, thiserror::Error)]
pub enum ReportError {
    #[error("Analysis report not found: {path}")]
    NotFound { path: String },

    #[error("I/O error reading {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Malformed analysis report {path}: {message}")]
    Parse { path: String, message: String },

    #[error("Malformed analysis report: record #{index}{} is missing `{field}`", describe_file(.file))]
    MissingField {
        index: usize,
        file: Option<String>,
        field: &'static str,
    },

    #[error("Malformed analysis report: record #{index}{} has {field} = {value}, expected 0-100", describe_file(.file))]
    ScoreOutOfRange {
        index: usize,
        file: Option<String>,
        field: String,
        value: f64,
    },

    #[error("Malformed analysis report: record #{index}{} has a result with a blank dimension", describe_file(.file))]
    BlankDimension { index: usize, file: Option<String> },

    #[error("Analysis report contains no file records")]
    Empty,
}

fn describe_file(file: &Option<String>) -> String {
    match file {
        Some(f) => format!(" ({f})"),
        None => String::new(),
    }
}

impl QgateErrorCode for ReportError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::NotFound { .. } => error_code::REPORT_NOT_FOUND,
            Self::Io { .. } => error_code::REPORT_IO,
            _ => error_code::REPORT_MALFORMED,
        }
    }
}
