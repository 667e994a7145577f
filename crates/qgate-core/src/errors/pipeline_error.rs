//! Top-level run errors.

use super::error_code::{self, QgateErrorCode};
use super::{ConfigError, GateError, ProducerError, ReportError};

/// Errors that abort a gate run.
/// Aggregates subsystem errors via `From` conversions.
#[derive(Debug, thiserror::Error)]
pub enum PipelineError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Report error: {0}")]
    Report(#[from] ReportError),

    #[error("Producer error: {0}")]
    Producer(#[from] ProducerError),

    #[error("Gate error: {0}")]
    Gate(#[from] GateError),

    #[error("Failed to render {format} output: {message}")]
    Render { format: String, message: String },

    #[error("Failed to write output {path}: {source}")]
    Output {
        path: String,
        #[source]
        source: std::io::Error,
    },
}

impl QgateErrorCode for PipelineError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::Config(e) => e.error_code(),
            Self::Report(e) => e.error_code(),
            Self::Producer(e) => e.error_code(),
            Self::Gate(e) => e.error_code(),
            Self::Render { .. } | Self::Output { .. } => error_code::OUTPUT_ERROR,
        }
    }
}
