//! Report producer errors.

use super::error_code::{self, QgateErrorCode};

/// Errors from the external report producer.
#[derive(Debug, thiserror::Error)]
pub enum ProducerError {
    #[error("No analysis report at {path} and no report producer is configured")]
    NotConfigured { path: String },

    #[error("Regeneration of {path} requested but no report producer is configured")]
    RegenerateUnavailable { path: String },

    #[error("Failed to start report producer `{program}`: {source}")]
    Spawn {
        program: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Report producer `{program}` exited with {status}: {stderr}")]
    CommandFailed {
        program: String,
        status: String,
        stderr: String,
    },

    #[error("Report producer `{producer}` finished but did not write {path}")]
    NoReportWritten { producer: String, path: String },

    #[error("Report producer `{producer}` failed: {message}")]
    Failed { producer: String, message: String },
}

impl QgateErrorCode for ProducerError {
    fn error_code(&self) -> &'static str {
        error_code::PRODUCER_FAILED
    }
}
