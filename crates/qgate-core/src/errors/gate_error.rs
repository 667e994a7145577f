//! Quality gate definition errors.

use super::error_code::{self, QgateErrorCode};

/// Errors raised while validating a gate list.
///
/// Evaluation itself cannot fail once the report is well-formed, so every
/// variant here describes a configuration problem.
#[derive(Debug, thiserror::Error)]
pub enum GateError {
    #[error("No quality gates configured")]
    NoGates,

    #[error("Gate #{index} has a blank name")]
    BlankName { index: usize },

    #[error("Duplicate gate name: {name}")]
    DuplicateName { name: String },

    #[error("Gate {name}: threshold {threshold} must be between 0 and 100")]
    InvalidThreshold { name: String, threshold: f64 },

    #[error("Gate {name}: dimension must not be blank when set")]
    BlankDimension { name: String },
}

impl QgateErrorCode for GateError {
    fn error_code(&self) -> &'static str {
        error_code::GATE_CONFIG_ERROR
    }
}
