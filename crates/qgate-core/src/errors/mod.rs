//! Error handling for qgate.
//! One error enum per subsystem, `thiserror` only, zero `anyhow`.

pub mod config_error;
pub mod error_code;
pub mod gate_error;
pub mod pipeline_error;
pub mod producer_error;
pub mod report_error;

pub use config_error::ConfigError;
pub use error_code::QgateErrorCode;
pub use gate_error::GateError;
pub use pipeline_error::PipelineError;
pub use producer_error::ProducerError;
pub use report_error::ReportError;
