//! qgate-core: errors, configuration, and tracing shared by the qgate crates.

pub mod config;
pub mod errors;
pub mod tracing;

pub use config::{CliOverrides, FailOn, GateConfig, QgateConfig, QualityGate, ReportConfig};
pub use errors::{
    ConfigError, GateError, PipelineError, ProducerError, QgateErrorCode, ReportError,
};
