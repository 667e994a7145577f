//! Configuration system for qgate.
//! TOML-based, layered resolution: CLI > env > project file > defaults.

pub mod gate_config;
pub mod qgate_config;
pub mod report_config;

pub use gate_config::{default_gates, validate_gates, FailOn, GateConfig, QualityGate};
pub use qgate_config::{CliOverrides, QgateConfig};
pub use report_config::ReportConfig;
