//! Top-level qgate configuration with layered resolution.

use std::path::Path;

use serde::{Deserialize, Serialize};

use super::{validate_gates, FailOn, GateConfig, QualityGate, ReportConfig};
use crate::errors::ConfigError;

/// File name looked up in the project root.
pub const PROJECT_CONFIG_FILE: &str = "qgate.toml";

/// Top-level configuration aggregating all sub-configs.
///
/// Resolution order (highest priority first):
/// 1. CLI flags (applied via `apply_cli_overrides`)
/// 2. Environment variables (`QGATE_*`)
/// 3. Project config (`qgate.toml` in project root, or an explicit path)
/// 4. Compiled defaults
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct QgateConfig {
    pub report: ReportConfig,
    pub quality_gates: GateConfig,
}

/// CLI override arguments that can be applied to a config.
#[derive(Debug, Clone, Default)]
pub struct CliOverrides {
    pub report_path: Option<String>,
    pub fail_on: Option<String>,
    pub auto_generate: Option<bool>,
}

impl QgateConfig {
    /// Load configuration with layered resolution.
    ///
    /// `config_path`, when given, must exist; otherwise `qgate.toml` in
    /// `root` is used if present.
    pub fn load(
        root: &Path,
        config_path: Option<&Path>,
        cli_overrides: Option<&CliOverrides>,
    ) -> Result<Self, ConfigError> {
        let mut config = Self::default();

        // Layer 3: project config
        match config_path {
            Some(path) => Self::merge_toml_file(&mut config, path)?,
            None => {
                let project_config_path = root.join(PROJECT_CONFIG_FILE);
                if project_config_path.exists() {
                    Self::merge_toml_file(&mut config, &project_config_path)?;
                }
            }
        }

        // Layer 2: environment variables
        Self::apply_env_overrides(&mut config);

        // Layer 1 (highest priority): CLI flags
        if let Some(cli) = cli_overrides {
            Self::apply_cli_overrides(&mut config, cli);
        }

        Self::validate(&config)?;

        tracing::debug!(
            report = config.report.effective_path(),
            gates = config.quality_gates.effective_gates().len(),
            "configuration resolved"
        );
        Ok(config)
    }

    /// Load configuration from a TOML string (for testing).
    pub fn from_toml(toml_str: &str) -> Result<Self, ConfigError> {
        toml::from_str(toml_str).map_err(|e| ConfigError::ParseError {
            path: "<string>".to_string(),
            message: e.to_string(),
        })
    }

    /// Validate the configuration values.
    pub fn validate(config: &QgateConfig) -> Result<(), ConfigError> {
        config.quality_gates.effective_fail_on()?;
        validate_gates(&config.quality_gates.effective_gates()).map_err(|e| {
            ConfigError::ValidationFailed {
                field: "quality_gates.gates".to_string(),
                message: e.to_string(),
            }
        })?;
        if let Some(program) = config.report.producer.first() {
            if program.trim().is_empty() {
                return Err(ConfigError::ValidationFailed {
                    field: "report.producer".to_string(),
                    message: "program must not be blank".to_string(),
                });
            }
        }
        if config.report.effective_path().trim().is_empty() {
            return Err(ConfigError::ValidationFailed {
                field: "report.path".to_string(),
                message: "must not be blank".to_string(),
            });
        }
        Ok(())
    }

    /// The gate list to evaluate.
    pub fn gates(&self) -> Vec<QualityGate> {
        self.quality_gates.effective_gates()
    }

    /// The fail policy. Only valid after `validate`.
    pub fn fail_on(&self) -> FailOn {
        self.quality_gates.effective_fail_on().unwrap_or_default()
    }

    /// Merge a TOML file into the existing config.
    /// Unknown keys are silently ignored (forward-compatible).
    fn merge_toml_file(config: &mut QgateConfig, path: &Path) -> Result<(), ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|_| ConfigError::FileNotFound {
            path: path.display().to_string(),
        })?;

        let file_config: QgateConfig =
            toml::from_str(&content).map_err(|e| ConfigError::ParseError {
                path: path.display().to_string(),
                message: e.to_string(),
            })?;

        Self::merge(config, &file_config);
        Ok(())
    }

    /// Merge `other` into `base`, where `other` values override `base` values
    /// only when `other` has a value.
    fn merge(base: &mut QgateConfig, other: &QgateConfig) {
        // Report
        if other.report.path.is_some() {
            base.report.path = other.report.path.clone();
        }
        if !other.report.producer.is_empty() {
            base.report.producer = other.report.producer.clone();
        }
        if other.report.auto_generate.is_some() {
            base.report.auto_generate = other.report.auto_generate;
        }

        // Quality gates
        if other.quality_gates.fail_on.is_some() {
            base.quality_gates.fail_on = other.quality_gates.fail_on.clone();
        }
        if other.quality_gates.gates.is_some() {
            base.quality_gates.gates = other.quality_gates.gates.clone();
        }
    }

    /// Apply environment variable overrides: `QGATE_REPORT_PATH`, `QGATE_FAIL_ON`.
    fn apply_env_overrides(config: &mut QgateConfig) {
        if let Ok(val) = std::env::var("QGATE_REPORT_PATH") {
            if !val.trim().is_empty() {
                config.report.path = Some(val);
            }
        }
        if let Ok(val) = std::env::var("QGATE_FAIL_ON") {
            config.quality_gates.fail_on = Some(val);
        }
    }

    /// Apply CLI overrides (highest priority).
    fn apply_cli_overrides(config: &mut QgateConfig, cli: &CliOverrides) {
        if let Some(ref v) = cli.report_path {
            config.report.path = Some(v.clone());
        }
        if let Some(ref v) = cli.fail_on {
            config.quality_gates.fail_on = Some(v.clone());
        }
        if let Some(v) = cli.auto_generate {
            config.report.auto_generate = Some(v);
        }
    }

    /// Serialize the config back to TOML.
    pub fn to_toml(&self) -> Result<String, ConfigError> {
        toml::to_string_pretty(self).map_err(|e| ConfigError::ParseError {
            path: "<serialization>".to_string(),
            message: e.to_string(),
        })
    }
}
