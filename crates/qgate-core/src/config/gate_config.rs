//! Quality gate configuration.

use std::collections::HashSet;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::errors::{ConfigError, GateError};

/// A single threshold check against an aggregate score.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QualityGate {
    pub name: String,
    /// Minimum acceptable score (0-100). The gate passes when `score >= threshold`.
    pub threshold: f64,
    /// Dimension to check. `None` checks the overall score.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dimension: Option<String>,
    /// A failing critical gate blocks the run; other failures are advisory.
    #[serde(default)]
    pub critical: bool,
}

impl QualityGate {
    pub fn overall(name: impl Into<String>, threshold: f64, critical: bool) -> Self {
        Self {
            name: name.into(),
            threshold,
            dimension: None,
            critical,
        }
    }

    pub fn dimension(
        name: impl Into<String>,
        dimension: impl Into<String>,
        threshold: f64,
        critical: bool,
    ) -> Self {
        Self {
            name: name.into(),
            threshold,
            dimension: Some(dimension.into()),
            critical,
        }
    }
}

/// The compiled-in gate list used when no gates are configured.
pub fn default_gates() -> Vec<QualityGate> {
    vec![
        QualityGate::overall("Overall Code Quality", 75.0, true),
        QualityGate::dimension("Security", "Security", 80.0, true),
        QualityGate::dimension("Maintainability", "Maintainability", 70.0, false),
        QualityGate::dimension("Performance", "Performance", 70.0, false),
        QualityGate::dimension("Architecture", "Architecture", 70.0, false),
    ]
}

/// Check a gate list: non-empty, unique non-blank names, thresholds in 0-100.
pub fn validate_gates(gates: &[QualityGate]) -> Result<(), GateError> {
    if gates.is_empty() {
        return Err(GateError::NoGates);
    }
    let mut seen = HashSet::new();
    for (index, gate) in gates.iter().enumerate() {
        if gate.name.trim().is_empty() {
            return Err(GateError::BlankName { index });
        }
        if !seen.insert(gate.name.as_str()) {
            return Err(GateError::DuplicateName {
                name: gate.name.clone(),
            });
        }
        if !gate.threshold.is_finite() || !(0.0..=100.0).contains(&gate.threshold) {
            return Err(GateError::InvalidThreshold {
                name: gate.name.clone(),
                threshold: gate.threshold,
            });
        }
        if gate.dimension.as_deref().is_some_and(|d| d.trim().is_empty()) {
            return Err(GateError::BlankDimension {
                name: gate.name.clone(),
            });
        }
    }
    Ok(())
}

/// Which gate failures block the run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FailOn {
    /// Only critical gate failures block; advisory failures warn.
    #[default]
    Critical,
    /// Any gate failure blocks.
    Any,
}

impl FailOn {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Critical => "critical",
            Self::Any => "any",
        }
    }
}

impl fmt::Display for FailOn {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for FailOn {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "critical" => Ok(Self::Critical),
            "any" => Ok(Self::Any),
            other => Err(ConfigError::InvalidValue {
                field: "quality_gates.fail_on".to_string(),
                message: format!("expected \"critical\" or \"any\", got \"{other}\""),
            }),
        }
    }
}

/// Configuration for the quality gates subsystem.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct GateConfig {
    /// Fail level: "critical" | "any". Default: "critical".
    pub fail_on: Option<String>,
    /// Configured gates. Unset means the compiled defaults; an explicit
    /// list, even an empty one, replaces them.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gates: Option<Vec<QualityGate>>,
}

impl GateConfig {
    /// Returns the effective fail level, defaulting to `FailOn::Critical`.
    pub fn effective_fail_on(&self) -> Result<FailOn, ConfigError> {
        self.fail_on
            .as_deref()
            .map_or(Ok(FailOn::default()), FailOn::from_str)
    }

    /// Returns the configured gates, or the defaults when none are set.
    pub fn effective_gates(&self) -> Vec<QualityGate> {
        self.gates.clone().unwrap_or_else(default_gates)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_valid() {
        assert!(validate_gates(&default_gates()).is_ok());
    }

    #[test]
    fn fail_on_parses_case_insensitively() {
        assert_eq!("ANY".parse::<FailOn>().unwrap(), FailOn::Any);
        assert_eq!(" critical ".parse::<FailOn>().unwrap(), FailOn::Critical);
        assert!("warning".parse::<FailOn>().is_err());
    }

    #[test]
    fn unset_gates_fall_back_to_defaults() {
        let config = GateConfig::default();
        assert_eq!(config.effective_gates(), default_gates());

        let explicit = GateConfig {
            gates: Some(Vec::new()),
            ..Default::default()
        };
        assert!(explicit.effective_gates().is_empty());
    }

    #[test]
    fn rejects_nan_threshold() {
        let gates = vec![QualityGate::overall("Overall", f64::NAN, true)];
        assert!(matches!(
            validate_gates(&gates),
            Err(GateError::InvalidThreshold { .. })
        ));
    }
}
