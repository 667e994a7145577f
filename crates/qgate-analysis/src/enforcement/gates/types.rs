//! Core types for quality gates.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::report::ReportAggregates;

pub use qgate_core::config::{FailOn, QualityGate};

/// Per-gate status after evaluation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GateStatus {
    Passed,
    /// Failed and blocking.
    Failed,
    /// Failed but advisory.
    Warned,
}

/// Result of checking one gate.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GateOutcome {
    pub name: String,
    pub dimension: Option<String>,
    pub score: f64,
    pub threshold: f64,
    pub critical: bool,
    pub passed: bool,
    pub status: GateStatus,
    /// The gate's dimension never appeared in the report; `score` is 0.
    pub missing_dimension: bool,
}

/// Tri-state outcome of a whole run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Verdict {
    Passed,
    PassedWithWarnings,
    Blocked,
}

impl Verdict {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Passed => "passed",
            Self::PassedWithWarnings => "passed_with_warnings",
            Self::Blocked => "blocked",
        }
    }

    /// Whether CI should proceed. False only when blocked.
    pub fn should_proceed(&self) -> bool {
        !matches!(self, Self::Blocked)
    }

    /// Process exit code: 1 when blocked, 0 otherwise.
    pub fn exit_code(&self) -> u8 {
        if self.should_proceed() {
            0
        } else {
            1
        }
    }

    /// Fold gate statuses into a verdict.
    pub fn from_statuses<'a>(statuses: impl IntoIterator<Item = &'a GateStatus>) -> Self {
        let mut verdict = Self::Passed;
        for status in statuses {
            match status {
                GateStatus::Failed => return Self::Blocked,
                GateStatus::Warned => verdict = Self::PassedWithWarnings,
                GateStatus::Passed => {}
            }
        }
        verdict
    }
}

impl fmt::Display for Verdict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Full result of evaluating a gate list against one report.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Evaluation {
    pub verdict: Verdict,
    pub fail_on: FailOn,
    /// Outcomes in configured gate order.
    pub outcomes: Vec<GateOutcome>,
    pub aggregates: ReportAggregates,
}

impl Evaluation {
    pub fn should_proceed(&self) -> bool {
        self.verdict.should_proceed()
    }

    pub fn exit_code(&self) -> u8 {
        self.verdict.exit_code()
    }

    pub fn passed_count(&self) -> usize {
        self.outcomes.iter().filter(|o| o.passed).count()
    }

    /// Gates whose failure blocks the run.
    pub fn blocking_failures(&self) -> impl Iterator<Item = &GateOutcome> {
        self.outcomes
            .iter()
            .filter(|o| o.status == GateStatus::Failed)
    }

    /// Gates that failed as advisory warnings.
    pub fn warnings(&self) -> impl Iterator<Item = &GateOutcome> {
        self.outcomes
            .iter()
            .filter(|o| o.status == GateStatus::Warned)
    }
}
