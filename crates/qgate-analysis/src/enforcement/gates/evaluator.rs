//! Gate evaluator — resolve each gate's score and fold a verdict.

use qgate_core::config::{default_gates, validate_gates, QgateConfig};
use qgate_core::errors::{GateError, PipelineError, ReportError};

use super::types::*;
use crate::report::{aggregate, AnalysisReport, ReportAggregates, ReportSource};

/// Evaluates an ordered gate list against report aggregates.
///
/// Every gate is evaluated, in order, regardless of earlier failures.
#[derive(Debug, Clone)]
pub struct GateEvaluator {
    gates: Vec<QualityGate>,
    fail_on: FailOn,
}

impl GateEvaluator {
    /// Create an evaluator for `gates`, which must pass `validate_gates`.
    pub fn new(gates: Vec<QualityGate>) -> Result<Self, GateError> {
        validate_gates(&gates)?;
        Ok(Self {
            gates,
            fail_on: FailOn::default(),
        })
    }

    /// Create an evaluator with the compiled-in default gates.
    pub fn with_default_gates() -> Self {
        Self {
            gates: default_gates(),
            fail_on: FailOn::default(),
        }
    }

    /// Create an evaluator from resolved configuration.
    pub fn from_config(config: &QgateConfig) -> Result<Self, GateError> {
        Ok(Self::new(config.gates())?.with_fail_on(config.fail_on()))
    }

    pub fn with_fail_on(mut self, fail_on: FailOn) -> Self {
        self.fail_on = fail_on;
        self
    }

    pub fn gates(&self) -> &[QualityGate] {
        &self.gates
    }

    pub fn fail_on(&self) -> FailOn {
        self.fail_on
    }

    /// Evaluate all gates against precomputed aggregates.
    pub fn evaluate(&self, aggregates: &ReportAggregates) -> Evaluation {
        let outcomes: Vec<GateOutcome> = self
            .gates
            .iter()
            .map(|gate| self.evaluate_gate(gate, aggregates))
            .collect();

        let verdict = Verdict::from_statuses(outcomes.iter().map(|o| &o.status));
        tracing::info!(
            verdict = %verdict,
            passed = outcomes.iter().filter(|o| o.passed).count(),
            total = outcomes.len(),
            "quality gates evaluated"
        );

        Evaluation {
            verdict,
            fail_on: self.fail_on,
            outcomes,
            aggregates: aggregates.clone(),
        }
    }

    /// Aggregate `report` and evaluate all gates.
    pub fn evaluate_report(&self, report: &AnalysisReport) -> Result<Evaluation, ReportError> {
        let aggregates = aggregate(report)?;
        Ok(self.evaluate(&aggregates))
    }

    /// Obtain the report from `source` (generating it if needed) and evaluate.
    pub fn run(&self, source: &ReportSource) -> Result<Evaluation, PipelineError> {
        let obtained = source.obtain()?;
        if obtained.generated {
            tracing::info!(path = %source.path().display(), "using freshly generated report");
        }
        Ok(self.evaluate_report(&obtained.report)?)
    }

    fn evaluate_gate(&self, gate: &QualityGate, aggregates: &ReportAggregates) -> GateOutcome {
        let resolved = aggregates.resolve(gate.dimension.as_deref());
        let missing_dimension = resolved.is_none();
        if missing_dimension {
            tracing::warn!(
                gate = %gate.name,
                dimension = gate.dimension.as_deref().unwrap_or_default(),
                "dimension not present in report, scoring as 0"
            );
        }
        let score = resolved.unwrap_or(0.0);
        let passed = score >= gate.threshold;

        let status = if passed {
            GateStatus::Passed
        } else if gate.critical || self.fail_on == FailOn::Any {
            GateStatus::Failed
        } else {
            GateStatus::Warned
        };

        match status {
            GateStatus::Passed => tracing::debug!(gate = %gate.name, score, threshold = gate.threshold, "gate passed"),
            GateStatus::Warned => tracing::warn!(gate = %gate.name, score, threshold = gate.threshold, "advisory gate failed"),
            GateStatus::Failed => tracing::warn!(gate = %gate.name, score, threshold = gate.threshold, critical = gate.critical, "blocking gate failed"),
        }

        GateOutcome {
            name: gate.name.clone(),
            dimension: gate.dimension.clone(),
            score,
            threshold: gate.threshold,
            critical: gate.critical,
            passed,
            status,
            missing_dimension,
        }
    }
}

impl Default for GateEvaluator {
    fn default() -> Self {
        Self::with_default_gates()
    }
}
