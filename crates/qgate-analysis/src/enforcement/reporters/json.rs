//! JSON reporter — structured JSON output.

use serde_json::json;

use super::Reporter;
use crate::enforcement::gates::Evaluation;

/// JSON reporter for machine-readable output.
pub struct JsonReporter;

impl Reporter for JsonReporter {
    fn name(&self) -> &'static str {
        "json"
    }

    fn generate(&self, evaluation: &Evaluation) -> Result<String, String> {
        let gates: Vec<serde_json::Value> = evaluation
            .outcomes
            .iter()
            .map(|o| {
                json!({
                    "name": o.name,
                    "dimension": o.dimension,
                    "score": o.score,
                    "threshold": o.threshold,
                    "critical": o.critical,
                    "passed": o.passed,
                    "status": o.status,
                    "missing_dimension": o.missing_dimension,
                })
            })
            .collect();

        let output = json!({
            "verdict": evaluation.verdict,
            "should_proceed": evaluation.should_proceed(),
            "exit_code": evaluation.exit_code(),
            "fail_on": evaluation.fail_on,
            "gate_count": evaluation.outcomes.len(),
            "passed_count": evaluation.passed_count(),
            "aggregates": evaluation.aggregates,
            "gates": gates,
        });

        serde_json::to_string_pretty(&output).map_err(|e| e.to_string())
    }
}
