//! JUnit XML reporter — standard JUnit XML schema output.
//!
//! Each gate maps to a `<testcase>`. Failed gates carry a `<failure>` whose
//! type is `critical` when blocking and `warning` when advisory.

use super::Reporter;
use crate::enforcement::gates::{Evaluation, GateStatus};

/// JUnit XML reporter.
pub struct JUnitReporter;

impl JUnitReporter {
    pub fn new() -> Self {
        Self
    }

    fn escape_xml(s: &str) -> String {
        s.replace('&', "&amp;")
            .replace('<', "&lt;")
            .replace('>', "&gt;")
            .replace('"', "&quot;")
            .replace('\'', "&apos;")
    }
}

impl Default for JUnitReporter {
    fn default() -> Self {
        Self::new()
    }
}

impl Reporter for JUnitReporter {
    fn name(&self) -> &'static str {
        "junit"
    }

    fn generate(&self, evaluation: &Evaluation) -> Result<String, String> {
        let total = evaluation.outcomes.len();
        let failures = evaluation.outcomes.iter().filter(|o| !o.passed).count();

        let mut xml = String::new();
        xml.push_str("<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n");
        xml.push_str(&format!(
            "<testsuites name=\"qgate\" tests=\"{total}\" failures=\"{failures}\" errors=\"0\">\n"
        ));
        xml.push_str(&format!(
            "  <testsuite name=\"quality-gates\" tests=\"{total}\" failures=\"{failures}\" errors=\"0\">\n"
        ));

        for outcome in &evaluation.outcomes {
            let classname = match outcome.dimension {
                Some(ref d) => format!("qgate.dimension.{}", Self::escape_xml(d)),
                None => "qgate.overall".to_string(),
            };
            xml.push_str(&format!(
                "    <testcase name=\"{}\" classname=\"{}\"",
                Self::escape_xml(&outcome.name),
                classname
            ));

            if outcome.passed {
                xml.push_str(" />\n");
                continue;
            }

            let failure_type = match outcome.status {
                GateStatus::Failed if outcome.critical => "critical",
                GateStatus::Failed => "blocking",
                _ => "warning",
            };
            let mut message = format!(
                "score {:.1} below threshold {}",
                outcome.score, outcome.threshold
            );
            if outcome.missing_dimension {
                message.push_str(" (dimension not present in report)");
            }
            xml.push_str(">\n");
            xml.push_str(&format!(
                "      <failure message=\"{}\" type=\"{}\" />\n",
                Self::escape_xml(&message),
                failure_type
            ));
            xml.push_str("    </testcase>\n");
        }

        xml.push_str("  </testsuite>\n");
        xml.push_str("</testsuites>\n");
        Ok(xml)
    }
}
