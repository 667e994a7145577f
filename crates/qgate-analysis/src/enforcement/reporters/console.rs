//! Console reporter — one line per gate plus a verdict banner.

use super::Reporter;
use crate::enforcement::gates::{Evaluation, GateOutcome, GateStatus, Verdict};

/// Console reporter for human-readable terminal output.
pub struct ConsoleReporter {
    pub use_color: bool,
}

impl ConsoleReporter {
    pub fn new(use_color: bool) -> Self {
        Self { use_color }
    }

    fn status_symbol(&self, outcome: &GateOutcome) -> &'static str {
        if outcome.passed {
            "✓"
        } else {
            "✗"
        }
    }

    fn color_start(&self, status: &GateStatus) -> &'static str {
        if !self.use_color {
            return "";
        }
        match status {
            GateStatus::Passed => "\x1b[32m", // green
            GateStatus::Warned => "\x1b[33m", // yellow
            GateStatus::Failed => "\x1b[31m", // red
        }
    }

    fn color_end(&self) -> &'static str {
        if self.use_color {
            "\x1b[0m"
        } else {
            ""
        }
    }

    /// `✓ Security: 82.5/80 (critical)`
    pub fn format_outcome(&self, outcome: &GateOutcome) -> String {
        let critical = if outcome.critical { " (critical)" } else { "" };
        let no_data = if outcome.missing_dimension { " [no data]" } else { "" };
        format!(
            "{}{} {}: {:.1}/{}{}{}{}",
            self.color_start(&outcome.status),
            self.status_symbol(outcome),
            outcome.name,
            outcome.score,
            outcome.threshold,
            critical,
            no_data,
            self.color_end(),
        )
    }

    fn banner(&self, evaluation: &Evaluation) -> String {
        let (status, line) = match evaluation.verdict {
            Verdict::Blocked => (GateStatus::Failed, "Result: BLOCKED ✗"),
            Verdict::PassedWithWarnings => (GateStatus::Warned, "Result: PASSED WITH WARNINGS ⚠"),
            Verdict::Passed => (GateStatus::Passed, "Result: PASSED ✓"),
        };
        format!("{}{}{}", self.color_start(&status), line, self.color_end())
    }
}

impl Default for ConsoleReporter {
    fn default() -> Self {
        Self::new(true)
    }
}

impl Reporter for ConsoleReporter {
    fn name(&self) -> &'static str {
        "console"
    }

    fn generate(&self, evaluation: &Evaluation) -> Result<String, String> {
        let mut output = String::new();

        output.push_str("╔══════════════════════════════════════════╗\n");
        output.push_str("║         qgate Quality Gate Report        ║\n");
        output.push_str("╚══════════════════════════════════════════╝\n\n");

        for outcome in &evaluation.outcomes {
            output.push_str(&self.format_outcome(outcome));
            output.push('\n');
        }
        output.push('\n');

        let passed = evaluation.passed_count();
        let total = evaluation.outcomes.len();
        output.push_str(&format!(
            "─── Summary: {passed}/{total} gates passed across {} files ───\n",
            evaluation.aggregates.file_count
        ));

        let blocking: Vec<&str> = evaluation
            .blocking_failures()
            .map(|o| o.name.as_str())
            .collect();
        if !blocking.is_empty() {
            output.push_str(&format!("Blocking: {}\n", blocking.join(", ")));
        }
        let warnings: Vec<&str> = evaluation.warnings().map(|o| o.name.as_str()).collect();
        if !warnings.is_empty() {
            output.push_str(&format!("Warnings: {}\n", warnings.join(", ")));
        }

        output.push_str(&self.banner(evaluation));
        output.push('\n');
        Ok(output)
    }
}
