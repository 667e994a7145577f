//! Reporters — output formats for gate evaluations.

pub mod console;
pub mod json;
pub mod junit;

use crate::enforcement::gates::Evaluation;

/// Trait for report generation.
pub trait Reporter: Send + Sync {
    fn name(&self) -> &'static str;
    fn generate(&self, evaluation: &Evaluation) -> Result<String, String>;
}

/// Create a reporter by format name. `use_color` only affects `console`.
pub fn create_reporter(format: &str, use_color: bool) -> Option<Box<dyn Reporter>> {
    match format {
        "console" => Some(Box::new(console::ConsoleReporter::new(use_color))),
        "json" => Some(Box::new(json::JsonReporter)),
        "junit" => Some(Box::new(junit::JUnitReporter::new())),
        _ => None,
    }
}

/// List all available reporter format names.
pub fn available_formats() -> &'static [&'static str] {
    &["console", "json", "junit"]
}
