//! qgate-analysis: analysis reports, score aggregation, and quality gate enforcement.

pub mod enforcement;
pub mod report;
