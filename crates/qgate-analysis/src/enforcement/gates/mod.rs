//! Quality gates — threshold checks over report aggregates.

pub mod evaluator;
pub mod types;

pub use evaluator::GateEvaluator;
pub use types::*;
