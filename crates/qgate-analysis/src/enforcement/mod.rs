//! Enforcement — quality gate evaluation and verdict reporting.

pub mod gates;
pub mod reporters;
