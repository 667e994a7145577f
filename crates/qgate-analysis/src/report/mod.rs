//! Analysis reports — model, loading, aggregation, and lazy production.

pub mod aggregate;
pub mod loader;
pub mod producer;
pub mod source;
pub mod types;

pub use aggregate::{aggregate, DimensionAggregate, ReportAggregates};
pub use loader::{load_report, parse_report};
pub use producer::{CommandProducer, FnProducer, ReportProducer};
pub use source::{Obtained, ReportSource};
pub use types::{AnalysisReport, DimensionResult, FileAnalysis};
