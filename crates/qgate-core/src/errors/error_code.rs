//! QgateErrorCode trait for stable, machine-matchable error codes.

/// Every error enum implements this to expose a structured error code
/// alongside its human-readable message.
pub trait QgateErrorCode {
    /// Returns the error code string (e.g., "REPORT_MALFORMED").
    fn error_code(&self) -> &'static str;

    /// Returns the formatted error string: `[ERROR_CODE] message`.
    fn coded_string(&self) -> String
    where
        Self: std::fmt::Display,
    {
        format!("[{}] {}", self.error_code(), self)
    }
}

pub const CONFIG_ERROR: &str = "CONFIG_ERROR";
pub const REPORT_NOT_FOUND: &str = "REPORT_NOT_FOUND";
pub const REPORT_IO: &str = "REPORT_IO";
pub const REPORT_MALFORMED: &str = "REPORT_MALFORMED";
pub const PRODUCER_FAILED: &str = "PRODUCER_FAILED";
pub const GATE_CONFIG_ERROR: &str = "GATE_CONFIG_ERROR";
pub const OUTPUT_ERROR: &str = "OUTPUT_ERROR";
