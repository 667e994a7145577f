//! Tests for qgate error types and error codes.

use qgate_core::errors::{
    ConfigError, GateError, PipelineError, ProducerError, QgateErrorCode, ReportError,
};

#[test]
fn test_report_error_codes() {
    let not_found = ReportError::NotFound {
        path: "r.json".to_string(),
    };
    assert_eq!(not_found.error_code(), "REPORT_NOT_FOUND");

    let missing = ReportError::MissingField {
        index: 2,
        file: Some("src/app.ts".to_string()),
        field: "overallScore",
    };
    assert_eq!(missing.error_code(), "REPORT_MALFORMED");
    assert_eq!(
        missing.to_string(),
        "Malformed analysis report: record #2 (src/app.ts) is missing `overallScore`"
    );
}

#[test]
fn test_missing_field_without_file_label() {
    let missing = ReportError::MissingField {
        index: 0,
        file: None,
        field: "results",
    };
    assert_eq!(
        missing.to_string(),
        "Malformed analysis report: record #0 is missing `results`"
    );
}

#[test]
fn test_pipeline_error_delegates_code() {
    let err: PipelineError = ProducerError::NotConfigured {
        path: "r.json".to_string(),
    }
    .into();
    assert_eq!(err.error_code(), "PRODUCER_FAILED");
    assert!(err.coded_string().starts_with("[PRODUCER_FAILED] "));

    let err: PipelineError = GateError::NoGates.into();
    assert_eq!(err.error_code(), "GATE_CONFIG_ERROR");

    let err: PipelineError = ConfigError::FileNotFound {
        path: "qgate.toml".to_string(),
    }
    .into();
    assert_eq!(err.error_code(), "CONFIG_ERROR");
}
