//! Tests for report loading, validation, and aggregation.

use qgate_analysis::report::*;
use qgate_core::errors::ReportError;

fn file(overall: f64, results: &[(&str, f64)]) -> FileAnalysis {
    FileAnalysis::new(
        overall,
        results
            .iter()
            .map(|(d, s)| DimensionResult::new(*d, *s))
            .collect(),
    )
}

#[test]
fn test_overall_is_mean_of_files() {
    let report = AnalysisReport::new(vec![file(80.0, &[]), file(70.0, &[])]);
    let agg = aggregate(&report).unwrap();
    assert_eq!(agg.file_count, 2);
    assert!((agg.overall - 75.0).abs() < 1e-9);
}

#[test]
fn test_dimension_mean_ignores_files_without_it() {
    let report = AnalysisReport::new(vec![
        file(80.0, &[("Security", 90.0), ("Performance", 40.0)]),
        file(70.0, &[("Security", 60.0)]),
        file(60.0, &[]),
    ]);
    let agg = aggregate(&report).unwrap();

    let security = agg.dimensions["Security"];
    assert!((security.mean - 75.0).abs() < 1e-9);
    assert_eq!(security.files, 2);

    // Only one file reported Performance; the others must not drag it to ~13.3.
    let performance = agg.dimensions["Performance"];
    assert!((performance.mean - 40.0).abs() < 1e-9);
    assert_eq!(performance.files, 1);
}

#[test]
fn test_repeated_dimension_within_a_file_counts_once() {
    let report = AnalysisReport::new(vec![
        file(50.0, &[("Security", 100.0), ("Security", 80.0)]),
        file(50.0, &[("Security", 60.0)]),
    ]);
    let agg = aggregate(&report).unwrap();
    // (mean(100, 80) + 60) / 2 = 75
    assert!((agg.dimensions["Security"].mean - 75.0).abs() < 1e-9);
    assert_eq!(agg.dimensions["Security"].files, 2);
}

#[test]
fn test_resolve_targets() {
    let report = AnalysisReport::new(vec![file(64.0, &[("Security", 90.0)])]);
    let agg = aggregate(&report).unwrap();
    assert_eq!(agg.resolve(None), Some(64.0));
    assert_eq!(agg.resolve(Some("Security")), Some(90.0));
    assert_eq!(agg.resolve(Some("security")), None);
    assert_eq!(agg.resolve(Some("Architecture")), None);
}

#[test]
fn test_empty_report_cannot_be_aggregated() {
    assert!(matches!(
        aggregate(&AnalysisReport::default()),
        Err(ReportError::Empty)
    ));
}

#[test]
fn test_parse_valid_report() {
    let json = r#"[
        {"file": "src/a.ts", "overallScore": 80, "results": [{"dimension": "Security", "score": 90}]},
        {"overallScore": 70.5, "results": [], "extra": {"ignored": true}}
    ]"#;
    let report = parse_report(json, "inline").unwrap();
    assert_eq!(report.len(), 2);
    assert_eq!(report.files[0].file.as_deref(), Some("src/a.ts"));
    assert_eq!(report.files[0].results[0], DimensionResult::new("Security", 90.0));
    assert_eq!(report.files[1].overall_score, 70.5);
}

#[test]
fn test_missing_overall_score_names_record() {
    let json = r#"[
        {"overallScore": 80, "results": []},
        {"file": "src/b.ts", "results": []}
    ]"#;
    let err = parse_report(json, "inline").unwrap_err();
    match err {
        ReportError::MissingField { index, file, field } => {
            assert_eq!(index, 1);
            assert_eq!(file.as_deref(), Some("src/b.ts"));
            assert_eq!(field, "overallScore");
        }
        other => panic!("unexpected error: {other:?}"),
    }
}

#[test]
fn test_missing_results_is_malformed() {
    let err = parse_report(r#"[{"overallScore": 80}]"#, "inline").unwrap_err();
    assert!(matches!(
        err,
        ReportError::MissingField { index: 0, field: "results", .. }
    ));
}

#[test]
fn test_missing_result_score_is_malformed() {
    let err = parse_report(
        r#"[{"overallScore": 80, "results": [{"dimension": "Security"}]}]"#,
        "inline",
    )
    .unwrap_err();
    assert!(matches!(
        err,
        ReportError::MissingField { field: "results.score", .. }
    ));
}

#[test]
fn test_non_numeric_score_is_parse_error() {
    let err = parse_report(r#"[{"overallScore": "high", "results": []}]"#, "r.json").unwrap_err();
    match err {
        ReportError::Parse { path, .. } => assert_eq!(path, "r.json"),
        other => panic!("unexpected error: {other:?}"),
    }
}

#[test]
fn test_non_array_report_is_parse_error() {
    let err = parse_report(r#"{"overallScore": 80, "results": []}"#, "r.json").unwrap_err();
    assert!(matches!(err, ReportError::Parse { .. }));
}

#[test]
fn test_out_of_range_score_is_rejected() {
    let err = parse_report(
        r#"[{"overallScore": 80, "results": [{"dimension": "Security", "score": 140}]}]"#,
        "inline",
    )
    .unwrap_err();
    match err {
        ReportError::ScoreOutOfRange { index, value, .. } => {
            assert_eq!(index, 0);
            assert_eq!(value, 140.0);
        }
        other => panic!("unexpected error: {other:?}"),
    }

    assert!(matches!(
        parse_report(r#"[{"overallScore": -1, "results": []}]"#, "inline"),
        Err(ReportError::ScoreOutOfRange { .. })
    ));
}

#[test]
fn test_blank_dimension_is_rejected() {
    let err = parse_report(
        r#"[{"overallScore": 80, "results": [{"dimension": "  ", "score": 10}]}]"#,
        "inline",
    )
    .unwrap_err();
    assert!(matches!(err, ReportError::BlankDimension { index: 0, .. }));
}

#[test]
fn test_empty_array_is_rejected() {
    assert!(matches!(parse_report("[]", "inline"), Err(ReportError::Empty)));
}

#[test]
fn test_load_report_missing_file() {
    let dir = tempfile::TempDir::new().unwrap();
    let err = load_report(&dir.path().join("absent.json")).unwrap_err();
    assert!(matches!(err, ReportError::NotFound { .. }));
}

#[test]
fn test_load_report_from_disk() {
    let dir = tempfile::TempDir::new().unwrap();
    let path = dir.path().join("report.json");
    std::fs::write(
        &path,
        r#"[{"overallScore": 90, "results": [{"dimension": "Maintainability", "score": 72}]}]"#,
    )
    .unwrap();
    let report = load_report(&path).unwrap();
    assert_eq!(report.len(), 1);
}

#[test]
fn test_aggregation_is_idempotent() {
    let report = AnalysisReport::new(vec![
        file(81.3, &[("Security", 77.7), ("Architecture", 65.1)]),
        file(69.9, &[("Architecture", 91.4)]),
    ]);
    assert_eq!(aggregate(&report).unwrap(), aggregate(&report).unwrap());
}
