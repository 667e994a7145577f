//! Tests for the qgate configuration system.

use std::sync::Mutex;

use qgate_core::config::{default_gates, CliOverrides, FailOn, QgateConfig, QualityGate};
use qgate_core::errors::ConfigError;

/// Global mutex to serialize tests that modify environment variables.
static ENV_MUTEX: Mutex<()> = Mutex::new(());

fn tempdir() -> tempfile::TempDir {
    tempfile::TempDir::new().unwrap()
}

/// Clear all QGATE_ env vars to prevent cross-test contamination.
fn clear_qgate_env_vars() {
    for key in ["QGATE_REPORT_PATH", "QGATE_FAIL_ON"] {
        std::env::remove_var(key);
    }
}

#[test]
fn test_layered_resolution() {
    let _lock = ENV_MUTEX.lock().unwrap();
    clear_qgate_env_vars();

    let dir = tempdir();
    std::fs::write(
        dir.path().join("qgate.toml"),
        r#"
[report]
path = "from-project.json"

[quality_gates]
fail_on = "any"
"#,
    )
    .unwrap();

    std::env::set_var("QGATE_REPORT_PATH", "from-env.json");

    let cli = CliOverrides {
        fail_on: Some("critical".to_string()),
        ..Default::default()
    };
    let config = QgateConfig::load(dir.path(), None, Some(&cli)).unwrap();

    // Env overrides project for the report path
    assert_eq!(config.report.effective_path(), "from-env.json");
    // CLI overrides project for fail_on
    assert_eq!(config.fail_on(), FailOn::Critical);

    clear_qgate_env_vars();
}

#[test]
fn test_load_without_project_file_uses_defaults() {
    let _lock = ENV_MUTEX.lock().unwrap();
    clear_qgate_env_vars();

    let dir = tempdir();
    let config = QgateConfig::load(dir.path(), None, None).unwrap();

    assert_eq!(config.report.effective_path(), "quality-report.json");
    assert!(config.report.effective_auto_generate());
    assert_eq!(config.fail_on(), FailOn::Critical);
    assert_eq!(config.gates(), default_gates());
}

#[test]
fn test_explicit_config_path_must_exist() {
    let _lock = ENV_MUTEX.lock().unwrap();
    clear_qgate_env_vars();

    let dir = tempdir();
    let missing = dir.path().join("nope.toml");
    let err = QgateConfig::load(dir.path(), Some(&missing), None).unwrap_err();
    assert!(matches!(err, ConfigError::FileNotFound { .. }));
}

#[test]
fn test_project_gates_replace_defaults() {
    let _lock = ENV_MUTEX.lock().unwrap();
    clear_qgate_env_vars();

    let dir = tempdir();
    let path = dir.path().join("custom.toml");
    std::fs::write(
        &path,
        r#"
[[quality_gates.gates]]
name = "Overall"
threshold = 60
critical = true

[[quality_gates.gates]]
name = "Perf"
dimension = "Performance"
threshold = 55.5
"#,
    )
    .unwrap();

    let config = QgateConfig::load(dir.path(), Some(&path), None).unwrap();
    assert_eq!(
        config.gates(),
        vec![
            QualityGate::overall("Overall", 60.0, true),
            QualityGate::dimension("Perf", "Performance", 55.5, false),
        ]
    );
}

#[test]
fn test_invalid_toml_is_parse_error() {
    let _lock = ENV_MUTEX.lock().unwrap();
    clear_qgate_env_vars();

    let dir = tempdir();
    std::fs::write(dir.path().join("qgate.toml"), "[report\npath = ").unwrap();
    let err = QgateConfig::load(dir.path(), None, None).unwrap_err();
    assert!(matches!(err, ConfigError::ParseError { .. }));
}

#[test]
fn test_invalid_fail_on_from_env_is_rejected() {
    let _lock = ENV_MUTEX.lock().unwrap();
    clear_qgate_env_vars();

    std::env::set_var("QGATE_FAIL_ON", "sometimes");
    let dir = tempdir();
    let err = QgateConfig::load(dir.path(), None, None).unwrap_err();
    assert!(matches!(err, ConfigError::InvalidValue { .. }));

    clear_qgate_env_vars();
}

#[test]
fn test_validation_rejects_bad_gates() {
    let dup = QgateConfig::from_toml(
        r#"
[[quality_gates.gates]]
name = "Security"
dimension = "Security"
threshold = 80

[[quality_gates.gates]]
name = "Security"
threshold = 70
"#,
    )
    .unwrap();
    assert!(matches!(
        QgateConfig::validate(&dup),
        Err(ConfigError::ValidationFailed { .. })
    ));

    let out_of_range = QgateConfig::from_toml(
        r#"
[[quality_gates.gates]]
name = "Overall"
threshold = 140
"#,
    )
    .unwrap();
    assert!(QgateConfig::validate(&out_of_range).is_err());
}

#[test]
fn test_explicit_empty_gate_list_is_rejected() {
    let _lock = ENV_MUTEX.lock().unwrap();
    clear_qgate_env_vars();

    let dir = tempdir();
    std::fs::write(
        dir.path().join("qgate.toml"),
        r#"
[quality_gates]
gates = []
"#,
    )
    .unwrap();

    let err = QgateConfig::load(dir.path(), None, None).unwrap_err();
    match err {
        ConfigError::ValidationFailed { field, .. } => assert_eq!(field, "quality_gates.gates"),
        other => panic!("unexpected error: {other:?}"),
    }
}

#[test]
fn test_blank_producer_program_is_rejected() {
    let config = QgateConfig::from_toml(
        r#"
[report]
producer = ["  ", "--out", "{report}"]
"#,
    )
    .unwrap();
    assert!(matches!(
        QgateConfig::validate(&config),
        Err(ConfigError::ValidationFailed { .. })
    ));
}

#[test]
fn test_unknown_keys_are_ignored() {
    let config = QgateConfig::from_toml(
        r#"
[report]
path = "r.json"
colour = "blue"

[future_section]
x = 1
"#,
    )
    .unwrap();
    assert_eq!(config.report.effective_path(), "r.json");
}

#[test]
fn test_to_toml_round_trips_defaults() {
    let mut config = QgateConfig::default();
    config.quality_gates.gates = Some(default_gates());
    let text = config.to_toml().unwrap();
    let back = QgateConfig::from_toml(&text).unwrap();
    assert_eq!(back.gates(), default_gates());
}

#[test]
fn test_resolve_path_relative_to_root() {
    let config = QgateConfig::from_toml("[report]\npath = \"out/report.json\"\n").unwrap();
    let root = std::path::Path::new("/work/project");
    assert_eq!(
        config.report.resolve_path(root),
        root.join("out").join("report.json")
    );
}
