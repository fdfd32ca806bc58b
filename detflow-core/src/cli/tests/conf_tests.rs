use crate::cli::conf::{
    CONFIG_TEMPLATE, DumpFormat, init, render_dump, render_failure, render_loaded,
};
use crate::conf::{AnalysisConfig, ConfigError, load_config};
use pretty_assertions::assert_eq;
use std::fs;
use tempfile::tempdir;

#[test]
fn init_writes_a_template_that_loads_as_defaults() {
    // Arrange
    let dir = tempdir().unwrap();
    let path = dir.path().join("conf").join("detflow.hcl");

    // Act
    init(path.clone()).unwrap();

    // Assert
    let written = fs::read_to_string(&path).unwrap();
    assert_eq!(written, CONFIG_TEMPLATE.trim_start());
    assert_eq!(load_config(&path).unwrap(), AnalysisConfig::default());
}

#[test]
fn init_refuses_to_overwrite() {
    // Arrange
    let dir = tempdir().unwrap();
    let path = dir.path().join("detflow.hcl");
    fs::write(&path, "keep me").unwrap();

    // Act
    let err = init(path.clone()).unwrap_err();

    // Assert
    assert!(err.to_string().contains("already exists"));
    assert_eq!(fs::read_to_string(&path).unwrap(), "keep me");
}

#[test]
fn loaded_summary_lists_columns() {
    let out = render_loaded(&AnalysisConfig::default());

    assert!(out.starts_with("✔ Config loaded successfully\n"));
    assert!(out.contains("✔ columns sensor_types → severity → status\n"));
    assert!(!out.contains("excluding"));
}

#[test]
fn plain_failure_carries_the_hint() {
    let out = render_failure(&ConfigError::ZeroBatchSize, true);

    assert!(out.starts_with("error: "));
    assert!(out.contains("batch_size = 100000"));
}

#[test]
fn dump_formats_render_the_same_settings() {
    // Arrange
    let cfg = AnalysisConfig::default();

    // Act
    let json = render_dump(&cfg, DumpFormat::Json).unwrap();
    let yaml = render_dump(&cfg, DumpFormat::Yaml).unwrap();

    // Assert
    let parsed: serde_json::Value = serde_json::from_str(&json).unwrap();
    assert_eq!(parsed["batch_size"], 100_000);
    assert_eq!(parsed["columns"]["categories"], "sensor_types");
    assert!(yaml.contains("batch_size: 100000"));
    assert!(yaml.contains("exclude_severity: INFO"));
}
