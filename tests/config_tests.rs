//! Integration tests for configuration loading and validation.

use pagewatch::config::{
    find_config_in_dir, generate_example_config, generate_json_schema, load_config_file,
    AppConfig, ConfigFileError, ConfigPreset, GeneratorConfig, Validatable,
};
use pagewatch::{PageWatchError, ReportFormat, SiteState};
use std::fs;

// ============================================================================
// File loading
// ============================================================================

#[test]
fn test_partial_file_keeps_defaults() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join(".pagewatch.yaml");
    fs::write(
        &path,
        "generator:\n  max_payload_len: 64\n  min_payload_len: 16\n  seed: 9\noutput:\n  format: json\n",
    )
    .unwrap();

    let config = load_config_file(&path).unwrap();
    assert_eq!(config.generator.min_payload_len, 16);
    assert_eq!(config.generator.max_payload_len, 64);
    assert_eq!(config.generator.seed, Some(9));
    assert_eq!(config.generator.key_prefix, GeneratorConfig::default().key_prefix);
    assert_eq!(config.output.format, ReportFormat::Json);
    assert_eq!(config.simulation, AppConfig::default().simulation);
    assert!(config.is_valid());
}

#[test]
fn test_discovery_prefers_dotfile() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(dir.path().join("pagewatch.yaml"), "{}\n").unwrap();
    fs::write(dir.path().join(".pagewatch.yaml"), "{}\n").unwrap();

    let found = find_config_in_dir(dir.path()).unwrap();
    assert_eq!(found.file_name().unwrap(), ".pagewatch.yaml");
}

#[test]
fn test_missing_file() {
    let dir = tempfile::tempdir().unwrap();
    let err = load_config_file(&dir.path().join("nope.yaml")).unwrap_err();
    assert!(matches!(err, ConfigFileError::NotFound(_)));
}

#[test]
fn test_malformed_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("broken.yaml");
    fs::write(&path, "output:\n  format: [not, a, format]\n").unwrap();
    assert!(matches!(
        load_config_file(&path).unwrap_err(),
        ConfigFileError::Parse(_)
    ));
}

#[test]
fn test_example_config_roundtrips() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("pagewatch.yml");
    fs::write(&path, generate_example_config()).unwrap();
    assert_eq!(load_config_file(&path).unwrap(), AppConfig::default());
}

#[test]
fn test_schema_names_sections() {
    let schema = generate_json_schema().unwrap();
    let value: serde_json::Value = serde_json::from_str(&schema).unwrap();
    let properties = &value["properties"];
    for section in ["generator", "simulation", "output"] {
        assert!(properties.get(section).is_some(), "missing {section}");
    }
}

// ============================================================================
// Validation
// ============================================================================

#[test]
fn test_presets_are_valid() {
    for preset in ConfigPreset::all() {
        let config = AppConfig::from_preset(*preset);
        assert!(config.is_valid(), "{preset} preset invalid: {:?}", config.validate());
    }
}

#[test]
fn test_invalid_generator_rejected_by_state() {
    let config = GeneratorConfig {
        min_key_len: 5,
        max_key_len: 5,
        ..GeneratorConfig::default()
    };
    let err = SiteState::new(config).unwrap_err();
    assert!(matches!(err, PageWatchError::Config(_)));
    assert!(err.to_string().contains("generator.min_key_len"));
}

#[test]
fn test_collects_every_error() {
    let mut config = AppConfig::default();
    config.generator.key_alphabet = "ab?a".to_string();
    config.generator.max_attempts = 0;
    config.output.recipient = "  ".to_string();

    let fields: Vec<_> = config.validate().into_iter().map(|e| e.field).collect();
    assert!(fields.iter().filter(|f| *f == "generator.key_alphabet").count() >= 2);
    assert!(fields.contains(&"generator.max_attempts".to_string()));
    assert!(fields.contains(&"output.recipient".to_string()));
}
