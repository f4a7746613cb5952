use qbval_common::EditorState;
use qbval_core::config::{ConfigError, ConfigLoader, EditorConfig};
use qbval_core::{needs_reset, resolve_with, RenderOutcome};
use std::io::Write;
use tempfile::NamedTempFile;

#[test]
fn test_default_values() {
    let config = EditorConfig::default();
    assert_eq!(config.operators.null_operators, vec!["null", "notNull"]);
    assert_eq!(
        config.operators.multi_value_operators,
        vec!["between", "notBetween", "in", "notIn"]
    );
    assert_eq!(config.inputs.default_input_type, "text");
    assert_eq!(config.inputs.numeric_input_type, "number");
    assert_eq!(config.inputs.separator, ",");
    assert_eq!(
        config.class_names.between_selector_1,
        "rule-value-between-selector-1"
    );
}

#[tokio::test]
async fn test_load_from_file() {
    let mut file = NamedTempFile::new().unwrap();
    writeln!(
        file,
        r#"
operators:
  null_operators:
    - "isNull"
inputs:
  separator: "|"
"#
    )
    .unwrap();

    let config = ConfigLoader::load_from(file.path())
        .await
        .expect("Failed to load config from file");

    assert_eq!(config.operators.null_operators, vec!["isNull"]);
    // Sections and fields not mentioned keep their defaults.
    assert_eq!(config.operators.between_operators, vec!["between", "notBetween"]);
    assert_eq!(config.inputs.separator, "|");
    assert_eq!(config.inputs.numeric_input_type, "number");
    assert_eq!(
        config.class_names.between_selector_2,
        "rule-value-between-selector-2"
    );
}

#[tokio::test]
async fn test_loaded_config_drives_resolution() {
    let mut file = NamedTempFile::new().unwrap();
    writeln!(
        file,
        r#"
operators:
  null_operators: ["isNull"]
inputs:
  separator: "|"
"#
    )
    .unwrap();
    let config = ConfigLoader::load_from(file.path()).await.unwrap();

    assert_eq!(
        resolve_with(&EditorState::new("isNull"), &config),
        RenderOutcome::Suppressed
    );
    assert_ne!(
        resolve_with(&EditorState::new("null"), &config),
        RenderOutcome::Suppressed
    );

    let pipe = EditorState::new("=").with_input_type("number").with_value("1|2");
    assert!(needs_reset(&pipe, &config));
    let comma = EditorState::new("=").with_input_type("number").with_value("1,2");
    assert!(!needs_reset(&comma, &config));
}

// ============================================================================
// Error Handling Tests
// ============================================================================

#[tokio::test]
async fn test_load_from_nonexistent_file() {
    let result =
        ConfigLoader::load_from(std::path::Path::new("/nonexistent/path/qbval.yaml")).await;
    assert!(result.is_err());
}

#[tokio::test]
async fn test_load_from_invalid_yaml() {
    let mut file = NamedTempFile::new().unwrap();
    writeln!(file, "{{invalid yaml: [unclosed").unwrap();

    let result = ConfigLoader::load_from(file.path()).await;
    assert!(result.is_err());
}

#[tokio::test]
async fn test_load_from_empty_file() {
    let file = NamedTempFile::new().unwrap();
    let config = ConfigLoader::load_from(file.path()).await.unwrap();
    assert_eq!(config, EditorConfig::default());
}

#[tokio::test]
async fn test_load_wrong_field_type() {
    let mut file = NamedTempFile::new().unwrap();
    writeln!(file, "operators:\n  null_operators: 42").unwrap();

    let result = ConfigLoader::load_from(file.path()).await;
    assert!(result.is_err());
}

#[tokio::test]
async fn test_load_rejects_empty_separator() {
    let mut file = NamedTempFile::new().unwrap();
    writeln!(file, "inputs:\n  separator: \"\"").unwrap();

    let result = ConfigLoader::load_from(file.path()).await;
    assert!(matches!(result, Err(ConfigError::EmptySeparator)));
}

#[test]
fn test_validate_empty_separator() {
    let mut config = EditorConfig::default();
    assert!(config.validate().is_ok());
    config.inputs.separator = String::new();
    assert!(matches!(config.validate(), Err(ConfigError::EmptySeparator)));

    // Built in code, the config still never blanks a plain number.
    let plain = EditorState::new("=").with_input_type("number").with_value("5");
    assert!(!needs_reset(&plain, &config));
}
