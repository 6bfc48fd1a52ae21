//! Unit tests for view configuration parsing and validation.

use runway_views::{AppError, ViewConfig};

#[test]
fn empty_toml_yields_defaults() {
    let config = ViewConfig::from_toml_str("").unwrap();
    assert_eq!(config.base_path, "/api/v2");
    assert_eq!(config.show_capabilities, vec!["copy", "edit"]);
}

#[test]
fn explicit_values_override_defaults() {
    let config = ViewConfig::from_toml_str(
        "base_path = \"/api/v1\"\nshow_capabilities = [\"copy\", \"edit\", \"delete\"]\n",
    )
    .unwrap();
    assert_eq!(config.base_path, "/api/v1");
    assert_eq!(config.show_capabilities, vec!["copy", "edit", "delete"]);
}

#[test]
fn trailing_slash_is_trimmed() {
    let config = ViewConfig::from_toml_str("base_path = \"/api/v2/\"\n").unwrap();
    assert_eq!(config.base_path, "/api/v2");
}

#[test]
fn empty_base_path_rejected() {
    let err = ViewConfig::from_toml_str("base_path = \"\"\n").unwrap_err();
    assert!(matches!(err, AppError::Config(_)));
}

#[test]
fn relative_base_path_rejected() {
    let err = ViewConfig::from_toml_str("base_path = \"api/v2\"\n").unwrap_err();
    assert!(matches!(err, AppError::Config(_)));
}

#[test]
fn empty_capability_name_rejected() {
    let err = ViewConfig::from_toml_str("show_capabilities = [\"copy\", \"\"]\n").unwrap_err();
    assert!(matches!(err, AppError::Config(_)));
}

#[test]
fn invalid_toml_maps_to_config_error() {
    let err = ViewConfig::from_toml_str("base_path = = nope").unwrap_err();
    let message = err.to_string();
    assert!(message.starts_with("config:"), "got: {message}");
}

#[test]
fn missing_file_maps_to_config_error() {
    let err = ViewConfig::load_from_path("/nonexistent/views.toml").unwrap_err();
    assert!(matches!(err, AppError::Config(_)));
}

#[test]
fn default_impl_matches_empty_toml() {
    let parsed = ViewConfig::from_toml_str("").unwrap();
    assert_eq!(parsed, ViewConfig::default());
}
