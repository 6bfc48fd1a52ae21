//! Unit tests for `AppError` display formats.

use runway_views::AppError;

#[test]
fn validation_error_display_starts_with_prefix() {
    let err = AppError::Validation("bad document".into());
    assert!(err.to_string().starts_with("validation:"));
}

#[test]
fn validation_error_display_includes_message() {
    let err = AppError::Validation("bad document".into());
    assert_eq!(err.to_string(), "validation: bad document");
}

#[test]
fn error_message_no_trailing_period() {
    let err = AppError::Query("store unavailable".into());
    let s = err.to_string();
    assert!(
        !s.ends_with('.'),
        "error message must not end with a period: {s}"
    );
}

#[test]
fn variants_are_distinct_in_display() {
    let access = AppError::Access("denied".into());
    let query = AppError::Query("denied".into());
    assert_ne!(access.to_string(), query.to_string());
    assert!(access.to_string().starts_with("access:"));
    assert!(query.to_string().starts_with("query:"));
}

#[test]
fn toml_error_converts_to_config_variant() {
    let toml_err = toml::from_str::<toml::Value>("a = = b").unwrap_err();
    let err = AppError::from(toml_err);
    assert!(matches!(err, AppError::Config(_)));
    assert!(err.to_string().starts_with("config: invalid config:"));
}

#[test]
fn implements_std_error_trait() {
    let err: Box<dyn std::error::Error> = Box::new(AppError::Serialization("oops".into()));
    assert_eq!(err.to_string(), "serialization: oops");
}
