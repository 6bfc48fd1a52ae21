//! Extra-variables validation.

use tracing::debug;

use crate::{AppError, Result};

/// Validate that `text` parses as a JSON or YAML document.
///
/// Validation is a gate, not a transform: accepted input is returned
/// unchanged. The gate checks format validity only, so bare scalar
/// documents (numbers, `null`, plain strings) pass.
///
/// # Errors
///
/// Returns [`AppError::Validation`] carrying both parser messages when the
/// text parses as neither format.
pub fn validate_extra_vars(text: &str) -> Result<&str> {
    let json_err = match serde_json::from_str::<serde_json::Value>(text) {
        Ok(_) => return Ok(text),
        Err(err) => err,
    };

    match serde_yaml::from_str::<serde_yaml::Value>(text) {
        Ok(_) => {
            debug!("extra_vars accepted as YAML after JSON parse failure");
            Ok(text)
        }
        Err(yaml_err) => Err(AppError::Validation(format!(
            "not valid JSON ({json_err}) nor YAML ({yaml_err})"
        ))),
    }
}
