//! View-layer configuration parsing and validation.

use std::fs;
use std::path::Path;

use serde::Deserialize;

use crate::{AppError, Result};

/// Configuration for the view layer, parsed from `views.toml`.
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub struct ViewConfig {
    /// URL prefix under which API resources are routed.
    #[serde(default = "default_base_path")]
    pub base_path: String,
    /// Capability names evaluated into `user_capabilities`.
    #[serde(default = "default_show_capabilities")]
    pub show_capabilities: Vec<String>,
}

fn default_base_path() -> String {
    "/api/v2".into()
}

fn default_show_capabilities() -> Vec<String> {
    vec!["copy".into(), "edit".into()]
}

impl Default for ViewConfig {
    fn default() -> Self {
        Self {
            base_path: default_base_path(),
            show_capabilities: default_show_capabilities(),
        }
    }
}

impl ViewConfig {
    /// Load and validate configuration from a TOML file path.
    ///
    /// # Errors
    ///
    /// Returns `AppError::Config` if the file cannot be read or contains
    /// invalid TOML, or if validation fails.
    pub fn load_from_path(path: impl AsRef<Path>) -> Result<Self> {
        let raw = fs::read_to_string(path)
            .map_err(|err| AppError::Config(format!("failed to read config: {err}")))?;
        Self::from_toml_str(&raw)
    }

    /// Parse configuration from a TOML string and normalize the base path.
    ///
    /// # Errors
    ///
    /// Returns `AppError::Config` if parsing or validation fails.
    pub fn from_toml_str(raw: &str) -> Result<Self> {
        let mut config: Self = toml::from_str(raw)?;
        config.validate()?;
        Ok(config)
    }

    fn validate(&mut self) -> Result<()> {
        if self.base_path.is_empty() {
            return Err(AppError::Config("base_path must not be empty".into()));
        }

        if !self.base_path.starts_with('/') {
            return Err(AppError::Config("base_path must start with '/'".into()));
        }

        // Trailing slashes would double up in generated URLs.
        while self.base_path.ends_with('/') && self.base_path.len() > 1 {
            self.base_path.pop();
        }

        if self.show_capabilities.iter().any(|cap| cap.is_empty()) {
            return Err(AppError::Config(
                "show_capabilities entries must not be empty".into(),
            ));
        }

        Ok(())
    }
}
