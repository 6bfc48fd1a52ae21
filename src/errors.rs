//! Error types shared across the crate.

use std::fmt::{Display, Formatter};

/// Shared crate result type.
pub type Result<T> = std::result::Result<T, AppError>;

/// Application error enumeration covering all domain failure modes.
#[derive(Debug)]
pub enum AppError {
    /// Extra-variables text matched neither accepted document format.
    Validation(String),
    /// Configuration parsing or validation failure.
    Config(String),
    /// Permission evaluator failure.
    Access(String),
    /// Execution-record or label query failure.
    Query(String),
    /// Summary projection could not be serialized.
    Serialization(String),
}

impl Display for AppError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Validation(msg) => write!(f, "validation: {msg}"),
            Self::Config(msg) => write!(f, "config: {msg}"),
            Self::Access(msg) => write!(f, "access: {msg}"),
            Self::Query(msg) => write!(f, "query: {msg}"),
            Self::Serialization(msg) => write!(f, "serialization: {msg}"),
        }
    }
}

impl std::error::Error for AppError {}

impl From<toml::de::Error> for AppError {
    fn from(err: toml::de::Error) -> Self {
        Self::Config(format!("invalid config: {err}"))
    }
}

impl From<serde_json::Error> for AppError {
    fn from(err: serde_json::Error) -> Self {
        Self::Serialization(err.to_string())
    }
}
