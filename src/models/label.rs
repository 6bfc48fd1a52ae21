//! Label model.

use serde::{Deserialize, Serialize};

/// An organizational label attached to a template.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub struct Label {
    /// Unique record identifier.
    pub id: i64,
    /// Label text.
    pub name: String,
}
