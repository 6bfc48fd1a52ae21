//! Role binding model consumed by the access evaluator.

use serde::{Deserialize, Serialize};

/// Named role kinds granting access to a template.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum RoleName {
    /// Full control over the template.
    Admin,
    /// May launch jobs from the template.
    Execute,
    /// May view the template.
    Read,
}

/// Associates a template with a named role.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub struct RoleBinding {
    /// Unique record identifier.
    pub id: i64,
    /// The role this binding grants.
    pub name: RoleName,
}

impl RoleBinding {
    /// Construct a binding for the given role.
    #[must_use]
    pub fn new(id: i64, name: RoleName) -> Self {
        Self { id, name }
    }
}
