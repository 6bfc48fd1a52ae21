//! Job template model — the primary resource the view layer projects.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::models::role::{RoleBinding, RoleName};

/// A job template awaiting serialization into an API response.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "snake_case")]
pub struct JobTemplate {
    /// Unique record identifier.
    pub id: i64,
    /// Template name.
    pub name: String,
    /// Shared key authorizing provisioning callbacks; `None` disables them.
    pub host_config_key: Option<String>,
    /// Survey definition attached to the template, if any.
    pub survey_spec: Option<Map<String, Value>>,
    /// Free-form extra variables, JSON or YAML text.
    pub extra_vars: Option<String>,
    /// Role bindings consumed by the access evaluator.
    pub roles: Vec<RoleBinding>,
}

impl JobTemplate {
    /// Construct a bare template with no callback key, survey, or roles.
    #[must_use]
    pub fn new(id: i64, name: String) -> Self {
        Self {
            id,
            name,
            host_config_key: None,
            survey_spec: None,
            extra_vars: None,
            roles: Vec::new(),
        }
    }

    /// Whether provisioning callbacks are configured for this template.
    #[must_use]
    pub fn has_callback(&self) -> bool {
        self.host_config_key
            .as_deref()
            .is_some_and(|key| !key.is_empty())
    }

    /// Whether a non-empty survey spec is attached.
    #[must_use]
    pub fn has_survey(&self) -> bool {
        self.survey_spec.as_ref().is_some_and(|spec| !spec.is_empty())
    }

    /// Look up the binding for a named role, if one exists.
    #[must_use]
    pub fn role(&self, name: RoleName) -> Option<&RoleBinding> {
        self.roles.iter().find(|binding| binding.name == name)
    }
}
