//! URL construction collaborator.

use crate::config::ViewConfig;

/// Produces URL strings for resources and their sub-collections.
pub trait LinkRouter {
    /// URL for `resource_type`/`id`, with an optional trailing sub-path.
    fn url_for(&self, resource_type: &str, id: i64, subpath: Option<&str>) -> String;
}

/// Default router formatting paths under the configured API base.
///
/// Produces the service's canonical URL shape:
/// `/api/v2/job_templates/5/launch/`.
#[derive(Debug, Clone)]
pub struct ApiRouter {
    base_path: String,
}

impl ApiRouter {
    /// Construct a router with the given base path.
    #[must_use]
    pub fn new(base_path: impl Into<String>) -> Self {
        Self {
            base_path: base_path.into(),
        }
    }

    /// Construct a router from the view configuration.
    #[must_use]
    pub fn from_config(config: &ViewConfig) -> Self {
        Self::new(config.base_path.clone())
    }
}

impl LinkRouter for ApiRouter {
    fn url_for(&self, resource_type: &str, id: i64, subpath: Option<&str>) -> String {
        match subpath {
            Some(sub) => format!("{}/{resource_type}/{id}/{sub}/", self.base_path),
            None => format!("{}/{resource_type}/{id}/", self.base_path),
        }
    }
}
