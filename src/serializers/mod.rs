//! Serialization layer for job-template resources.
//!
//! [`JobTemplateView`] is the request-scoped entry point tying the three
//! pieces together: related-link assembly, summary-field assembly, and
//! extra-variables validation. It owns no state beyond its configuration
//! and injected collaborators, so concurrent requests operate on disjoint
//! handles.

pub mod related;
pub mod summary;
pub mod validation;

use std::collections::BTreeMap;

use serde_json::{Map, Value};

use crate::access::AccessEvaluator;
use crate::config::ViewConfig;
use crate::models::template::JobTemplate;
use crate::models::user::User;
use crate::query::{JobQuery, LabelQuery};
use crate::routing::LinkRouter;
use crate::Result;

use related::{RelatedContributor, RelatedLinksAssembler};
use summary::SummaryFieldsAssembler;

/// Request-scoped view over a job template.
pub struct JobTemplateView<'a> {
    config: &'a ViewConfig,
    router: &'a dyn LinkRouter,
    access: &'a dyn AccessEvaluator,
    contributors: Vec<&'a dyn RelatedContributor>,
}

impl<'a> JobTemplateView<'a> {
    /// Construct a view with no parent link contributors.
    #[must_use]
    pub fn new(
        config: &'a ViewConfig,
        router: &'a dyn LinkRouter,
        access: &'a dyn AccessEvaluator,
    ) -> Self {
        Self {
            config,
            router,
            access,
            contributors: Vec::new(),
        }
    }

    /// Register a parent link contributor.
    ///
    /// Merge order follows registration order; later contributions and the
    /// view's own links overwrite colliding keys.
    #[must_use]
    pub fn with_contributor(mut self, contributor: &'a dyn RelatedContributor) -> Self {
        self.contributors.push(contributor);
        self
    }

    /// Related links for `template`.
    #[must_use]
    pub fn related(&self, template: &JobTemplate) -> BTreeMap<String, String> {
        RelatedLinksAssembler::new(self.router, self.contributors.clone()).assemble(template)
    }

    /// Summary fields for `template` as seen by `user`.
    ///
    /// # Errors
    ///
    /// Propagates collaborator failures unchanged.
    pub fn summary_fields(
        &self,
        template: &JobTemplate,
        user: &User,
        jobs: &dyn JobQuery,
        labels: &dyn LabelQuery,
    ) -> Result<Map<String, Value>> {
        SummaryFieldsAssembler::new(self.access, &self.config.show_capabilities)
            .assemble(template, user, jobs, labels)
    }

    /// Validate extra-variables text, returning it unchanged on success.
    ///
    /// # Errors
    ///
    /// Returns [`crate::AppError::Validation`] when the text parses as
    /// neither JSON nor YAML.
    pub fn validate_extra_vars<'t>(&self, text: &'t str) -> Result<&'t str> {
        validation::validate_extra_vars(text)
    }
}
