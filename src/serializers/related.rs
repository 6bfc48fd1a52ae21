//! Related-resource link assembly.

use std::collections::BTreeMap;

use tracing::debug_span;

use crate::models::template::JobTemplate;
use crate::routing::LinkRouter;

/// Resource type segment used for job-template URLs.
const RESOURCE_TYPE: &str = "job_templates";

/// Sub-collections always linked from a job template.
const RELATED_PATHS: &[&str] = &[
    "jobs",
    "schedules",
    "activity_stream",
    "launch",
    "notification_templates_any",
    "notification_templates_success",
    "notification_templates_error",
    "survey_spec",
    "labels",
];

/// Contributes links inherited from a parent resource contract.
///
/// The original service composes these through serializer inheritance;
/// here they are injected as an ordered list of strategies so tests can
/// substitute empty or colliding contributions.
pub trait RelatedContributor {
    /// Links this contract exposes for `template`.
    fn related(&self, template: &JobTemplate) -> BTreeMap<String, String>;
}

/// Assembles the related-links mapping for a job template.
///
/// Assembly never fails: a well-formed template always yields a mapping,
/// and conditional links are simply omitted when their precondition does
/// not hold.
pub struct RelatedLinksAssembler<'a> {
    router: &'a dyn LinkRouter,
    contributors: Vec<&'a dyn RelatedContributor>,
}

impl<'a> RelatedLinksAssembler<'a> {
    /// Construct an assembler over the given router and parent contributors.
    #[must_use]
    pub fn new(
        router: &'a dyn LinkRouter,
        contributors: Vec<&'a dyn RelatedContributor>,
    ) -> Self {
        Self {
            router,
            contributors,
        }
    }

    /// Build the link mapping for `template`.
    ///
    /// Parent contributions merge first, in registration order; the fixed
    /// resource links overwrite colliding keys. `callback` is present only
    /// when the template has a host config key.
    #[must_use]
    pub fn assemble(&self, template: &JobTemplate) -> BTreeMap<String, String> {
        let _span = debug_span!("related_links", template_id = template.id).entered();

        let mut related = BTreeMap::new();

        for contributor in &self.contributors {
            related.extend(contributor.related(template));
        }

        for &path in RELATED_PATHS {
            related.insert(
                path.to_owned(),
                self.router.url_for(RESOURCE_TYPE, template.id, Some(path)),
            );
        }

        if template.has_callback() {
            related.insert(
                "callback".to_owned(),
                self.router
                    .url_for(RESOURCE_TYPE, template.id, Some("callback")),
            );
        }

        related
    }
}
