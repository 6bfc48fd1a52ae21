//! Summary-field assembly.

use chrono::{DateTime, Utc};
use serde::Serialize;
use serde_json::{Map, Value};
use tracing::debug_span;

use crate::access::AccessEvaluator;
use crate::models::job::JobStatus;
use crate::models::template::JobTemplate;
use crate::models::user::User;
use crate::query::{JobQuery, LabelQuery, SortKey};
use crate::Result;

/// Maximum number of entries in the `recent_jobs` summary.
const RECENT_JOBS_LIMIT: usize = 10;

/// Projection of an execution record into the `recent_jobs` summary.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct RecentJob {
    /// Record identifier.
    pub id: i64,
    /// Lifecycle status at assembly time.
    pub status: JobStatus,
    /// Completion timestamp, if the run has finished.
    pub finished: Option<DateTime<Utc>>,
}

/// Projection of a label into the `labels` summary.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct LabelSummary {
    /// Record identifier.
    pub id: i64,
    /// Label text.
    pub name: String,
}

/// Assembles the nested summary mapping for a job template.
pub struct SummaryFieldsAssembler<'a> {
    access: &'a dyn AccessEvaluator,
    show_capabilities: &'a [String],
}

impl<'a> SummaryFieldsAssembler<'a> {
    /// Construct an assembler evaluating the given capability names.
    #[must_use]
    pub fn new(access: &'a dyn AccessEvaluator, show_capabilities: &'a [String]) -> Self {
        Self {
            access,
            show_capabilities,
        }
    }

    /// Build the summary mapping for `template` as seen by `user`.
    ///
    /// The `survey` key is present iff the template carries a non-empty
    /// survey spec; it is never inserted with a null value. Capability
    /// values are the evaluator's returns, verbatim.
    ///
    /// # Errors
    ///
    /// Propagates collaborator failures unchanged; nothing is swallowed
    /// or substituted.
    pub fn assemble(
        &self,
        template: &JobTemplate,
        user: &User,
        jobs: &dyn JobQuery,
        labels: &dyn LabelQuery,
    ) -> Result<Map<String, Value>> {
        let _span = debug_span!("summary_fields", template_id = template.id).entered();

        let mut summary = Map::new();

        summary.insert(
            "recent_jobs".to_owned(),
            serde_json::to_value(recent_jobs(jobs)?)?,
        );

        if let Some(spec) = template.survey_spec.as_ref().filter(|spec| !spec.is_empty()) {
            summary.insert("survey".to_owned(), survey_summary(spec));
        }

        summary.insert(
            "labels".to_owned(),
            serde_json::to_value(labels_summary(labels)?)?,
        );

        let mut capabilities = Map::new();
        for capability in self.show_capabilities {
            let value = self.access.capability(user, template, capability)?;
            capabilities.insert(capability.clone(), value);
        }
        summary.insert("user_capabilities".to_owned(), Value::Object(capabilities));

        Ok(summary)
    }
}

/// Project the template's most recent runs.
///
/// Issues exactly one ordering query against the collaborator and
/// truncates locally; implementations are expected to return a lazy
/// ordered view, never to be re-queried per entry.
fn recent_jobs(jobs: &dyn JobQuery) -> Result<Vec<RecentJob>> {
    let records = jobs.order_by(SortKey::CreatedDesc)?;
    Ok(records
        .into_iter()
        .take(RECENT_JOBS_LIMIT)
        .map(|job| RecentJob {
            id: job.id,
            status: job.status,
            finished: job.finished,
        })
        .collect())
}

/// Survey summary: name and description lifted from the survey definition.
fn survey_summary(spec: &Map<String, Value>) -> Value {
    let mut survey = Map::new();
    for key in ["name", "description"] {
        let value = spec
            .get(key)
            .cloned()
            .unwrap_or_else(|| Value::String(String::new()));
        survey.insert(key.to_owned(), value);
    }
    Value::Object(survey)
}

/// Label summary: count plus `{id, name}` projections.
#[derive(Debug, Serialize)]
struct LabelsSummary {
    count: usize,
    results: Vec<LabelSummary>,
}

fn labels_summary(labels: &dyn LabelQuery) -> Result<LabelsSummary> {
    let results: Vec<LabelSummary> = labels
        .labels()?
        .into_iter()
        .map(|label| LabelSummary {
            id: label.id,
            name: label.name,
        })
        .collect();
    Ok(LabelsSummary {
        count: results.len(),
        results,
    })
}
