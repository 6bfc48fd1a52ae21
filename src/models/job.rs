//! Execution record model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Lifecycle status for an execution record.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum JobStatus {
    /// Queued but not yet dispatched.
    Pending,
    /// Waiting on a dependency or capacity.
    Waiting,
    /// Actively executing.
    Running,
    /// Completed without error.
    Successful,
    /// Completed with task failures.
    Failed,
    /// Aborted by an internal error.
    Error,
    /// Canceled by an operator.
    Canceled,
}

/// A single run of a job template.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub struct Job {
    /// Unique record identifier.
    pub id: i64,
    /// Run name, usually derived from the template name.
    pub name: String,
    /// Current lifecycle status.
    pub status: JobStatus,
    /// Creation timestamp.
    pub created: DateTime<Utc>,
    /// Completion timestamp; `None` while the run is still active.
    pub finished: Option<DateTime<Utc>>,
}

impl Job {
    /// Construct a new pending run with the current creation timestamp.
    #[must_use]
    pub fn new(id: i64, name: String) -> Self {
        Self {
            id,
            name,
            status: JobStatus::Pending,
            created: Utc::now(),
            finished: None,
        }
    }
}
