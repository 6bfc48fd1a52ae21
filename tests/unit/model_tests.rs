//! Unit tests for domain models.

use serde_json::{json, Map};

use runway_views::models::job::{Job, JobStatus};
use runway_views::models::role::{RoleBinding, RoleName};
use runway_views::models::template::JobTemplate;

#[test]
fn new_job_is_pending_and_unfinished() {
    let job = Job::new(7, "job-7".to_owned());
    assert_eq!(job.status, JobStatus::Pending);
    assert!(job.finished.is_none());
}

#[test]
fn job_status_serializes_snake_case() {
    let encoded = serde_json::to_string(&JobStatus::Successful).unwrap();
    assert_eq!(encoded, "\"successful\"");
}

#[test]
fn has_callback_requires_non_empty_key() {
    let mut jt = JobTemplate::new(5, "jt".to_owned());
    assert!(!jt.has_callback());

    jt.host_config_key = Some(String::new());
    assert!(!jt.has_callback());

    jt.host_config_key = Some("9283920492".to_owned());
    assert!(jt.has_callback());
}

#[test]
fn has_survey_requires_non_empty_spec() {
    let mut jt = JobTemplate::new(5, "jt".to_owned());
    assert!(!jt.has_survey());

    jt.survey_spec = Some(Map::new());
    assert!(!jt.has_survey());

    let spec = json!({"name": "blah"});
    jt.survey_spec = Some(spec.as_object().unwrap().clone());
    assert!(jt.has_survey());
}

#[test]
fn role_lookup_finds_binding_by_name() {
    let mut jt = JobTemplate::new(5, "jt".to_owned());
    jt.roles = vec![
        RoleBinding::new(9, RoleName::Admin),
        RoleBinding::new(8, RoleName::Execute),
        RoleBinding::new(7, RoleName::Read),
    ];

    assert_eq!(jt.role(RoleName::Execute).map(|b| b.id), Some(8));
    assert_eq!(jt.role(RoleName::Admin).map(|b| b.id), Some(9));
}

#[test]
fn role_lookup_missing_binding_is_none() {
    let jt = JobTemplate::new(5, "jt".to_owned());
    assert!(jt.role(RoleName::Admin).is_none());
}
