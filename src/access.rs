//! Permission evaluator collaborator abstraction.

use serde_json::Value;

use crate::models::template::JobTemplate;
use crate::models::user::User;
use crate::Result;

/// Evaluates named capabilities for a user against a template.
///
/// Return values are contractually opaque: the summary assembler inserts
/// whatever the evaluator produces verbatim, without coercing it to a
/// boolean. Evaluators are free to return booleans, strings, or richer
/// structures.
pub trait AccessEvaluator {
    /// Evaluate `capability` for `user` on `template`.
    ///
    /// # Errors
    ///
    /// Returns [`crate::AppError::Access`] if the evaluator cannot resolve
    /// the capability (missing role data, backing store failure); the
    /// assembler propagates this unchanged rather than substituting a
    /// fallback value.
    fn capability(&self, user: &User, template: &JobTemplate, capability: &str) -> Result<Value>;
}
