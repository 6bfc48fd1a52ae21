//! Requesting user model.

use serde::{Deserialize, Serialize};

/// The principal on whose behalf a view is assembled.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub struct User {
    /// Unique record identifier.
    pub id: i64,
    /// Login name.
    pub username: String,
}

impl User {
    /// Construct a user with the given identifier and login name.
    #[must_use]
    pub fn new(id: i64, username: String) -> Self {
        Self { id, username }
    }
}
