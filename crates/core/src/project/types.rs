//! Project types.

use serde::{Deserialize, Serialize};

/// A construction project.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Project {
    /// Server-assigned identifier.
    pub project_id: i64,
    /// Display name.
    pub project_name: String,
}

/// Body accepted by project create and update.
///
/// Missing fields decode to their zero value; an incoming `project_id` is
/// ignored because identifiers are assigned by the server.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ProjectInput {
    /// Display name.
    pub project_name: String,
}

impl ProjectInput {
    /// Builds the project that a create with `project_id` should store.
    #[must_use]
    pub fn into_project(self, project_id: i64) -> Project {
        Project {
            project_id,
            project_name: self.project_name,
        }
    }
}
