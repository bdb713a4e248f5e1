//! Task definitions.

use serde::{Deserialize, Serialize};

/// A unit of work bound to exactly one persona by role.
///
/// Tasks are constructed through [`crate::Team::bind_task`], which
/// validates the role eagerly; a free-standing `Task` always refers to
/// a role that existed in its team at binding time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Task {
    pub description: String,
    pub expected_output: String,
    /// Additional framing handed to the engine; default empty.
    #[serde(default)]
    pub context: String,
    /// Role of the persona this task is bound to.
    pub assigned_role: String,
}

impl Task {
    pub fn new(
        description: impl Into<String>,
        assigned_role: impl Into<String>,
        expected_output: impl Into<String>,
        context: impl Into<String>,
    ) -> Self {
        Self {
            description: description.into(),
            expected_output: expected_output.into(),
            context: context.into(),
            assigned_role: assigned_role.into(),
        }
    }
}
