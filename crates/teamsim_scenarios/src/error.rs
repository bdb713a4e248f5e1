//! Error types for scenario construction.

use thiserror::Error;

/// Result type alias for scenario operations.
pub type ScenarioResult<T> = Result<T, ScenarioError>;

/// Errors that can occur while building scenario teams and task sets.
#[derive(Error, Debug)]
pub enum ScenarioError {
    #[error("Task kind '{task}' is not supported by the {scenario} scenario")]
    UnsupportedTask { scenario: String, task: String },

    #[error("Roster file error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Roster parse error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error(transparent)]
    Team(#[from] teamsim_core::TeamError),
}
