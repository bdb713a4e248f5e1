//! Error types for the team model.

use thiserror::Error;

/// Result type alias for team model operations.
pub type TeamResult<T> = Result<T, TeamError>;

/// Errors that can occur while building teams, personas and tasks.
///
/// All of these are configuration-time errors: they surface immediately
/// and are never retried.
#[derive(Error, Debug)]
pub enum TeamError {
    #[error("Invalid persona: {0}")]
    InvalidPersona(String),

    #[error("Duplicate persona name in team: {0}")]
    DuplicateName(String),

    #[error("Duplicate role in team: {0}")]
    DuplicateRole(String),

    #[error("No persona with role '{0}' found in the team")]
    UnknownRole(String),
}
