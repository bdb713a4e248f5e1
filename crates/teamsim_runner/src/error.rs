//! Error types for the runner module.

use thiserror::Error;

use teamsim_engine::EngineError;

/// Result type alias for runner operations.
pub type RunnerResult<T> = Result<T, RunnerError>;

/// Errors that can occur while running a simulation pass or
/// aggregating its results.
#[derive(Error, Debug)]
pub enum RunnerError {
    #[error("No personas have been added to the team")]
    EmptyTeam,

    #[error("No tasks have been bound to the team")]
    NoTasks,

    #[error("Invalid runner state: {0}")]
    InvalidState(String),

    #[error("Engine failure while executing task for role '{role}': {source}")]
    Engine {
        role: String,
        #[source]
        source: EngineError,
    },

    #[error("Task for role '{role}' exceeded the configured timeout")]
    TaskTimeout { role: String },

    #[error("Negative run duration ({seconds}s): end precedes start")]
    NegativeDuration { seconds: f64 },
}
