//! The agent-reasoning engine trait.
//!
//! This is the single external capability the simulation core consumes:
//! given a persona's narrative and one task, produce the agent's textual
//! output. How the engine interprets role/backstory semantics is opaque
//! here; the core only supplies strings and receives a string back.

use async_trait::async_trait;

use crate::error::EngineResult;

/// Everything the engine needs to execute one task for one persona.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TaskPrompt {
    /// Role of the persona executing the task.
    pub role: String,
    /// Rendered persona narrative (identity + behavioral directives).
    pub narrative: String,
    /// What the task asks for.
    pub description: String,
    /// Expected shape of the output.
    pub expected_output: String,
    /// Accumulated context: the bound task context plus, depending on
    /// the process discipline, verbatim outputs of earlier tasks.
    pub context: String,
}

/// External agent-reasoning engine.
///
/// Implementations must be `Send + Sync`; the runner issues one call at
/// a time and awaits it before issuing the next. Retries, if any, are
/// the engine's own responsibility and are opaque to callers.
#[async_trait]
pub trait AgentEngine: Send + Sync {
    /// A short identifier for logs and run records (e.g. a model name).
    fn name(&self) -> &str;

    /// Execute one task, returning the agent's raw textual output.
    async fn execute(&self, prompt: &TaskPrompt) -> EngineResult<String>;
}
