//! Error types for the engine seam.

use thiserror::Error;

/// Result type alias for engine operations.
pub type EngineResult<T> = Result<T, EngineError>;

/// Errors surfaced from the external agent-reasoning engine.
///
/// The core treats these as opaque: they are wrapped and reported,
/// never interpreted.
#[derive(Error, Debug)]
pub enum EngineError {
    #[error("No LLM provider configured. Set OPENAI_API_KEY or ANTHROPIC_API_KEY, or use an Ollama endpoint.")]
    NotConfigured,

    #[error("Engine API error: {0}")]
    Api(String),

    #[error("Engine network error: {0}")]
    Network(String),

    #[error("Engine returned an empty response")]
    EmptyResponse,
}
