//! # teamsim_engine
//!
//! Agent-reasoning engine seam for teamsim.
//!
//! The simulation core consumes exactly one external capability: given
//! a persona narrative and a task, produce the agent's textual output.
//! This crate defines that seam ([`AgentEngine`]) plus two
//! implementations:
//!
//! - [`LlmEngine`]: OpenAI / Anthropic / Ollama chat APIs
//! - [`MockEngine`]: scripted responses for tests

pub mod engine;
pub mod error;
pub mod llm;
pub mod mock;

// Re-export main types for convenience
pub use engine::{AgentEngine, TaskPrompt};
pub use error::{EngineError, EngineResult};
pub use llm::{LlmEngine, LlmProvider};
pub use mock::{CapturedPrompt, MockEngine};
