//! Mock engine for testing.
//!
//! Provides a configurable, scripted implementation of the AgentEngine
//! trait for use in unit tests without network access or API keys.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use async_trait::async_trait;
use parking_lot::RwLock;

use crate::engine::{AgentEngine, TaskPrompt};
use crate::error::{EngineError, EngineResult};

/// Captured prompt information for verification.
#[derive(Debug, Clone)]
pub struct CapturedPrompt {
    pub role: String,
    pub description: String,
    pub context: String,
}

/// Mock engine that captures every prompt and returns scripted
/// responses in order.
///
/// When the script runs out, responses fall back to
/// `"[{role}] output"` so tests only need to script what they assert
/// on. A failure can be armed for a specific call index.
#[derive(Clone)]
pub struct MockEngine {
    /// Scripted responses, consumed in order.
    responses: Arc<RwLock<Vec<String>>>,
    /// Index of the next call.
    call_index: Arc<AtomicUsize>,
    /// Captured prompts for verification.
    captured: Arc<RwLock<Vec<CapturedPrompt>>>,
    /// Call index at which to fail, with the failure message.
    fail_at: Arc<RwLock<Option<(usize, String)>>>,
    /// Optional per-call delay, for timeout tests.
    delay: Arc<RwLock<Option<std::time::Duration>>>,
}

impl Default for MockEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl MockEngine {
    pub fn new() -> Self {
        Self {
            responses: Arc::new(RwLock::new(Vec::new())),
            call_index: Arc::new(AtomicUsize::new(0)),
            captured: Arc::new(RwLock::new(Vec::new())),
            fail_at: Arc::new(RwLock::new(None)),
            delay: Arc::new(RwLock::new(None)),
        }
    }

    /// Script a response for the next unscripted call.
    pub fn add_response(self, response: impl Into<String>) -> Self {
        self.responses.write().push(response.into());
        self
    }

    /// Fail the call at `index` (0-based) with the given message.
    pub fn fail_at(self, index: usize, message: impl Into<String>) -> Self {
        *self.fail_at.write() = Some((index, message.into()));
        self
    }

    /// Delay every call by the given duration.
    pub fn with_delay(self, delay: std::time::Duration) -> Self {
        *self.delay.write() = Some(delay);
        self
    }

    /// Prompts captured so far, in call order.
    pub fn captured_prompts(&self) -> Vec<CapturedPrompt> {
        self.captured.read().clone()
    }

    /// Number of execute calls made.
    pub fn call_count(&self) -> usize {
        self.call_index.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl AgentEngine for MockEngine {
    fn name(&self) -> &str {
        "mock-engine"
    }

    async fn execute(&self, prompt: &TaskPrompt) -> EngineResult<String> {
        let index = self.call_index.fetch_add(1, Ordering::SeqCst);

        self.captured.write().push(CapturedPrompt {
            role: prompt.role.clone(),
            description: prompt.description.clone(),
            context: prompt.context.clone(),
        });

        let delay = *self.delay.read();
        if let Some(delay) = delay {
            tokio::time::sleep(delay).await;
        }

        if let Some((fail_index, message)) = self.fail_at.read().clone() {
            if index == fail_index {
                return Err(EngineError::Api(message));
            }
        }

        let scripted = self.responses.read().get(index).cloned();
        Ok(scripted.unwrap_or_else(|| format!("[{}] output", prompt.role)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn prompt(role: &str) -> TaskPrompt {
        TaskPrompt {
            role: role.to_string(),
            ..TaskPrompt::default()
        }
    }

    #[tokio::test]
    async fn test_scripted_responses_in_order() {
        let engine = MockEngine::new()
            .add_response("first")
            .add_response("second");

        assert_eq!(engine.execute(&prompt("A")).await.unwrap(), "first");
        assert_eq!(engine.execute(&prompt("B")).await.unwrap(), "second");
        // Unscripted calls fall back to a role-tagged default.
        assert_eq!(engine.execute(&prompt("C")).await.unwrap(), "[C] output");
        assert_eq!(engine.call_count(), 3);
    }

    #[tokio::test]
    async fn test_armed_failure() {
        let engine = MockEngine::new().fail_at(1, "boom");

        assert!(engine.execute(&prompt("A")).await.is_ok());
        assert!(matches!(
            engine.execute(&prompt("B")).await,
            Err(EngineError::Api(m)) if m == "boom"
        ));
    }

    #[tokio::test]
    async fn test_captures_prompts() {
        let engine = MockEngine::new();
        engine.execute(&prompt("Analyst")).await.unwrap();

        let captured = engine.captured_prompts();
        assert_eq!(captured.len(), 1);
        assert_eq!(captured[0].role, "Analyst");
    }
}
