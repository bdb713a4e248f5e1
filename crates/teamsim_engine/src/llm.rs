//! LLM-backed engine implementation.
//!
//! Supports the OpenAI and Anthropic APIs plus local models served by
//! Ollama, selected via environment variables.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::engine::{AgentEngine, TaskPrompt};
use crate::error::{EngineError, EngineResult};

/// LLM provider type
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LlmProvider {
    OpenAI,
    Anthropic,
    /// Local models via an Ollama server.
    Ollama,
}

/// Engine implementation that calls an LLM API.
pub struct LlmEngine {
    provider: LlmProvider,
    api_key: String,
    model: String,
    base_url: String,
    client: reqwest::Client,
}

impl LlmEngine {
    /// Create a new LLM engine with explicit configuration.
    pub fn new(provider: LlmProvider, api_key: String, model: Option<String>) -> Self {
        let default_model = match provider {
            LlmProvider::OpenAI => "gpt-4o-mini".to_string(),
            LlmProvider::Anthropic => "claude-sonnet-4.5".to_string(),
            LlmProvider::Ollama => "llama3".to_string(),
        };
        let base_url = match provider {
            LlmProvider::OpenAI => "https://api.openai.com".to_string(),
            LlmProvider::Anthropic => "https://api.anthropic.com".to_string(),
            LlmProvider::Ollama => "http://localhost:11434".to_string(),
        };

        Self {
            provider,
            api_key,
            model: model.unwrap_or(default_model),
            base_url,
            client: reqwest::Client::new(),
        }
    }

    /// Override the base URL (custom gateways, non-default Ollama hosts).
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// Create an engine from environment variables.
    ///
    /// Checks in order:
    /// 1. OPENAI_API_KEY
    /// 2. ANTHROPIC_API_KEY
    /// 3. TEAMSIM_OLLAMA_MODEL (local model, no key needed)
    ///
    /// TEAMSIM_MODEL overrides the default model for API providers.
    pub fn from_env() -> EngineResult<Self> {
        let custom_model = std::env::var("TEAMSIM_MODEL").ok();

        if let Ok(api_key) = std::env::var("OPENAI_API_KEY") {
            if !api_key.is_empty() {
                return Ok(Self::new(LlmProvider::OpenAI, api_key, custom_model));
            }
        }

        if let Ok(api_key) = std::env::var("ANTHROPIC_API_KEY") {
            if !api_key.is_empty() {
                return Ok(Self::new(LlmProvider::Anthropic, api_key, custom_model));
            }
        }

        if let Ok(model) = std::env::var("TEAMSIM_OLLAMA_MODEL") {
            if !model.is_empty() {
                return Ok(Self::new(LlmProvider::Ollama, String::new(), Some(model)));
            }
        }

        Err(EngineError::NotConfigured)
    }

    /// Get the current provider
    pub fn provider(&self) -> &LlmProvider {
        &self.provider
    }

    /// Get the current model
    pub fn model(&self) -> &str {
        &self.model
    }

    /// Render the user-facing half of the prompt.
    ///
    /// The persona narrative goes into the system message; the task
    /// description, expected output and accumulated context go here.
    fn task_message(prompt: &TaskPrompt) -> String {
        let mut message = prompt.description.trim().to_string();
        if !prompt.expected_output.is_empty() {
            message.push_str(&format!("\n\nExpected output: {}", prompt.expected_output));
        }
        if !prompt.context.is_empty() {
            message.push_str(&format!("\n\nContext:\n{}", prompt.context));
        }
        message
    }

    // OpenAI chat completion
    async fn complete_openai(&self, prompt: &TaskPrompt) -> EngineResult<String> {
        let url = format!("{}/v1/chat/completions", self.base_url);

        let request = OpenAIRequest {
            model: self.model.clone(),
            messages: vec![
                OpenAIMessage {
                    role: "system".to_string(),
                    content: prompt.narrative.clone(),
                },
                OpenAIMessage {
                    role: "user".to_string(),
                    content: Self::task_message(prompt),
                },
            ],
            max_completion_tokens: Some(4096),
        };

        // Retry loop for transient errors (5xx, rate limits, network issues)
        const MAX_RETRIES: u32 = 3;
        let mut last_error = None;

        for attempt in 0..MAX_RETRIES {
            if attempt > 0 {
                // Exponential backoff: 1s, 2s, 4s
                let delay = std::time::Duration::from_secs(1 << attempt);
                tokio::time::sleep(delay).await;
            }

            let response = match self
                .client
                .post(&url)
                .header("Authorization", format!("Bearer {}", self.api_key))
                .header("Content-Type", "application/json")
                .json(&request)
                .send()
                .await
            {
                Ok(resp) => resp,
                Err(e) => {
                    last_error = Some(EngineError::Network(e.to_string()));
                    continue;
                }
            };

            let status = response.status();

            if status.is_server_error() || status.as_u16() == 429 {
                let body = response.text().await.unwrap_or_default();
                last_error = Some(EngineError::Api(format!(
                    "OpenAI API error {} (attempt {}/{}): {}",
                    status,
                    attempt + 1,
                    MAX_RETRIES,
                    body
                )));
                continue;
            }

            if !status.is_success() {
                let body = response.text().await.unwrap_or_default();
                return Err(EngineError::Api(format!(
                    "OpenAI API error {}: {}",
                    status, body
                )));
            }

            let result: OpenAIResponse = response
                .json()
                .await
                .map_err(|e| EngineError::Api(format!("Failed to parse response: {}", e)))?;

            return result
                .choices
                .into_iter()
                .next()
                .map(|c| c.message.content)
                .ok_or(EngineError::EmptyResponse);
        }

        Err(last_error.unwrap_or_else(|| EngineError::Api("Max retries exceeded".to_string())))
    }

    // Anthropic chat completion
    async fn complete_anthropic(&self, prompt: &TaskPrompt) -> EngineResult<String> {
        let url = format!("{}/v1/messages", self.base_url);

        let request = AnthropicRequest {
            model: self.model.clone(),
            max_tokens: 4096,
            system: Some(prompt.narrative.clone()),
            messages: vec![AnthropicMessage {
                role: "user".to_string(),
                content: Self::task_message(prompt),
            }],
        };

        const MAX_RETRIES: u32 = 3;
        let mut last_error = None;

        for attempt in 0..MAX_RETRIES {
            if attempt > 0 {
                let delay = std::time::Duration::from_secs(1 << attempt);
                tokio::time::sleep(delay).await;
            }

            let response = match self
                .client
                .post(&url)
                .header("x-api-key", &self.api_key)
                .header("anthropic-version", "2023-06-01")
                .header("Content-Type", "application/json")
                .json(&request)
                .send()
                .await
            {
                Ok(resp) => resp,
                Err(e) => {
                    last_error = Some(EngineError::Network(e.to_string()));
                    continue;
                }
            };

            let status = response.status();

            if status.is_server_error() || status.as_u16() == 429 {
                let body = response.text().await.unwrap_or_default();
                last_error = Some(EngineError::Api(format!(
                    "Anthropic API error {} (attempt {}/{}): {}",
                    status,
                    attempt + 1,
                    MAX_RETRIES,
                    body
                )));
                continue;
            }

            if !status.is_success() {
                let body = response.text().await.unwrap_or_default();
                return Err(EngineError::Api(format!(
                    "Anthropic API error {}: {}",
                    status, body
                )));
            }

            let result: AnthropicResponse = response
                .json()
                .await
                .map_err(|e| EngineError::Api(format!("Failed to parse response: {}", e)))?;

            return result
                .content
                .into_iter()
                .next()
                .map(|c| c.text)
                .ok_or(EngineError::EmptyResponse);
        }

        Err(last_error.unwrap_or_else(|| EngineError::Api("Max retries exceeded".to_string())))
    }

    // Ollama chat completion (local models, no API key)
    async fn complete_ollama(&self, prompt: &TaskPrompt) -> EngineResult<String> {
        let url = format!("{}/api/chat", self.base_url);

        let request = OllamaRequest {
            model: self.model.clone(),
            messages: vec![
                OllamaMessage {
                    role: "system".to_string(),
                    content: prompt.narrative.clone(),
                },
                OllamaMessage {
                    role: "user".to_string(),
                    content: Self::task_message(prompt),
                },
            ],
            stream: false,
        };

        let response = self
            .client
            .post(&url)
            .json(&request)
            .send()
            .await
            .map_err(|e| EngineError::Network(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(EngineError::Api(format!(
                "Ollama error {}: {}",
                status, body
            )));
        }

        let result: OllamaResponse = response
            .json()
            .await
            .map_err(|e| EngineError::Api(format!("Failed to parse response: {}", e)))?;

        if result.message.content.is_empty() {
            return Err(EngineError::EmptyResponse);
        }
        Ok(result.message.content)
    }
}

#[async_trait]
impl AgentEngine for LlmEngine {
    fn name(&self) -> &str {
        &self.model
    }

    async fn execute(&self, prompt: &TaskPrompt) -> EngineResult<String> {
        debug!(role = %prompt.role, model = %self.model, "executing task via LLM");
        match self.provider {
            LlmProvider::OpenAI => self.complete_openai(prompt).await,
            LlmProvider::Anthropic => self.complete_anthropic(prompt).await,
            LlmProvider::Ollama => self.complete_ollama(prompt).await,
        }
    }
}

// OpenAI API types
#[derive(Debug, Serialize)]
struct OpenAIRequest {
    model: String,
    messages: Vec<OpenAIMessage>,
    #[serde(skip_serializing_if = "Option::is_none")]
    max_completion_tokens: Option<u32>,
}

#[derive(Debug, Serialize)]
struct OpenAIMessage {
    role: String,
    content: String,
}

#[derive(Debug, Deserialize)]
struct OpenAIResponse {
    choices: Vec<OpenAIChoice>,
}

#[derive(Debug, Deserialize)]
struct OpenAIChoice {
    message: OpenAIResponseMessage,
}

#[derive(Debug, Deserialize)]
struct OpenAIResponseMessage {
    content: String,
}

// Anthropic API types
#[derive(Debug, Serialize)]
struct AnthropicRequest {
    model: String,
    max_tokens: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    system: Option<String>,
    messages: Vec<AnthropicMessage>,
}

#[derive(Debug, Serialize)]
struct AnthropicMessage {
    role: String,
    content: String,
}

#[derive(Debug, Deserialize)]
struct AnthropicResponse {
    content: Vec<AnthropicContent>,
}

#[derive(Debug, Deserialize)]
struct AnthropicContent {
    text: String,
}

// Ollama API types
#[derive(Debug, Serialize)]
struct OllamaRequest {
    model: String,
    messages: Vec<OllamaMessage>,
    stream: bool,
}

#[derive(Debug, Serialize)]
struct OllamaMessage {
    role: String,
    content: String,
}

#[derive(Debug, Deserialize)]
struct OllamaResponse {
    message: OllamaResponseMessage,
}

#[derive(Debug, Deserialize)]
struct OllamaResponseMessage {
    content: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_provider_detection() {
        std::env::remove_var("OPENAI_API_KEY");
        std::env::remove_var("ANTHROPIC_API_KEY");
        std::env::remove_var("TEAMSIM_OLLAMA_MODEL");

        assert!(LlmEngine::from_env().is_err());

        std::env::set_var("OPENAI_API_KEY", "test-key");
        let engine = LlmEngine::from_env().unwrap();
        assert_eq!(engine.provider(), &LlmProvider::OpenAI);
        std::env::remove_var("OPENAI_API_KEY");

        std::env::set_var("TEAMSIM_OLLAMA_MODEL", "mistral");
        let engine = LlmEngine::from_env().unwrap();
        assert_eq!(engine.provider(), &LlmProvider::Ollama);
        assert_eq!(engine.model(), "mistral");
        std::env::remove_var("TEAMSIM_OLLAMA_MODEL");
    }

    #[test]
    fn test_default_models() {
        let openai = LlmEngine::new(LlmProvider::OpenAI, "key".to_string(), None);
        assert_eq!(openai.model(), "gpt-4o-mini");

        let ollama = LlmEngine::new(LlmProvider::Ollama, String::new(), None);
        assert_eq!(ollama.model(), "llama3");
    }

    #[test]
    fn test_task_message_layout() {
        let prompt = TaskPrompt {
            role: "Analyst".to_string(),
            narrative: "You are Drew.".to_string(),
            description: "Analyze the data.".to_string(),
            expected_output: "A short report".to_string(),
            context: "Earlier findings".to_string(),
        };

        let message = LlmEngine::task_message(&prompt);
        assert!(message.starts_with("Analyze the data."));
        assert!(message.contains("Expected output: A short report"));
        assert!(message.contains("Context:\nEarlier findings"));
    }
}
