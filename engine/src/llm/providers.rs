//
// Copyright 2025-2026 Hans W. Uhlig. All Rights Reserved.
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//      http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.
//

//! LLM provider implementations

mod chat_completions;
mod ollama;

pub use chat_completions::ChatCompletionsProvider;
pub use ollama::OllamaProvider;

use super::types::{LlmConfig, LlmError, LlmProviderKind, LlmRequest, LlmResponse};
use async_trait::async_trait;
use std::sync::Arc;
use std::time::Duration;

/// Trait for LLM providers
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait LlmProvider: Send + Sync {
    /// Send a request to the LLM
    async fn complete(&self, request: LlmRequest) -> Result<LlmResponse, LlmError>;

    /// Check if the provider is reachable
    async fn is_available(&self) -> bool;

    fn name(&self) -> &str;
}

/// Build the provider matching `config.provider`.
pub fn build_provider(config: LlmConfig) -> Result<Arc<dyn LlmProvider>, LlmError> {
    let provider: Arc<dyn LlmProvider> = match config.provider {
        LlmProviderKind::OpenAi | LlmProviderKind::LmStudio => {
            Arc::new(ChatCompletionsProvider::new(config)?)
        }
        LlmProviderKind::Ollama => Arc::new(OllamaProvider::new(config)?),
    };
    Ok(provider)
}

fn http_client(config: &LlmConfig) -> Result<reqwest::Client, LlmError> {
    reqwest::Client::builder()
        .timeout(Duration::from_secs(config.timeout_seconds))
        .build()
        .map_err(|e| LlmError::Config(format!("Failed to create HTTP client: {}", e)))
}

/// Turn a non-success HTTP status into an [`LlmError`].
async fn check_status(response: reqwest::Response) -> Result<reqwest::Response, LlmError> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }
    let error_text = response
        .text()
        .await
        .unwrap_or_else(|_| "Unknown error".to_string());
    if status == reqwest::StatusCode::UNAUTHORIZED || status == reqwest::StatusCode::FORBIDDEN {
        Err(LlmError::Auth(format!("API returned {}: {}", status, error_text)))
    } else {
        Err(LlmError::Api(format!("API returned {}: {}", status, error_text)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_openai_provider_requires_api_key() {
        let mut config = LlmConfig::openai("test-key", "gpt-4o-mini");
        assert!(build_provider(config.clone()).is_ok());

        config.api_key = None;
        assert!(matches!(build_provider(config), Err(LlmError::Config(_))));
    }

    #[test]
    fn test_provider_selection() {
        let ollama = build_provider(LlmConfig::ollama(
            "http://localhost:11434/api/chat",
            "llama3",
        ))
        .unwrap();
        assert_eq!(ollama.name(), "Ollama");

        let lmstudio = build_provider(LlmConfig::lmstudio(
            "http://localhost:1234/v1/chat/completions",
            "local-model",
        ))
        .unwrap();
        assert_eq!(lmstudio.name(), "LM Studio");
    }
}
