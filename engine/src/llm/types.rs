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

//! Common types for LLM integration

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// LLM message role
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LlmRole {
    System,
    User,
    Assistant,
}

/// A message in an LLM conversation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LlmMessage {
    pub role: LlmRole,
    pub content: String,
}

impl LlmMessage {
    pub fn system(content: impl Into<String>) -> Self {
        Self {
            role: LlmRole::System,
            content: content.into(),
        }
    }

    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: LlmRole::User,
            content: content.into(),
        }
    }
}

/// LLM request parameters
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LlmRequest {
    pub messages: Vec<LlmMessage>,
    /// Model to use (provider-specific)
    pub model: String,
    /// Temperature (0.0 - 2.0, higher = more random)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub temperature: Option<f32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_tokens: Option<u32>,
}

impl LlmRequest {
    pub fn new(model: impl Into<String>) -> Self {
        Self {
            messages: Vec::new(),
            model: model.into(),
            temperature: None,
            max_tokens: None,
        }
    }

    pub fn with_message(mut self, message: LlmMessage) -> Self {
        self.messages.push(message);
        self
    }

    pub fn with_temperature(mut self, temperature: f32) -> Self {
        self.temperature = Some(temperature);
        self
    }

    pub fn with_max_tokens(mut self, max_tokens: u32) -> Self {
        self.max_tokens = Some(max_tokens);
        self
    }
}

/// LLM response
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LlmResponse {
    /// Generated content
    pub content: String,
    /// Model used
    pub model: String,
    pub total_tokens: Option<u32>,
    pub finish_reason: Option<String>,
}

impl LlmResponse {
    pub fn new(content: impl Into<String>, model: impl Into<String>) -> Self {
        Self {
            content: content.into(),
            model: model.into(),
            total_tokens: None,
            finish_reason: None,
        }
    }
}

/// LLM error types
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LlmError {
    #[error("Network error: {0}")]
    Network(String),
    /// Invalid request, rate limit, malformed reply
    #[error("API error: {0}")]
    Api(String),
    #[error("Authentication error: {0}")]
    Auth(String),
    #[error("Configuration error: {0}")]
    Config(String),
    #[error("Provider unavailable: {0}")]
    ProviderUnavailable(String),
    #[error("Timeout: {0}")]
    Timeout(String),
}

impl From<reqwest::Error> for LlmError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            LlmError::Timeout(err.to_string())
        } else if err.is_decode() {
            LlmError::Api(format!("Failed to parse response: {}", err))
        } else {
            LlmError::Network(format!("Request failed: {}", err))
        }
    }
}

/// Supported provider back ends
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LlmProviderKind {
    OpenAi,
    Ollama,
    LmStudio,
}

impl LlmProviderKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            LlmProviderKind::OpenAi => "openai",
            LlmProviderKind::Ollama => "ollama",
            LlmProviderKind::LmStudio => "lmstudio",
        }
    }

    /// Endpoint used when none is configured.
    pub fn default_endpoint(&self) -> &'static str {
        match self {
            LlmProviderKind::OpenAi => "https://api.openai.com/v1/chat/completions",
            LlmProviderKind::Ollama => "http://localhost:11434/api/chat",
            LlmProviderKind::LmStudio => "http://localhost:1234/v1/chat/completions",
        }
    }
}

impl fmt::Display for LlmProviderKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for LlmProviderKind {
    type Err = LlmError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "openai" => Ok(LlmProviderKind::OpenAi),
            "ollama" => Ok(LlmProviderKind::Ollama),
            "lmstudio" | "lm-studio" => Ok(LlmProviderKind::LmStudio),
            other => Err(LlmError::Config(format!("Unknown provider type: {}", other))),
        }
    }
}

/// LLM provider configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LlmConfig {
    pub provider: LlmProviderKind,
    pub endpoint: String,
    /// API key (if required)
    pub api_key: Option<String>,
    pub model: String,
    /// Request timeout in seconds
    pub timeout_seconds: u64,
}

impl LlmConfig {
    pub fn openai(api_key: impl Into<String>, model: impl Into<String>) -> Self {
        Self {
            provider: LlmProviderKind::OpenAi,
            endpoint: LlmProviderKind::OpenAi.default_endpoint().to_string(),
            api_key: Some(api_key.into()),
            model: model.into(),
            timeout_seconds: 30,
        }
    }

    pub fn ollama(endpoint: impl Into<String>, model: impl Into<String>) -> Self {
        Self {
            provider: LlmProviderKind::Ollama,
            endpoint: endpoint.into(),
            api_key: None,
            model: model.into(),
            timeout_seconds: 60,
        }
    }

    pub fn lmstudio(endpoint: impl Into<String>, model: impl Into<String>) -> Self {
        Self {
            provider: LlmProviderKind::LmStudio,
            endpoint: endpoint.into(),
            api_key: None,
            model: model.into(),
            timeout_seconds: 60,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_llm_request_builder() {
        let request = LlmRequest::new("gpt-4")
            .with_message(LlmMessage::system("You are a persona"))
            .with_message(LlmMessage::user("React to this idea"))
            .with_temperature(0.7)
            .with_max_tokens(120);

        assert_eq!(request.messages.len(), 2);
        assert_eq!(request.messages[0].role, LlmRole::System);
        assert_eq!(request.temperature, Some(0.7));
        assert_eq!(request.max_tokens, Some(120));
    }

    #[test]
    fn test_request_omits_unset_options() {
        let json = serde_json::to_value(LlmRequest::new("llama3")).unwrap();
        assert!(json.get("temperature").is_none());
        assert_eq!(json["model"], "llama3");
    }

    #[test]
    fn test_provider_kind_parsing() {
        assert_eq!("OpenAI".parse::<LlmProviderKind>(), Ok(LlmProviderKind::OpenAi));
        assert_eq!("lm-studio".parse::<LlmProviderKind>(), Ok(LlmProviderKind::LmStudio));
        assert!(matches!(
            "bard".parse::<LlmProviderKind>(),
            Err(LlmError::Config(_))
        ));
    }

    #[test]
    fn test_llm_config() {
        let openai = LlmConfig::openai("sk-test", "gpt-4o-mini");
        assert_eq!(openai.provider, LlmProviderKind::OpenAi);
        assert!(openai.api_key.is_some());

        let ollama = LlmConfig::ollama("http://localhost:11434/api/chat", "llama3");
        assert_eq!(ollama.provider, LlmProviderKind::Ollama);
        assert!(ollama.api_key.is_none());
    }
}
