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

//! OpenAI-style `/chat/completions` provider, shared by OpenAI and LM Studio

use super::{LlmProvider, check_status, http_client};
use crate::llm::types::{LlmConfig, LlmError, LlmMessage, LlmProviderKind, LlmRequest, LlmResponse};
use async_trait::async_trait;
use serde::{Deserialize, Serialize};

#[derive(Serialize)]
struct ChatRequest<'a> {
    model: &'a str,
    messages: &'a [LlmMessage],
    #[serde(skip_serializing_if = "Option::is_none")]
    temperature: Option<f32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    max_tokens: Option<u32>,
}

#[derive(Deserialize)]
struct ChatResponse {
    choices: Vec<ChatChoice>,
    usage: Option<ChatUsage>,
    model: String,
}

#[derive(Deserialize)]
struct ChatChoice {
    message: LlmMessage,
    finish_reason: Option<String>,
}

#[derive(Deserialize)]
struct ChatUsage {
    total_tokens: u32,
}

pub struct ChatCompletionsProvider {
    config: LlmConfig,
    client: reqwest::Client,
}

impl ChatCompletionsProvider {
    /// OpenAI requires an API key; LM Studio does not.
    pub fn new(config: LlmConfig) -> Result<Self, LlmError> {
        if config.provider == LlmProviderKind::OpenAi && config.api_key.is_none() {
            return Err(LlmError::Config("OpenAI requires an API key".to_string()));
        }
        let client = http_client(&config)?;
        Ok(Self { config, client })
    }
}

#[async_trait]
impl LlmProvider for ChatCompletionsProvider {
    async fn complete(&self, request: LlmRequest) -> Result<LlmResponse, LlmError> {
        let body = ChatRequest {
            model: &request.model,
            messages: &request.messages,
            temperature: request.temperature,
            max_tokens: request.max_tokens,
        };

        let mut builder = self.client.post(&self.config.endpoint).json(&body);
        if let Some(api_key) = &self.config.api_key {
            builder = builder.bearer_auth(api_key);
        }

        let response = check_status(builder.send().await?).await?;
        let mut reply: ChatResponse = response.json().await?;

        if reply.choices.is_empty() {
            return Err(LlmError::Api("No choices in response".to_string()));
        }
        let choice = reply.choices.swap_remove(0);

        Ok(LlmResponse {
            content: choice.message.content,
            model: reply.model,
            total_tokens: reply.usage.map(|u| u.total_tokens),
            finish_reason: choice.finish_reason,
        })
    }

    async fn is_available(&self) -> bool {
        self.client.get(&self.config.endpoint).send().await.is_ok()
    }

    fn name(&self) -> &str {
        match self.config.provider {
            LlmProviderKind::LmStudio => "LM Studio",
            _ => "OpenAI",
        }
    }
}
