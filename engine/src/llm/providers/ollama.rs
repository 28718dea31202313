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

use super::{LlmProvider, check_status, http_client};
use crate::llm::types::{LlmConfig, LlmError, LlmMessage, LlmRequest, LlmResponse};
use async_trait::async_trait;
use serde::{Deserialize, Serialize};

#[derive(Serialize)]
struct OllamaRequest<'a> {
    model: &'a str,
    messages: &'a [LlmMessage],
    stream: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    options: Option<OllamaOptions>,
}

#[derive(Serialize)]
struct OllamaOptions {
    #[serde(skip_serializing_if = "Option::is_none")]
    temperature: Option<f32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    num_predict: Option<u32>,
}

#[derive(Deserialize)]
struct OllamaResponse {
    message: LlmMessage,
    model: String,
    #[serde(default)]
    done: bool,
    eval_count: Option<u32>,
}

/// Ollama `/api/chat` provider
pub struct OllamaProvider {
    config: LlmConfig,
    client: reqwest::Client,
}

impl OllamaProvider {
    pub fn new(config: LlmConfig) -> Result<Self, LlmError> {
        let client = http_client(&config)?;
        Ok(Self { config, client })
    }
}

#[async_trait]
impl LlmProvider for OllamaProvider {
    async fn complete(&self, request: LlmRequest) -> Result<LlmResponse, LlmError> {
        let options = (request.temperature.is_some() || request.max_tokens.is_some()).then(|| {
            OllamaOptions {
                temperature: request.temperature,
                num_predict: request.max_tokens,
            }
        });

        let body = OllamaRequest {
            model: &request.model,
            messages: &request.messages,
            stream: false,
            options,
        };

        let response = self.client.post(&self.config.endpoint).json(&body).send().await?;
        let reply: OllamaResponse = check_status(response).await?.json().await?;

        Ok(LlmResponse {
            content: reply.message.content,
            model: reply.model,
            total_tokens: reply.eval_count,
            finish_reason: reply.done.then(|| "stop".to_string()),
        })
    }

    async fn is_available(&self) -> bool {
        self.client
            .get(format!(
                "{}/api/tags",
                self.config.endpoint.trim_end_matches("/api/chat")
            ))
            .send()
            .await
            .is_ok()
    }

    fn name(&self) -> &str {
        "Ollama"
    }
}
