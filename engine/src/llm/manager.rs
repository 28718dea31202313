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

//! LLM Manager for routing requests across registered providers

use super::providers::{LlmProvider, build_provider};
use super::types::{LlmConfig, LlmError, LlmMessage, LlmRequest, LlmResponse};
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

/// Named providers plus a default route
pub struct LlmManager {
    providers: RwLock<HashMap<String, Arc<dyn LlmProvider>>>,
    default_provider: RwLock<Option<String>>,
}

impl LlmManager {
    pub fn new() -> Self {
        Self {
            providers: RwLock::new(HashMap::new()),
            default_provider: RwLock::new(None),
        }
    }

    /// Build and register a provider from configuration.
    pub async fn register_config(
        &self,
        name: impl Into<String>,
        config: LlmConfig,
    ) -> Result<(), LlmError> {
        let provider = build_provider(config)?;
        self.register(name, provider).await;
        Ok(())
    }

    /// Register a provider. The first one registered becomes the default.
    pub async fn register(&self, name: impl Into<String>, provider: Arc<dyn LlmProvider>) {
        let name = name.into();
        self.providers.write().await.insert(name.clone(), provider);

        let mut default = self.default_provider.write().await;
        if default.is_none() {
            *default = Some(name);
        }
    }

    pub async fn default_provider(&self) -> Option<String> {
        self.default_provider.read().await.clone()
    }

    async fn provider(&self, name: &str) -> Result<Arc<dyn LlmProvider>, LlmError> {
        self.providers
            .read()
            .await
            .get(name)
            .cloned()
            .ok_or_else(|| LlmError::ProviderUnavailable(format!("Provider '{}' not found", name)))
    }

    /// Send a completion request using the default provider
    pub async fn complete(&self, request: LlmRequest) -> Result<LlmResponse, LlmError> {
        let name = self
            .default_provider()
            .await
            .ok_or_else(|| LlmError::Config("No default provider set".to_string()))?;
        self.complete_with_provider(&name, request).await
    }

    /// The provider handle is cloned out so no lock is held across the request.
    pub async fn complete_with_provider(
        &self,
        name: &str,
        request: LlmRequest,
    ) -> Result<LlmResponse, LlmError> {
        let provider = self.provider(name).await?;
        provider.complete(request).await
    }

    /// Whether the default provider is registered and answering.
    pub async fn is_available(&self) -> bool {
        let Some(name) = self.default_provider().await else {
            return false;
        };
        match self.provider(&name).await {
            Ok(provider) => provider.is_available().await,
            Err(_) => false,
        }
    }

    /// System prompt plus one user message, with sampling tuned for short replies.
    pub fn request_with_system(
        model: impl Into<String>,
        system_prompt: impl Into<String>,
        user_message: impl Into<String>,
    ) -> LlmRequest {
        LlmRequest::new(model)
            .with_message(LlmMessage::system(system_prompt))
            .with_message(LlmMessage::user(user_message))
            .with_temperature(0.7)
            .with_max_tokens(200)
    }
}

impl Default for LlmManager {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::llm::providers::MockLlmProvider;

    fn echo_provider(reply: &'static str, available: bool) -> Arc<dyn LlmProvider> {
        let mut provider = MockLlmProvider::new();
        provider
            .expect_complete()
            .returning(move |request| Ok(LlmResponse::new(reply, request.model)));
        provider.expect_is_available().returning(move || available);
        Arc::new(provider)
    }

    #[tokio::test]
    async fn test_manager_creation() {
        let manager = LlmManager::new();
        assert!(manager.default_provider().await.is_none());
        assert!(!manager.is_available().await);
    }

    #[tokio::test]
    async fn test_first_registered_is_default() {
        let manager = LlmManager::new();
        manager.register("first", echo_provider("one", true)).await;
        manager.register("second", echo_provider("two", false)).await;
        assert_eq!(manager.default_provider().await, Some("first".to_string()));
        assert!(manager.is_available().await);

        let reply = manager.complete(LlmRequest::new("m")).await.unwrap();
        assert_eq!(reply.content, "one");

        let reply = manager
            .complete_with_provider("second", LlmRequest::new("m"))
            .await
            .unwrap();
        assert_eq!(reply.content, "two");
    }

    #[tokio::test]
    async fn test_unavailable_default_provider() {
        let manager = LlmManager::new();
        manager.register("down", echo_provider("", false)).await;
        assert!(!manager.is_available().await);
    }

    #[tokio::test]
    async fn test_register_config() {
        let manager = LlmManager::new();
        let config = LlmConfig::ollama("http://localhost:11434/api/chat", "llama3");
        manager.register_config("ollama", config).await.unwrap();
        assert_eq!(manager.default_provider().await, Some("ollama".to_string()));
    }

    #[tokio::test]
    async fn test_missing_provider_errors() {
        let manager = LlmManager::new();
        assert!(matches!(
            manager.complete(LlmRequest::new("m")).await,
            Err(LlmError::Config(_))
        ));
        assert!(matches!(
            manager.complete_with_provider("nope", LlmRequest::new("m")).await,
            Err(LlmError::ProviderUnavailable(_))
        ));
    }

    #[test]
    fn test_request_with_system() {
        let request = LlmManager::request_with_system("gpt-4o-mini", "You are Ana", "Hello!");
        assert_eq!(request.model, "gpt-4o-mini");
        assert_eq!(request.messages.len(), 2);
        assert_eq!(request.messages[0].content, "You are Ana");
        assert_eq!(request.messages[1].content, "Hello!");
    }
}
