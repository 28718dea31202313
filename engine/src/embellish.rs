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

//! Optional rewriting of template feedback into richer persona voice
//!
//! An [`Embellisher`] only ever produces replacement feedback text. Sentiment, score, confidence
//! and reasoning of the baseline reaction are never touched.

use crate::llm::{LlmError, LlmManager};
use async_trait::async_trait;
use metrics::counter;
use personasim_common::{Persona, ScoredReaction};
use std::sync::Arc;
use std::time::Duration;
use thiserror::Error;

pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

#[derive(Debug, Error)]
pub enum EmbellishError {
    #[error(transparent)]
    Llm(#[from] LlmError),
    #[error("Embellishment timed out after {0:?}")]
    Timeout(Duration),
    #[error("Embellishment returned no text")]
    Empty,
}

/// Produces richer feedback text for a baseline reaction.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait Embellisher: Send + Sync {
    async fn embellish(
        &self,
        persona: &Persona,
        idea: &str,
        baseline: &ScoredReaction,
    ) -> Result<String, EmbellishError>;
}

/// Returns the baseline feedback unchanged.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopEmbellisher;

#[async_trait]
impl Embellisher for NoopEmbellisher {
    async fn embellish(
        &self,
        _persona: &Persona,
        _idea: &str,
        baseline: &ScoredReaction,
    ) -> Result<String, EmbellishError> {
        Ok(baseline.feedback_text.clone())
    }
}

/// Rewrites feedback through the default provider of an [`LlmManager`].
pub struct LlmEmbellisher {
    manager: Arc<LlmManager>,
    model: String,
    timeout: Duration,
}

impl LlmEmbellisher {
    pub fn new(manager: Arc<LlmManager>, model: impl Into<String>) -> Self {
        Self {
            manager,
            model: model.into(),
            timeout: DEFAULT_TIMEOUT,
        }
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }
}

#[async_trait]
impl Embellisher for LlmEmbellisher {
    async fn embellish(
        &self,
        persona: &Persona,
        idea: &str,
        baseline: &ScoredReaction,
    ) -> Result<String, EmbellishError> {
        let request = LlmManager::request_with_system(
            self.model.clone(),
            system_prompt(persona),
            user_prompt(idea, baseline),
        );

        let response = tokio::time::timeout(self.timeout, self.manager.complete(request))
            .await
            .map_err(|_| EmbellishError::Timeout(self.timeout))??;

        clean_reply(&response.content).ok_or(EmbellishError::Empty)
    }
}

fn system_prompt(persona: &Persona) -> String {
    format!(
        "You are {}. You communicate in a {} style. \
         Your interests are {}. Your biggest frustrations are {}. \
         Reply in first person with two or three sentences and nothing else.",
        persona.summary(),
        persona.communication_style,
        persona.interests.join(", "),
        persona.pain_points.join(", "),
    )
}

fn user_prompt(idea: &str, baseline: &ScoredReaction) -> String {
    format!(
        "Product idea: \"{}\"\n\
         Your overall reaction is {}. A first draft of your feedback reads:\n\"{}\"\n\
         Rewrite it in your own voice, keeping the same overall reaction.",
        idea, baseline.sentiment, baseline.feedback_text
    )
}

/// Trim whitespace and one pair of wrapping quotes. `None` when nothing is left.
fn clean_reply(content: &str) -> Option<String> {
    let trimmed = content.trim();
    let unquoted = trimmed
        .strip_prefix('"')
        .and_then(|s| s.strip_suffix('"'))
        .unwrap_or(trimmed)
        .trim();
    (!unquoted.is_empty()).then(|| unquoted.to_string())
}

/// Embellished feedback, or the baseline text when the embellisher fails.
pub async fn feedback_or_baseline(
    embellisher: &dyn Embellisher,
    persona: &Persona,
    idea: &str,
    baseline: &ScoredReaction,
) -> String {
    match embellisher.embellish(persona, idea, baseline).await {
        Ok(text) if !text.trim().is_empty() => text,
        Ok(_) => baseline.feedback_text.clone(),
        Err(e) => {
            counter!("personasim.embellish.failures").increment(1);
            tracing::warn!("Keeping template feedback for {}: {}", persona.id, e);
            baseline.feedback_text.clone()
        }
    }
}
