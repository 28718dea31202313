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

//! Async orchestration of one simulation session
//!
//! The synchronous core runs to completion before any collaborator is awaited. Store and
//! embellisher failures are logged, counted, and otherwise ignored.

use crate::embellish::{Embellisher, NoopEmbellisher, feedback_or_baseline};
use crate::error::EngineResult;
use crate::lifecycle::{LifecycleController, SessionState};
use crate::persistence::{MemoryStore, PopulationStore, StoreError};
use crate::population::{generate_population_with_rng, rng_from_seed};
use metrics::{counter, histogram};
use personasim_common::{AnalysisResult, LifecycleState, Persona, ScoredReaction, SessionId};
use rand::rngs::StdRng;
use std::sync::Arc;
use tracing::instrument;

fn store_failure(operation: &'static str, session: SessionId, error: &StoreError) {
    counter!("personasim.store.failures", "operation" => operation).increment(1);
    tracing::warn!("Store {} failed for session {}: {}", operation, session, error);
}

pub struct Simulation {
    session: SessionId,
    controller: LifecycleController,
    store: Arc<dyn PopulationStore>,
    embellisher: Arc<dyn Embellisher>,
    rng: StdRng,
}

impl Simulation {
    /// In-memory store, no embellishment.
    pub async fn standalone(population_size: usize, seed: Option<u64>) -> EngineResult<Self> {
        Self::open(
            SessionId::new(),
            population_size,
            seed,
            Arc::new(MemoryStore::new()),
            Arc::new(NoopEmbellisher),
        )
        .await
    }

    /// Load the session's population, or generate and save a fresh one.
    #[instrument(skip(store, embellisher))]
    pub async fn open(
        session: SessionId,
        population_size: usize,
        seed: Option<u64>,
        store: Arc<dyn PopulationStore>,
        embellisher: Arc<dyn Embellisher>,
    ) -> EngineResult<Self> {
        let mut rng = rng_from_seed(seed);

        let stored = match store.load_population(session).await {
            Ok(population) => population.filter(|p| !p.is_empty()),
            Err(e) => {
                store_failure("load_population", session, &e);
                None
            }
        };

        let population = match stored {
            Some(population) => {
                tracing::info!("Loaded {} personas for session {}", population.len(), session);
                population
            }
            None => {
                let population = generate_population_with_rng(population_size, &mut rng)?;
                tracing::info!(
                    "Generated {} personas for session {}",
                    population.len(),
                    session
                );
                if let Err(e) = store.save_population(session, &population).await {
                    store_failure("save_population", session, &e);
                }
                population
            }
        };

        Ok(Self {
            session,
            controller: LifecycleController::new(population),
            store,
            embellisher,
            rng,
        })
    }

    pub fn session_id(&self) -> SessionId {
        self.session
    }

    pub fn population(&self) -> &[Persona] {
        self.controller.population()
    }

    pub fn controller(&self) -> &LifecycleController {
        &self.controller
    }

    pub fn state(&self) -> &SessionState {
        self.controller.state()
    }

    pub fn stage(&self) -> LifecycleState {
        self.controller.stage()
    }

    /// Score the whole population. Always legal.
    pub fn submit_idea(&mut self, idea: &str) -> &SessionState {
        counter!("personasim.ideas.submitted").increment(1);
        self.controller.submit_idea(idea, &mut self.rng)
    }

    /// Select the focus group, then let the embellisher rewrite its feedback.
    #[instrument(skip(self), fields(session = %self.session))]
    pub async fn focus(&mut self, count: usize) -> EngineResult<Vec<ScoredReaction>> {
        let focused: Vec<ScoredReaction> = self
            .controller
            .focus(count, &mut self.rng)?
            .into_iter()
            .cloned()
            .collect();
        counter!("personasim.focus_groups").increment(1);

        let idea = self.controller.state().idea.clone().unwrap_or_default();
        for reaction in &focused {
            let Some(persona) = self
                .controller
                .population()
                .iter()
                .find(|p| p.id == reaction.persona_id)
            else {
                continue;
            };
            let text =
                feedback_or_baseline(self.embellisher.as_ref(), persona, &idea, reaction).await;
            if text != reaction.feedback_text {
                self.controller.replace_feedback(&reaction.persona_id, text);
            }
        }

        Ok(self
            .controller
            .focused_reactions()
            .into_iter()
            .cloned()
            .collect())
    }

    /// Aggregate the focus group and save the result.
    #[instrument(skip(self), fields(session = %self.session))]
    pub async fn analyze(&mut self) -> EngineResult<AnalysisResult> {
        let result = self.controller.analyze()?.clone();
        histogram!("personasim.impact_score").record(result.impact_score as f64);
        tracing::info!(
            "Impact score {} over {} focused personas",
            result.impact_score,
            result.total
        );

        if let Err(e) = self.store.save_analysis_result(self.session, &result).await {
            store_failure("save_analysis_result", self.session, &e);
        }
        Ok(result)
    }

    pub fn reset(&mut self) {
        self.controller.reset();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::embellish::{EmbellishError, MockEmbellisher};
    use crate::error::EngineError;
    use crate::persistence::MockPopulationStore;
    use crate::population::generate_population;

    const IDEA: &str = "AI scheduling assistant for doctors";

    fn unavailable() -> StoreError {
        StoreError::Unavailable("connection refused".to_string())
    }

    #[tokio::test]
    async fn test_full_pipeline_with_defaults() {
        let mut simulation = Simulation::standalone(30, Some(1)).await.unwrap();
        assert_eq!(simulation.population().len(), 30);
        assert_eq!(simulation.stage(), LifecycleState::Idle);

        simulation.submit_idea(IDEA);
        let focused = simulation.focus(6).await.unwrap();
        assert_eq!(focused.len(), 6);

        let result = simulation.analyze().await.unwrap();
        assert_eq!(result.total, 6);
        assert_eq!(simulation.stage(), LifecycleState::Analyzed);
    }

    #[tokio::test]
    async fn test_same_seed_same_outcome() {
        let run = |seed| async move {
            let mut simulation = Simulation::standalone(25, Some(seed)).await.unwrap();
            simulation.submit_idea(IDEA);
            simulation.focus(5).await.unwrap();
            simulation.analyze().await.unwrap()
        };
        assert_eq!(run(42).await, run(42).await);
    }

    #[tokio::test]
    async fn test_stored_population_is_reused() {
        let saved = generate_population(7, Some(3)).unwrap();
        let returned = saved.clone();

        let mut store = MockPopulationStore::new();
        store
            .expect_load_population()
            .times(1)
            .returning(move |_| Ok(Some(returned.clone())));
        store.expect_save_population().never();

        let simulation = Simulation::open(
            SessionId::new(),
            100,
            Some(1),
            Arc::new(store),
            Arc::new(NoopEmbellisher),
        )
        .await
        .unwrap();
        assert_eq!(simulation.population(), saved.as_slice());
    }

    #[tokio::test]
    async fn test_store_failures_are_fail_soft() {
        let mut store = MockPopulationStore::new();
        store
            .expect_load_population()
            .returning(|_| Err(unavailable()));
        store
            .expect_save_population()
            .times(1)
            .returning(|_, _| Err(unavailable()));
        store
            .expect_save_analysis_result()
            .times(1)
            .returning(|_, _| Err(unavailable()));

        let mut simulation = Simulation::open(
            SessionId::new(),
            12,
            Some(2),
            Arc::new(store),
            Arc::new(NoopEmbellisher),
        )
        .await
        .unwrap();
        assert_eq!(simulation.population().len(), 12);

        simulation.submit_idea(IDEA);
        simulation.focus(4).await.unwrap();
        let result = simulation.analyze().await.unwrap();
        assert_eq!(result.total, 4);
    }

    #[tokio::test]
    async fn test_embellisher_only_changes_feedback() {
        let mut embellisher = MockEmbellisher::new();
        embellisher
            .expect_embellish()
            .times(3)
            .returning(|persona, _, _| Ok(format!("{} has opinions", persona.name)));

        let mut simulation = Simulation::open(
            SessionId::new(),
            10,
            Some(4),
            Arc::new(MemoryStore::new()),
            Arc::new(embellisher),
        )
        .await
        .unwrap();
        simulation.submit_idea(IDEA);
        let before: Vec<ScoredReaction> = simulation.state().reactions.clone();

        let focused = simulation.focus(3).await.unwrap();
        for reaction in &focused {
            let original = before
                .iter()
                .find(|r| r.persona_id == reaction.persona_id)
                .unwrap();
            assert!(reaction.feedback_text.ends_with("has opinions"));
            assert_eq!(reaction.sentiment, original.sentiment);
            assert_eq!(reaction.numeric_score, original.numeric_score);
            assert_eq!(reaction.confidence, original.confidence);
            assert_eq!(reaction.reasoning_text, original.reasoning_text);
        }
    }

    #[tokio::test]
    async fn test_failing_embellisher_keeps_templates() {
        let mut embellisher = MockEmbellisher::new();
        embellisher
            .expect_embellish()
            .returning(|_, _, _| Err(EmbellishError::Empty));

        let mut simulation = Simulation::open(
            SessionId::new(),
            10,
            Some(5),
            Arc::new(MemoryStore::new()),
            Arc::new(embellisher),
        )
        .await
        .unwrap();
        simulation.submit_idea(IDEA);
        let before = simulation.state().reactions.clone();

        for reaction in simulation.focus(4).await.unwrap() {
            let original = before
                .iter()
                .find(|r| r.persona_id == reaction.persona_id)
                .unwrap();
            assert_eq!(reaction.feedback_text, original.feedback_text);
        }
    }

    #[tokio::test]
    async fn test_lifecycle_errors_surface() {
        let mut simulation = Simulation::standalone(5, Some(6)).await.unwrap();
        assert!(matches!(
            simulation.focus(2).await,
            Err(EngineError::Lifecycle(_))
        ));
        assert!(matches!(
            simulation.analyze().await,
            Err(EngineError::Lifecycle(_))
        ));
    }

    #[tokio::test]
    async fn test_zero_population_is_rejected() {
        let result = Simulation::standalone(0, None).await;
        assert!(matches!(result, Err(EngineError::InvalidPopulationSize(0))));
    }
}
