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

//! # Node Lifecycle Controller
//!
//! Sequences one idea through `Idle -> Surveyed -> Focused -> Analyzed` over a read-only
//! population. All per-idea data lives in a single serializable [`SessionState`] owned by the
//! controller. Illegal actions return a [`LifecycleError`] and leave that state untouched.

use crate::aggregate::{self, impact_score};
use crate::error::{EngineResult, LifecycleError};
use crate::focus::FocusSelector;
use crate::scoring::Scorer;
use personasim_common::{
    AnalysisResult, LifecycleAction, LifecycleState, Node, NodeColor, NodeStatus, Persona,
    ScoredReaction, SentimentHistogram,
};
use rand::Rng;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Everything the UI needs to render one idea's progress.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionState {
    pub idea: Option<String>,
    pub stage: LifecycleState,
    /// One node per persona, in population order
    pub nodes: Vec<Node>,
    /// Reactions of the whole population, in population order
    pub reactions: Vec<ScoredReaction>,
    /// Focus group persona ids, most relevant first
    pub focus_group: Vec<String>,
    pub analysis: Option<AnalysisResult>,
}

impl SessionState {
    fn idle(population: &[Persona]) -> Self {
        Self {
            nodes: population
                .iter()
                .map(|p| Node::from_persona(p, NodeStatus::Unanalyzed))
                .collect(),
            ..Self::default()
        }
    }
}

pub struct LifecycleController {
    population: Vec<Persona>,
    scorer: Scorer,
    selector: FocusSelector,
    state: SessionState,
}

impl LifecycleController {
    pub fn new(population: Vec<Persona>) -> Self {
        Self::with_scoring(population, Scorer::default(), FocusSelector::default())
    }

    pub fn with_scoring(population: Vec<Persona>, scorer: Scorer, selector: FocusSelector) -> Self {
        let state = SessionState::idle(&population);
        Self {
            population,
            scorer,
            selector,
            state,
        }
    }

    pub fn population(&self) -> &[Persona] {
        &self.population
    }

    pub fn state(&self) -> &SessionState {
        &self.state
    }

    pub fn stage(&self) -> LifecycleState {
        self.state.stage
    }

    pub fn nodes(&self) -> &[Node] {
        &self.state.nodes
    }

    pub fn into_state(self) -> SessionState {
        self.state
    }

    fn advance(&self, action: LifecycleAction) -> Result<LifecycleState, LifecycleError> {
        self.state.stage.next(action).ok_or(LifecycleError {
            state: self.state.stage,
            action,
        })
    }

    /// Score the whole population against `idea` and show every node unscored.
    ///
    /// Legal from any state; prior focus and analysis are discarded.
    pub fn submit_idea<R: Rng + ?Sized>(&mut self, idea: &str, rng: &mut R) -> &SessionState {
        let stage = self
            .state
            .stage
            .next(LifecycleAction::Submit)
            .unwrap_or(LifecycleState::Surveyed);

        let reactions = self.scorer.score_population(&self.population, idea, rng);
        let nodes = self
            .population
            .iter()
            .map(|p| Node::from_persona(p, NodeStatus::ShownUnscored))
            .collect();

        self.state = SessionState {
            idea: Some(idea.to_string()),
            stage,
            nodes,
            reactions,
            focus_group: Vec::new(),
            analysis: None,
        };
        tracing::debug!(
            "Idea surveyed across {} personas",
            self.state.reactions.len()
        );
        &self.state
    }

    /// Select and color the focus group. Only legal while surveyed.
    ///
    /// Returns the focused reactions, most relevant first.
    pub fn focus<R: Rng + ?Sized>(
        &mut self,
        count: usize,
        rng: &mut R,
    ) -> EngineResult<Vec<&ScoredReaction>> {
        let stage = self.advance(LifecycleAction::Focus)?;
        let idea = self.state.idea.as_deref().unwrap_or_default();

        let group = self.selector.select(&self.population, idea, count, rng)?;
        let focus_group: Vec<String> = group.into_iter().map(|p| p.id).collect();

        let sentiments: HashMap<&str, NodeColor> = self
            .state
            .reactions
            .iter()
            .map(|r| (r.persona_id.as_str(), NodeColor::from(r.sentiment)))
            .collect();
        let colors: Vec<Option<NodeColor>> = self
            .state
            .nodes
            .iter()
            .map(|node| {
                focus_group
                    .iter()
                    .any(|id| *id == node.persona_id)
                    .then(|| sentiments.get(node.persona_id.as_str()).copied())
                    .flatten()
            })
            .collect();
        for (node, color) in self.state.nodes.iter_mut().zip(colors) {
            if let Some(color) = color {
                node.status = NodeStatus::FocusedScored(color);
            }
        }

        self.state.focus_group = focus_group;
        self.state.stage = stage;
        tracing::debug!("Focused {} personas", self.state.focus_group.len());
        Ok(self.focused_reactions())
    }

    /// Reactions of the focus group, most relevant first. Empty before focusing.
    pub fn focused_reactions(&self) -> Vec<&ScoredReaction> {
        self.state
            .focus_group
            .iter()
            .filter_map(|id| self.state.reactions.iter().find(|r| r.persona_id == *id))
            .collect()
    }

    /// Replace the feedback text of one reaction. Nothing else on the reaction changes.
    pub fn replace_feedback(&mut self, persona_id: &str, feedback: String) -> bool {
        match self
            .state
            .reactions
            .iter_mut()
            .find(|r| r.persona_id == persona_id)
        {
            Some(reaction) => {
                reaction.feedback_text = feedback;
                true
            }
            None => false,
        }
    }

    /// Aggregate the focus group. Legal once focused; repeating recomputes from the same group.
    pub fn analyze(&mut self) -> Result<&AnalysisResult, LifecycleError> {
        let stage = self.advance(LifecycleAction::Analyze)?;

        let focused: Vec<ScoredReaction> =
            self.focused_reactions().into_iter().cloned().collect();
        let mut result = aggregate::aggregate(&focused);
        result.impact_score =
            impact_score(self.state.nodes.iter().filter_map(|node| node.status.color()));

        self.state.stage = stage;
        Ok(self.state.analysis.insert(result))
    }

    /// Drop the idea and hide every node.
    pub fn reset(&mut self) {
        self.state = SessionState::idle(&self.population);
    }

    /// Sentiment counts over the whole scored population. `None` until an idea is submitted.
    pub fn population_histogram(&self) -> Option<SentimentHistogram> {
        match self.state.stage {
            LifecycleState::Idle => None,
            _ => Some(aggregate::histogram(&self.state.reactions)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::EngineError;
    use crate::population::generate_population;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    const IDEA: &str = "AI scheduling assistant for doctors";

    fn controller() -> LifecycleController {
        LifecycleController::new(generate_population(12, Some(9)).unwrap())
    }

    #[test]
    fn test_starts_idle_with_hidden_nodes() {
        let controller = controller();
        assert_eq!(controller.stage(), LifecycleState::Idle);
        assert_eq!(controller.nodes().len(), 12);
        assert!(
            controller
                .nodes()
                .iter()
                .all(|n| n.status == NodeStatus::Unanalyzed)
        );
        assert!(controller.population_histogram().is_none());
    }

    #[test]
    fn test_full_cycle() {
        let mut controller = controller();
        let mut rng = StdRng::seed_from_u64(1);

        let state = controller.submit_idea(IDEA, &mut rng);
        assert_eq!(state.stage, LifecycleState::Surveyed);
        assert_eq!(state.reactions.len(), 12);
        assert!(state.nodes.iter().all(|n| n.status == NodeStatus::ShownUnscored));
        assert_eq!(controller.population_histogram().unwrap().total(), 12);

        let focused = controller.focus(4, &mut rng).unwrap();
        assert_eq!(focused.len(), 4);
        assert_eq!(controller.stage(), LifecycleState::Focused);
        let colored = controller
            .nodes()
            .iter()
            .filter(|n| n.status.color().is_some())
            .count();
        assert_eq!(colored, 4);

        let result = controller.analyze().unwrap().clone();
        assert_eq!(controller.stage(), LifecycleState::Analyzed);
        assert_eq!(result.total, 4);
        assert_eq!(result.focus_group, controller.state().focus_group);
        assert!(result.impact_score <= 100);
    }

    #[test]
    fn test_analyze_is_idempotent() {
        let mut controller = controller();
        let mut rng = StdRng::seed_from_u64(2);
        controller.submit_idea(IDEA, &mut rng);
        controller.focus(5, &mut rng).unwrap();

        let first = controller.analyze().unwrap().clone();
        let second = controller.analyze().unwrap().clone();
        assert_eq!(first, second);
        assert_eq!(second.total, 5);
    }

    #[test]
    fn test_illegal_transitions_leave_state_untouched() {
        let mut controller = controller();
        let mut rng = StdRng::seed_from_u64(3);

        let err = controller.focus(3, &mut rng).unwrap_err();
        assert!(matches!(
            err,
            EngineError::Lifecycle(LifecycleError {
                state: LifecycleState::Idle,
                action: LifecycleAction::Focus
            })
        ));
        assert_eq!(controller.stage(), LifecycleState::Idle);

        controller.submit_idea(IDEA, &mut rng);
        let before = controller.state().clone();
        let err = controller.analyze().unwrap_err();
        assert_eq!(err.state, LifecycleState::Surveyed);
        assert_eq!(controller.state(), &before);

        controller.focus(3, &mut rng).unwrap();
        let before = controller.state().clone();
        assert!(controller.focus(3, &mut rng).is_err());
        assert_eq!(controller.state(), &before);
    }

    #[test]
    fn test_invalid_focus_count_keeps_surveyed() {
        let mut controller = controller();
        let mut rng = StdRng::seed_from_u64(4);
        controller.submit_idea(IDEA, &mut rng);

        let err = controller.focus(0, &mut rng).unwrap_err();
        assert!(matches!(err, EngineError::InvalidFocusCount(0)));
        assert_eq!(controller.stage(), LifecycleState::Surveyed);
    }

    #[test]
    fn test_resubmit_clears_focus_and_analysis() {
        let mut controller = controller();
        let mut rng = StdRng::seed_from_u64(5);
        controller.submit_idea(IDEA, &mut rng);
        controller.focus(3, &mut rng).unwrap();
        controller.analyze().unwrap();

        let state = controller.submit_idea("a bakery", &mut rng);
        assert_eq!(state.stage, LifecycleState::Surveyed);
        assert!(state.focus_group.is_empty());
        assert!(state.analysis.is_none());
        assert_eq!(state.idea.as_deref(), Some("a bakery"));

        controller.reset();
        assert_eq!(controller.stage(), LifecycleState::Idle);
        assert!(controller.state().reactions.is_empty());
    }

    #[test]
    fn test_replace_feedback_changes_only_text() {
        let mut controller = controller();
        let mut rng = StdRng::seed_from_u64(6);
        controller.submit_idea(IDEA, &mut rng);
        let id = controller.population()[0].id.clone();
        let before = controller.state().reactions[0].clone();

        assert!(controller.replace_feedback(&id, "Richer text".to_string()));
        let after = &controller.state().reactions[0];
        assert_eq!(after.feedback_text, "Richer text");
        assert_eq!(after.sentiment, before.sentiment);
        assert_eq!(after.numeric_score, before.numeric_score);
        assert_eq!(after.confidence, before.confidence);
        assert!(!controller.replace_feedback("missing", String::new()));
    }

    #[test]
    fn test_state_serializes() {
        let mut controller = controller();
        controller.submit_idea(IDEA, &mut StdRng::seed_from_u64(7));
        let json = serde_json::to_value(controller.state()).unwrap();
        assert_eq!(json["stage"], "surveyed");
        assert_eq!(json["nodes"][0]["status"]["status"], "shown-unscored");
    }
}
