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

//! # Idea-Fit Scorer
//!
//! Turns a `(persona, idea)` pair into a [`ScoredReaction`]. The score is an additive heuristic:
//! every [`Signal`] contributes a bounded delta, then a single uniform perturbation is added.
//! The perturbation is the only random term and is drawn from the injected RNG first, so a
//! seeded RNG makes scoring fully reproducible.
//!
//! | Score          | Sentiment | Confidence                      |
//! |----------------|-----------|---------------------------------|
//! | `> 30`         | positive  | `min(0.9, (score - 30) / 70)`   |
//! | `< -30`        | negative  | `min(0.9, (-30 - score) / 70)`  |
//! | otherwise      | neutral   | `min(0.8, 1 - abs(score) / 30)` |

pub mod keywords;
pub mod signals;
pub mod templates;

pub use keywords::{IdeaText, KeywordOverlap};
pub use signals::{STANDARD_SIGNALS, Signal, SignalFn};

use personasim_common::{Persona, ScoredReaction, Sentiment, SignalContribution};
use rand::Rng;

pub const POSITIVE_THRESHOLD: f64 = 30.0;
pub const NEGATIVE_THRESHOLD: f64 = -30.0;
/// Half-width of the uniform perturbation.
pub const PERTURBATION: f64 = 15.0;

const PERTURBATION_SIGNAL: &str = "perturbation";

/// Additive weighted scorer over a list of named signals.
#[derive(Debug, Clone)]
pub struct Scorer {
    signals: Vec<Signal>,
    perturbation: f64,
}

impl Scorer {
    pub fn new(signals: Vec<Signal>, perturbation: f64) -> Self {
        Self {
            signals,
            perturbation: perturbation.abs(),
        }
    }

    pub fn signals(&self) -> &[Signal] {
        &self.signals
    }

    /// Sum of every signal, without the random term.
    pub fn baseline(&self, persona: &Persona, idea: &IdeaText) -> f64 {
        self.signals.iter().map(|s| s.delta(persona, idea)).sum()
    }

    /// Score one persona against raw idea text.
    pub fn score<R: Rng + ?Sized>(&self, persona: &Persona, idea: &str, rng: &mut R) -> ScoredReaction {
        self.score_text(persona, &IdeaText::new(idea), rng)
    }

    /// Score one persona against already-tokenized idea text.
    pub fn score_text<R: Rng + ?Sized>(
        &self,
        persona: &Persona,
        idea: &IdeaText,
        rng: &mut R,
    ) -> ScoredReaction {
        let noise = if self.perturbation > 0.0 {
            rng.random_range(-self.perturbation..=self.perturbation)
        } else {
            0.0
        };

        let mut contributions: Vec<SignalContribution> = self
            .signals
            .iter()
            .map(|signal| SignalContribution {
                signal: signal.name.to_string(),
                delta: signal.delta(persona, idea),
            })
            .collect();
        let score: f64 = contributions.iter().map(|c| c.delta).sum::<f64>() + noise;
        contributions.push(SignalContribution {
            signal: PERTURBATION_SIGNAL.to_string(),
            delta: noise,
        });

        let (sentiment, confidence) = classify(score);

        let overlap = KeywordOverlap::of(persona, idea);
        let context = templates::TemplateContext::new(persona, &overlap);
        let feedback_text = templates::feedback(sentiment, &context, rng);
        let reasoning_text = templates::reasoning(sentiment, &context, rng);

        ScoredReaction {
            persona_id: persona.id.clone(),
            sentiment,
            numeric_score: score,
            confidence,
            feedback_text,
            reasoning_text,
            concerns: templates::concerns(persona, sentiment),
            suggestions: templates::suggestions(persona, sentiment, &overlap),
            country: persona.location.country.clone(),
            continent: persona.location.continent.clone(),
            industry: persona.industry.clone(),
            signals: contributions,
        }
    }

    /// Score every persona, in population order.
    pub fn score_population<R: Rng + ?Sized>(
        &self,
        population: &[Persona],
        idea: &str,
        rng: &mut R,
    ) -> Vec<ScoredReaction> {
        let idea = IdeaText::new(idea);
        population
            .iter()
            .map(|persona| self.score_text(persona, &idea, rng))
            .collect()
    }
}

impl Default for Scorer {
    fn default() -> Self {
        Self::new(STANDARD_SIGNALS.to_vec(), PERTURBATION)
    }
}

/// Score one persona with the standard signals.
pub fn score<R: Rng + ?Sized>(persona: &Persona, idea: &str, rng: &mut R) -> ScoredReaction {
    Scorer::default().score(persona, idea, rng)
}

/// Map a numeric score to a sentiment and its confidence.
pub fn classify(score: f64) -> (Sentiment, f64) {
    if score > POSITIVE_THRESHOLD {
        let confidence = ((score - POSITIVE_THRESHOLD) / 70.0).min(0.9);
        (Sentiment::Positive, confidence)
    } else if score < NEGATIVE_THRESHOLD {
        let confidence = ((NEGATIVE_THRESHOLD - score) / 70.0).min(0.9);
        (Sentiment::Negative, confidence)
    } else {
        let confidence = (1.0 - score.abs() / POSITIVE_THRESHOLD).clamp(0.0, 0.8);
        (Sentiment::Neutral, confidence)
    }
}
