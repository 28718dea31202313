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

//! Focus-group selection
//!
//! Relevance here is independent of the sentiment score: keyword overlap with the idea plus a
//! uniform jitter. Ranking is total; equal relevance falls back to persona id ascending.

use crate::error::{EngineError, EngineResult};
use crate::scoring::{IdeaText, KeywordOverlap};
use personasim_common::Persona;
use rand::Rng;
use std::cmp::Ordering;

pub const INTEREST_RELEVANCE: f64 = 10.0;
pub const INDUSTRY_RELEVANCE: f64 = 15.0;
pub const ROLE_RELEVANCE: f64 = 12.0;
/// Upper bound (exclusive) of the uniform relevance jitter.
pub const RELEVANCE_JITTER: f64 = 20.0;

/// A persona with its relevance for one idea.
#[derive(Debug, Clone, PartialEq)]
pub struct RankedPersona<'p> {
    pub persona: &'p Persona,
    pub relevance: f64,
}

/// Deterministic part of the relevance score.
pub fn keyword_relevance(persona: &Persona, idea: &IdeaText) -> f64 {
    let overlap = KeywordOverlap::of(persona, idea);
    let mut relevance = overlap.interests.len() as f64 * INTEREST_RELEVANCE;
    if overlap.industry {
        relevance += INDUSTRY_RELEVANCE;
    }
    if overlap.role {
        relevance += ROLE_RELEVANCE;
    }
    relevance
}

fn by_relevance(a: &RankedPersona<'_>, b: &RankedPersona<'_>) -> Ordering {
    b.relevance
        .total_cmp(&a.relevance)
        .then_with(|| a.persona.id.cmp(&b.persona.id))
}

/// Ranks personas by relevance plus controlled randomness.
#[derive(Debug, Clone, Copy)]
pub struct FocusSelector {
    jitter: f64,
}

impl FocusSelector {
    pub fn new(jitter: f64) -> Self {
        Self {
            jitter: jitter.abs(),
        }
    }

    /// Every persona, most relevant first.
    pub fn rank<'p, R: Rng + ?Sized>(
        &self,
        population: &'p [Persona],
        idea: &str,
        rng: &mut R,
    ) -> Vec<RankedPersona<'p>> {
        let idea = IdeaText::new(idea);
        let mut ranked: Vec<RankedPersona<'p>> = population
            .iter()
            .map(|persona| {
                let noise = if self.jitter > 0.0 {
                    rng.random_range(0.0..self.jitter)
                } else {
                    0.0
                };
                RankedPersona {
                    persona,
                    relevance: keyword_relevance(persona, &idea) + noise,
                }
            })
            .collect();
        ranked.sort_by(by_relevance);
        ranked
    }

    /// The top `min(count, population.len())` personas. The input is never modified.
    pub fn select<R: Rng + ?Sized>(
        &self,
        population: &[Persona],
        idea: &str,
        count: usize,
        rng: &mut R,
    ) -> EngineResult<Vec<Persona>> {
        if count == 0 {
            return Err(EngineError::InvalidFocusCount(count));
        }
        if count > population.len() {
            tracing::debug!(
                "Focus group of {} requested from {} personas, returning all",
                count,
                population.len()
            );
        }

        Ok(self
            .rank(population, idea, rng)
            .into_iter()
            .take(count)
            .map(|ranked| ranked.persona.clone())
            .collect())
    }
}

impl Default for FocusSelector {
    fn default() -> Self {
        Self::new(RELEVANCE_JITTER)
    }
}

/// Select a focus group with the standard relevance weights.
pub fn select_focus_group<R: Rng + ?Sized>(
    population: &[Persona],
    idea: &str,
    count: usize,
    rng: &mut R,
) -> EngineResult<Vec<Persona>> {
    FocusSelector::default().select(population, idea, count, rng)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::population::generate_population;
    use crate::test_utils::persona_with;
    use proptest::prelude::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;
    use std::collections::HashSet;

    #[test]
    fn test_zero_count_is_rejected() {
        let population = generate_population(5, Some(1)).unwrap();
        let result = select_focus_group(&population, "idea", 0, &mut StdRng::seed_from_u64(1));
        assert!(matches!(result, Err(EngineError::InvalidFocusCount(0))));
    }

    #[test]
    fn test_relevance_weights() {
        let doctor = persona_with("a", "Healthcare", "Doctor", &["ai", "scheduling"]);
        let idea = IdeaText::new("AI scheduling assistant for doctors");
        assert_eq!(keyword_relevance(&doctor, &idea), 10.0 * 2.0 + 15.0 + 12.0);

        let farmer = persona_with("b", "Agriculture", "Farmer", &["music"]);
        assert_eq!(keyword_relevance(&farmer, &idea), 0.0);
    }

    #[test]
    fn test_ties_break_by_id() {
        let population = vec![
            persona_with("c", "Agriculture", "Farmer", &["music"]),
            persona_with("a", "Agriculture", "Farmer", &["music"]),
            persona_with("b", "Agriculture", "Farmer", &["music"]),
        ];
        let selector = FocusSelector::new(0.0);
        let ranked = selector.rank(&population, "bakery", &mut StdRng::seed_from_u64(0));
        let ids: Vec<&str> = ranked.iter().map(|r| r.persona.id.as_str()).collect();
        assert_eq!(ids, vec!["a", "b", "c"]);
    }

    #[test]
    fn test_keyword_match_outranks_jitter() {
        let mut population: Vec<Persona> = (0..10)
            .map(|i| persona_with(&format!("p{}", i), "Agriculture", "Farmer", &["music"]))
            .collect();
        population.push(persona_with("doc", "Healthcare", "Doctor", &["wearables"]));

        for seed in 0..50 {
            let group = select_focus_group(
                &population,
                "AI scheduling assistant for doctors",
                1,
                &mut StdRng::seed_from_u64(seed),
            )
            .unwrap();
            // industry + role = 27, which beats any jitter below 20
            assert_eq!(group[0].id, "doc");
        }
    }

    #[test]
    fn test_input_is_not_modified() {
        let population = generate_population(15, Some(4)).unwrap();
        let snapshot = population.clone();
        let _ = select_focus_group(&population, "cloud tool", 5, &mut StdRng::seed_from_u64(2));
        assert_eq!(population, snapshot);
    }

    proptest! {
        #[test]
        fn prop_selection_size_and_membership(n in 1usize..40, k in 1usize..60, seed in any::<u64>()) {
            let population = generate_population(n, Some(seed)).unwrap();
            let group = select_focus_group(
                &population,
                "mobile health app",
                k,
                &mut StdRng::seed_from_u64(seed),
            )
            .unwrap();

            prop_assert_eq!(group.len(), k.min(n));
            let ids: HashSet<&str> = group.iter().map(|p| p.id.as_str()).collect();
            prop_assert_eq!(ids.len(), group.len());
            for member in &group {
                prop_assert!(population.contains(member));
            }
        }
    }
}
