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

//! Synthetic population generation
//!
//! Personality traits are drawn from bounded uniform ranges. The categorical psychographics are
//! then sampled with weights keyed on a bucketed trait score, so that for example high openness
//! leans toward `early-adopter` and `cutting-edge` without fixing the outcome.

use super::catalogue::CITIES;
use super::vocabulary::{FIRST_NAMES, GENDERS, GOALS, INDUSTRIES, INTERESTS, LAST_NAMES, PAIN_POINTS};
use crate::error::{EngineError, EngineResult};
use personasim_common::{
    CommunicationStyle, CompanySize, InnovationPreference, Location, Persona, Personality,
    RiskTolerance, TechAdoption,
};
use rand::rngs::StdRng;
use rand::seq::{IndexedRandom, SliceRandom};
use rand::{Rng, SeedableRng};
use std::ops::RangeInclusive;

/// Big Five draw ranges. Conscientiousness and agreeableness floor at 25 since every persona is
/// employed and takes part in a focus group, so the bottom of those scales is never drawn.
pub const OPENNESS_RANGE: RangeInclusive<i32> = 20..=70;
pub const CONSCIENTIOUSNESS_RANGE: RangeInclusive<i32> = 25..=70;
pub const EXTRAVERSION_RANGE: RangeInclusive<i32> = 20..=70;
pub const AGREEABLENESS_RANGE: RangeInclusive<i32> = 25..=70;
/// Shifted low relative to the other four traits.
pub const NEUROTICISM_RANGE: RangeInclusive<i32> = 15..=55;

pub const AGE_RANGE: RangeInclusive<u8> = 21..=70;
pub const INTEREST_COUNT: RangeInclusive<usize> = 3..=6;
pub const PAIN_POINT_COUNT: RangeInclusive<usize> = 2..=4;
pub const GOAL_COUNT: RangeInclusive<usize> = 2..=4;

const BASE_INCOME: f64 = 42_000.0;

/// Build the generator RNG, seeded when reproducibility is wanted.
pub fn rng_from_seed(seed: Option<u64>) -> StdRng {
    match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_os_rng(),
    }
}

/// Generate `n` personas spread over the city catalogue.
pub fn generate_population(n: usize, seed: Option<u64>) -> EngineResult<Vec<Persona>> {
    let mut rng = rng_from_seed(seed);
    generate_population_with_rng(n, &mut rng)
}

/// Generate `n` personas using the supplied RNG.
///
/// The first `min(n, CITIES.len())` personas land in distinct cities. Beyond that cities are
/// reused, but every slot re-rolls its own name and traits.
pub fn generate_population_with_rng<R: Rng + ?Sized>(
    n: usize,
    rng: &mut R,
) -> EngineResult<Vec<Persona>> {
    if n == 0 {
        return Err(EngineError::InvalidPopulationSize(n));
    }

    let mut order: Vec<usize> = (0..CITIES.len()).collect();
    order.shuffle(rng);

    let mut population = Vec::with_capacity(n);
    for slot in 0..n {
        let city = &CITIES[order[slot % order.len()]];
        population.push(generate_persona(city.to_location(), rng));
    }

    tracing::debug!(
        "Generated population of {} personas across {} cities",
        population.len(),
        n.min(CITIES.len())
    );
    Ok(population)
}

/// Generate a single persona living in `location`.
pub fn generate_persona<R: Rng + ?Sized>(location: Location, rng: &mut R) -> Persona {
    let id = uuid::Builder::from_random_bytes(rng.random()).into_uuid();

    let first = FIRST_NAMES.choose(rng).copied().unwrap_or("Alex");
    let last = LAST_NAMES.choose(rng).copied().unwrap_or("Doe");
    let gender = weighted_choice(GENDERS, rng);

    let personality = roll_personality(rng);

    let industry = INDUSTRIES.choose(rng).copied().unwrap_or(INDUSTRIES[0]);
    let role = industry.roles.choose(rng).copied().unwrap_or("Generalist");
    let company_size = weighted_choice(
        &[
            (CompanySize::Startup, 2),
            (CompanySize::Small, 3),
            (CompanySize::Medium, 3),
            (CompanySize::Enterprise, 2),
        ],
        rng,
    );
    let age = rng.random_range(AGE_RANGE);
    let income = roll_income(role, company_size, age, rng);

    let openness = TraitBucket::of(personality.openness, &OPENNESS_RANGE);
    let neuroticism = TraitBucket::of(personality.neuroticism, &NEUROTICISM_RANGE);

    Persona {
        id: id.to_string(),
        name: format!("{} {}", first, last),
        age,
        gender: gender.to_string(),
        location,
        industry: industry.name.to_string(),
        role: role.to_string(),
        company_size,
        income,
        risk_tolerance: weighted_choice(&risk_tolerance_weights(neuroticism), rng),
        tech_adoption: weighted_choice(&tech_adoption_weights(openness), rng),
        innovation_preference: weighted_choice(&innovation_weights(openness), rng),
        communication_style: weighted_choice(&communication_weights(&personality), rng),
        personality,
        interests: pick_set(INTERESTS, INTEREST_COUNT, rng),
        pain_points: pick_set(PAIN_POINTS, PAIN_POINT_COUNT, rng),
        goals: pick_set(GOALS, GOAL_COUNT, rng),
    }
}

fn roll_personality<R: Rng + ?Sized>(rng: &mut R) -> Personality {
    Personality {
        openness: rng.random_range(OPENNESS_RANGE),
        conscientiousness: rng.random_range(CONSCIENTIOUSNESS_RANGE),
        extraversion: rng.random_range(EXTRAVERSION_RANGE),
        agreeableness: rng.random_range(AGREEABLENESS_RANGE),
        neuroticism: rng.random_range(NEUROTICISM_RANGE),
    }
}

/// Relative position of a trait score within its generation range.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TraitBucket {
    Low,
    Mid,
    High,
}

impl TraitBucket {
    pub fn of(score: i32, range: &RangeInclusive<i32>) -> Self {
        let span = (range.end() - range.start()).max(1) as f64;
        let position = (score - range.start()) as f64 / span;
        if position < 1.0 / 3.0 {
            TraitBucket::Low
        } else if position < 2.0 / 3.0 {
            TraitBucket::Mid
        } else {
            TraitBucket::High
        }
    }
}

pub fn tech_adoption_weights(openness: TraitBucket) -> [(TechAdoption, u32); 4] {
    let [a, b, c, d] = match openness {
        TraitBucket::High => [5, 3, 1, 1],
        TraitBucket::Mid => [2, 4, 3, 1],
        TraitBucket::Low => [1, 2, 4, 3],
    };
    [
        (TechAdoption::EarlyAdopter, a),
        (TechAdoption::EarlyMajority, b),
        (TechAdoption::LateMajority, c),
        (TechAdoption::Laggard, d),
    ]
}

pub fn innovation_weights(openness: TraitBucket) -> [(InnovationPreference, u32); 3] {
    let [a, b, c] = match openness {
        TraitBucket::High => [5, 3, 1],
        TraitBucket::Mid => [2, 5, 2],
        TraitBucket::Low => [1, 3, 5],
    };
    [
        (InnovationPreference::CuttingEdge, a),
        (InnovationPreference::Proven, b),
        (InnovationPreference::Traditional, c),
    ]
}

/// Anxious personas lean toward low risk tolerance.
pub fn risk_tolerance_weights(neuroticism: TraitBucket) -> [(RiskTolerance, u32); 3] {
    let [low, medium, high] = match neuroticism {
        TraitBucket::High => [5, 3, 1],
        TraitBucket::Mid => [2, 5, 2],
        TraitBucket::Low => [1, 3, 5],
    };
    [
        (RiskTolerance::Low, low),
        (RiskTolerance::Medium, medium),
        (RiskTolerance::High, high),
    ]
}

/// Each style is weighted by the trait that drives it.
pub fn communication_weights(personality: &Personality) -> [(CommunicationStyle, u32); 4] {
    let weight = |score: i32| 1 + ((score - 40).max(0) / 5) as u32;
    [
        (CommunicationStyle::Direct, weight(personality.extraversion)),
        (CommunicationStyle::Diplomatic, weight(personality.agreeableness)),
        (CommunicationStyle::Analytical, weight(personality.conscientiousness)),
        (CommunicationStyle::Creative, weight(personality.openness)),
    ]
}

fn weighted_choice<T: Copy, R: Rng + ?Sized>(choices: &[(T, u32)], rng: &mut R) -> T {
    choices
        .choose_weighted(rng, |(_, weight)| *weight)
        .map(|(value, _)| *value)
        .unwrap_or_else(|_| choices[0].0)
}

fn pick_set<R: Rng + ?Sized>(
    vocabulary: &[&'static str],
    count: RangeInclusive<usize>,
    rng: &mut R,
) -> Vec<String> {
    let amount = rng.random_range(count);
    vocabulary
        .choose_multiple(rng, amount)
        .map(|entry| entry.to_string())
        .collect()
}

fn seniority(role: &str) -> f64 {
    const SENIOR: &[&str] = &[
        "chief", "cto", "cfo", "director", "head", "owner", "principal", "professor", "counsel",
    ];
    const MID: &[&str] = &[
        "manager", "lead", "senior", "architect", "doctor", "physician", "lawyer", "banker",
        "scientist", "strategist", "researcher",
    ];

    let words: Vec<String> = role
        .split(|c: char| !c.is_alphanumeric())
        .map(|w| w.to_lowercase())
        .collect();
    let has_any = |list: &[&str]| words.iter().any(|w| list.contains(&w.as_str()));

    if has_any(SENIOR) {
        1.8
    } else if has_any(MID) {
        1.35
    } else {
        1.0
    }
}

fn roll_income<R: Rng + ?Sized>(role: &str, size: CompanySize, age: u8, rng: &mut R) -> u32 {
    let size_factor = match size {
        CompanySize::Startup => 0.9,
        CompanySize::Small => 0.95,
        CompanySize::Medium => 1.0,
        CompanySize::Enterprise => 1.15,
    };
    let experience = (1.0 + (age.saturating_sub(21)) as f64 * 0.012).min(1.5);
    let jitter = rng.random_range(0.85..1.15);

    let income = BASE_INCOME * seniority(role) * size_factor * experience * jitter;
    ((income / 100.0).round() * 100.0) as u32
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_zero_population_is_rejected() {
        let result = generate_population(0, Some(1));
        assert!(matches!(result, Err(EngineError::InvalidPopulationSize(0))));
    }

    #[test]
    fn test_population_size_and_seed_determinism() {
        let first = generate_population(25, Some(42)).unwrap();
        let second = generate_population(25, Some(42)).unwrap();
        assert_eq!(first.len(), 25);
        assert_eq!(first, second);

        let other = generate_population(25, Some(43)).unwrap();
        assert_ne!(first, other);
    }

    #[test]
    fn test_traits_stay_in_declared_ranges() {
        let population = generate_population(300, Some(7)).unwrap();
        for persona in &population {
            let p = &persona.personality;
            assert!(OPENNESS_RANGE.contains(&p.openness));
            assert!(CONSCIENTIOUSNESS_RANGE.contains(&p.conscientiousness));
            assert!(EXTRAVERSION_RANGE.contains(&p.extraversion));
            assert!(AGREEABLENESS_RANGE.contains(&p.agreeableness));
            assert!(NEUROTICISM_RANGE.contains(&p.neuroticism));
            assert!((18..=80).contains(&persona.age));
            assert!(INTEREST_COUNT.contains(&persona.interests.len()));
            assert!(PAIN_POINT_COUNT.contains(&persona.pain_points.len()));
            assert!(GOAL_COUNT.contains(&persona.goals.len()));
            assert!(persona.income > 0);
        }
    }

    #[test]
    fn test_trait_sets_have_no_duplicates() {
        let population = generate_population(100, Some(11)).unwrap();
        for persona in &population {
            let unique: HashSet<&String> = persona.interests.iter().collect();
            assert_eq!(unique.len(), persona.interests.len());
        }
    }

    #[test]
    fn test_cities_are_distinct_until_catalogue_exhausted() {
        let population = generate_population(CITIES.len() + 10, Some(3)).unwrap();

        let first_pass: HashSet<&str> = population[..CITIES.len()]
            .iter()
            .map(|p| p.location.city.as_str())
            .collect();
        assert_eq!(first_pass.len(), CITIES.len());

        // City reuse never duplicates persona content
        let ids: HashSet<&str> = population.iter().map(|p| p.id.as_str()).collect();
        assert_eq!(ids.len(), population.len());
        let reused = &population[CITIES.len()];
        let original = population
            .iter()
            .find(|p| p.location.city == reused.location.city && p.id != reused.id)
            .unwrap();
        assert_ne!(original.personality, reused.personality);
    }

    #[test]
    fn test_openness_correlates_with_adoption() {
        let population = generate_population(3000, Some(99)).unwrap();

        let mean_openness = |adoption: TechAdoption| {
            let scores: Vec<i32> = population
                .iter()
                .filter(|p| p.tech_adoption == adoption)
                .map(|p| p.personality.openness)
                .collect();
            scores.iter().sum::<i32>() as f64 / scores.len() as f64
        };

        assert!(mean_openness(TechAdoption::EarlyAdopter) > mean_openness(TechAdoption::Laggard));

        let cutting_edge: Vec<&Persona> = population
            .iter()
            .filter(|p| p.innovation_preference == InnovationPreference::CuttingEdge)
            .collect();
        let traditional: Vec<&Persona> = population
            .iter()
            .filter(|p| p.innovation_preference == InnovationPreference::Traditional)
            .collect();
        let mean = |group: &[&Persona]| {
            group.iter().map(|p| p.personality.openness).sum::<i32>() as f64 / group.len() as f64
        };
        assert!(mean(&cutting_edge) > mean(&traditional));
    }

    #[test]
    fn test_trait_bucket_boundaries() {
        assert_eq!(TraitBucket::of(20, &OPENNESS_RANGE), TraitBucket::Low);
        assert_eq!(TraitBucket::of(45, &OPENNESS_RANGE), TraitBucket::Mid);
        assert_eq!(TraitBucket::of(70, &OPENNESS_RANGE), TraitBucket::High);
    }

    #[test]
    fn test_seniority_raises_income_scale() {
        assert!(seniority("CTO") > seniority("Product Manager"));
        assert!(seniority("Product Manager") > seniority("Tutor"));
        // Word matching, not substring matching
        assert_eq!(seniority("Doctor"), 1.35);
    }
}
