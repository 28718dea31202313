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

//! Deterministic scoring signals
//!
//! Each signal is an independent `(persona, idea) -> delta` function. The scorer sums them and
//! adds a single bounded random perturbation.

use super::keywords::{IdeaText, KeywordOverlap};
use personasim_common::{CompanySize, InnovationPreference, Persona, RiskTolerance, TechAdoption};

pub const INTEREST_MATCH_BONUS: f64 = 15.0;
pub const INDUSTRY_MATCH_BONUS: f64 = 20.0;
pub const ROLE_MATCH_BONUS: f64 = 18.0;

pub type SignalFn = fn(&Persona, &IdeaText) -> f64;

/// A named scoring contributor.
#[derive(Clone, Copy)]
pub struct Signal {
    pub name: &'static str,
    pub eval: SignalFn,
}

impl Signal {
    pub const fn new(name: &'static str, eval: SignalFn) -> Self {
        Self { name, eval }
    }

    pub fn delta(&self, persona: &Persona, idea: &IdeaText) -> f64 {
        (self.eval)(persona, idea)
    }
}

impl std::fmt::Debug for Signal {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Signal").field("name", &self.name).finish()
    }
}

pub static STANDARD_SIGNALS: &[Signal] = &[
    Signal::new("personality", personality_bias),
    Signal::new("tech-adoption", tech_adoption_bias),
    Signal::new("risk-tolerance", risk_tolerance_bias),
    Signal::new("innovation-preference", innovation_bias),
    Signal::new("keyword-relevance", keyword_relevance),
    Signal::new("company-size", company_size_bias),
];

pub fn personality_bias(persona: &Persona, _idea: &IdeaText) -> f64 {
    let p = &persona.personality;
    (p.openness - 50) as f64 * 0.1
        + (p.extraversion - 50) as f64 * 0.05
        + (p.conscientiousness - 50) as f64 * 0.03
}

pub fn tech_adoption_bias(persona: &Persona, _idea: &IdeaText) -> f64 {
    match persona.tech_adoption {
        TechAdoption::EarlyAdopter => 25.0,
        TechAdoption::EarlyMajority => 10.0,
        TechAdoption::LateMajority => -10.0,
        TechAdoption::Laggard => -25.0,
    }
}

pub fn risk_tolerance_bias(persona: &Persona, _idea: &IdeaText) -> f64 {
    match persona.risk_tolerance {
        RiskTolerance::High => 20.0,
        RiskTolerance::Medium => 5.0,
        RiskTolerance::Low => -15.0,
    }
}

pub fn innovation_bias(persona: &Persona, _idea: &IdeaText) -> f64 {
    match persona.innovation_preference {
        InnovationPreference::CuttingEdge => 15.0,
        InnovationPreference::Proven => 5.0,
        InnovationPreference::Traditional => -10.0,
    }
}

/// Every distinct matching interest counts once. Industry and role count once each.
pub fn keyword_relevance(persona: &Persona, idea: &IdeaText) -> f64 {
    let overlap = KeywordOverlap::of(persona, idea);
    let mut delta = overlap.interests.len() as f64 * INTEREST_MATCH_BONUS;
    if overlap.industry {
        delta += INDUSTRY_MATCH_BONUS;
    }
    if overlap.role {
        delta += ROLE_MATCH_BONUS;
    }
    delta
}

pub fn company_size_bias(persona: &Persona, _idea: &IdeaText) -> f64 {
    match persona.company_size {
        CompanySize::Startup => 10.0,
        CompanySize::Small => 5.0,
        CompanySize::Medium => 0.0,
        CompanySize::Enterprise => -5.0,
    }
}
