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

//! Test utilities for building personas and reactions

use personasim_common::{
    CommunicationStyle, CompanySize, Coordinates, InnovationPreference, Location, Persona,
    Personality, RiskTolerance, ScoredReaction, Sentiment, TechAdoption,
};

/// A fixed, middle-of-the-road persona.
pub fn sample_persona() -> Persona {
    Persona {
        id: "10000000-0000-0000-0000-000000000000".to_string(),
        name: "Test Persona".to_string(),
        age: 35,
        gender: "female".to_string(),
        location: Location {
            city: "Berlin".to_string(),
            country: "Germany".to_string(),
            continent: "Europe".to_string(),
            coordinates: Coordinates::new(52.52, 13.405),
        },
        industry: "Technology".to_string(),
        role: "Software Engineer".to_string(),
        company_size: CompanySize::Medium,
        income: 80_000,
        risk_tolerance: RiskTolerance::Medium,
        tech_adoption: TechAdoption::EarlyMajority,
        innovation_preference: InnovationPreference::Proven,
        communication_style: CommunicationStyle::Analytical,
        personality: Personality::new(50, 50, 50, 50, 35),
        interests: vec!["cloud".to_string(), "analytics".to_string(), "music".to_string()],
        pain_points: vec!["legacy systems".to_string(), "slow processes".to_string()],
        goals: vec!["save time".to_string(), "reduce costs".to_string()],
    }
}

/// A persona with the given id and industry/role, otherwise like [`sample_persona`].
pub fn persona_with(id: &str, industry: &str, role: &str, interests: &[&str]) -> Persona {
    Persona {
        id: id.to_string(),
        industry: industry.to_string(),
        role: role.to_string(),
        interests: interests.iter().map(|s| s.to_string()).collect(),
        ..sample_persona()
    }
}

/// A bare reaction carrying only a sentiment and its lists.
pub fn reaction(
    persona_id: &str,
    sentiment: Sentiment,
    concerns: &[&str],
    suggestions: &[&str],
) -> ScoredReaction {
    ScoredReaction {
        persona_id: persona_id.to_string(),
        sentiment,
        numeric_score: match sentiment {
            Sentiment::Positive => 50.0,
            Sentiment::Neutral => 0.0,
            Sentiment::Negative => -50.0,
        },
        confidence: 0.5,
        feedback_text: String::new(),
        reasoning_text: String::new(),
        concerns: concerns.iter().map(|s| s.to_string()).collect(),
        suggestions: suggestions.iter().map(|s| s.to_string()).collect(),
        country: "Germany".to_string(),
        continent: "Europe".to_string(),
        industry: "Technology".to_string(),
        signals: Vec::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_persona_with_overrides_fields() {
        let persona = persona_with("p-1", "Healthcare", "Doctor", &["ai"]);
        assert_eq!(persona.id, "p-1");
        assert_eq!(persona.industry, "Healthcare");
        assert_eq!(persona.interests, vec!["ai".to_string()]);
        assert_eq!(persona.location.city, "Berlin");
    }
}
