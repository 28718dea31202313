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

//! Persona and location types
//!
//! A [`Persona`] is the unit of simulation. Personas are generated once per session and are
//! treated as read-only by every downstream component.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Geographic coordinates in decimal degrees.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinates {
    pub lat: f64,
    pub lon: f64,
}

impl Coordinates {
    pub const fn new(lat: f64, lon: f64) -> Self {
        Self { lat, lon }
    }
}

/// A catalogued city.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Location {
    pub city: String,
    pub country: String,
    pub continent: String,
    pub coordinates: Coordinates,
}

/// Size bucket of the organisation a persona works for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum CompanySize {
    Startup,
    Small,
    Medium,
    Enterprise,
}

impl CompanySize {
    pub const ALL: [CompanySize; 4] = [
        CompanySize::Startup,
        CompanySize::Small,
        CompanySize::Medium,
        CompanySize::Enterprise,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            CompanySize::Startup => "startup",
            CompanySize::Small => "small",
            CompanySize::Medium => "medium",
            CompanySize::Enterprise => "enterprise",
        }
    }
}

/// Appetite for risk.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum RiskTolerance {
    Low,
    Medium,
    High,
}

impl RiskTolerance {
    pub const ALL: [RiskTolerance; 3] =
        [RiskTolerance::Low, RiskTolerance::Medium, RiskTolerance::High];

    pub fn as_str(&self) -> &'static str {
        match self {
            RiskTolerance::Low => "low",
            RiskTolerance::Medium => "medium",
            RiskTolerance::High => "high",
        }
    }
}

/// Position on the technology adoption curve.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum TechAdoption {
    EarlyAdopter,
    EarlyMajority,
    LateMajority,
    Laggard,
}

impl TechAdoption {
    pub const ALL: [TechAdoption; 4] = [
        TechAdoption::EarlyAdopter,
        TechAdoption::EarlyMajority,
        TechAdoption::LateMajority,
        TechAdoption::Laggard,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            TechAdoption::EarlyAdopter => "early-adopter",
            TechAdoption::EarlyMajority => "early-majority",
            TechAdoption::LateMajority => "late-majority",
            TechAdoption::Laggard => "laggard",
        }
    }

    /// Adoption maturity, 3 for early adopters down to 0 for laggards.
    pub fn eagerness(&self) -> u8 {
        match self {
            TechAdoption::EarlyAdopter => 3,
            TechAdoption::EarlyMajority => 2,
            TechAdoption::LateMajority => 1,
            TechAdoption::Laggard => 0,
        }
    }
}

/// Preferred kind of innovation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum InnovationPreference {
    CuttingEdge,
    Proven,
    Traditional,
}

impl InnovationPreference {
    pub const ALL: [InnovationPreference; 3] = [
        InnovationPreference::CuttingEdge,
        InnovationPreference::Proven,
        InnovationPreference::Traditional,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            InnovationPreference::CuttingEdge => "cutting-edge",
            InnovationPreference::Proven => "proven",
            InnovationPreference::Traditional => "traditional",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum CommunicationStyle {
    Direct,
    Diplomatic,
    Analytical,
    Creative,
}

impl CommunicationStyle {
    pub const ALL: [CommunicationStyle; 4] = [
        CommunicationStyle::Direct,
        CommunicationStyle::Diplomatic,
        CommunicationStyle::Analytical,
        CommunicationStyle::Creative,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            CommunicationStyle::Direct => "direct",
            CommunicationStyle::Diplomatic => "diplomatic",
            CommunicationStyle::Analytical => "analytical",
            CommunicationStyle::Creative => "creative",
        }
    }
}

macro_rules! display_as_str {
    ($($ty:ty),*) => {
        $(
            impl fmt::Display for $ty {
                fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                    f.write_str(self.as_str())
                }
            }
        )*
    };
}

display_as_str!(
    CompanySize,
    RiskTolerance,
    TechAdoption,
    InnovationPreference,
    CommunicationStyle
);

/// Big-Five personality scores.
///
/// Generated scores stay inside a narrower band than 0-100 so that no persona is an
/// unrealistic extreme.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Personality {
    pub openness: i32,
    pub conscientiousness: i32,
    pub extraversion: i32,
    pub agreeableness: i32,
    pub neuroticism: i32,
}

impl Personality {
    pub const fn new(
        openness: i32,
        conscientiousness: i32,
        extraversion: i32,
        agreeableness: i32,
        neuroticism: i32,
    ) -> Self {
        Self {
            openness,
            conscientiousness,
            extraversion,
            agreeableness,
            neuroticism,
        }
    }
}

impl Default for Personality {
    fn default() -> Self {
        Self::new(50, 50, 50, 50, 35)
    }
}

/// A synthetic individual.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Persona {
    pub id: String,
    pub name: String,

    pub age: u8,
    pub gender: String,
    pub location: Location,
    pub industry: String,
    pub role: String,
    pub company_size: CompanySize,
    pub income: u32,

    pub risk_tolerance: RiskTolerance,
    pub tech_adoption: TechAdoption,
    pub innovation_preference: InnovationPreference,
    pub communication_style: CommunicationStyle,

    pub personality: Personality,

    pub interests: Vec<String>,
    pub pain_points: Vec<String>,
    pub goals: Vec<String>,
}

impl Persona {
    /// Short one-line description, used in prompts and log output.
    pub fn summary(&self) -> String {
        format!(
            "{}, {} {} at a {} {} company in {}, {}",
            self.name,
            self.age,
            self.role,
            self.company_size,
            self.industry,
            self.location.city,
            self.location.country
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_enum_serialization_is_kebab_case() {
        assert_eq!(
            serde_json::to_string(&TechAdoption::EarlyAdopter).unwrap(),
            "\"early-adopter\""
        );
        assert_eq!(
            serde_json::to_string(&InnovationPreference::CuttingEdge).unwrap(),
            "\"cutting-edge\""
        );
        let parsed: CompanySize = serde_json::from_str("\"enterprise\"").unwrap();
        assert_eq!(parsed, CompanySize::Enterprise);
    }

    #[test]
    fn test_display_matches_as_str() {
        for adoption in TechAdoption::ALL {
            assert_eq!(adoption.to_string(), adoption.as_str());
        }
        assert_eq!(RiskTolerance::High.to_string(), "high");
    }

    #[test]
    fn test_eagerness_ordering() {
        let eagerness: Vec<u8> = TechAdoption::ALL.iter().map(|t| t.eagerness()).collect();
        assert_eq!(eagerness, vec![3, 2, 1, 0]);
    }
}
