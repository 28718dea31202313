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

//! Population generation from the city catalogue and trait vocabularies

pub mod catalogue;
mod generator;
pub mod vocabulary;

pub use catalogue::{City, CITIES};
pub use generator::{
    AGE_RANGE, AGREEABLENESS_RANGE, CONSCIENTIOUSNESS_RANGE, EXTRAVERSION_RANGE, GOAL_COUNT,
    INTEREST_COUNT, NEUROTICISM_RANGE, OPENNESS_RANGE, PAIN_POINT_COUNT, TraitBucket,
    generate_persona, generate_population, generate_population_with_rng, rng_from_seed,
};
pub use vocabulary::{Industry, INDUSTRIES, industry_keywords};
