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

//! Personasim Common Types
//!
//! This crate defines the in-process data contracts shared between the simulation engine and
//! its collaborators (rendering, storage, text generation):
//! - Persona and location records
//! - Scored reactions and analysis results
//! - Node projections and lifecycle states

pub mod analysis;
pub mod node;
pub mod persona;
pub mod reaction;
pub mod session;

pub use analysis::{AnalysisResult, SentimentHistogram};
pub use node::{Node, NodeColor, NodeStatus};
pub use persona::{
    CommunicationStyle, CompanySize, Coordinates, InnovationPreference, Location, Persona,
    Personality, RiskTolerance, TechAdoption,
};
pub use reaction::{ScoredReaction, Sentiment, SignalContribution};
pub use session::{LifecycleAction, LifecycleState, SessionId};
