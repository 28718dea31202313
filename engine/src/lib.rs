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


//! # Personasim Engine
//!
//! Synthetic-population market simulation: generate personas, score how each reacts to an idea,
//! pick a relevance-ranked focus group, and aggregate the focus group into an impact score.
//!
//! The [`population`], [`scoring`], [`focus`] and [`aggregate`] modules are synchronous and
//! side-effect free. [`lifecycle`] gates them behind the `Idle -> Surveyed -> Focused -> Analyzed`
//! state machine, and [`simulation`] adds the async persistence and embellishment collaborators.

pub mod aggregate;
pub mod config;
pub mod embellish;
pub mod error;
pub mod focus;
pub mod lifecycle;
pub mod llm;
pub mod persistence;
pub mod population;
pub mod scoring;
pub mod simulation;
pub mod test_utils;

pub use error::{EngineError, EngineResult, LifecycleError};
pub use lifecycle::{LifecycleController, SessionState};
pub use simulation::Simulation;
