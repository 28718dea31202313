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

//! Per-persona reaction to an idea

use serde::{Deserialize, Serialize};
use std::fmt;

/// Sentiment classification of a reaction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Sentiment {
    Positive,
    Neutral,
    Negative,
}

impl Sentiment {
    pub fn as_str(&self) -> &'static str {
        match self {
            Sentiment::Positive => "positive",
            Sentiment::Neutral => "neutral",
            Sentiment::Negative => "negative",
        }
    }
}

impl fmt::Display for Sentiment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Contribution of one named scoring signal.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SignalContribution {
    pub signal: String,
    pub delta: f64,
}

/// Result of scoring one persona against one idea.
///
/// Reactions are recomputed on every idea submission and never persisted on their own.
/// `sentiment` and `numeric_score` are authoritative; the text fields are illustrative.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScoredReaction {
    pub persona_id: String,
    pub sentiment: Sentiment,
    pub numeric_score: f64,
    pub confidence: f64,
    pub feedback_text: String,
    pub reasoning_text: String,
    pub concerns: Vec<String>,
    pub suggestions: Vec<String>,
    pub country: String,
    pub continent: String,
    pub industry: String,
    pub signals: Vec<SignalContribution>,
}
