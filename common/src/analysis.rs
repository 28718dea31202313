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

//! Population-level analysis types

use crate::reaction::Sentiment;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Count of reactions per sentiment.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SentimentHistogram {
    pub positive: usize,
    pub neutral: usize,
    pub negative: usize,
}

impl SentimentHistogram {
    pub fn new() -> Self {
        Self::default()
    }

    /// Count one more reaction of the given sentiment.
    pub fn record(&mut self, sentiment: Sentiment) {
        match sentiment {
            Sentiment::Positive => self.positive += 1,
            Sentiment::Neutral => self.neutral += 1,
            Sentiment::Negative => self.negative += 1,
        }
    }

    pub fn get(&self, sentiment: Sentiment) -> usize {
        match sentiment {
            Sentiment::Positive => self.positive,
            Sentiment::Neutral => self.neutral,
            Sentiment::Negative => self.negative,
        }
    }

    pub fn total(&self) -> usize {
        self.positive + self.neutral + self.negative
    }

    pub fn is_empty(&self) -> bool {
        self.total() == 0
    }
}

impl FromIterator<Sentiment> for SentimentHistogram {
    fn from_iter<I: IntoIterator<Item = Sentiment>>(iter: I) -> Self {
        let mut histogram = Self::new();
        for sentiment in iter {
            histogram.record(sentiment);
        }
        histogram
    }
}

/// Aggregate over a set of scored reactions.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisResult {
    pub total: usize,
    pub histogram: SentimentHistogram,
    /// 0-100, computed over the focused (colored) node set only.
    pub impact_score: u8,
    pub average_score: f64,
    pub average_confidence: f64,
    pub top_concerns: Vec<String>,
    pub top_suggestions: Vec<String>,
    pub by_continent: BTreeMap<String, SentimentHistogram>,
    pub by_industry: BTreeMap<String, SentimentHistogram>,
    /// Persona ids of the focus group, in ranking order.
    pub focus_group: Vec<String>,
}
