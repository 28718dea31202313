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

//! Aggregation of scored reactions into population statistics

use personasim_common::{
    AnalysisResult, NodeColor, ScoredReaction, Sentiment, SentimentHistogram,
};
use std::collections::BTreeMap;

/// Number of concerns and suggestions surfaced in a result.
pub const TOP_ITEMS: usize = 3;

/// Reduce reactions to an [`AnalysisResult`].
///
/// The impact score is taken over the colors of exactly these reactions, so callers pass the
/// focused subset. Empty input yields an all-zero result.
pub fn aggregate(reactions: &[ScoredReaction]) -> AnalysisResult {
    let total = reactions.len();
    let histogram: SentimentHistogram = reactions.iter().map(|r| r.sentiment).collect();

    let (average_score, average_confidence) = if total == 0 {
        (0.0, 0.0)
    } else {
        let n = total as f64;
        (
            reactions.iter().map(|r| r.numeric_score).sum::<f64>() / n,
            reactions.iter().map(|r| r.confidence).sum::<f64>() / n,
        )
    };

    AnalysisResult {
        total,
        histogram,
        impact_score: impact_score(reactions.iter().map(|r| NodeColor::from(r.sentiment))),
        average_score,
        average_confidence,
        top_concerns: first_items(reactions.iter().map(|r| &r.concerns)),
        top_suggestions: first_items(reactions.iter().map(|r| &r.suggestions)),
        by_continent: breakdown(reactions, |r| &r.continent),
        by_industry: breakdown(reactions, |r| &r.industry),
        focus_group: reactions.iter().map(|r| r.persona_id.clone()).collect(),
    }
}

/// `round(100 * (3g + y - r) / (3 * total))`, clamped to `[0, 100]`. Zero for no nodes.
pub fn impact_score<I>(colors: I) -> u8
where
    I: IntoIterator<Item = NodeColor>,
{
    let (mut green, mut yellow, mut red) = (0i64, 0i64, 0i64);
    for color in colors {
        match color {
            NodeColor::Green => green += 1,
            NodeColor::Yellow => yellow += 1,
            NodeColor::Red => red += 1,
        }
    }

    let total = green + yellow + red;
    if total == 0 {
        return 0;
    }
    let raw = 100.0 * (3 * green + yellow - red) as f64 / (3 * total) as f64;
    raw.round().clamp(0.0, 100.0) as u8
}

/// Flatten in input order and keep the first few. No deduplication.
fn first_items<'a, I>(lists: I) -> Vec<String>
where
    I: Iterator<Item = &'a Vec<String>>,
{
    lists.flatten().take(TOP_ITEMS).cloned().collect()
}

fn breakdown<F>(reactions: &[ScoredReaction], key: F) -> BTreeMap<String, SentimentHistogram>
where
    F: Fn(&ScoredReaction) -> &String,
{
    let mut groups: BTreeMap<String, SentimentHistogram> = BTreeMap::new();
    for reaction in reactions {
        groups
            .entry(key(reaction).clone())
            .or_default()
            .record(reaction.sentiment);
    }
    groups
}

/// Histogram only, for the full scored population.
pub fn histogram(reactions: &[ScoredReaction]) -> SentimentHistogram {
    reactions.iter().map(|r| r.sentiment).collect::<SentimentHistogram>()
}

/// Share of reactions with the given sentiment, in `[0, 1]`.
pub fn share(histogram: &SentimentHistogram, sentiment: Sentiment) -> f64 {
    match histogram.total() {
        0 => 0.0,
        total => histogram.get(sentiment) as f64 / total as f64,
    }
}
