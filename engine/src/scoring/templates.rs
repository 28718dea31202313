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

//! Feedback and reasoning templates
//!
//! Text produced here is illustrative only. Placeholders: `{interest}`, `{pain_point}`,
//! `{goal}`, `{industry}`, `{role}`.

use super::keywords::KeywordOverlap;
use personasim_common::{Persona, RiskTolerance, Sentiment};
use rand::Rng;
use rand::seq::IndexedRandom;

const POSITIVE_FEEDBACK: &[&str] = &[
    "This is exactly what I've been looking for! As someone interested in {interest}, I can see how this would help me {goal}.",
    "Love it. In {industry} we struggle with {pain_point} all the time, and this looks like a real answer.",
    "I'd sign up today. It lines up with my interest in {interest} and would save me a lot of headaches.",
];

const NEUTRAL_FEEDBACK: &[&str] = &[
    "Interesting concept. I'd need to see how it handles {pain_point} before I commit.",
    "It could work, but I'm not sure it fits how we do things in {industry}.",
    "Not bad. If it helped me {goal} I would take a closer look.",
];

const NEGATIVE_FEEDBACK: &[&str] = &[
    "I don't see the value. My real problem is {pain_point}, and this doesn't touch it.",
    "Not for me. As a {role} I need something proven, not another experiment.",
    "I'm skeptical. {industry} has seen plenty of tools like this come and go.",
];

const POSITIVE_REASONING: &[&str] = &[
    "Strong fit with the persona's interest in {interest} and goal to {goal}.",
    "Persona's openness to new tools and {industry} background make this appealing.",
];

const NEUTRAL_REASONING: &[&str] = &[
    "Partial fit: some relevance to {industry}, but unclear impact on {pain_point}.",
    "Persona is open to the idea but needs evidence it helps them {goal}.",
];

const NEGATIVE_REASONING: &[&str] = &[
    "Weak fit: the idea does not address {pain_point}, and the persona prefers proven solutions.",
    "Low relevance to a {role} in {industry}; adoption risk outweighs the benefit.",
];

/// Values substituted into a template.
#[derive(Debug, Clone)]
pub struct TemplateContext<'a> {
    pub interest: &'a str,
    pub pain_point: &'a str,
    pub goal: &'a str,
    pub industry: &'a str,
    pub role: &'a str,
}

impl<'a> TemplateContext<'a> {
    /// Prefers an interest the idea actually touched.
    pub fn new(persona: &'a Persona, overlap: &KeywordOverlap<'a>) -> Self {
        let interest = overlap
            .interests
            .first()
            .copied()
            .or_else(|| persona.interests.first().map(String::as_str))
            .unwrap_or("new technology");
        Self {
            interest,
            pain_point: persona
                .pain_points
                .first()
                .map(String::as_str)
                .unwrap_or("day-to-day friction"),
            goal: persona
                .goals
                .first()
                .map(String::as_str)
                .unwrap_or("work more effectively"),
            industry: &persona.industry,
            role: &persona.role,
        }
    }

    pub fn render(&self, template: &str) -> String {
        template
            .replace("{interest}", self.interest)
            .replace("{pain_point}", self.pain_point)
            .replace("{goal}", self.goal)
            .replace("{industry}", self.industry)
            .replace("{role}", self.role)
    }
}

pub fn feedback<R: Rng + ?Sized>(
    sentiment: Sentiment,
    context: &TemplateContext<'_>,
    rng: &mut R,
) -> String {
    let templates = match sentiment {
        Sentiment::Positive => POSITIVE_FEEDBACK,
        Sentiment::Neutral => NEUTRAL_FEEDBACK,
        Sentiment::Negative => NEGATIVE_FEEDBACK,
    };
    pick(templates, context, rng)
}

pub fn reasoning<R: Rng + ?Sized>(
    sentiment: Sentiment,
    context: &TemplateContext<'_>,
    rng: &mut R,
) -> String {
    let templates = match sentiment {
        Sentiment::Positive => POSITIVE_REASONING,
        Sentiment::Neutral => NEUTRAL_REASONING,
        Sentiment::Negative => NEGATIVE_REASONING,
    };
    pick(templates, context, rng)
}

fn pick<R: Rng + ?Sized>(templates: &[&str], context: &TemplateContext<'_>, rng: &mut R) -> String {
    templates
        .choose(rng)
        .map(|template| context.render(template))
        .unwrap_or_default()
}

/// Pain points the idea leaves open. Negative reactions raise two, neutral ones raise one.
pub fn concerns(persona: &Persona, sentiment: Sentiment) -> Vec<String> {
    let limit = match sentiment {
        Sentiment::Positive => 0,
        Sentiment::Neutral => 1,
        Sentiment::Negative => 2,
    };
    let mut concerns: Vec<String> = persona
        .pain_points
        .iter()
        .take(limit)
        .map(|pain_point| format!("Unclear how it helps with {}", pain_point))
        .collect();
    if sentiment == Sentiment::Negative && persona.risk_tolerance == RiskTolerance::Low {
        concerns.push("Too risky to adopt without a track record".to_string());
    }
    concerns
}

/// One goal-driven suggestion per reaction, plus a feature request when an interest matched.
pub fn suggestions(
    persona: &Persona,
    sentiment: Sentiment,
    overlap: &KeywordOverlap<'_>,
) -> Vec<String> {
    let mut suggestions = Vec::new();
    if let Some(goal) = persona.goals.first() {
        suggestions.push(match sentiment {
            Sentiment::Positive => format!("Lean into helping users {}", goal),
            Sentiment::Neutral => format!("Show clearly how it helps users {}", goal),
            Sentiment::Negative => format!("Prove it can help users {}", goal),
        });
    }
    if sentiment == Sentiment::Positive {
        if let Some(interest) = overlap.interests.first() {
            suggestions.push(format!("Add deeper {} features", interest));
        }
    }
    suggestions
}
