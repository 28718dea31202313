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

//! Keyword matching between idea text and persona vocabulary
//!
//! The idea is lower-cased and split on whitespace, with surrounding punctuation trimmed from each
//! token. A single-word term matches a token when they are equal or when the token is the term
//! plus an inflection ending, so "doctors" matches "doctor" but "career" never matches "care". A
//! multi-word term matches only when the whole phrase appears as consecutive tokens, the last of
//! which may be inflected. Broader synonyms come from the curated industry keyword lists.

use crate::population::industry_keywords;
use personasim_common::Persona;

/// Endings accepted after a term, checked after the term itself is at least three characters.
const INFLECTIONS: &[&str] = &["s", "es", "'s", "ed", "ing", "er", "ers"];

/// Tokenized, lower-cased idea text.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct IdeaText {
    tokens: Vec<String>,
}

impl IdeaText {
    pub fn new(idea: &str) -> Self {
        let tokens = idea
            .to_lowercase()
            .split_whitespace()
            .map(|token| token.trim_matches(|c: char| !c.is_alphanumeric()).to_string())
            .filter(|token| !token.is_empty())
            .collect();
        Self { tokens }
    }

    pub fn tokens(&self) -> &[String] {
        &self.tokens
    }

    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    /// Whether `term` is present in the idea. Presence only, never a count.
    pub fn matches(&self, term: &str) -> bool {
        let term = term.trim().to_lowercase();
        if term.is_empty() || self.tokens.is_empty() {
            return false;
        }

        let words: Vec<&str> = term
            .split(|c: char| !c.is_alphanumeric())
            .filter(|w| !w.is_empty())
            .collect();

        match words.as_slice() {
            [] => false,
            [word] => self
                .tokens
                .iter()
                .any(|token| *token == term || word_matches(word, token)),
            [leading @ .., last] => {
                // "e-commerce" stays one token
                self.tokens.iter().any(|token| *token == term)
                    || self.tokens.windows(words.len()).any(|window| {
                        window.iter().zip(leading).all(|(token, word)| token == word)
                            && word_matches(last, &window[leading.len()])
                    })
            }
        }
    }

    pub fn matches_any<'a, I>(&self, terms: I) -> bool
    where
        I: IntoIterator<Item = &'a str>,
    {
        terms.into_iter().any(|term| self.matches(term))
    }
}

fn word_matches(word: &str, token: &str) -> bool {
    if token == word {
        return true;
    }
    word.len() >= 3
        && token
            .strip_prefix(word)
            .is_some_and(|ending| INFLECTIONS.contains(&ending))
}

/// Which parts of a persona's vocabulary an idea touches.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct KeywordOverlap<'p> {
    /// Distinct interests that matched, in persona order
    pub interests: Vec<&'p str>,
    /// Industry name or one of its keywords matched
    pub industry: bool,
    pub role: bool,
}

impl<'p> KeywordOverlap<'p> {
    pub fn of(persona: &'p Persona, idea: &IdeaText) -> Self {
        let interests = persona
            .interests
            .iter()
            .map(String::as_str)
            .filter(|interest| idea.matches(interest))
            .collect();

        let industry = idea.matches(&persona.industry)
            || idea.matches_any(industry_keywords(&persona.industry).iter().copied());

        Self {
            interests,
            industry,
            role: idea.matches(&persona.role),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.interests.is_empty() && !self.industry && !self.role
    }
}
