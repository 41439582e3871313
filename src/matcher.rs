// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Deciding which verses match, and how well.
//!
//! Two strategies, picked once per search from the language code:
//!
//! - **Literal** (root languages): every query word must be a substring of
//!   the normalized verse. Score = normalized length.
//! - **Fuzzy** (translation languages): a fuzzy engine (or the positional
//!   fallback) proposes candidates, then a strict literal post-filter throws
//!   out multi-word candidates missing any word. Without the post-filter,
//!   "red apple" would admit "redish fruit" on the strength of "red" alone.

use crate::fuzzy::FuzzyEngine;
use crate::scoring::{fuzzy_score, literal_score, positional_score};
use crate::types::{LanguageClass, MatchResult, QuerySpec, VerseRecord};

/// Matching strategy for one search call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchStrategy {
    Literal,
    Fuzzy,
}

impl SearchStrategy {
    /// Root languages search literally, everything else fuzzily.
    pub fn for_language(lang: &str) -> Self {
        match LanguageClass::of(lang) {
            LanguageClass::Root => SearchStrategy::Literal,
            LanguageClass::Translation => SearchStrategy::Fuzzy,
        }
    }
}

/// Where fuzzy scores come from.
#[derive(Clone, Copy)]
pub enum FuzzyScorer<'a> {
    Engine(&'a dyn FuzzyEngine),
    Positional,
}

/// Evaluates records against one query.
pub struct Matcher<'a> {
    query: &'a QuerySpec,
    strategy: SearchStrategy,
    scorer: FuzzyScorer<'a>,
}

impl<'a> Matcher<'a> {
    pub fn literal(query: &'a QuerySpec) -> Self {
        Self {
            query,
            strategy: SearchStrategy::Literal,
            scorer: FuzzyScorer::Positional,
        }
    }

    pub fn fuzzy(query: &'a QuerySpec, scorer: FuzzyScorer<'a>) -> Self {
        Self {
            query,
            strategy: SearchStrategy::Fuzzy,
            scorer,
        }
    }

    pub fn strategy(&self) -> SearchStrategy {
        self.strategy
    }

    /// Score a record, or `None` if it doesn't match.
    pub fn evaluate(&self, record: VerseRecord) -> Option<MatchResult> {
        let text = record.normalized_text();
        let score = match self.strategy {
            SearchStrategy::Literal => {
                if !self.query.all_words_in(text) {
                    return None;
                }
                literal_score(text)
            }
            SearchStrategy::Fuzzy => match self.scorer {
                FuzzyScorer::Engine(engine) => {
                    let engine_score = engine.score(self.query, text)?;
                    if self.query.is_multi_word() && !self.query.all_words_in(text) {
                        return None;
                    }
                    fuzzy_score(engine_score, self.query, text)
                }
                FuzzyScorer::Positional => {
                    if !self.query.all_words_in(text) {
                        return None;
                    }
                    positional_score(self.query, text)
                }
            },
        };
        Some(MatchResult::new(record, score))
    }

    /// Evaluate a batch, keeping input order.
    pub fn evaluate_all(&self, records: impl IntoIterator<Item = VerseRecord>) -> Vec<MatchResult> {
        records
            .into_iter()
            .filter_map(|record| self.evaluate(record))
            .collect()
    }
}
