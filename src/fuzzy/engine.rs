// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Approximate candidate generation.
//!
//! A [`FuzzyEngine`] decides which verses are *candidates* for a query and
//! how good each one is. It is allowed to be generous: the matcher applies a
//! strict literal post-filter afterwards.

use super::levenshtein::levenshtein_bounded;
use crate::types::QuerySpec;

/// Per-word cost of a token that equals the query word.
const EXACT_COST: f64 = 0.0;
/// Per-word cost when the word occurs inside a longer token.
const SUBSTRING_COST: f64 = 0.2;
/// Base per-word cost of an edit-distance match, before the distance penalty.
const EDIT_BASE_COST: f64 = 0.4;
/// Cost of a query word with no acceptable match at all.
const MISS_COST: f64 = 1.0;

/// Candidate retrieval and scoring for translation-language search.
pub trait FuzzyEngine: Send + Sync {
    /// Score a verse's normalized text against the query.
    ///
    /// `None` means "not a candidate". Otherwise a score in `[0, 1]`,
    /// lower is better.
    fn score(&self, query: &QuerySpec, normalized_text: &str) -> Option<f64>;
}

/// Token-wise fuzzy matching with bounded edit distance.
///
/// Each query word is compared against every token of the verse and keeps
/// its best cost:
///
/// | Match                         | Cost                             |
/// |-------------------------------|----------------------------------|
/// | token equals word             | 0.0                              |
/// | word inside a token           | 0.2                              |
/// | within `max_edits(word)`      | 0.4 + 0.6 · distance / len(word) |
/// | nothing                       | 1.0                              |
///
/// A verse is a candidate when at least one word matched. The score is the
/// mean cost over all query words.
#[derive(Debug, Clone)]
pub struct TokenFuzzyEngine {
    /// Allowed edits per character of a query word.
    threshold: f64,
}

impl TokenFuzzyEngine {
    pub fn new(threshold: f64) -> Self {
        Self {
            threshold: threshold.clamp(0.0, 1.0),
        }
    }

    /// Edit budget for a word: `floor(len · threshold)`, never more than 2.
    ///
    /// Short words get no budget, which keeps "dana" from matching "jana".
    pub fn max_edits(&self, word: &str) -> usize {
        let len = word.chars().count();
        if len < 4 {
            return 0;
        }
        ((len as f64 * self.threshold).floor() as usize).min(2)
    }

    fn word_cost<'t>(&self, word: &str, tokens: impl Iterator<Item = &'t str>) -> f64 {
        let max = self.max_edits(word);
        let word_len = word.chars().count().max(1) as f64;
        let mut best = MISS_COST;

        for token in tokens {
            let cost = if token == word {
                EXACT_COST
            } else if token.contains(word) {
                SUBSTRING_COST
            } else if max > 0 {
                match levenshtein_bounded(word, token, max) {
                    Some(d) => (EDIT_BASE_COST + 0.6 * d as f64 / word_len).min(MISS_COST),
                    None => continue,
                }
            } else {
                continue;
            };
            best = best.min(cost);
            if best == EXACT_COST {
                break;
            }
        }
        best
    }
}

impl Default for TokenFuzzyEngine {
    fn default() -> Self {
        Self::new(0.34)
    }
}

/// Split normalized text into word tokens.
pub fn tokens(normalized_text: &str) -> impl Iterator<Item = &str> {
    normalized_text
        .split(|c: char| !c.is_alphanumeric())
        .filter(|t| !t.is_empty())
}

impl FuzzyEngine for TokenFuzzyEngine {
    fn score(&self, query: &QuerySpec, normalized_text: &str) -> Option<f64> {
        let costs: Vec<f64> = query
            .words
            .iter()
            .map(|word| self.word_cost(word, tokens(normalized_text)))
            .collect();

        if costs.iter().all(|&c| c >= MISS_COST) {
            return None;
        }
        Some(costs.iter().sum::<f64>() / costs.len() as f64)
    }
}
