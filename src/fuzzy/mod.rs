// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Fuzzy search: typo tolerance via edit distance.
//!
//! A bounded Levenshtein for one-off comparisons, and a token-wise engine
//! built on it that generates translation-language candidates.

mod engine;
mod levenshtein;

pub use engine::{tokens, FuzzyEngine, TokenFuzzyEngine};
pub use levenshtein::{levenshtein_bounded, levenshtein_within};
