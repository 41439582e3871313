// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The math behind verse ranking. Lower scores rank first.
//!
//! # Key Invariant: Phrase Dominance
//!
//! Among verses that contain every query word, one containing the full
//! phrase verbatim always scores below (better than) one that doesn't:
//!
//! ```text
//! phrase:     base - 0.5          base ∈ [0, 1) for the positional score
//! scattered:  base + position     position ∈ [0, 1)
//! ```
//!
//! For the positional score `base` is 0, so a phrase match is exactly -0.5
//! and a scattered match is at least 0.
//!
//! # Constants
//!
//! | Name          | Value | Meaning                                   |
//! |---------------|-------|-------------------------------------------|
//! | PHRASE_BONUS  | 0.5   | Subtracted when the full phrase occurs    |

use crate::types::QuerySpec;
use crate::utils::{char_find, char_len};

/// Subtracted from a score when the verse contains the full normalized phrase.
pub const PHRASE_BONUS: f64 = 0.5;

/// Literal strategy score: the verse's normalized length in chars.
///
/// Shorter matching verses rank first. The literal filter already guarantees
/// every word is present, so length is the only signal used.
pub fn literal_score(normalized_text: &str) -> f64 {
    char_len(normalized_text) as f64
}

/// Positional fallback score, for when no fuzzy engine is in play.
///
/// Starts at 0. A verse containing the full phrase gets `-PHRASE_BONUS` and
/// nothing else. Otherwise add the mean first-occurrence offset of the
/// matched words divided by the text length, a value in `[0, 1)` that
/// favors verses where the words appear early.
///
/// Words that don't occur are left out of the mean. Callers filter out
/// verses missing any word before scoring, so in practice every word
/// counts; a verse with no matching word at all scores 0.
pub fn positional_score(query: &QuerySpec, normalized_text: &str) -> f64 {
    if query.phrase_in(normalized_text) {
        return -PHRASE_BONUS;
    }

    let text_len = char_len(normalized_text);
    let offsets: Vec<usize> = query
        .words
        .iter()
        .filter_map(|word| char_find(normalized_text, word))
        .collect();

    if offsets.is_empty() || text_len == 0 {
        return 0.0;
    }
    let mean = offsets.iter().sum::<usize>() as f64 / offsets.len() as f64;
    mean / text_len as f64
}

/// Fuzzy strategy score: the engine's score, with the phrase bonus applied.
pub fn fuzzy_score(engine_score: f64, query: &QuerySpec, normalized_text: &str) -> f64 {
    if query.phrase_in(normalized_text) {
        engine_score - PHRASE_BONUS
    } else {
        engine_score
    }
}
