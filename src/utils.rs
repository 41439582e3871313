// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Utility functions for string processing.

use unicode_normalization::UnicodeNormalization;

/// Normalize a string for matching: strip diacritics, then lowercase.
///
/// This lets an ASCII query find accented scripture text:
/// - "Café" → "cafe"
/// - "dukkhaṁ" → "dukkham"
/// - "Nibbāna" → "nibbana"
///
/// # Algorithm
///
/// 1. NFD normalize (decompose characters into base + combining marks)
/// 2. Drop Combining Diacritical Marks (U+0300–U+036F)
/// 3. Lowercase, folding final sigma (ς) into σ
///
/// Whitespace is left alone. The highlighter maps normalized characters back
/// to the displayed text one character at a time, and collapsing runs of
/// spaces would break that mapping.
///
/// Idempotent: `normalize(&normalize(x)) == normalize(x)`.
pub fn normalize(value: &str) -> String {
    if value.is_empty() {
        return String::new();
    }
    value
        .nfd()
        .filter(|c| !is_combining_mark(*c))
        .collect::<String>()
        .to_lowercase()
        .chars()
        .map(fold_final_sigma)
        .collect()
}

/// `to_lowercase` picks ς or σ from context, which a single character
/// doesn't have. Folding both to σ keeps whole-string and per-char
/// normalization in agreement.
#[inline]
fn fold_final_sigma(c: char) -> char {
    if c == 'ς' {
        'σ'
    } else {
        c
    }
}

/// Normalize a single displayed character.
///
/// Usually yields one char, but a lone combining mark folds to nothing.
/// Returns the folded form as a string so callers can keep a per-character
/// mapping back to the source.
pub fn normalize_char(c: char) -> String {
    let mut buf = [0u8; 4];
    normalize(c.encode_utf8(&mut buf))
}

/// Combining Diacritical Marks block.
#[inline]
fn is_combining_mark(c: char) -> bool {
    matches!(c, '\u{0300}'..='\u{036F}')
}

/// Length in Unicode scalar values, not bytes.
///
/// Every offset in this crate (scores, snippet windows) is a char offset so
/// results agree with what a JavaScript caller would compute.
#[inline]
pub fn char_len(value: &str) -> usize {
    value.chars().count()
}

/// Char offset of the first occurrence of `needle` in `haystack`.
pub fn char_find(haystack: &str, needle: &str) -> Option<usize> {
    haystack
        .find(needle)
        .map(|byte_pos| haystack[..byte_pos].chars().count())
}

/// Char offsets of every (possibly overlapping) occurrence of `needle`.
///
/// Overlapping occurrences are reported because the highlighter merges
/// spans anyway; dropping them would only lose coverage.
pub fn char_find_all(haystack: &[char], needle: &[char]) -> Vec<usize> {
    if needle.is_empty() || needle.len() > haystack.len() {
        return Vec::new();
    }
    haystack
        .windows(needle.len())
        .enumerate()
        .filter(|(_, window)| *window == needle)
        .map(|(i, _)| i)
        .collect()
}
