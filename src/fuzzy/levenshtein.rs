// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Edit distance with an early-exit optimization.
//!
//! `|len(a) - len(b)|` is a lower bound on edit distance. If two strings
//! differ in length by more than the threshold, skip the O(nm) DP entirely.
//! Most scripture tokens are far from any given query word, so this exit
//! does most of the rejecting.

/// Edit distance between `a` and `b`, if it is at most `max`.
///
/// Bounded Levenshtein with two early exits:
/// 1. Length difference exceeds `max` → `None` immediately
/// 2. Minimum of a DP row exceeds `max` → `None`, abandon the DP
///
/// Both are sound: neither rejects a pair whose distance is within `max`.
pub fn levenshtein_bounded(a: &str, b: &str, max: usize) -> Option<usize> {
    // Character counts, not byte lengths, for Unicode correctness
    let b_chars: Vec<char> = b.chars().collect();
    let a_len = a.chars().count();
    let b_len = b_chars.len();

    if a_len.abs_diff(b_len) > max {
        return None;
    }

    let mut dp: Vec<usize> = (0..=b_len).collect();
    for (i, ac) in a.chars().enumerate() {
        let mut prev = dp[0];
        dp[0] = i + 1;
        let mut min_row = dp[0];

        for (j, &bc) in b_chars.iter().enumerate() {
            let temp = dp[j + 1];
            let cost = usize::from(ac != bc);
            dp[j + 1] = (dp[j + 1] + 1).min(dp[j] + 1).min(prev + cost);
            prev = temp;
            min_row = min_row.min(dp[j + 1]);
        }

        if min_row > max {
            return None;
        }
    }

    (dp[b_len] <= max).then_some(dp[b_len])
}

/// Are these strings within `max` edits of each other?
pub fn levenshtein_within(a: &str, b: &str, max: usize) -> bool {
    levenshtein_bounded(a, b, max).is_some()
}
