// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Result ranking: how matches get sorted.
//!
//! Ascending by score, and stable: equal scores keep the order the matcher
//! produced them in, which is partition order then storage key order. That
//! makes results deterministic without a synthetic tiebreaker.

use crate::types::MatchResult;
use std::cmp::Ordering;

/// Compare two results for ranking. Lower score first.
///
/// NaN never comes out of the scorers, but if it did it would compare
/// equal and keep its position rather than poison the sort.
pub fn compare_results(a: &MatchResult, b: &MatchResult) -> Ordering {
    a.score.partial_cmp(&b.score).unwrap_or(Ordering::Equal)
}

/// Stable sort by ascending score.
pub fn rank(results: &mut [MatchResult]) {
    results.sort_by(compare_results);
}
