// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Fuzz target for bounded edit distance.
//!
//! Checks the early exits against a full DP table. A wrong early exit would
//! silently drop typo matches from translation search.

#![no_main]

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use suttafind::fuzzy::{levenshtein_bounded, levenshtein_within};

#[derive(Debug, Arbitrary)]
struct MatchInput {
    query: String,
    target: String,
    max: u8,
}

fn full_distance(a: &[char], b: &[char]) -> usize {
    let mut prev: Vec<usize> = (0..=b.len()).collect();
    for (i, ac) in a.iter().enumerate() {
        let mut row = vec![i + 1; b.len() + 1];
        for (j, bc) in b.iter().enumerate() {
            let cost = usize::from(ac != bc);
            row[j + 1] = (prev[j + 1] + 1).min(row[j] + 1).min(prev[j] + cost);
        }
        prev = row;
    }
    prev[b.len()]
}

fuzz_target!(|input: MatchInput| {
    // Cap lengths to avoid timeouts
    let query: String = input.query.chars().take(40).collect();
    let target: String = input.target.chars().take(80).collect();
    let max = usize::from(input.max % 5);

    let a: Vec<char> = query.chars().collect();
    let b: Vec<char> = target.chars().collect();
    let expected = full_distance(&a, &b);

    let bounded = levenshtein_bounded(&query, &target, max);
    assert_eq!(
        bounded,
        (expected <= max).then_some(expected),
        "query='{}', target='{}', max={}",
        query,
        target,
        max
    );

    assert_eq!(
        levenshtein_within(&query, &target, max),
        levenshtein_within(&target, &query, max),
        "asymmetric for query='{}', target='{}'",
        query,
        target
    );

    assert_eq!(levenshtein_bounded(&query, &query, 0), Some(0));
});
