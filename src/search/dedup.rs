// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Result deduplication by verse index.
//!
//! The same verse can surface from more than one partition: a segment id
//! like `dn1:1.1` names one verse no matter which partition or author it
//! came out of. A result list shows each verse index at most once.
//!
//! `VerseDeduper` keys on `verse_index` alone. Results are fed in ranked
//! order, so the first occurrence is the best-scored one and later ones are
//! dropped without comment.

use std::collections::HashSet;

use crate::types::MatchResult;

/// Keeps the first result for each verse index, preserving input order.
#[derive(Debug, Default)]
pub struct VerseDeduper {
    seen: HashSet<String>,
    kept: Vec<MatchResult>,
}

impl VerseDeduper {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            seen: HashSet::with_capacity(capacity),
            kept: Vec::with_capacity(capacity),
        }
    }

    /// Keep `result` unless its verse index was already seen.
    ///
    /// Returns whether it was kept.
    pub fn push(&mut self, result: MatchResult) -> bool {
        if self.seen.contains(result.verse_index()) {
            return false;
        }
        self.seen.insert(result.verse_index().to_string());
        self.kept.push(result);
        true
    }

    pub fn extend(&mut self, results: impl IntoIterator<Item = MatchResult>) {
        for result in results {
            self.push(result);
        }
    }

    pub fn len(&self) -> usize {
        self.kept.len()
    }

    pub fn is_empty(&self) -> bool {
        self.kept.is_empty()
    }

    pub fn into_results(self) -> Vec<MatchResult> {
        self.kept
    }
}

/// Deduplicate a ranked list in one go.
pub fn dedup_by_verse(results: Vec<MatchResult>) -> Vec<MatchResult> {
    let mut deduper = VerseDeduper::with_capacity(results.len());
    deduper.extend(results);
    deduper.into_results()
}
