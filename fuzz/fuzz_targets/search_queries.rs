// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Fuzz target for end-to-end search.
//!
//! Arbitrary query strings against the sample corpus, in every kind of
//! language. Results must stay ranked and free of repeated verse indexes.

#![no_main]

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use std::collections::HashSet;
use std::sync::{Arc, OnceLock};
use suttafind::testing::sample_corpus;
use suttafind::Searcher;

#[derive(Debug, Arbitrary)]
struct SearchInput {
    term: String,
    lang: u8,
}

const LANGUAGES: [&str; 6] = ["pli", "san", "lzh", "en", "de", "xx"];

fuzz_target!(|input: SearchInput| {
    static SEARCHER: OnceLock<Searcher> = OnceLock::new();
    let searcher = SEARCHER.get_or_init(|| Searcher::new(Arc::new(sample_corpus())));

    let term: String = input.term.chars().take(100).collect();
    let lang = LANGUAGES[usize::from(input.lang) % LANGUAGES.len()];

    let runtime = tokio::runtime::Builder::new_current_thread()
        .build()
        .expect("runtime");
    let results = runtime
        .block_on(searcher.search(&term, lang))
        .expect("in-memory search never fails");

    assert!(
        results.windows(2).all(|w| w[0].score <= w[1].score),
        "unsorted results for term='{}' lang={}",
        term,
        lang
    );

    let mut seen = HashSet::new();
    for result in &results {
        assert!(
            seen.insert(result.verse_index()),
            "repeated verse index {} for term='{}'",
            result.verse_index(),
            term
        );
        assert!(result.score.is_finite());
    }

    if term.trim().is_empty() {
        assert!(results.is_empty());
    }
});
