// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Fuzz target for snippet highlighting.
//!
//! Verse text arrives with arbitrary markup and entities. Whatever the input,
//! the snippet must come back without panicking. For tag-free text the
//! `<mark>` tags we add must be balanced and never nested.

#![no_main]

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use suttafind::highlight;
use suttafind::highlight::{MARK_CLOSE, MARK_OPEN};

#[derive(Debug, Arbitrary)]
struct HighlightInput {
    text: String,
    query: String,
    context: u8,
}

fuzz_target!(|input: HighlightInput| {
    let text: String = input.text.chars().take(2000).collect();
    let query: String = input.query.chars().take(60).collect();
    let context = usize::from(input.context).max(1);

    let snippet = highlight(&text, &query, context);
    if text.contains('<') {
        return;
    }

    let mut depth = 0i32;
    let mut rest = snippet.as_str();
    while let Some(at) = rest.find("<mark>").into_iter().chain(rest.find("</mark>")).min() {
        rest = &rest[at..];
        if rest.starts_with(MARK_OPEN) {
            depth += 1;
            rest = &rest[MARK_OPEN.len()..];
        } else {
            depth -= 1;
            rest = &rest[MARK_CLOSE.len()..];
        }
        assert!(
            (0..=1).contains(&depth),
            "unbalanced or nested mark in '{}' for text='{}', query='{}'",
            snippet,
            text,
            query
        );
    }
    assert_eq!(depth, 0, "unclosed mark in '{}'", snippet);
});
