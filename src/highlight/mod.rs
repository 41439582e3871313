// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Snippet highlighting: wrap query matches in `<mark>` and cut long verses
//! down to windows around them.
//!
//! # Algorithm
//!
//! ```text
//! len ≤ 3·ctx  →  whole text; phrase matches marked, else each word (≥ 2 chars)
//! len > 3·ctx  →  spans (phrase, else words) → merge gaps ≤ ctx → windows ±ctx
//!                 "…" before a window that doesn't continue the previous one,
//!                 "…" after the last window if it stops short of the end
//! no spans     →  first 2·ctx chars + "…"
//! ```
//!
//! Lengths and offsets count visible characters (tags excluded, an entity
//! counts as one). Matching is case- and diacritic-insensitive: "dukkha"
//! marks "Dukkhaṁ". Existing markup stays balanced and text inside an
//! existing `<mark>` is never wrapped again.

mod markup;

pub use markup::{Markup, MARK_CLOSE, MARK_OPEN};

use crate::types::QuerySpec;
use crate::utils::{char_find_all, char_len};

/// Characters of context kept on each side of a match.
pub const DEFAULT_CONTEXT_LENGTH: usize = 50;

/// Marks elided text.
pub const ELLIPSIS: &str = "…";

/// Words shorter than this are never highlighted on their own.
const MIN_WORD_CHARS: usize = 2;

/// A matched run of visible units: `start..end`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Span {
    start: usize,
    end: usize,
}

/// Highlight `query` in `text`, windowing long text around the matches.
///
/// Always returns HTML-safe output. A blank query highlights nothing.
pub fn highlight(text: &str, query: &str, context_length: usize) -> String {
    let markup = Markup::parse(text);
    let query = QuerySpec::parse(query);
    let spans = query
        .as_ref()
        .map(|q| find_spans(&markup, q))
        .unwrap_or_default();

    let total = markup.len();
    if total <= context_length.saturating_mul(3) {
        let flags = flags_for(&spans, total);
        return markup.render_all(&flags);
    }

    if spans.is_empty() {
        let mut out = markup.render_range(0, context_length.saturating_mul(2), &[]);
        out.push_str(ELLIPSIS);
        return out;
    }

    let flags = flags_for(&spans, total);
    let mut out = String::new();
    let mut prev_end = 0;
    for span in merge_spans(spans, context_length) {
        let start = span.start.saturating_sub(context_length).max(prev_end);
        let end = (span.end + context_length).min(total);
        if start != prev_end {
            out.push_str(ELLIPSIS);
        }
        out.push_str(&markup.render_range(start, end, &flags));
        prev_end = end;
    }
    if prev_end < total {
        out.push_str(ELLIPSIS);
    }
    out
}

/// Phrase occurrences if there are any, else occurrences of each word.
fn find_spans(markup: &Markup, query: &QuerySpec) -> Vec<Span> {
    let (folded, owners) = markup.folded();

    let phrase = occurrences(&folded, &owners, &query.normalized_term);
    if !phrase.is_empty() {
        return phrase;
    }

    let mut spans: Vec<Span> = query
        .words
        .iter()
        .filter(|word| char_len(word) >= MIN_WORD_CHARS)
        .flat_map(|word| occurrences(&folded, &owners, word))
        .collect();
    spans.sort_by_key(|s| (s.start, s.end));
    spans.dedup();
    spans
}

fn occurrences(folded: &[char], owners: &[usize], needle: &str) -> Vec<Span> {
    let needle: Vec<char> = needle.chars().collect();
    if needle.is_empty() {
        return Vec::new();
    }
    char_find_all(folded, &needle)
        .into_iter()
        .map(|at| Span {
            start: owners[at],
            end: owners[at + needle.len() - 1] + 1,
        })
        .collect()
}

/// Merge spans whose gap is at most `context_length`. Input must be sorted.
fn merge_spans(spans: Vec<Span>, context_length: usize) -> Vec<Span> {
    let mut merged: Vec<Span> = Vec::with_capacity(spans.len());
    for span in spans {
        match merged.last_mut() {
            Some(last) if span.start <= last.end + context_length => {
                last.end = last.end.max(span.end);
            }
            _ => merged.push(span),
        }
    }
    merged
}

fn flags_for(spans: &[Span], total: usize) -> Vec<bool> {
    let mut flags = vec![false; total];
    for span in spans {
        for flag in &mut flags[span.start..span.end.min(total)] {
            *flag = true;
        }
    }
    flags
}
