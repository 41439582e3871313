//! Snippet invariants over generated verse text.

use proptest::prelude::*;
use suttafind::highlight::{MARK_CLOSE, MARK_OPEN};
use suttafind::{highlight, DEFAULT_CONTEXT_LENGTH};

fn unmark(snippet: &str) -> String {
    snippet.replace(MARK_OPEN, "").replace(MARK_CLOSE, "")
}

fn verse() -> impl Strategy<Value = String> {
    prop::collection::vec("[a-z]{1,9}", 1..60).prop_map(|words| words.join(" "))
}

proptest! {
    #[test]
    fn prop_marks_are_balanced_and_flat(text in verse(), query in "[a-z]{1,4}( [a-z]{1,4})?") {
        let snippet = highlight(&text, &query, DEFAULT_CONTEXT_LENGTH);
        let mut depth = 0i32;
        let mut rest = snippet.as_str();
        while let Some(at) = rest.find('<') {
            rest = &rest[at..];
            if rest.starts_with(MARK_OPEN) {
                depth += 1;
                prop_assert_eq!(depth, 1, "nested mark in {}", snippet);
                rest = &rest[MARK_OPEN.len()..];
            } else {
                prop_assert!(rest.starts_with(MARK_CLOSE), "unexpected tag in {}", snippet);
                depth -= 1;
                prop_assert_eq!(depth, 0);
                rest = &rest[MARK_CLOSE.len()..];
            }
        }
        prop_assert_eq!(depth, 0);
    }

    #[test]
    fn prop_short_text_is_kept_whole(text in "[a-z ]{0,150}", query in "[a-z]{2,5}") {
        let snippet = highlight(&text, &query, DEFAULT_CONTEXT_LENGTH);
        prop_assert_eq!(unmark(&snippet), text);
    }

    #[test]
    fn prop_present_word_is_marked(text in verse(), word in "[a-z]{2,6}", at in any::<prop::sample::Index>()) {
        let mut words: Vec<&str> = text.split(' ').collect();
        let at = at.index(words.len() + 1);
        words.insert(at, &word);
        let text = words.join(" ");
        let snippet = highlight(&text, &word, DEFAULT_CONTEXT_LENGTH);
        prop_assert!(snippet.contains(MARK_OPEN), "{} not marked in {}", word, snippet);
        prop_assert!(unmark(&snippet).contains(word.as_str()));
    }

    #[test]
    fn prop_long_snippets_are_bounded(text in verse(), query in "[a-z]{2,3}", context in 5usize..40) {
        let snippet = highlight(&text, &query, context);
        let visible = unmark(&snippet).replace('…', "");
        prop_assert!(visible.chars().count() <= text.chars().count());
    }
}
