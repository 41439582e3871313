//! Folding of case and diacritics.

use proptest::prelude::*;
use suttafind::normalize;
use suttafind::utils::char_len;

/// Romanized Pali and Sanskrit, upper and lower case.
fn romanized() -> impl Strategy<Value = String> {
    "[a-zA-Zāīūṁṃṅñṭḍṇḷśṣ ,.]{0,40}"
}

proptest! {
    #[test]
    fn prop_normalize_idempotent(text in romanized()) {
        let once = normalize(&text);
        prop_assert_eq!(normalize(&once), once);
    }

    #[test]
    fn prop_normalize_keeps_char_count(text in romanized()) {
        // Each precomposed letter folds to exactly one base letter.
        prop_assert_eq!(char_len(&normalize(&text)), char_len(&text));
    }

    #[test]
    fn prop_normalized_is_plain_lowercase(text in romanized()) {
        let folded = normalize(&text);
        prop_assert!(folded.chars().all(|c| c.is_ascii_lowercase() || " ,.".contains(c)));
    }

    #[test]
    fn prop_case_insensitive(text in romanized()) {
        prop_assert_eq!(normalize(&text.to_uppercase()), normalize(&text));
    }
}
