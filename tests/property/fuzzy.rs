//! Bounded edit distance against a plain DP oracle.

use proptest::prelude::*;
use suttafind::fuzzy::{levenshtein_bounded, levenshtein_within, FuzzyEngine, TokenFuzzyEngine};
use suttafind::QuerySpec;

fn naive_levenshtein(a: &str, b: &str) -> usize {
    let a: Vec<char> = a.chars().collect();
    let b: Vec<char> = b.chars().collect();
    let mut table = vec![vec![0usize; b.len() + 1]; a.len() + 1];
    for (i, row) in table.iter_mut().enumerate() {
        row[0] = i;
    }
    for j in 0..=b.len() {
        table[0][j] = j;
    }
    for i in 1..=a.len() {
        for j in 1..=b.len() {
            let cost = usize::from(a[i - 1] != b[j - 1]);
            table[i][j] = (table[i - 1][j] + 1)
                .min(table[i][j - 1] + 1)
                .min(table[i - 1][j - 1] + cost);
        }
    }
    table[a.len()][b.len()]
}

proptest! {
    #[test]
    fn prop_bounded_matches_oracle(a in "[a-dā]{0,8}", b in "[a-dā]{0,8}", max in 0usize..5) {
        let expected = naive_levenshtein(&a, &b);
        prop_assert_eq!(levenshtein_bounded(&a, &b, max), (expected <= max).then_some(expected));
    }

    #[test]
    fn prop_within_is_symmetric(a in "[a-e]{0,10}", b in "[a-e]{0,10}", max in 0usize..4) {
        prop_assert_eq!(levenshtein_within(&a, &b, max), levenshtein_within(&b, &a, max));
    }

    #[test]
    fn prop_exact_word_scores_zero(words in prop::collection::vec("[a-z]{2,8}", 1..6), pick in any::<prop::sample::Index>()) {
        let engine = TokenFuzzyEngine::default();
        let text = words.join(" ");
        let word = pick.get(&words);
        let query = QuerySpec::parse(word).unwrap();
        prop_assert_eq!(engine.score(&query, &text), Some(0.0));
    }

    #[test]
    fn prop_engine_scores_stay_in_range(query in "[a-z]{1,8}( [a-z]{1,8}){0,2}", text in "[a-z ]{0,60}") {
        let engine = TokenFuzzyEngine::default();
        let query = QuerySpec::parse(&query).unwrap();
        if let Some(score) = engine.score(&query, &text) {
            prop_assert!((0.0..1.0).contains(&score), "score {}", score);
        }
    }
}
