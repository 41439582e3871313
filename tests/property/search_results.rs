//! Result lists from generated corpora.

use crate::common::{block_on, store_with};
use proptest::prelude::*;
use serde_json::{json, Map, Value};
use std::collections::HashSet;
use std::sync::Arc;
use suttafind::{normalize, SearchConfig, Searcher};

fn corpus() -> impl Strategy<Value = Vec<String>> {
    prop::collection::vec(
        prop::collection::vec("[a-f]{2,5}", 1..8).prop_map(|w| w.join(" ")),
        1..25,
    )
}

/// Two partitions that reuse verse indexes, so dedup has work to do.
fn searcher_over(partition: &str, texts: &[String]) -> Searcher {
    let doc = |offset: usize| -> Value {
        let verses: Map<String, Value> = texts
            .iter()
            .enumerate()
            .skip(offset)
            .map(|(i, text)| (format!("t:{}", i % 7), json!({ "verse": text })))
            .collect();
        json!({ "sutta/test": Value::Object(verses) })
    };
    let vinaya = partition.replace("sutta", "vinaya");
    let store = store_with(&[(partition, doc(0)), (vinaya.as_str(), doc(1))]);
    Searcher::new(Arc::new(store)).with_config(SearchConfig {
        decorate: false,
        ..SearchConfig::default()
    })
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn prop_results_ranked_and_unique(texts in corpus(), term in "[a-f]{2,4}( [a-f]{2,4})?", lang in prop::sample::select(vec!["pli", "en"])) {
        let partition = if lang == "pli" { "pli_sutta" } else { "pli_en_sutta" };
        let searcher = searcher_over(partition, &texts);
        let results = block_on(searcher.search(&term, lang)).unwrap();

        prop_assert!(results.windows(2).all(|w| w[0].score <= w[1].score));
        let unique: HashSet<_> = results.iter().map(|r| r.verse_index()).collect();
        prop_assert_eq!(unique.len(), results.len());
    }

    #[test]
    fn prop_root_results_contain_every_word(texts in corpus(), term in "[a-f]{2,3}( [a-f]{2,3})?") {
        let searcher = searcher_over("pli_sutta", &texts);
        let results = block_on(searcher.search(&term, "pli")).unwrap();
        let query = normalize(&term);
        for result in &results {
            for word in query.split_whitespace() {
                prop_assert!(result.record.normalized_text().contains(word));
            }
        }
    }

    #[test]
    fn prop_max_results_caps_the_list(texts in corpus(), limit in 1usize..5) {
        let searcher = searcher_over("pli_sutta", &texts).with_config(SearchConfig {
            max_results: limit,
            decorate: false,
            ..SearchConfig::default()
        });
        let results = block_on(searcher.search("a", "pli")).unwrap();
        prop_assert!(results.len() <= limit);
    }
}
