//! Which verses match, per strategy.

use crate::common::{indexes, plain_searcher, store_with, verses_doc};
use serde_json::json;
use std::sync::Arc;
use suttafind::{normalize, Searcher};

#[tokio::test]
async fn root_search_returns_only_substring_matches_shortest_first() {
    let results = plain_searcher().search("dukkha", "pli").await.unwrap();

    assert!(results
        .iter()
        .all(|r| r.record.normalized_text().contains("dukkha")));
    assert_eq!(
        indexes(&results),
        vec![
            "sn56.11:5.2",
            "pli-tv-bu-vb-pj1:1.2",
            "sn56.11:5.1",
            "sn56.11:6.1"
        ]
    );
    let lengths: Vec<usize> = results
        .iter()
        .map(|r| r.record.normalized_text().chars().count())
        .collect();
    assert!(lengths.windows(2).all(|w| w[0] <= w[1]));
}

#[tokio::test]
async fn root_search_only_scans_its_own_language() {
    let results = plain_searcher().search("evam", "pli").await.unwrap();
    assert_eq!(results.len(), 1);
    assert_eq!(results[0].record.partition(), "pli_sutta");

    let results = plain_searcher().search("evam", "san").await.unwrap();
    assert_eq!(results.len(), 1);
    assert_eq!(results[0].record.partition(), "san_sutta");
}

#[tokio::test]
async fn literal_requires_every_word() {
    let store = store_with(&[(
        "pli_sutta",
        verses_doc(&["the red apple fell", "redish fruit", "apple, then red"]),
    )]);
    let results = Searcher::new(Arc::new(store))
        .search("red apple", "pli")
        .await
        .unwrap();
    assert_eq!(indexes(&results), vec!["v3", "v1"]);
}

#[tokio::test]
async fn fuzzy_post_filter_excludes_partial_matches() {
    let store = store_with(&[(
        "pli_en_sutta",
        verses_doc(&["the red apple fell", "redish fruit"]),
    )]);
    let results = Searcher::new(Arc::new(store))
        .search("red apple", "en")
        .await
        .unwrap();
    assert_eq!(indexes(&results), vec!["v1"]);
}

#[tokio::test]
async fn fuzzy_single_word_tolerates_typos() {
    let results = plain_searcher().search("sufering", "en").await.unwrap();
    assert!(!results.is_empty());
    assert!(results
        .iter()
        .all(|r| r.record.normalized_text().contains("suffering")));
}

#[tokio::test]
async fn query_is_normalized_like_the_text() {
    let accented = plain_searcher().search("DUKKHĀ", "pli").await.unwrap();
    let plain = plain_searcher().search("dukkha", "pli").await.unwrap();
    assert_eq!(indexes(&accented), indexes(&plain));
    assert_eq!(normalize("DUKKHĀ"), "dukkha");
}

#[tokio::test]
async fn blank_terms_return_nothing() {
    let searcher = plain_searcher();
    for term in ["", "   ", "\t\n"] {
        assert!(searcher.search(term, "en").await.unwrap().is_empty());
        assert!(searcher.search(term, "pli").await.unwrap().is_empty());
    }
}

#[tokio::test]
async fn unknown_language_has_no_partitions() {
    let results = plain_searcher().search("suffering", "xx").await.unwrap();
    assert!(results.is_empty());
}

#[tokio::test]
async fn all_document_shapes_are_searched() {
    let store = store_with(&[
        (
            "pli_en_sutta",
            json!({
                "flat": {"verseindex": "a:1", "verse": "lotus in the pond"},
                "list": [{"verseindex": "b:1", "verse": "lotus on the water"}],
                "authors": {"anon": {"c:1": {"verse": "a lotus opens"}}},
                "threaded": {"threads": {"anon": {"d:1": {"verse": "lotus again"}}}},
                "map": {"e:1": {"verse": "the lotus"}},
            }),
        ),
    ]);
    let results = Searcher::new(Arc::new(store))
        .search("lotus", "en")
        .await
        .unwrap();
    let mut found = indexes(&results);
    found.sort_unstable();
    assert_eq!(found, vec!["a:1", "b:1", "c:1", "d:1", "e:1"]);
}
