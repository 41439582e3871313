//! Title enrichment for translation results.

use crate::common::{plain_searcher, store_with};
use serde_json::json;
use std::sync::Arc;
use suttafind::Searcher;

#[tokio::test]
async fn translation_results_get_the_translated_title() {
    let results = plain_searcher().search("noble truth", "en").await.unwrap();
    assert_eq!(results.len(), 2);
    for result in &results {
        assert_eq!(
            result.title.as_deref(),
            Some("Rolling Forth the Wheel of Dhamma")
        );
    }
}

#[tokio::test]
async fn title_follows_the_results_translator() {
    let store = store_with(&[
        (
            "pli_sutta",
            json!({"sutta/dn/dn1": {"title": "dn1:0.2", "dn1:0.2": {"verse": "Brahmajālasutta"}}}),
        ),
        (
            "pli_en_sutta",
            json!({"sutta/dn/dn1": {
                "bodhi": {"dn1:0.2": {"verse": "The All-Embracing Net of Views"}, "dn1:2.1": {"verse": "the wanderer Suppiya"}},
                "sujato": {"dn1:0.2": {"verse": "The Prime Net"}, "dn1:2.2": {"verse": "Suppiya the wanderer"}},
            }}),
        ),
    ]);
    let results = Searcher::new(Arc::new(store))
        .search("suppiya", "en")
        .await
        .unwrap();
    let titles: Vec<_> = results
        .iter()
        .map(|r| (r.verse_index(), r.title.as_deref()))
        .collect();
    assert!(titles.contains(&("dn1:2.1", Some("The All-Embracing Net of Views"))));
    assert!(titles.contains(&("dn1:2.2", Some("The Prime Net"))));
}

#[tokio::test]
async fn missing_root_title_leaves_title_empty() {
    // The Vinaya root document is a flat list with no title field.
    let results = plain_searcher().search("verañjā", "en").await.unwrap();
    assert_eq!(results.len(), 1);
    assert_eq!(results[0].title, None);
}

#[tokio::test]
async fn missing_root_partition_leaves_title_empty() {
    let store = store_with(&[(
        "lzh_en_sutta",
        json!({"sutta/ma/ma1": {"anon": {"ma1:1": {"verse": "the good dharma"}}}}),
    )]);
    let results = Searcher::new(Arc::new(store))
        .search("dharma", "en")
        .await
        .unwrap();
    assert_eq!(results.len(), 1);
    assert_eq!(results[0].title, None);
}

#[tokio::test]
async fn root_results_are_not_enriched() {
    let results = plain_searcher().search("jatipi", "pli").await.unwrap();
    assert_eq!(results.len(), 1);
    assert_eq!(results[0].title, None);
}

#[tokio::test]
async fn record_titles_are_kept() {
    let store = store_with(&[(
        "pli_de_sutta",
        json!({"sutta/dn/dn1": {"verseindex": "dn1:1.1", "verse": "So habe ich gehört.", "title": "Das Netz"}}),
    )]);
    let results = Searcher::new(Arc::new(store))
        .search("gehort", "de")
        .await
        .unwrap();
    assert_eq!(results[0].title.as_deref(), Some("Das Netz"));
}
