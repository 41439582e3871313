//! What a result list looks like once it reaches the reader.

use crate::common::{long_text_with, plain_searcher, sample_searcher, store_with, verses_doc};
use std::sync::Arc;
use suttafind::{group_by_category, paginate, result_href, Category, Searcher};

#[tokio::test]
async fn root_matches_are_marked_through_diacritics() {
    let results = sample_searcher().search("dukkha", "pli").await.unwrap();
    let snippet = |index: &str| {
        results
            .iter()
            .find(|r| r.verse_index() == index)
            .and_then(|r| r.decorated_text.clone())
    };
    assert_eq!(
        snippet("sn56.11:5.2").as_deref(),
        Some("Jātipi <mark>dukkhā</mark>")
    );
    assert_eq!(
        snippet("pli-tv-bu-vb-pj1:1.2").as_deref(),
        Some("<mark>Dukkha</mark>ṁ vata, bho")
    );
}

#[tokio::test]
async fn translation_phrase_is_marked_once() {
    let results = sample_searcher().search("noble truth", "en").await.unwrap();
    assert!(!results.is_empty());
    for result in &results {
        let snippet = result.display_text();
        assert_eq!(snippet.matches("<mark>").count(), 1, "{snippet}");
        assert!(snippet.contains("<mark>noble truth</mark>"));
    }
}

#[tokio::test]
async fn long_verses_are_windowed() {
    let text = long_text_with("awakening", 300, 600);
    let store = store_with(&[("pli_en_sutta", verses_doc(&[&text]))]);
    let results = Searcher::new(Arc::new(store))
        .search("awakening", "en")
        .await
        .unwrap();
    let snippet = results[0].display_text();
    assert!(snippet.starts_with('…'));
    assert!(snippet.ends_with('…'));
    assert!(snippet.contains("<mark>awakening</mark>"));
    assert!(snippet.chars().count() < 130);
}

#[tokio::test]
async fn undecorated_results_show_raw_text() {
    let results = plain_searcher().search("rebirth", "en").await.unwrap();
    assert_eq!(results[0].decorated_text, None);
    assert_eq!(results[0].display_text(), "Rebirth is suffering.");
}

#[tokio::test]
async fn links_point_at_the_reader_language() {
    let root = plain_searcher().search("jatipi", "pli").await.unwrap();
    assert_eq!(
        result_href(&root[0], "pli", "en"),
        "/en/sutta/sn/sn56.11#sn56.11:5.2"
    );

    let german = plain_searcher().search("gehort", "de").await.unwrap();
    assert_eq!(
        result_href(&german[0], "de", "en"),
        "/de/sutta/dn/dn1#dn1:1.1"
    );
}

#[tokio::test]
async fn results_group_by_category_in_rank_order() {
    let results = plain_searcher().search("suffering", "en").await.unwrap();
    let groups = group_by_category(&results);
    let summary: Vec<_> = groups
        .iter()
        .map(|(category, items)| (*category, items.len()))
        .collect();
    assert_eq!(summary, vec![(Category::Sutta, 3), (Category::Vinaya, 1)]);
    assert_eq!(groups[0].1[0].verse_index(), "sn56.11:5.1");
}

#[tokio::test]
async fn pages_cover_every_result_once() {
    let results = plain_searcher().search("suffering", "en").await.unwrap();

    let first = paginate(&results, 1, 3);
    assert_eq!(first.total_pages, 2);
    assert_eq!(first.items.len(), 3);
    assert!(first.has_next());
    assert!(!first.has_previous());

    let last = paginate(&results, 9, 3);
    assert_eq!(last.page, 2);
    assert_eq!(last.items.len(), 1);
    assert_eq!(last.items[0].verse_index(), "pli-tv-bu-vb-pj1:1.2");

    assert_eq!(paginate(&results, 1, 0).items.len(), results.len());
}

#[tokio::test]
async fn greek_final_sigma_matches_and_is_marked() {
    let store = store_with(&[("pli_el_sutta", verses_doc(&["ΟΔΟΣ ΚΑΙ ΖΩΗ"]))]);
    let results = Searcher::new(Arc::new(store))
        .search("οδος", "el")
        .await
        .unwrap();
    assert_eq!(results.len(), 1);
    assert_eq!(results[0].display_text(), "<mark>ΟΔΟΣ</mark> ΚΑΙ ΖΩΗ");
}
