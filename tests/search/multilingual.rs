//! Language scoping: which partitions a language searches.

use crate::common::{indexes, plain_searcher, sample_corpus};
use suttafind::{expected_partitions, list_partitions, LanguageScope, SessionGuard};

#[tokio::test]
async fn each_root_language_searches_its_own_partitions() {
    let searcher = plain_searcher();

    let pali = searcher.search("evam", "pli").await.unwrap();
    assert_eq!(indexes(&pali), vec!["dn1:1.1"]);
    assert_eq!(pali[0].record.partition(), "pli_sutta");

    let sanskrit = searcher.search("evam", "san").await.unwrap();
    assert_eq!(indexes(&sanskrit), vec!["dn1:1.1"]);
    assert_eq!(sanskrit[0].record.partition(), "san_sutta");
}

#[tokio::test]
async fn diacritics_fold_in_both_directions() {
    let searcher = plain_searcher();
    assert_eq!(searcher.search("śrutam", "san").await.unwrap().len(), 1);
    assert_eq!(searcher.search("srutam", "san").await.unwrap().len(), 1);
    assert_eq!(searcher.search("Verañjāyaṁ", "pli").await.unwrap().len(), 1);
}

#[tokio::test]
async fn translation_languages_stay_separate() {
    let searcher = plain_searcher();
    let german = searcher.search("gehört", "de").await.unwrap();
    assert_eq!(indexes(&german), vec!["dn1:1.1"]);
    assert_eq!(german[0].record.author(), Some("sabbamitta"));

    assert!(searcher.search("gehört", "en").await.unwrap().is_empty());
    assert!(searcher.search("heard", "de").await.unwrap().is_empty());
}

#[tokio::test]
async fn root_text_is_not_searched_for_translations() {
    let searcher = plain_searcher();
    assert!(searcher.search("dukkha", "san").await.unwrap().is_empty());
    assert!(searcher.search("ariyasacca", "en").await.unwrap().is_empty());
}

#[tokio::test]
async fn language_without_partitions_finds_nothing() {
    let searcher = plain_searcher();
    assert!(searcher.search("dharma", "lzh").await.unwrap().is_empty());
    assert!(searcher.search("dharma", "fr").await.unwrap().is_empty());
}

#[tokio::test]
async fn present_partitions_are_listed_in_category_order() {
    let store = sample_corpus();
    let _session = SessionGuard::open(&store).await.unwrap();

    let english = list_partitions(&store, &LanguageScope::for_language("en"))
        .await
        .unwrap();
    assert_eq!(english, vec!["pli_en_sutta", "pli_en_vinaya"]);

    let pali = list_partitions(&store, &LanguageScope::for_language("pli"))
        .await
        .unwrap();
    assert_eq!(pali, vec!["pli_sutta", "pli_vinaya"]);
}

#[test]
fn only_pali_carries_the_abhidhamma() {
    assert_eq!(
        expected_partitions("pli"),
        vec!["pli_sutta", "pli_vinaya", "pli_abhidhamma"]
    );
    assert_eq!(expected_partitions("san"), vec!["san_sutta", "san_vinaya"]);

    let english = expected_partitions("en");
    assert_eq!(english.len(), 9);
    assert!(english.contains(&"pli_en_abhidhamma".to_string()));
    assert!(english.contains(&"bo_en_vinaya".to_string()));
    assert!(!english.contains(&"san_en_abhidhamma".to_string()));
}
