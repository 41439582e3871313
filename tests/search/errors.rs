//! Failure handling: what is recovered, what is surfaced.

use crate::common::{indexes, sample_corpus, FlakyStore};
use std::sync::Arc;
use suttafind::{
    handle_request, FuzzyScoring, SearchConfig, SearchError, SearchRequest, SearchResponse,
    Searcher,
};

#[tokio::test]
async fn blank_term_never_touches_storage() {
    let store = Arc::new(FlakyStore::new(sample_corpus()));
    let searcher = Searcher::new(store.clone());
    assert!(searcher.search("", "en").await.unwrap().is_empty());
    assert!(searcher.search("  ", "pli").await.unwrap().is_empty());
    assert_eq!(store.calls(), 0);
}

#[tokio::test]
async fn failing_partition_is_skipped() {
    let store = Arc::new(FlakyStore::new(sample_corpus()).failing_partition("pli_vinaya"));
    let searcher = Searcher::new(store.clone()).with_config(SearchConfig {
        decorate: false,
        ..SearchConfig::default()
    });
    let results = searcher.search("dukkha", "pli").await.unwrap();
    assert_eq!(
        indexes(&results),
        vec!["sn56.11:5.2", "sn56.11:5.1", "sn56.11:6.1"]
    );
    assert_eq!(store.open_sessions(), 0);
}

#[tokio::test]
async fn unavailable_store_is_an_error() {
    let store = Arc::new(FlakyStore::new(sample_corpus()).failing_open());
    let searcher = Searcher::new(store);
    let err = searcher.search("dukkha", "pli").await.unwrap_err();
    assert!(matches!(err, SearchError::StoreUnavailable(_)));
    assert!(err.to_string().contains("database blocked"));
}

#[tokio::test]
async fn lenient_search_swallows_failures() {
    let store = Arc::new(FlakyStore::new(sample_corpus()).failing_open());
    let searcher = Searcher::new(store);
    assert!(searcher.search_lenient("dukkha", "pli").await.is_empty());
}

#[tokio::test]
async fn missing_fuzzy_engine_is_an_error_for_translations_only() {
    let searcher = Searcher::new(Arc::new(sample_corpus())).without_fuzzy_engine();
    assert!(matches!(
        searcher.search("suffering", "en").await,
        Err(SearchError::FuzzyUnavailable)
    ));
    assert!(!searcher.search("dukkha", "pli").await.unwrap().is_empty());

    let positional = Searcher::new(Arc::new(sample_corpus()))
        .without_fuzzy_engine()
        .with_config(SearchConfig {
            fuzzy_scoring: FuzzyScoring::Positional,
            ..SearchConfig::default()
        });
    assert!(!positional.search("suffering", "en").await.unwrap().is_empty());
}

#[tokio::test]
async fn missing_engine_fails_before_opening_storage() {
    let store = Arc::new(FlakyStore::new(sample_corpus()));
    let searcher = Searcher::new(store.clone()).without_fuzzy_engine();
    assert!(searcher.search("suffering", "en").await.is_err());
    assert_eq!(store.calls(), 0);
}

#[tokio::test]
async fn session_released_on_every_path() {
    let store = Arc::new(FlakyStore::new(sample_corpus()).failing_partition("pli_en_sutta"));
    let searcher = Searcher::new(store.clone());
    searcher.search("suffering", "en").await.unwrap();
    searcher.search("dukkha", "pli").await.unwrap();
    assert_eq!(store.open_sessions(), 0);
}

#[tokio::test]
async fn responses_distinguish_empty_from_failed() {
    let healthy = Searcher::new(Arc::new(sample_corpus()));
    let broken = Searcher::new(Arc::new(FlakyStore::new(sample_corpus()).failing_open()));
    let request = |term: &str| SearchRequest {
        search_term: term.to_string(),
        lang_code: "en".to_string(),
    };

    let nothing = handle_request(&healthy, request("zzzzzz")).await;
    assert!(matches!(nothing, SearchResponse::Empty { .. }));

    let failed = handle_request(&broken, request("suffering")).await;
    match failed {
        SearchResponse::Error { message, .. } => assert!(message.contains("unavailable")),
        other => panic!("expected an error response, got {other:?}"),
    }
}
