//! Shared test utilities and fixtures.

#![allow(dead_code, unused_imports)]

use std::sync::Arc;

use serde_json::Value;
use suttafind::{InMemoryStore, MatchResult, SearchConfig, Searcher};

// Re-export canonical test utilities from suttafind::testing
pub use suttafind::testing::{long_text_with, sample_corpus, FlakyStore};

/// Searcher over the sample corpus with default config.
pub fn sample_searcher() -> Searcher {
    Searcher::new(Arc::new(sample_corpus()))
}

/// Searcher over the sample corpus with snippets turned off.
pub fn plain_searcher() -> Searcher {
    Searcher::new(Arc::new(sample_corpus())).with_config(SearchConfig {
        decorate: false,
        ..SearchConfig::default()
    })
}

/// Store holding exactly the given partitions.
pub fn store_with(partitions: &[(&str, Value)]) -> InMemoryStore {
    let store = InMemoryStore::new();
    for (name, docs) in partitions {
        store
            .load_partition_json(name, &docs.to_string())
            .expect("fixture partition must be a JSON object");
    }
    store
}

/// A translation partition whose single document holds one verse per text.
///
/// Verse indexes are `v1`, `v2`, ... in order.
pub fn verses_doc(texts: &[&str]) -> Value {
    let verses: serde_json::Map<String, Value> = texts
        .iter()
        .enumerate()
        .map(|(i, text)| (format!("v{}", i + 1), serde_json::json!({ "verse": text })))
        .collect();
    serde_json::json!({ "sutta/test": Value::Object(verses) })
}

pub fn indexes(results: &[MatchResult]) -> Vec<&str> {
    results.iter().map(|r| r.verse_index()).collect()
}

pub fn block_on<F: std::future::Future>(future: F) -> F::Output {
    tokio::runtime::Builder::new_current_thread()
        .build()
        .expect("runtime")
        .block_on(future)
}
