// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! WebAssembly bindings.
//!
//! The page's loader owns IndexedDB. It hands each partition to
//! [`SuttaSearcher::load_partition`] as a JSON string, then calls
//! [`SuttaSearcher::search`], which resolves to a serialized
//! [`SearchResponse`](crate::protocol::SearchResponse):
//!
//! ```js
//! const searcher = new SuttaSearcher({ contextLength: 40 });
//! searcher.loadPartition("pli_en_sutta", json);
//! const token = searcher.beginSearch();
//! const response = await searcher.search("suffering", "en");
//! if (searcher.isCurrent(token)) render(response);
//! ```

use std::sync::Arc;

use serde::Serialize;
use serde_wasm_bindgen::{from_value, Serializer};
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::future_to_promise;

use crate::config::SearchConfig;
use crate::corpus::list_partitions;
use crate::highlight::{highlight, DEFAULT_CONTEXT_LENGTH};
use crate::protocol::{handle_request, SearchRequest};
use crate::search::{SearchTicket, Searcher};
use crate::store::{InMemoryStore, SessionGuard};
use crate::types::LanguageScope;

fn js_error(err: impl std::fmt::Display) -> JsValue {
    JsValue::from_str(&err.to_string())
}

/// Serialize to plain JS objects and arrays, never `Map`s.
fn to_js<T: Serialize + ?Sized>(value: &T) -> Result<JsValue, JsValue> {
    value
        .serialize(&Serializer::json_compatible())
        .map_err(js_error)
}

/// Opaque ticket returned by `beginSearch`.
#[wasm_bindgen]
pub struct SearchToken {
    ticket: SearchTicket,
}

#[wasm_bindgen]
impl SearchToken {
    #[wasm_bindgen(getter)]
    pub fn generation(&self) -> f64 {
        self.ticket.generation() as f64
    }
}

/// WASM-accessible verse searcher over partitions loaded from JavaScript.
#[wasm_bindgen]
pub struct SuttaSearcher {
    store: Arc<InMemoryStore>,
    searcher: Arc<Searcher>,
}

#[wasm_bindgen]
impl SuttaSearcher {
    /// Create a searcher. `options` is a partial `SearchConfig` object, or
    /// `undefined` for defaults.
    #[wasm_bindgen(constructor)]
    pub fn new(options: JsValue) -> Result<SuttaSearcher, JsValue> {
        let config: SearchConfig = if options.is_undefined() || options.is_null() {
            SearchConfig::default()
        } else {
            from_value(options).map_err(js_error)?
        };
        config.validate().map_err(js_error)?;

        let store = Arc::new(InMemoryStore::new());
        let searcher = Searcher::new(store.clone()).with_config(config);
        Ok(SuttaSearcher {
            store,
            searcher: Arc::new(searcher),
        })
    }

    /// Replace a partition with a JSON object of `key → document`.
    ///
    /// Returns the number of documents loaded.
    #[wasm_bindgen(js_name = loadPartition)]
    pub fn load_partition(&self, name: &str, json: &str) -> Result<usize, JsValue> {
        self.store.load_partition_json(name, json).map_err(js_error)
    }

    /// Resolves to a `SearchResponse` object; rejects only if the response
    /// can't be serialized.
    pub fn search(&self, term: String, lang: String) -> js_sys::Promise {
        let searcher = Arc::clone(&self.searcher);
        let request = SearchRequest {
            search_term: term,
            lang_code: lang,
        };
        future_to_promise(async move {
            let response = handle_request(&searcher, request).await;
            to_js(&response)
        })
    }

    /// Resolves to the loaded partition names searched for `lang`.
    pub fn partitions(&self, lang: String) -> js_sys::Promise {
        let store = Arc::clone(&self.store);
        future_to_promise(async move {
            let session = SessionGuard::open(store.as_ref()).await.map_err(js_error)?;
            let names = list_partitions(session.store(), &LanguageScope::for_language(&lang))
                .await
                .map_err(js_error)?;
            to_js(&names)
        })
    }

    #[wasm_bindgen(js_name = beginSearch)]
    pub fn begin_search(&self) -> SearchToken {
        SearchToken {
            ticket: self.searcher.begin_search(),
        }
    }

    #[wasm_bindgen(js_name = isCurrent)]
    pub fn is_current(&self, token: &SearchToken) -> bool {
        self.searcher.is_current(token.ticket)
    }
}

/// Highlight `query` in `text` without running a search.
#[wasm_bindgen(js_name = highlightVerse)]
pub fn highlight_verse(text: &str, query: &str, context_length: Option<usize>) -> String {
    highlight(text, query, context_length.unwrap_or(DEFAULT_CONTEXT_LENGTH))
}
