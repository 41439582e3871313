// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Verse search over a multilingual scripture corpus.
//!
//! The corpus is stored as named partitions (`pli_sutta`, `pli_en_sutta`,
//! ...) holding JSON documents. A search walks every partition for the
//! query language, matches verse by verse, and hands back ranked results
//! with highlighted snippets.
//!
//! # Architecture
//!
//! ```text
//! ┌────────────┐     ┌─────────────┐     ┌─────────────┐     ┌────────────┐
//! │  store/    │────▶│  corpus.rs  │────▶│ matcher.rs  │────▶│ search/    │
//! │ CorpusStore│     │ VerseShape, │     │ Literal |   │     │ rank, dedup│
//! │ (async)    │     │ VerseRecord │     │ Fuzzy       │     │ titles     │
//! └────────────┘     └─────────────┘     └─────────────┘     └────────────┘
//!                                               │                   │
//!                                               ▼                   ▼
//!                                        ┌─────────────┐     ┌────────────┐
//!                                        │ scoring/    │     │highlight/  │
//!                                        │ fuzzy/      │     │ <mark>     │
//!                                        └─────────────┘     └────────────┘
//! ```
//!
//! Root languages (`pli`, `san`, `lzh`, `bo`) are matched literally: every
//! query word must be a substring of the normalized verse. Every other
//! language goes through a fuzzy engine, then a literal post-filter for
//! multi-word queries.
//!
//! # Usage
//!
//! ```ignore
//! use std::sync::Arc;
//! use suttafind::{InMemoryStore, Searcher};
//!
//! let store = InMemoryStore::from_json_dir("corpus/")?;
//! let searcher = Searcher::new(Arc::new(store));
//! let results = searcher.search("dukkha", "pli").await?;
//! ```

pub mod config;
pub mod corpus;
pub mod error;
pub mod fuzzy;
pub mod highlight;
pub mod matcher;
pub mod protocol;
pub mod results;
pub mod scoring;
pub mod search;
pub mod store;
pub mod testing;
pub mod types;
pub mod utils;

#[cfg(feature = "wasm")]
pub mod wasm;

pub use config::{FuzzyScoring, SearchConfig};
pub use corpus::{expected_partitions, flatten_document, iterate_records, list_partitions, VerseShape};
pub use error::{SearchError, StoreError};
pub use fuzzy::{FuzzyEngine, TokenFuzzyEngine};
pub use highlight::{highlight, DEFAULT_CONTEXT_LENGTH};
pub use matcher::{Matcher, SearchStrategy};
pub use protocol::{handle_request, SearchRequest, SearchResponse};
pub use results::{group_by_category, paginate, result_href, Page};
pub use search::{SearchTicket, Searcher};
pub use store::{CorpusStore, InMemoryStore, LoadState, SessionGuard};
pub use types::{
    is_root_language, Category, LanguageClass, LanguageScope, MatchResult, PartitionName,
    QuerySpec, VerseRecord,
};
pub use utils::normalize;
