// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Request/response shapes for callers outside Rust.
//!
//! ```json
//! {"searchTerm": "dukkha", "langCode": "pli"}
//! {"status": "results", "searchTerm": "dukkha", "results": [...]}
//! {"status": "empty",   "searchTerm": "dukkha"}
//! {"status": "error",   "searchTerm": "dukkha", "message": "..."}
//! ```
//!
//! "Nothing found" and "search failed" are different variants so the UI can
//! show a retry prompt for one and not the other.

use serde::{Deserialize, Serialize};

use crate::search::Searcher;
use crate::types::MatchResult;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchRequest {
    pub search_term: String,
    pub lang_code: String,
}

#[derive(Debug, Clone, Serialize)]
#[serde(tag = "status", rename_all = "lowercase")]
pub enum SearchResponse {
    Results {
        #[serde(rename = "searchTerm")]
        search_term: String,
        results: Vec<MatchResult>,
    },
    Empty {
        #[serde(rename = "searchTerm")]
        search_term: String,
    },
    Error {
        #[serde(rename = "searchTerm")]
        search_term: String,
        message: String,
    },
}

impl SearchResponse {
    pub fn search_term(&self) -> &str {
        match self {
            SearchResponse::Results { search_term, .. }
            | SearchResponse::Empty { search_term }
            | SearchResponse::Error { search_term, .. } => search_term,
        }
    }

    pub fn results(&self) -> &[MatchResult] {
        match self {
            SearchResponse::Results { results, .. } => results,
            _ => &[],
        }
    }

    pub fn is_error(&self) -> bool {
        matches!(self, SearchResponse::Error { .. })
    }
}

/// Run a request through the strict search path.
pub async fn handle_request(searcher: &Searcher, request: SearchRequest) -> SearchResponse {
    let SearchRequest {
        search_term,
        lang_code,
    } = request;
    match searcher.search(&search_term, &lang_code).await {
        Ok(results) if results.is_empty() => SearchResponse::Empty { search_term },
        Ok(results) => SearchResponse::Results {
            search_term,
            results,
        },
        Err(err) => SearchResponse::Error {
            search_term,
            message: err.to_string(),
        },
    }
}
