// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Error types.
//!
//! Blank queries are not errors, and neither are failures inside a single
//! partition scan or a title lookup: those are logged and recovered where
//! they happen. What reaches the caller is a missing collaborator or bad
//! configuration.

use thiserror::Error;

/// Failures raised by a [`CorpusStore`](crate::store::CorpusStore).
#[derive(Error, Debug)]
pub enum StoreError {
    #[error("store session is not open")]
    Closed,

    #[error("partition not found: {0}")]
    MissingPartition(String),

    #[error("malformed record {key} in {partition}: {reason}")]
    Malformed {
        partition: String,
        key: String,
        reason: String,
    },

    #[error("{0}")]
    Backend(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Failures surfaced by [`Searcher`](crate::search::Searcher).
#[derive(Error, Debug)]
pub enum SearchError {
    #[error("corpus storage unavailable: {0}")]
    StoreUnavailable(String),

    #[error("fuzzy matching requested but no fuzzy engine is installed")]
    FuzzyUnavailable,

    #[error("storage error: {0}")]
    Store(#[from] StoreError),

    #[error("invalid configuration: {0}")]
    Config(String),
}

impl serde::Serialize for SearchError {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}
