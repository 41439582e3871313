// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Storage abstraction for the corpus.
//!
//! The [`CorpusStore`] trait is the seam to whatever actually holds the
//! corpus: IndexedDB in the browser, a directory of JSON files for the CLI,
//! a map in tests. Partitions are named (`pli_sutta`, `pli_en_sutta`, ...)
//! and map document keys to JSON documents.
//!
//! Reads happen inside a session. [`SessionGuard`] opens one and releases
//! it on drop, so an early `?` return or a panic still gives the handle back.

pub mod memory;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::StoreError;

pub use memory::InMemoryStore;

/// Key-value store with named partitions.
///
/// | Method | Purpose |
/// |--------|---------|
/// | [`open`](CorpusStore::open) | Acquire a read session |
/// | [`release`](CorpusStore::release) | Give the session back |
/// | [`partitions`](CorpusStore::partitions) | List partition names |
/// | [`count`](CorpusStore::count) | Number of documents in a partition |
/// | [`get`](CorpusStore::get) | One document by key |
/// | [`scan`](CorpusStore::scan) | Every `(key, document)` pair, in key order |
/// | [`put`](CorpusStore::put) | Store a document (population only) |
#[async_trait]
pub trait CorpusStore: Send + Sync {
    async fn open(&self) -> Result<(), StoreError>;

    /// Must be safe to call from `Drop`, so it can't fail or await.
    fn release(&self);

    async fn partitions(&self) -> Result<Vec<String>, StoreError>;

    async fn count(&self, partition: &str) -> Result<usize, StoreError>;

    async fn get(&self, partition: &str, key: &str) -> Result<Option<Value>, StoreError>;

    async fn scan(&self, partition: &str) -> Result<Vec<(String, Value)>, StoreError>;

    async fn put(&self, partition: &str, key: &str, value: Value) -> Result<(), StoreError>;
}

/// An open read session, released when dropped.
pub struct SessionGuard<'a> {
    store: &'a dyn CorpusStore,
}

impl<'a> SessionGuard<'a> {
    pub async fn open(store: &'a dyn CorpusStore) -> Result<SessionGuard<'a>, StoreError> {
        store.open().await?;
        Ok(Self { store })
    }

    pub fn store(&self) -> &'a dyn CorpusStore {
        self.store
    }
}

impl Drop for SessionGuard<'_> {
    fn drop(&mut self) {
        self.store.release();
    }
}

/// Whether the corpus loader has populated storage for a given data version.
///
/// Owned by the loader. The search core never reads it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct LoadState {
    pub version: u32,
    pub completed: bool,
}

impl LoadState {
    pub fn needs_load(&self, current_version: u32) -> bool {
        !self.completed || self.version != current_version
    }

    pub fn completed(version: u32) -> Self {
        Self {
            version,
            completed: true,
        }
    }
}
