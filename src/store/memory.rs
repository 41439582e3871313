// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! In-memory [`CorpusStore`] for the CLI, WASM, and tests.
//!
//! Partitions are `BTreeMap`s so scans come back in key order, the same
//! order an IndexedDB cursor walks.

use std::collections::BTreeMap;
use std::path::Path;
use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;
use parking_lot::RwLock;
use serde_json::Value;

use super::CorpusStore;
use crate::error::StoreError;

type Partition = BTreeMap<String, Value>;

pub struct InMemoryStore {
    partitions: RwLock<BTreeMap<String, Partition>>,
    sessions: AtomicUsize,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self {
            partitions: RwLock::new(BTreeMap::new()),
            sessions: AtomicUsize::new(0),
        }
    }

    /// Load every `<partition>.json` file in `dir`.
    ///
    /// Each file holds one JSON object mapping document keys to documents.
    /// Other files are ignored.
    pub fn from_json_dir(dir: impl AsRef<Path>) -> Result<Self, StoreError> {
        let store = Self::new();
        let mut paths: Vec<_> = std::fs::read_dir(dir.as_ref())?
            .filter_map(|entry| entry.ok().map(|e| e.path()))
            .filter(|p| p.extension().is_some_and(|ext| ext == "json"))
            .collect();
        paths.sort();

        for path in paths {
            let Some(name) = path.file_stem().and_then(|s| s.to_str()) else {
                continue;
            };
            let raw = std::fs::read_to_string(&path)?;
            store.load_partition_json(name, &raw)?;
        }
        Ok(store)
    }

    /// Replace a partition with the documents in a JSON object.
    pub fn load_partition_json(&self, partition: &str, raw: &str) -> Result<usize, StoreError> {
        let value: Value = serde_json::from_str(raw)?;
        let Value::Object(docs) = value else {
            return Err(StoreError::Malformed {
                partition: partition.to_string(),
                key: String::new(),
                reason: "partition file must hold a JSON object".to_string(),
            });
        };
        let docs: Partition = docs.into_iter().collect();
        let count = docs.len();
        self.partitions.write().insert(partition.to_string(), docs);
        Ok(count)
    }

    /// Create an empty partition (no-op if it exists).
    pub fn create_partition(&self, partition: &str) {
        self.partitions
            .write()
            .entry(partition.to_string())
            .or_default();
    }

    /// Sessions currently open.
    pub fn open_sessions(&self) -> usize {
        self.sessions.load(Ordering::SeqCst)
    }

    fn require_session(&self) -> Result<(), StoreError> {
        if self.open_sessions() == 0 {
            Err(StoreError::Closed)
        } else {
            Ok(())
        }
    }
}

impl Default for InMemoryStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl CorpusStore for InMemoryStore {
    async fn open(&self) -> Result<(), StoreError> {
        self.sessions.fetch_add(1, Ordering::SeqCst);
        Ok(())
    }

    fn release(&self) {
        // Saturate: a stray release must not wrap the counter.
        let _ = self
            .sessions
            .fetch_update(Ordering::SeqCst, Ordering::SeqCst, |n| n.checked_sub(1));
    }

    async fn partitions(&self) -> Result<Vec<String>, StoreError> {
        self.require_session()?;
        Ok(self.partitions.read().keys().cloned().collect())
    }

    async fn count(&self, partition: &str) -> Result<usize, StoreError> {
        self.require_session()?;
        self.partitions
            .read()
            .get(partition)
            .map(BTreeMap::len)
            .ok_or_else(|| StoreError::MissingPartition(partition.to_string()))
    }

    async fn get(&self, partition: &str, key: &str) -> Result<Option<Value>, StoreError> {
        self.require_session()?;
        let partitions = self.partitions.read();
        let docs = partitions
            .get(partition)
            .ok_or_else(|| StoreError::MissingPartition(partition.to_string()))?;
        Ok(docs.get(key).cloned())
    }

    async fn scan(&self, partition: &str) -> Result<Vec<(String, Value)>, StoreError> {
        self.require_session()?;
        let partitions = self.partitions.read();
        let docs = partitions
            .get(partition)
            .ok_or_else(|| StoreError::MissingPartition(partition.to_string()))?;
        Ok(docs.iter().map(|(k, v)| (k.clone(), v.clone())).collect())
    }

    async fn put(&self, partition: &str, key: &str, value: Value) -> Result<(), StoreError> {
        self.partitions
            .write()
            .entry(partition.to_string())
            .or_default()
            .insert(key.to_string(), value);
        Ok(())
    }
}
