// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Test utilities shared across unit tests, integration tests, benches, and
//! fuzz targets.
//!
//! This module is always compiled but hidden from documentation.

#![doc(hidden)]

use std::collections::HashSet;
use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;
use serde_json::{json, Value};

use crate::error::StoreError;
use crate::store::{CorpusStore, InMemoryStore};

/// A small corpus covering every partition shape the loader writes.
///
/// | Partition      | Shape        | Content                                  |
/// |----------------|--------------|------------------------------------------|
/// | `pli_sutta`    | verse map    | SN 56.11 (with title) and DN 1 openings  |
/// | `pli_vinaya`   | flat array   | two Pārājika lines                       |
/// | `san_sutta`    | verse map    | a parallel sharing a DN 1 verse index    |
/// | `pli_en_sutta` | author-keyed | Sujato and Bodhi translations            |
/// | `pli_en_vinaya`| threaded     | Brahmali translation                     |
/// | `pli_de_sutta` | flat object  | one German verse                         |
pub fn sample_corpus() -> InMemoryStore {
    let store = InMemoryStore::new();
    for (partition, docs) in sample_partitions() {
        // Fixture JSON is static, so this cannot fail.
        let _ = store.load_partition_json(partition, &docs.to_string());
    }
    store
}

fn sample_partitions() -> Vec<(&'static str, Value)> {
    vec![
        (
            "pli_sutta",
            json!({
                "sutta/sn/sn56.11": {
                    "title": "sn56.11:0.2",
                    "sn56.11:0.2": {"verse": "Dhammacakkappavattanasutta"},
                    "sn56.11:5.1": {"verse": "Idaṁ kho pana, bhikkhave, dukkhaṁ ariyasaccaṁ."},
                    "sn56.11:5.2": {"verse": "Jātipi dukkhā"},
                    "sn56.11:6.1": {"verse": "Idaṁ kho pana, bhikkhave, dukkhasamudayaṁ ariyasaccaṁ."},
                },
                "sutta/dn/dn1": {
                    "title": "dn1:0.2",
                    "dn1:0.2": {"verse": "Brahmajālasutta"},
                    "dn1:1.1": {"verse": "Evaṁ me sutaṁ—"},
                },
            }),
        ),
        (
            "pli_vinaya",
            json!({
                "vinaya/pli-tv-bu-vb-pj1": [
                    {"verseindex": "pli-tv-bu-vb-pj1:1.1", "verse": "Tena samayena buddho bhagavā verañjāyaṁ viharati"},
                    {"verseindex": "pli-tv-bu-vb-pj1:1.2", "verse": "Dukkhaṁ vata, bho"},
                ],
            }),
        ),
        (
            "san_sutta",
            json!({
                "sutta/dn/dn1": {"dn1:1.1": {"verse": "evaṁ mayā śrutam"}},
            }),
        ),
        (
            "pli_en_sutta",
            json!({
                "sutta/sn/sn56.11": {
                    "sujato": {
                        "sn56.11:0.2": {"verse": "Rolling Forth the Wheel of Dhamma"},
                        "sn56.11:5.1": {"verse": "Now this is the noble truth of suffering."},
                        "sn56.11:5.2": {"verse": "Rebirth is suffering."},
                        "sn56.11:6.1": {"verse": "Now this is the noble truth of the origin of suffering."},
                    },
                },
                "sutta/dn/dn1": {
                    "bodhi": {"dn1:0.2": {"verse": "The All-Embracing Net of Views"}, "dn1:1.1": {"verse": "Thus have I heard."}},
                    "sujato": {"dn1:0.2": {"verse": "The Prime Net"}, "dn1:1.1": {"verse": "So I have heard."}},
                },
            }),
        ),
        (
            "pli_en_vinaya",
            json!({
                "vinaya/pli-tv-bu-vb-pj1": {
                    "threads": {
                        "brahmali": {
                            "pli-tv-bu-vb-pj1:1.1": {"verse": "At one time the Buddha was staying at Verañjā"},
                            "pli-tv-bu-vb-pj1:1.2": {"verse": "Oh, the suffering of it"},
                        },
                    },
                },
            }),
        ),
        (
            "pli_de_sutta",
            json!({
                "sutta/dn/dn1": {"verseindex": "dn1:1.1", "verse": "So habe ich gehört.", "author": "sabbamitta"},
            }),
        ),
    ]
}

/// Wraps an [`InMemoryStore`], counting calls and injecting failures.
#[derive(Default)]
pub struct FlakyStore {
    inner: InMemoryStore,
    fail_open: bool,
    failing_partitions: HashSet<String>,
    calls: AtomicUsize,
}

impl FlakyStore {
    pub fn new(inner: InMemoryStore) -> Self {
        Self {
            inner,
            ..Self::default()
        }
    }

    /// `open` always fails.
    pub fn failing_open(mut self) -> Self {
        self.fail_open = true;
        self
    }

    /// `scan` of `partition` fails.
    pub fn failing_partition(mut self, partition: &str) -> Self {
        self.failing_partitions.insert(partition.to_string());
        self
    }

    /// Calls made through the `CorpusStore` trait so far.
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    pub fn open_sessions(&self) -> usize {
        self.inner.open_sessions()
    }

    fn record_call(&self) {
        self.calls.fetch_add(1, Ordering::SeqCst);
    }
}

#[async_trait]
impl CorpusStore for FlakyStore {
    async fn open(&self) -> Result<(), StoreError> {
        self.record_call();
        if self.fail_open {
            return Err(StoreError::Backend("database blocked".to_string()));
        }
        self.inner.open().await
    }

    fn release(&self) {
        self.record_call();
        self.inner.release();
    }

    async fn partitions(&self) -> Result<Vec<String>, StoreError> {
        self.record_call();
        self.inner.partitions().await
    }

    async fn count(&self, partition: &str) -> Result<usize, StoreError> {
        self.record_call();
        self.inner.count(partition).await
    }

    async fn get(&self, partition: &str, key: &str) -> Result<Option<Value>, StoreError> {
        self.record_call();
        self.inner.get(partition, key).await
    }

    async fn scan(&self, partition: &str) -> Result<Vec<(String, Value)>, StoreError> {
        self.record_call();
        if self.failing_partitions.contains(partition) {
            return Err(StoreError::Malformed {
                partition: partition.to_string(),
                key: String::new(),
                reason: "cursor aborted".to_string(),
            });
        }
        self.inner.scan(partition).await
    }

    async fn put(&self, partition: &str, key: &str, value: Value) -> Result<(), StoreError> {
        self.record_call();
        self.inner.put(partition, key, value).await
    }
}

/// Verse text of roughly `len` chars with `needle` placed at `at`.
pub fn long_text_with(needle: &str, at: usize, len: usize) -> String {
    let filler: String = "lorem ipsum dolor sit amet ".chars().cycle().take(len).collect();
    let mut chars: Vec<char> = filler.chars().collect();
    let at = at.min(chars.len());
    chars.splice(at..(at + needle.chars().count()).min(chars.len()), needle.chars());
    chars.into_iter().collect()
}
