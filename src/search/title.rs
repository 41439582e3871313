// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Title enrichment for translation results.
//!
//! Translation documents don't say which verse is the title; the root
//! document does. For a result from `pli_en_sutta` keyed `sutta/dn/dn1`:
//!
//! ```text
//! root partition  pli_sutta           (root lang + first path segment)
//! root document   pli_sutta[sutta/dn/dn1].title  → "dn1:0.2"
//! title text      pli_en_sutta[sutta/dn/dn1] verse "dn1:0.2"
//! ```
//!
//! Every failure along the way leaves the title unresolved.

use std::collections::HashMap;

use tracing::debug;

use crate::corpus::{flatten_document, title_index};
use crate::error::StoreError;
use crate::store::CorpusStore;
use crate::types::{MatchResult, PartitionName, PARTITION_DELIMITER};

/// `(partition, source_key)`
type CacheKey = (String, String);

/// Title verses of one translation document: `(author, text)` per
/// translator that has one.
type TitleCandidates = Vec<(Option<String>, String)>;

/// Resolves titles for one search, fetching each document at most once.
pub struct TitleResolver<'a> {
    store: &'a dyn CorpusStore,
    cache: HashMap<CacheKey, TitleCandidates>,
}

impl<'a> TitleResolver<'a> {
    pub fn new(store: &'a dyn CorpusStore) -> Self {
        Self {
            store,
            cache: HashMap::new(),
        }
    }

    /// Fill in `title` on every result that doesn't have one.
    pub async fn enrich(&mut self, results: &mut [MatchResult]) {
        for result in results.iter_mut().filter(|r| r.title.is_none()) {
            let title = self.resolve(result).await;
            result.title = title;
        }
    }

    /// Title text for one result, preferring the result's own translator.
    pub async fn resolve(&mut self, result: &MatchResult) -> Option<String> {
        let partition = result.record.partition();
        let source_key = result.source_key();
        let cache_key = (partition.to_string(), source_key.to_string());

        if !self.cache.contains_key(&cache_key) {
            let candidates = match self.lookup(partition, source_key).await {
                Ok(candidates) => candidates,
                Err(err) => {
                    debug!(partition, source_key, error = %err, "title lookup failed");
                    Vec::new()
                }
            };
            self.cache.insert(cache_key.clone(), candidates);
        }

        let candidates = self.cache.get(&cache_key)?;
        let author = result.record.author();
        candidates
            .iter()
            .find(|(candidate, _)| author.is_some() && candidate.as_deref() == author)
            .or_else(|| candidates.first())
            .map(|(_, text)| text.clone())
    }

    async fn lookup(&self, partition: &str, source_key: &str) -> Result<TitleCandidates, StoreError> {
        let Some(root_partition) = root_partition_for(partition, source_key) else {
            return Ok(Vec::new());
        };
        let Some(root_doc) = self.store.get(&root_partition, source_key).await? else {
            return Ok(Vec::new());
        };
        let Some(title_idx) = title_index(&root_doc) else {
            return Ok(Vec::new());
        };
        let Some(doc) = self.store.get(partition, source_key).await? else {
            return Ok(Vec::new());
        };

        Ok(flatten_document(partition, source_key, &doc)
            .into_iter()
            .filter(|v| v.verse_index() == title_idx)
            .map(|v| (v.author().map(str::to_string), v.text().to_string()))
            .collect())
    }
}

/// `{root_lang}_{first path segment of source_key}`.
pub fn root_partition_for(partition: &str, source_key: &str) -> Option<String> {
    let parsed = PartitionName::parse(partition)?;
    let segment = source_key.split('/').find(|s| !s.is_empty())?;
    Some(format!(
        "{}{}{}",
        parsed.root_lang(),
        PARTITION_DELIMITER,
        segment
    ))
}
