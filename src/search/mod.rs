// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Search dispatch: from a term and a language code to ranked results.
//!
//! ```text
//! term ──parse──▶ QuerySpec          (blank → [] without touching storage)
//! lang ──classify──▶ Literal | Fuzzy
//!        │
//!        ▼
//! open session ─▶ partitions in scope ─▶ scan + match each
//!        │                               (a failing partition is skipped)
//!        ▼
//! rank ─▶ dedup by verse ─▶ truncate ─▶ titles (Fuzzy) ─▶ highlight
//! ```
//!
//! [`Searcher::search`] reports a missing collaborator as an error so a
//! misconfigured deployment can't pass for "no results".
//! [`Searcher::search_lenient`] is the legacy entry point that collapses
//! every failure into an empty list.

pub mod dedup;
pub mod generation;
pub mod title;

use std::sync::Arc;

use tracing::{debug, error, warn};

use crate::config::{FuzzyScoring, SearchConfig};
use crate::corpus::{iterate_records, list_partitions};
use crate::error::SearchError;
use crate::fuzzy::{FuzzyEngine, TokenFuzzyEngine};
use crate::highlight::highlight;
use crate::matcher::{FuzzyScorer, Matcher, SearchStrategy};
use crate::scoring::ranking::rank;
use crate::store::{CorpusStore, SessionGuard};
use crate::types::{LanguageScope, MatchResult, QuerySpec};

pub use dedup::{dedup_by_verse, VerseDeduper};
pub use generation::{Generation, SearchTicket};
pub use title::TitleResolver;

/// Where the fuzzy engine comes from.
#[derive(Clone)]
enum EngineSource {
    /// `TokenFuzzyEngine` built from the configured threshold.
    BuiltIn,
    Custom(Arc<dyn FuzzyEngine>),
    None,
}

/// Runs searches against a corpus store.
pub struct Searcher {
    store: Arc<dyn CorpusStore>,
    config: SearchConfig,
    engine: EngineSource,
    generation: Generation,
}

impl Searcher {
    pub fn new(store: Arc<dyn CorpusStore>) -> Self {
        Self {
            store,
            config: SearchConfig::default(),
            engine: EngineSource::BuiltIn,
            generation: Generation::new(),
        }
    }

    pub fn with_config(mut self, config: SearchConfig) -> Self {
        self.config = config;
        self
    }

    /// Replace the built-in fuzzy engine.
    pub fn with_fuzzy_engine(mut self, engine: Arc<dyn FuzzyEngine>) -> Self {
        self.engine = EngineSource::Custom(engine);
        self
    }

    /// Run without any fuzzy engine. Translation searches then fail with
    /// [`SearchError::FuzzyUnavailable`] unless positional scoring is
    /// configured.
    pub fn without_fuzzy_engine(mut self) -> Self {
        self.engine = EngineSource::None;
        self
    }

    pub fn config(&self) -> &SearchConfig {
        &self.config
    }

    pub fn store(&self) -> &Arc<dyn CorpusStore> {
        &self.store
    }

    /// Issue a ticket for a search about to start.
    pub fn begin_search(&self) -> SearchTicket {
        self.generation.next()
    }

    /// False once a newer search has begun.
    pub fn is_current(&self, ticket: SearchTicket) -> bool {
        self.generation.is_current(ticket)
    }

    /// Ranked matches for `term` in `lang`.
    ///
    /// A blank term gives `Ok(vec![])` without opening storage. A partition
    /// that fails to scan is logged and contributes nothing.
    pub async fn search(&self, term: &str, lang: &str) -> Result<Vec<MatchResult>, SearchError> {
        let Some(query) = QuerySpec::parse(term) else {
            return Ok(Vec::new());
        };
        let strategy = SearchStrategy::for_language(lang);

        let built_in;
        let matcher = match strategy {
            SearchStrategy::Literal => Matcher::literal(&query),
            SearchStrategy::Fuzzy => {
                let scorer = match (self.config.fuzzy_scoring, &self.engine) {
                    (FuzzyScoring::Positional, _) => FuzzyScorer::Positional,
                    (FuzzyScoring::Engine, EngineSource::Custom(engine)) => {
                        FuzzyScorer::Engine(engine.as_ref())
                    }
                    (FuzzyScoring::Engine, EngineSource::BuiltIn) => {
                        built_in = TokenFuzzyEngine::new(self.config.fuzzy_threshold);
                        FuzzyScorer::Engine(&built_in)
                    }
                    (FuzzyScoring::Engine, EngineSource::None) => {
                        return Err(SearchError::FuzzyUnavailable);
                    }
                };
                Matcher::fuzzy(&query, scorer)
            }
        };

        let session = SessionGuard::open(self.store.as_ref())
            .await
            .map_err(|err| SearchError::StoreUnavailable(err.to_string()))?;
        let store = session.store();

        let partitions = list_partitions(store, &LanguageScope::for_language(lang)).await?;
        debug!(term, lang, ?strategy, partitions = partitions.len(), "search started");

        let mut results = Vec::new();
        for partition in &partitions {
            match iterate_records(store, partition).await {
                Ok(records) => {
                    let found = matcher.evaluate_all(records);
                    debug!(partition = %partition, matches = found.len(), "partition scanned");
                    results.extend(found);
                }
                Err(err) => {
                    warn!(partition = %partition, error = %err, "partition scan failed, skipping");
                }
            }
        }

        rank(&mut results);
        let mut results = dedup_by_verse(results);
        if self.config.max_results > 0 {
            results.truncate(self.config.max_results);
        }

        if strategy == SearchStrategy::Fuzzy {
            TitleResolver::new(store).enrich(&mut results).await;
        }
        drop(session);

        if self.config.decorate {
            for result in &mut results {
                let decorated = highlight(
                    result.record.text(),
                    &query.raw_term,
                    self.config.context_length,
                );
                result.decorated_text = Some(decorated);
            }
        }

        debug!(term, lang, results = results.len(), "search finished");
        Ok(results)
    }

    /// Like [`search`](Self::search), but any failure becomes an empty list.
    pub async fn search_lenient(&self, term: &str, lang: &str) -> Vec<MatchResult> {
        match self.search(term, lang).await {
            Ok(results) => results,
            Err(err) => {
                error!(term, lang, error = %err, "search failed");
                Vec::new()
            }
        }
    }
}
