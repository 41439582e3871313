// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Search configuration.
//!
//! Every field has a default, so `{}` is a valid config and JavaScript
//! callers only pass what they want to change.

use serde::Deserialize;
use std::path::Path;

use crate::error::SearchError;
use crate::highlight::DEFAULT_CONTEXT_LENGTH;

/// How translation-language candidates are scored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FuzzyScoring {
    /// Ask the installed [`FuzzyEngine`](crate::fuzzy::FuzzyEngine).
    Engine,
    /// Use the positional fallback score, no engine needed.
    Positional,
}

/// Search options, deserialized from JSON (CLI config file or JS object).
#[derive(Debug, Clone, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct SearchConfig {
    /// Characters of context on each side of a highlighted match (default: 50)
    pub context_length: usize,
    /// Maximum results after dedup, 0 for no limit (default: 0)
    pub max_results: usize,
    /// Allowed edits per character of a query word (default: 0.34)
    pub fuzzy_threshold: f64,
    /// Candidate scoring for translation languages (default: engine)
    pub fuzzy_scoring: FuzzyScoring,
    /// Produce highlighted snippets (default: true)
    pub decorate: bool,
    /// Language linked to when the query language is a root language (default: "en")
    pub default_language: String,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            context_length: DEFAULT_CONTEXT_LENGTH,
            max_results: 0,
            fuzzy_threshold: 0.34,
            fuzzy_scoring: FuzzyScoring::Engine,
            decorate: true,
            default_language: "en".to_string(),
        }
    }
}

impl SearchConfig {
    /// Load and validate a JSON config file.
    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self, SearchError> {
        let path = path.as_ref();
        let raw = std::fs::read_to_string(path)
            .map_err(|e| SearchError::Config(format!("{}: {}", path.display(), e)))?;
        Self::from_json_str(&raw)
    }

    pub fn from_json_str(raw: &str) -> Result<Self, SearchError> {
        let config: SearchConfig =
            serde_json::from_str(raw).map_err(|e| SearchError::Config(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), SearchError> {
        if self.context_length == 0 {
            return Err(SearchError::Config(
                "contextLength must be greater than 0".to_string(),
            ));
        }
        if !(0.0..=1.0).contains(&self.fuzzy_threshold) {
            return Err(SearchError::Config(format!(
                "fuzzyThreshold must be within [0, 1], got {}",
                self.fuzzy_threshold
            )));
        }
        if self.default_language.is_empty() {
            return Err(SearchError::Config(
                "defaultLanguage must not be empty".to_string(),
            ));
        }
        Ok(())
    }
}
