// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The building blocks of a verse search.
//!
//! Records come out of storage, results go out to the renderer. In between,
//! nothing mutates: a `VerseRecord` is built once by the corpus accessor and
//! every derived value (score, enriched title, decorated snippet) lives on
//! the `MatchResult` that wraps it.
//!
//! # Invariants
//!
//! - **VerseRecord**: `normalized_text == normalize(text)`. Enforced by the
//!   constructor, which is the only way to build one.
//! - **QuerySpec**: `words` is non-empty. `QuerySpec::parse` returns `None`
//!   for blank input instead of producing an empty query.
//! - **PartitionName**: exactly 2 or 3 `_`-separated segments ending in a
//!   known category.

use serde::ser::{SerializeStruct, Serializer};
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::utils::normalize;

// =============================================================================
// LANGUAGES
// =============================================================================

/// Root (scripture) languages. `pli` is the primary one and the only root
/// language whose corpus includes the Abhidhamma.
pub const ROOT_LANGUAGES: [&str; 4] = ["pli", "san", "lzh", "bo"];

/// The root language that carries every category.
pub const PRIMARY_ROOT_LANGUAGE: &str = "pli";

/// Delimiter between partition name segments.
pub const PARTITION_DELIMITER: char = '_';

/// Is this a root language or a translation language?
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LanguageClass {
    Root,
    Translation,
}

impl LanguageClass {
    /// Pure classification over the fixed root language set.
    pub fn of(lang: &str) -> Self {
        if is_root_language(lang) {
            LanguageClass::Root
        } else {
            LanguageClass::Translation
        }
    }
}

/// True for the four root language codes.
pub fn is_root_language(lang: &str) -> bool {
    ROOT_LANGUAGES.contains(&lang)
}

/// Which slice of storage a search walks.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LanguageScope {
    /// `rootLang_category` partitions for this root language.
    Root(String),
    /// `rootLang_langCode_category` partitions for this translation language.
    Translation(String),
}

impl LanguageScope {
    pub fn for_language(lang: &str) -> Self {
        match LanguageClass::of(lang) {
            LanguageClass::Root => LanguageScope::Root(lang.to_string()),
            LanguageClass::Translation => LanguageScope::Translation(lang.to_string()),
        }
    }

    pub fn lang(&self) -> &str {
        match self {
            LanguageScope::Root(lang) | LanguageScope::Translation(lang) => lang,
        }
    }

    /// Does a parsed partition belong to this scope?
    pub fn contains(&self, partition: &PartitionName) -> bool {
        match (self, partition) {
            (LanguageScope::Root(lang), PartitionName::Root { root_lang, .. }) => lang == root_lang,
            (LanguageScope::Translation(lang), PartitionName::Translation { lang: p_lang, .. }) => {
                lang == p_lang
            }
            _ => false,
        }
    }
}

// =============================================================================
// CATEGORIES AND PARTITIONS
// =============================================================================

/// Canonical collection a verse belongs to.
///
/// The derived `Ord` (Sutta < Vinaya < Abhidhamma) is the display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Sutta,
    Vinaya,
    Abhidhamma,
}

impl Category {
    pub const ALL: [Category; 3] = [Category::Sutta, Category::Vinaya, Category::Abhidhamma];

    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Sutta => "sutta",
            Category::Vinaya => "vinaya",
            Category::Abhidhamma => "abhidhamma",
        }
    }

    /// Exact segment match, used when parsing partition names.
    pub fn from_segment(segment: &str) -> Option<Self> {
        match segment {
            "sutta" => Some(Category::Sutta),
            "vinaya" => Some(Category::Vinaya),
            "abhidhamma" => Some(Category::Abhidhamma),
            _ => None,
        }
    }

    /// Infer a category from a partition name, falling back to a substring
    /// check on the source key. Anything unrecognized is a sutta.
    pub fn infer(partition: &str, source_key: &str) -> Self {
        if let Some(parsed) = PartitionName::parse(partition) {
            return parsed.category();
        }
        if source_key.contains("vinaya") {
            Category::Vinaya
        } else if source_key.contains("abhidhamma") {
            Category::Abhidhamma
        } else {
            Category::Sutta
        }
    }

    /// Does `root_lang` carry this category at all?
    pub fn available_for(&self, root_lang: &str) -> bool {
        *self != Category::Abhidhamma || root_lang == PRIMARY_ROOT_LANGUAGE
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A parsed storage partition name.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum PartitionName {
    /// `rootLang_category`: verses stored directly per document.
    Root { root_lang: String, category: Category },
    /// `rootLang_langCode_category`: verses stored per translator.
    Translation {
        root_lang: String,
        lang: String,
        category: Category,
    },
}

impl PartitionName {
    pub fn parse(name: &str) -> Option<Self> {
        let segments: Vec<&str> = name.split(PARTITION_DELIMITER).collect();
        match segments.as_slice() {
            [root_lang, category] if !root_lang.is_empty() => Some(PartitionName::Root {
                root_lang: (*root_lang).to_string(),
                category: Category::from_segment(category)?,
            }),
            [root_lang, lang, category] if !root_lang.is_empty() && !lang.is_empty() => {
                Some(PartitionName::Translation {
                    root_lang: (*root_lang).to_string(),
                    lang: (*lang).to_string(),
                    category: Category::from_segment(category)?,
                })
            }
            _ => None,
        }
    }

    pub fn root(root_lang: &str, category: Category) -> Self {
        PartitionName::Root {
            root_lang: root_lang.to_string(),
            category,
        }
    }

    pub fn translation(root_lang: &str, lang: &str, category: Category) -> Self {
        PartitionName::Translation {
            root_lang: root_lang.to_string(),
            lang: lang.to_string(),
            category,
        }
    }

    pub fn category(&self) -> Category {
        match self {
            PartitionName::Root { category, .. } | PartitionName::Translation { category, .. } => {
                *category
            }
        }
    }

    pub fn root_lang(&self) -> &str {
        match self {
            PartitionName::Root { root_lang, .. } | PartitionName::Translation { root_lang, .. } => {
                root_lang
            }
        }
    }

    pub fn is_translation(&self) -> bool {
        matches!(self, PartitionName::Translation { .. })
    }
}

impl fmt::Display for PartitionName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PartitionName::Root {
                root_lang,
                category,
            } => write!(f, "{}{}{}", root_lang, PARTITION_DELIMITER, category),
            PartitionName::Translation {
                root_lang,
                lang,
                category,
            } => write!(
                f,
                "{}{d}{}{d}{}",
                root_lang,
                lang,
                category,
                d = PARTITION_DELIMITER
            ),
        }
    }
}

// =============================================================================
// RECORDS AND RESULTS
// =============================================================================

/// The atomic unit of search: one verse of one document.
///
/// Fields are private so `normalized_text` can't drift from `text`. Build
/// with [`VerseRecord::new`] and chain the `with_*` setters for optional
/// fields; they consume `self`, so a record is never modified once shared.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct VerseRecord {
    source_key: String,
    verse_index: String,
    text: String,
    #[serde(skip)]
    normalized_text: String,
    author: Option<String>,
    // Serialized through `MatchResult::title`, which may be enriched.
    #[serde(skip)]
    title: Option<String>,
    partition: String,
}

impl VerseRecord {
    pub fn new(
        partition: impl Into<String>,
        source_key: impl Into<String>,
        verse_index: impl Into<String>,
        text: impl Into<String>,
    ) -> Self {
        let text = text.into();
        Self {
            normalized_text: normalize(&text),
            source_key: source_key.into(),
            verse_index: verse_index.into(),
            text,
            author: None,
            title: None,
            partition: partition.into(),
        }
    }

    pub fn with_author(mut self, author: impl Into<String>) -> Self {
        self.author = Some(author.into());
        self
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn source_key(&self) -> &str {
        &self.source_key
    }

    pub fn verse_index(&self) -> &str {
        &self.verse_index
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn normalized_text(&self) -> &str {
        &self.normalized_text
    }

    pub fn author(&self) -> Option<&str> {
        self.author.as_deref()
    }

    pub fn title(&self) -> Option<&str> {
        self.title.as_deref()
    }

    pub fn partition(&self) -> &str {
        &self.partition
    }

    pub fn category(&self) -> Category {
        Category::infer(&self.partition, &self.source_key)
    }
}

/// A verse that matched, with everything the renderer needs.
///
/// Lower scores rank first. `title` starts as the record's own title and may
/// be filled in by title enrichment; the record itself is never touched.
///
/// Serializes as one flat struct: the record's fields, then `score`,
/// `title`, `decoratedText`.
#[derive(Debug, Clone, PartialEq)]
pub struct MatchResult {
    pub record: VerseRecord,
    pub score: f64,
    pub title: Option<String>,
    pub decorated_text: Option<String>,
}

impl Serialize for MatchResult {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let record = &self.record;
        let mut out = serializer.serialize_struct("MatchResult", 8)?;
        out.serialize_field("sourceKey", &record.source_key)?;
        out.serialize_field("verseIndex", &record.verse_index)?;
        out.serialize_field("text", &record.text)?;
        out.serialize_field("author", &record.author)?;
        out.serialize_field("partition", &record.partition)?;
        out.serialize_field("score", &self.score)?;
        out.serialize_field("title", &self.title)?;
        out.serialize_field("decoratedText", &self.decorated_text)?;
        out.end()
    }
}

impl MatchResult {
    pub fn new(record: VerseRecord, score: f64) -> Self {
        let title = record.title().map(str::to_string);
        Self {
            record,
            score,
            title,
            decorated_text: None,
        }
    }

    pub fn verse_index(&self) -> &str {
        self.record.verse_index()
    }

    pub fn source_key(&self) -> &str {
        self.record.source_key()
    }

    pub fn category(&self) -> Category {
        self.record.category()
    }

    /// Decorated snippet when present, raw text otherwise.
    pub fn display_text(&self) -> &str {
        self.decorated_text
            .as_deref()
            .unwrap_or_else(|| self.record.text())
    }
}

/// A parsed user query.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuerySpec {
    pub raw_term: String,
    pub normalized_term: String,
    pub words: Vec<String>,
}

impl QuerySpec {
    /// Parse a raw search term. Blank input yields `None`.
    pub fn parse(raw_term: &str) -> Option<Self> {
        let normalized = normalize(raw_term.trim());
        let words: Vec<String> = normalized.split_whitespace().map(str::to_string).collect();
        if words.is_empty() {
            return None;
        }
        Some(Self {
            raw_term: raw_term.to_string(),
            normalized_term: words.join(" "),
            words,
        })
    }

    pub fn is_multi_word(&self) -> bool {
        self.words.len() > 1
    }

    /// Every word occurs as a literal substring of `normalized_text`.
    pub fn all_words_in(&self, normalized_text: &str) -> bool {
        self.words.iter().all(|w| normalized_text.contains(w.as_str()))
    }

    /// The full normalized phrase occurs verbatim.
    pub fn phrase_in(&self, normalized_text: &str) -> bool {
        normalized_text.contains(self.normalized_term.as_str())
    }
}
