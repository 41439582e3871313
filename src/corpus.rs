// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Corpus access: from storage partitions to flat verse records.
//!
//! Storage holds whole documents in whatever shape the loader wrote them.
//! Over the corpus's lifetime that has been several shapes, so every
//! document is classified into a [`VerseShape`] first, then flattened. The
//! matcher only ever sees [`VerseRecord`]s.
//!
//! # Shapes, in precedence order
//!
//! ```text
//! Flat         {"verseindex": "dn1:1.1", "verse": "..."}      (or an array of these)
//! Threaded     {"threads": <AuthorKeyed | VerseMap>}
//! AuthorKeyed  {"sujato": {"dn1:1.1": {"verse": "..."}}}
//! VerseMap     {"dn1:1.1": {"verse": "..."}, "title": "dn1:0.2"}
//! ```
//!
//! The first shape that fits wins. Entries whose verse is missing, empty, or
//! not a string are skipped, as are non-object members such as a root
//! document's `title` field.

use serde_json::{Map, Value};
use tracing::debug;

use crate::error::StoreError;
use crate::store::CorpusStore;
use crate::types::{Category, LanguageScope, PartitionName, VerseRecord, ROOT_LANGUAGES};

/// Key holding the verse text in every shape.
const VERSE_FIELD: &str = "verse";
/// Key holding the verse index in the flat shape.
const FLAT_INDEX_FIELD: &str = "verseindex";
/// Wrapper key of the threaded shape.
const THREADS_FIELD: &str = "threads";
/// Root document field naming the verse that holds the document title.
pub const TITLE_INDEX_FIELD: &str = "title";

/// How a stored document lays out its verses.
#[derive(Debug, Clone, Copy)]
pub enum VerseShape<'a> {
    /// Legacy one-verse-per-entry records.
    Flat(&'a [Value]),
    /// Translator name → verse map.
    AuthorKeyed(&'a Map<String, Value>),
    /// Verse index → verse object.
    VerseMap(&'a Map<String, Value>),
}

impl<'a> VerseShape<'a> {
    /// Classify a document. `None` if no known shape fits.
    pub fn resolve(value: &'a Value) -> Option<Self> {
        match value {
            Value::Array(items) if !items.is_empty() && items.iter().all(is_flat_entry) => {
                Some(VerseShape::Flat(items))
            }
            Value::Object(_) if is_flat_entry(value) => {
                Some(VerseShape::Flat(std::slice::from_ref(value)))
            }
            Value::Object(map) => {
                if let Some(threads @ Value::Object(_)) = map.get(THREADS_FIELD) {
                    return Self::resolve_nested(threads);
                }
                Self::resolve_nested(value)
            }
            _ => None,
        }
    }

    fn resolve_nested(value: &'a Value) -> Option<Self> {
        let map = value.as_object()?;
        if map.values().any(is_verse_map) {
            Some(VerseShape::AuthorKeyed(map))
        } else if is_verse_map(value) {
            Some(VerseShape::VerseMap(map))
        } else {
            None
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            VerseShape::Flat(_) => "flat",
            VerseShape::AuthorKeyed(_) => "author-keyed",
            VerseShape::VerseMap(_) => "verse-map",
        }
    }
}

fn is_flat_entry(value: &Value) -> bool {
    value
        .as_object()
        .is_some_and(|o| o.contains_key(FLAT_INDEX_FIELD) && o.contains_key(VERSE_FIELD))
}

/// An object with at least one `{verse: ...}` member.
fn is_verse_map(value: &Value) -> bool {
    value.as_object().is_some_and(|map| {
        map.values()
            .any(|v| v.as_object().is_some_and(|o| o.contains_key(VERSE_FIELD)))
    })
}

/// Verse text if present, textual, and non-blank.
fn verse_text(entry: &Value) -> Option<&str> {
    entry
        .get(VERSE_FIELD)
        .and_then(Value::as_str)
        .filter(|text| !text.trim().is_empty())
}

/// Flatten one stored document into verse records.
pub fn flatten_document(partition: &str, source_key: &str, value: &Value) -> Vec<VerseRecord> {
    let Some(shape) = VerseShape::resolve(value) else {
        debug!(partition, source_key, "skipping document with unrecognized shape");
        return Vec::new();
    };

    match shape {
        VerseShape::Flat(entries) => entries
            .iter()
            .filter_map(|entry| {
                let text = verse_text(entry)?;
                let index = match entry.get(FLAT_INDEX_FIELD)? {
                    Value::String(s) => s.clone(),
                    Value::Number(n) => n.to_string(),
                    _ => return None,
                };
                let mut record = VerseRecord::new(partition, source_key, index, text);
                if let Some(author) = entry.get("author").and_then(Value::as_str) {
                    record = record.with_author(author);
                }
                if let Some(title) = entry.get("title").and_then(Value::as_str) {
                    record = record.with_title(title);
                }
                Some(record)
            })
            .collect(),
        VerseShape::AuthorKeyed(authors) => authors
            .iter()
            .filter_map(|(author, verses)| Some((author, verses.as_object()?)))
            .flat_map(|(author, verses)| {
                verses.iter().filter_map(move |(index, entry)| {
                    let text = verse_text(entry)?;
                    Some(VerseRecord::new(partition, source_key, index, text).with_author(author))
                })
            })
            .collect(),
        VerseShape::VerseMap(verses) => verses
            .iter()
            .filter_map(|(index, entry)| {
                let text = verse_text(entry)?;
                Some(VerseRecord::new(partition, source_key, index, text))
            })
            .collect(),
    }
}

/// The verse index a root document names as its title verse.
pub fn title_index(root_document: &Value) -> Option<String> {
    let doc = match root_document.get(THREADS_FIELD) {
        Some(threads) if root_document.get(TITLE_INDEX_FIELD).is_none() => threads,
        _ => root_document,
    };
    match doc.get(TITLE_INDEX_FIELD)? {
        Value::String(s) if !s.is_empty() => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        _ => None,
    }
}

/// Lazy verse records over one partition scan.
///
/// Documents are flattened one at a time as the iterator advances. Finite
/// and single-use: call [`iterate_records`] again to rescan.
pub struct RecordIter {
    partition: String,
    documents: std::vec::IntoIter<(String, Value)>,
    pending: std::vec::IntoIter<VerseRecord>,
}

impl RecordIter {
    pub fn new(partition: impl Into<String>, documents: Vec<(String, Value)>) -> Self {
        Self {
            partition: partition.into(),
            documents: documents.into_iter(),
            pending: Vec::new().into_iter(),
        }
    }

    pub fn partition_name(&self) -> &str {
        &self.partition
    }
}

impl Iterator for RecordIter {
    type Item = VerseRecord;

    fn next(&mut self) -> Option<VerseRecord> {
        loop {
            if let Some(record) = self.pending.next() {
                return Some(record);
            }
            let (key, value) = self.documents.next()?;
            self.pending = flatten_document(&self.partition, &key, &value).into_iter();
        }
    }
}

/// Scan a partition and flatten it lazily.
pub async fn iterate_records(
    store: &dyn CorpusStore,
    partition: &str,
) -> Result<RecordIter, StoreError> {
    let documents = store.scan(partition).await?;
    Ok(RecordIter::new(partition, documents))
}

/// Partitions in storage that belong to `scope`, in display order.
///
/// Names that don't follow the naming scheme are ignored.
pub async fn list_partitions(
    store: &dyn CorpusStore,
    scope: &LanguageScope,
) -> Result<Vec<String>, StoreError> {
    let mut matching: Vec<(Category, String)> = store
        .partitions()
        .await?
        .into_iter()
        .filter_map(|name| {
            let parsed = PartitionName::parse(&name)?;
            scope.contains(&parsed).then(|| (parsed.category(), name))
        })
        .collect();
    matching.sort();
    Ok(matching.into_iter().map(|(_, name)| name).collect())
}

/// Every partition name the loader is expected to create for `lang`.
///
/// Root languages get `lang_category`; translation languages get one
/// `root_lang_category` per root language. Only the primary root language
/// carries the Abhidhamma.
pub fn expected_partitions(lang: &str) -> Vec<String> {
    let scope = &LanguageScope::for_language(lang);
    let roots: Vec<&str> = match scope {
        LanguageScope::Root(root) => vec![root.as_str()],
        LanguageScope::Translation(_) => ROOT_LANGUAGES.to_vec(),
    };

    roots
        .into_iter()
        .flat_map(|root| {
            Category::ALL
                .into_iter()
                .filter(move |category| category.available_for(root))
                .map(move |category| match scope {
                    LanguageScope::Root(_) => PartitionName::root(root, category),
                    LanguageScope::Translation(lang) => {
                        PartitionName::translation(root, lang, category)
                    }
                })
        })
        .map(|name| name.to_string())
        .collect()
}
