// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Helpers for whoever renders a result list: links, category groups, pages.

use serde::Serialize;
use std::collections::BTreeMap;

use crate::types::{is_root_language, Category, MatchResult};

/// Link to a verse: `/{lang}/{sourceKey}#{verseIndex}`.
///
/// Root languages have no reader of their own, so their results link to
/// `default_lang` instead.
pub fn result_href(result: &MatchResult, lang: &str, default_lang: &str) -> String {
    let link_lang = if is_root_language(lang) {
        default_lang
    } else {
        lang
    };
    format!(
        "/{}/{}#{}",
        link_lang,
        result.source_key().trim_start_matches('/'),
        result.verse_index()
    )
}

/// Results grouped by category, in display order (sutta, vinaya,
/// abhidhamma). Rank order is kept inside each group; empty groups are
/// left out.
pub fn group_by_category(results: &[MatchResult]) -> Vec<(Category, Vec<&MatchResult>)> {
    let mut groups: BTreeMap<Category, Vec<&MatchResult>> = BTreeMap::new();
    for result in results {
        groups.entry(result.category()).or_default().push(result);
    }
    groups.into_iter().collect()
}

/// One page of results.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Page<'a> {
    /// 1-based.
    pub page: usize,
    pub per_page: usize,
    pub total_pages: usize,
    pub total_results: usize,
    pub items: &'a [MatchResult],
}

impl Page<'_> {
    pub fn has_next(&self) -> bool {
        self.page < self.total_pages
    }

    pub fn has_previous(&self) -> bool {
        self.page > 1
    }
}

/// Slice out page `page` (1-based, clamped to the valid range).
///
/// `per_page == 0` puts everything on one page.
pub fn paginate(results: &[MatchResult], page: usize, per_page: usize) -> Page<'_> {
    let total = results.len();
    let per_page = if per_page == 0 { total.max(1) } else { per_page };
    let total_pages = total.div_ceil(per_page).max(1);
    let page = page.clamp(1, total_pages);

    let start = ((page - 1) * per_page).min(total);
    let end = (start + per_page).min(total);
    Page {
        page,
        per_page,
        total_pages,
        total_results: total,
        items: &results[start..end],
    }
}
