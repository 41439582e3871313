// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Generation tickets for discarding stale searches.
//!
//! Searches are never cancelled. A caller that fires a new search while an
//! old one is still running takes a ticket for each; when a search finishes
//! it checks its ticket and drops the results if a newer one was issued.

use std::sync::atomic::{AtomicU64, Ordering};

/// Identifies one search request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SearchTicket(u64);

impl SearchTicket {
    pub fn generation(&self) -> u64 {
        self.0
    }
}

/// Monotonic ticket counter.
#[derive(Debug, Default)]
pub struct Generation {
    latest: AtomicU64,
}

impl Generation {
    pub fn new() -> Self {
        Self::default()
    }

    /// Issue a ticket that supersedes every earlier one.
    pub fn next(&self) -> SearchTicket {
        SearchTicket(self.latest.fetch_add(1, Ordering::AcqRel) + 1)
    }

    /// True if no newer ticket has been issued since `ticket`.
    pub fn is_current(&self, ticket: SearchTicket) -> bool {
        self.latest.load(Ordering::Acquire) == ticket.0
    }
}
