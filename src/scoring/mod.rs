// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Scoring and ranking: how matches get their numbers.
//!
//! Lower is better throughout. The one rule that matters: a verse with the
//! full phrase always beats a verse with only scattered words.

mod core;
pub mod ranking;

pub use self::core::*;
