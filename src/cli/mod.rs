// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! CLI definitions for the suttafind command-line interface.
//!
//! Three subcommands over a corpus directory of `<partition>.json` files:
//! `search` to run a query, `partitions` to list what a language would scan,
//! and `inspect` to count partitions and verses.

pub mod display;

use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "suttafind",
    about = "Verse search over a multilingual scripture corpus",
    version
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Search a corpus directory and display ranked verses
    Search {
        /// Directory of <partition>.json files
        corpus: PathBuf,

        /// Search term
        term: String,

        /// Language code: a root language (pli, san, lzh, bo) or a translation (en, de, ...)
        #[arg(short, long, default_value = "pli")]
        lang: String,

        /// Maximum number of results (overrides the config file; 0 = all)
        #[arg(short = 'n', long)]
        limit: Option<usize>,

        /// Characters of context around each highlighted match
        #[arg(short, long)]
        context: Option<usize>,

        /// JSON config file (SearchConfig fields, camelCase)
        #[arg(long)]
        config: Option<PathBuf>,

        /// Print the SearchResponse as JSON instead of a table
        #[arg(long)]
        json: bool,
    },

    /// List the partitions a language searches, in scan order
    Partitions {
        /// Directory of <partition>.json files
        corpus: PathBuf,

        /// Only partitions for this language; all parseable partitions otherwise
        #[arg(short, long)]
        lang: Option<String>,
    },

    /// Show partition and verse counts for a corpus directory
    Inspect {
        /// Directory of <partition>.json files
        corpus: PathBuf,
    },
}
