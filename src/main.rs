// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

use std::path::Path;
use std::sync::Arc;

use anyhow::{bail, Context, Result};
use clap::Parser;
use tracing_subscriber::EnvFilter;

use suttafind::{
    expected_partitions, group_by_category, handle_request, iterate_records, list_partitions,
    result_href, CorpusStore, InMemoryStore, LanguageScope, MatchResult, PartitionName,
    SearchConfig, SearchRequest, SearchResponse, Searcher, SessionGuard,
};

mod cli;
use cli::display::{
    category_badge, render_snippet, row, score_value, section_bot, section_mid, section_top,
    themed, wrap, BOLD, BOX_WIDTH, CYAN, DIM, GRAY, YELLOW,
};
use cli::{Cli, Commands};

/// Log filter env var; defaults to `warn`.
const LOG_ENV: &str = "SUTTAFIND_LOG";

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    init_tracing();
    let cli = Cli::parse();

    match cli.command {
        Commands::Search {
            corpus,
            term,
            lang,
            limit,
            context,
            config,
            json,
        } => {
            let mut search_config = match config {
                Some(path) => SearchConfig::from_json_file(&path)?,
                None => SearchConfig::default(),
            };
            if let Some(limit) = limit {
                search_config.max_results = limit;
            }
            if let Some(context) = context {
                search_config.context_length = context;
            }
            search_config.validate()?;
            run_search(&corpus, term, lang, search_config, json).await
        }
        Commands::Partitions { corpus, lang } => run_partitions(&corpus, lang.as_deref()).await,
        Commands::Inspect { corpus } => run_inspect(&corpus).await,
    }
}

fn init_tracing() {
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn load_corpus(dir: &Path) -> Result<InMemoryStore> {
    InMemoryStore::from_json_dir(dir)
        .with_context(|| format!("failed to load corpus from {}", dir.display()))
}

async fn run_search(
    corpus: &Path,
    term: String,
    lang: String,
    config: SearchConfig,
    json: bool,
) -> Result<()> {
    let default_lang = config.default_language.clone();
    let store = load_corpus(corpus)?;
    let searcher = Searcher::new(Arc::new(store)).with_config(config);

    let request = SearchRequest {
        search_term: term,
        lang_code: lang.clone(),
    };
    let response = handle_request(&searcher, request).await;

    if json {
        println!("{}", serde_json::to_string_pretty(&response)?);
        if response.is_error() {
            std::process::exit(1);
        }
        return Ok(());
    }

    match &response {
        SearchResponse::Error { message, .. } => bail!("search failed: {message}"),
        SearchResponse::Empty { search_term } => {
            println!("No verses found for \"{}\" in {}", search_term, lang);
        }
        SearchResponse::Results {
            search_term,
            results,
        } => print_results(search_term, &lang, &default_lang, results),
    }
    Ok(())
}

fn print_results(term: &str, lang: &str, default_lang: &str, results: &[MatchResult]) {
    let heading = format!("\"{}\" in {} ({} verses)", term, lang, results.len());
    let groups = group_by_category(results);

    for (i, (category, group)) in groups.iter().enumerate() {
        let label = format!("{} {}", category.as_str().to_uppercase(), heading);
        if i == 0 {
            section_top(&label);
        } else {
            section_mid(&label);
        }

        for result in group {
            let mut header = format!(
                " {} {} {}",
                score_value(result.score),
                category_badge(*category),
                themed(CYAN, &[BOLD], result.verse_index())
            );
            if let Some(title) = &result.title {
                header.push_str(&format!(" {}", themed(YELLOW, &[], title)));
            }
            row(&header);

            let snippet = render_snippet(result.display_text());
            for line in wrap(&snippet, BOX_WIDTH - 4) {
                row(&format!("    {}", line));
            }
            let href = result_href(result, lang, default_lang);
            row(&format!("    {}", themed(GRAY, &[DIM], &href)));
        }
    }
    section_bot();
}

async fn run_partitions(corpus: &Path, lang: Option<&str>) -> Result<()> {
    let store = load_corpus(corpus)?;
    let session = SessionGuard::open(&store).await?;

    let Some(lang) = lang else {
        let mut parsed: Vec<(PartitionName, String)> = session
            .store()
            .partitions()
            .await?
            .into_iter()
            .filter_map(|name| Some((PartitionName::parse(&name)?, name)))
            .collect();
        parsed.sort_by(|(a, a_name), (b, b_name)| {
            (a.root_lang(), a.category(), a_name).cmp(&(b.root_lang(), b.category(), b_name))
        });
        for (_, name) in parsed {
            println!("{}", name);
        }
        return Ok(());
    };

    let present = list_partitions(session.store(), &LanguageScope::for_language(lang)).await?;
    for name in &present {
        println!("{}", name);
    }
    for name in expected_partitions(lang) {
        if !present.contains(&name) {
            println!("{} {}", name, themed(GRAY, &[DIM], "(missing)"));
        }
    }
    Ok(())
}

async fn run_inspect(corpus: &Path) -> Result<()> {
    let store = load_corpus(corpus)?;
    let session = SessionGuard::open(&store).await?;
    let store = session.store();

    section_top(&format!("CORPUS {}", corpus.display()));
    let mut total_docs = 0;
    let mut total_verses = 0;
    for name in store.partitions().await? {
        let kind = match PartitionName::parse(&name) {
            Some(p) if p.is_translation() => "translation",
            Some(_) => "root",
            None => "unrecognized",
        };
        let docs = store.count(&name).await?;
        let verses = iterate_records(store, &name).await?.count();
        total_docs += docs;
        total_verses += verses;
        row(&format!(
            " {:<24} {:<13} {:>7} docs {:>9} verses",
            name, kind, docs, verses
        ));
    }
    section_mid("TOTAL");
    row(&format!(
        " {:<38} {:>7} docs {:>9} verses",
        "", total_docs, total_verses
    ));
    section_bot();
    Ok(())
}
