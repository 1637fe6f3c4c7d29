// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::EnvFilter;

use lunrex::query::lexer::lex;
use lunrex::query::LexemeKind;
use lunrex::{Error, Index, ParseError, Query, SearchOptions, SearchResult};

mod cli;
use cli::display::{
    lexeme_badge, pad_right, presence_label, row, score_value, section_bot, section_mid,
    section_top, themed, BOLD, CYAN, DIM, GRAY, RED,
};
use cli::{Cli, Commands};

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match cli.command {
        Commands::Search {
            index,
            query,
            limit,
            json,
        } => run_search(&index, &query, limit, json),
        Commands::Inspect { index } => run_inspect(&index),
        Commands::Stem { words } => {
            run_stem(&words);
            Ok(())
        }
        Commands::Lex { query } => {
            run_lex(&query);
            Ok(())
        }
    }
}

/// `LUNREX_LOG` wins; otherwise `--verbose` picks info over warn.
fn init_logging(verbose: bool) {
    let filter = EnvFilter::try_from_env("LUNREX_LOG").unwrap_or_else(|_| {
        if verbose {
            EnvFilter::new("info")
        } else {
            EnvFilter::new("warn")
        }
    });
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

fn load_index(path: &Path) -> Result<Index> {
    let json = fs::read_to_string(path)
        .with_context(|| format!("Failed to read index {}", path.display()))?;
    Index::from_json(&json).with_context(|| format!("Failed to load index {}", path.display()))
}

fn run_search(path: &Path, query: &str, limit: usize, json: bool) -> Result<()> {
    let index = load_index(path)?;

    let results = match index.search(query) {
        Ok(results) => results,
        Err(Error::Parse(err)) => {
            eprintln!("{}", render_parse_error(query, &err));
            return Err(Error::Parse(err).into());
        }
        Err(err) => return Err(err.into()),
    };
    let total = results.len();
    let results = SearchOptions::with_limit(limit).apply(results);

    if json {
        println!("{}", serde_json::to_string_pretty(&results)?);
        return Ok(());
    }

    print_results(query, &results, total);
    Ok(())
}

/// The query with a caret run under the offending lexeme.
fn render_parse_error(query: &str, err: &ParseError) -> String {
    let width = err.end.saturating_sub(err.start).max(1);
    format!(
        "{} {}\n  {}\n  {}{}",
        themed(RED, &[BOLD], "error:"),
        err.message,
        query,
        " ".repeat(err.start),
        themed(RED, &[], &"^".repeat(width))
    )
}

fn print_results(query: &str, results: &[SearchResult], total: usize) {
    section_top(&format!("SEARCH \"{}\"", query));

    if results.is_empty() {
        row(&themed(GRAY, &[DIM], "  no matches"));
        section_bot();
        return;
    }

    for (rank, result) in results.iter().enumerate() {
        let terms: Vec<String> = result
            .match_data
            .metadata
            .iter()
            .map(|(term, fields)| {
                let fields: Vec<&str> = fields.keys().map(String::as_str).collect();
                format!("{}:{}", term, fields.join(","))
            })
            .collect();

        row(&format!(
            " {:>3}. {} {} {}",
            rank + 1,
            score_value(result.score),
            pad_right(&themed(CYAN, &[BOLD], &result.doc_ref), 16),
            themed(GRAY, &[], &terms.join(" "))
        ));
    }

    section_mid("SUMMARY");
    row(&format!(" showing {} of {} results", results.len(), total));
    section_bot();
}

fn run_inspect(path: &Path) -> Result<()> {
    let index = load_index(path)?;

    section_top("INDEX");
    row(&format!(" file       {}", path.display()));
    row(&format!(" version    {}", index.version().unwrap_or("(none)")));
    row(&format!(" fields     {}", index.fields().join(", ")));
    let pipeline = index.pipeline().names();
    row(&format!(
        " pipeline   {}",
        if pipeline.is_empty() {
            "(empty)".to_string()
        } else {
            pipeline.join(" → ")
        }
    ));

    section_mid("VOCABULARY");
    row(&format!(" terms          {}", index.term_count()));
    row(&format!(" field vectors  {}", index.vector_count()));
    row(&format!(
        " automaton      {} nodes",
        index.vocabulary().node_count()
    ));

    let mut terms = index.vocabulary().to_array();
    terms.sort_unstable();
    if !terms.is_empty() {
        let sample: Vec<&str> = terms.iter().take(8).map(String::as_str).collect();
        let more = if terms.len() > sample.len() { " …" } else { "" };
        row(&format!(
            " sample         {}{}",
            themed(GRAY, &[], &sample.join(" ")),
            more
        ));
    }
    section_bot();
    Ok(())
}

fn run_stem(words: &[String]) {
    for word in words {
        let stemmed = lunrex::pipeline::stem(&word.to_lowercase());
        println!("{} → {}", word, themed(CYAN, &[BOLD], &stemmed));
    }
}

fn run_lex(query: &str) {
    section_top(&format!("LEX \"{}\"", query));
    for lexeme in lex(query) {
        row(&format!(
            " {} {} {}",
            pad_right(&lexeme_badge(lexeme.kind), 16),
            pad_right(&format!("{:?}", lexeme.text), 24),
            themed(GRAY, &[DIM], &format!("{}..{}", lexeme.start, lexeme.end))
        ));
    }

    // Field names aren't known without an index, so any name is accepted.
    let fields = lex(query)
        .into_iter()
        .filter(|l| l.kind == LexemeKind::Field)
        .map(|l| l.text)
        .collect::<Vec<_>>();
    match Query::parse(query, &fields) {
        Ok(parsed) => {
            section_mid("CLAUSES");
            for clause in parsed.clauses() {
                let mut modifiers = Vec::new();
                if let Some(distance) = clause.edit_distance {
                    modifiers.push(format!("~{distance}"));
                }
                if clause.boost != 1.0 {
                    modifiers.push(format!("^{}", clause.boost));
                }
                row(&format!(
                    " {} {} {} {}",
                    pad_right(&presence_label(clause.presence), 11),
                    pad_right(&themed(CYAN, &[BOLD], &clause.term), 16),
                    themed(GRAY, &[], &clause.fields.join(",")),
                    modifiers.join(" ")
                ));
            }
        }
        Err(err) => {
            section_mid("ERROR");
            row(&format!(" {} at {}..{}", err.message, err.start, err.end));
        }
    }
    section_bot();
}
