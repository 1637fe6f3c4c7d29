// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! CLI definitions for the lunrex command-line interface.
//!
//! Four subcommands: `search` runs a query against an index JSON file,
//! `inspect` summarizes one, and `stem`/`lex` expose the stemmer and the query
//! lexer for debugging why a query did or didn't match.

pub mod display;

use std::path::PathBuf;

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(
    name = "lunrex",
    about = "Query engine for precomputed Lunr-format search indexes",
    version
)]
pub struct Cli {
    /// Enable verbose logging (overridden by LUNREX_LOG)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Search a serialized index and display ranked results
    Search {
        /// Path to the index JSON (as written by Lunr's toJSON)
        index: PathBuf,

        /// Query string, e.g. "+title:green plant~1"
        query: String,

        /// Maximum number of results to return
        #[arg(short = 'n', long, default_value = "10")]
        limit: usize,

        /// Output results as JSON
        #[arg(long)]
        json: bool,
    },

    /// Summarize a serialized index: fields, vocabulary, pipeline
    Inspect {
        /// Path to the index JSON
        index: PathBuf,
    },

    /// Show what the stemmer makes of each word
    Stem {
        /// Words to stem
        #[arg(required = true)]
        words: Vec<String>,
    },

    /// Show the lexemes of a query string
    Lex {
        /// Query string
        query: String,
    },
}
