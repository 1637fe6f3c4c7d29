// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Query engine for precomputed Lunr-format inverted indexes.
//!
//! An index is built elsewhere (Lunr's `index.toJSON()`), shipped as JSON, and
//! loaded here. This crate only reads it: parse a query string, expand terms
//! against the vocabulary, score matching fields, rank documents.
//!
//! # Architecture
//!
//! ```text
//! ┌────────────┐     ┌─────────────┐     ┌─────────────┐
//! │   query    │────▶│   search    │◀────│    index    │
//! │ (lexer,    │     │ (expansion, │     │ (serialized,│
//! │  parser)   │     │  scoring)   │     │  vocabulary)│
//! └────────────┘     └─────────────┘     └─────────────┘
//!                       │       │               │
//!                       ▼       ▼               ▼
//!              ┌───────────┐ ┌─────────┐ ┌────────────┐
//!              │ token_set │ │ scoring │ │  pipeline  │
//!              │ (DAWG,    │ │ (sparse │ │ (stemmer,  │
//!              │  fuzzy)   │ │  vector)│ │  registry) │
//!              └───────────┘ └─────────┘ └────────────┘
//! ```
//!
//! # Query syntax
//!
//! | Syntax          | Meaning                                  |
//! |-----------------|------------------------------------------|
//! | `foo bar`       | either term (optional presence)          |
//! | `+foo -bar`     | must contain `foo`, must not contain `bar` |
//! | `title:foo`     | only look in the `title` field           |
//! | `foo*`, `*foo`  | wildcard over the vocabulary             |
//! | `foo~1`         | within one edit of `foo`                 |
//! | `foo^10`        | boost this clause tenfold                |
//! | `foo\:bar`      | literal `:` inside a term                |
//!
//! # Usage
//!
//! ```ignore
//! use lunrex::Index;
//!
//! let index = Index::from_json(&std::fs::read_to_string("index.json")?)?;
//! for result in index.search("+title:green plant~1")? {
//!     println!("{} {:.3}", result.doc_ref, result.score);
//! }
//! ```

pub mod config;
pub mod contracts;
pub mod error;
pub mod field_ref;
pub mod fuzzy;
pub mod index;
pub mod match_data;
pub mod pipeline;
pub mod query;
pub mod scoring;
pub mod search;
pub mod set;
pub mod testing;
pub mod token_set;
mod types;

#[cfg(feature = "wasm")]
mod wasm;

// Re-exports for public API
pub use config::SearchOptions;
pub use error::{ConstraintViolation, Error, ParseError, Result};
pub use field_ref::FieldRef;
pub use fuzzy::{damerau_levenshtein, levenshtein_within};
pub use index::{Index, Posting, SerializedIndex};
pub use match_data::{MatchData, Metadata};
pub use pipeline::{Pipeline, Registry, TokenFn};
pub use query::{Clause, ClauseBuilder, Presence, Query, Wildcard};
pub use scoring::Vector;
pub use set::DocSet;
pub use token_set::{Automaton, TokenSet};
pub use types::SearchResult;
