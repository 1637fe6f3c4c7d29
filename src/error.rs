// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Error types for the query engine.
//!
//! Two kinds of failure:
//!
//! - [`ParseError`]: the user typed something the query language doesn't accept.
//!   Expected, recoverable, reported at the `search` boundary.
//! - [`ConstraintViolation`]: a caller broke an input contract (unsorted
//!   vocabulary, duplicate vector index, two wildcards in one term). Should not
//!   happen with well-formed internal calls.
//!
//! Neither invalidates a loaded [`Index`](crate::Index). The next query runs fine.

use thiserror::Error;

/// A query string that the lexer/parser rejected.
///
/// `start` and `end` are character offsets into the query string of the
/// lexeme that triggered the error. When the parser ran out of input they
/// point at the end of the string.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{message}")]
pub struct ParseError {
    pub message: String,
    pub start: usize,
    pub end: usize,
}

impl ParseError {
    pub fn new(message: impl Into<String>, start: usize, end: usize) -> Self {
        Self {
            message: message.into(),
            start,
            end,
        }
    }
}

/// Programmer or input-contract breaches.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConstraintViolation {
    /// `Vector::insert` on an index that is already present.
    #[error("duplicate index {index}")]
    DuplicateIndex { index: usize },
    /// Automaton builder input was not in ascending order.
    #[error("out of order word insertion: '{word}' after '{previous}'")]
    UnsortedInput { previous: String, word: String },
    /// A term handed to the wildcard constructor had more than one `*`.
    #[error("only one wildcard (*) per term is supported, found {count} in '{term}'")]
    MultipleWildcards { count: usize, term: String },
    /// Flat vector encoding must hold `[index, value]` pairs.
    #[error("vector element list has odd length {len}")]
    OddVectorLength { len: usize },
    /// Vector index that is negative, fractional or not finite.
    #[error("invalid vector index {value}")]
    InvalidVectorIndex { value: f64 },
    /// Vector indices must be strictly increasing.
    #[error("vector indices not strictly increasing at pair {position}")]
    UnsortedVector { position: usize },
}

/// Top-level error for loading and searching.
#[derive(Debug, Error)]
pub enum Error {
    /// A field reference string without the `/` joiner.
    #[error("malformed field ref string '{0}'")]
    MalformedKey(String),
    #[error(transparent)]
    Parse(#[from] ParseError),
    #[error(transparent)]
    Constraint(#[from] ConstraintViolation),
    /// The serialized index could not be decoded.
    #[error("invalid serialized index: {0}")]
    InvalidIndex(#[from] serde_json::Error),
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
