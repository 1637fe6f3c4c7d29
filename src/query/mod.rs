// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Structured queries: what a query string turns into.
//!
//! A [`Query`] is an ordered list of [`Clause`]s, one per term. Clauses come
//! either from the query-string parser or straight from code:
//!
//! ```ignore
//! let mut query = Query::new(index.fields().to_vec());
//! query
//!     .term("green", ClauseBuilder::new().boost(10.0))
//!     .term("plant", ClauseBuilder::new().presence(Presence::Required));
//! ```
//!
//! Defaults are filled in once, when a clause is added, so everything
//! downstream sees a complete [`Clause`].

pub mod lexer;
pub mod parser;

use std::ops::BitOr;

pub use lexer::{Lexeme, LexemeKind, QueryLexer};
pub use parser::QueryParser;

use crate::error::ParseError;

/// Whether a clause has to match for a document to be returned.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Presence {
    /// Contributes to score if it matches; not needed.
    #[default]
    Optional,
    /// `+term`: documents must match in the clause's fields.
    Required,
    /// `-term`: documents matching in the clause's fields are excluded.
    Prohibited,
}

/// Where to glue `*` onto a clause term. Flags combine with `|`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Wildcard(u8);

impl Wildcard {
    pub const NONE: Wildcard = Wildcard(0);
    pub const LEADING: Wildcard = Wildcard(1);
    pub const TRAILING: Wildcard = Wildcard(2);

    pub fn contains(self, flag: Wildcard) -> bool {
        self.0 & flag.0 == flag.0 && flag.0 != 0
    }
}

impl BitOr for Wildcard {
    type Output = Wildcard;

    fn bitor(self, rhs: Wildcard) -> Wildcard {
        Wildcard(self.0 | rhs.0)
    }
}

/// One fully-defaulted query term.
#[derive(Debug, Clone, PartialEq)]
pub struct Clause {
    pub term: String,
    /// Fields to search. Never empty once added to a query with fields.
    pub fields: Vec<String>,
    pub boost: f64,
    pub presence: Presence,
    /// Run the term through the index pipeline before lookup.
    pub use_pipeline: bool,
    pub wildcard: Wildcard,
    pub edit_distance: Option<usize>,
}

impl Clause {
    /// A clause with every default and no fields.
    pub fn for_term(term: impl Into<String>) -> Self {
        Self {
            term: term.into(),
            fields: Vec::new(),
            boost: 1.0,
            presence: Presence::Optional,
            use_pipeline: true,
            wildcard: Wildcard::NONE,
            edit_distance: None,
        }
    }
}

/// Clause options, each unset until given. [`Query::clause`] fills the gaps.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ClauseBuilder {
    pub term: Option<String>,
    pub fields: Option<Vec<String>>,
    pub boost: Option<f64>,
    pub presence: Option<Presence>,
    pub use_pipeline: Option<bool>,
    pub wildcard: Option<Wildcard>,
    pub edit_distance: Option<usize>,
}

impl ClauseBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn term(mut self, term: impl Into<String>) -> Self {
        self.term = Some(term.into());
        self
    }

    pub fn fields<I, S>(mut self, fields: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.fields = Some(fields.into_iter().map(Into::into).collect());
        self
    }

    pub fn boost(mut self, boost: f64) -> Self {
        self.boost = Some(boost);
        self
    }

    pub fn presence(mut self, presence: Presence) -> Self {
        self.presence = Some(presence);
        self
    }

    pub fn use_pipeline(mut self, use_pipeline: bool) -> Self {
        self.use_pipeline = Some(use_pipeline);
        self
    }

    pub fn wildcard(mut self, wildcard: Wildcard) -> Self {
        self.wildcard = Some(wildcard);
        self
    }

    pub fn edit_distance(mut self, edit_distance: usize) -> Self {
        self.edit_distance = Some(edit_distance);
        self
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Query {
    clauses: Vec<Clause>,
    all_fields: Vec<String>,
}

impl Query {
    pub fn new(all_fields: Vec<String>) -> Self {
        Self {
            clauses: Vec::new(),
            all_fields,
        }
    }

    /// Parse a query string against a field list.
    pub fn parse(query_string: &str, all_fields: &[String]) -> Result<Self, ParseError> {
        QueryParser::new(query_string, Query::new(all_fields.to_vec())).parse()
    }

    pub fn clauses(&self) -> &[Clause] {
        &self.clauses
    }

    pub fn all_fields(&self) -> &[String] {
        &self.all_fields
    }

    pub fn is_empty(&self) -> bool {
        self.clauses.is_empty()
    }

    /// Apply defaults and append.
    ///
    /// Wildcard flags add a `*` only where one isn't already. A flag on a
    /// term with an interior `*` is not rejected here; the term then holds
    /// two wildcards and fails when it is expanded.
    pub fn clause(&mut self, options: ClauseBuilder) -> &mut Self {
        let wildcard = options.wildcard.unwrap_or_default();
        let mut term = options.term.unwrap_or_default();

        if wildcard.contains(Wildcard::LEADING) && !term.starts_with('*') {
            term.insert(0, '*');
        }
        if wildcard.contains(Wildcard::TRAILING) && !term.ends_with('*') {
            term.push('*');
        }

        self.clauses.push(Clause {
            term,
            fields: options.fields.unwrap_or_else(|| self.all_fields.clone()),
            boost: options.boost.unwrap_or(1.0),
            presence: options.presence.unwrap_or_default(),
            use_pipeline: options.use_pipeline.unwrap_or(true),
            wildcard,
            edit_distance: options.edit_distance,
        });
        self
    }

    /// Add one clause for `term`.
    pub fn term(&mut self, term: impl Into<String>, options: ClauseBuilder) -> &mut Self {
        self.clause(options.term(term))
    }

    /// Add one clause per term, each with its own copy of `options`.
    pub fn terms<I, S>(&mut self, terms: I, options: ClauseBuilder) -> &mut Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        for term in terms {
            self.term(term, options.clone());
        }
        self
    }

    /// Every clause prohibits. Such a query can only exclude.
    pub fn is_negated(&self) -> bool {
        !self.clauses.is_empty()
            && self
                .clauses
                .iter()
                .all(|clause| clause.presence == Presence::Prohibited)
    }
}
