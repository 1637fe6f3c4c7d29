// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Term matching against the indexed vocabulary.
//!
//! The vocabulary is held as a minimized automaton (a DAWG: shared suffixes
//! collapse into one node). A query term becomes one of three things:
//!
//! - an exact word: a one-path [`Automaton`], intersected as a real product
//! - a wildcard pattern like `gr*en`: matched by prefix/suffix over the
//!   materialized vocabulary
//! - a fuzzy term like `grean~1`: matched by edit distance over the
//!   materialized vocabulary
//!
//! Whatever the query side was, intersection always hands back a plain
//! automaton of the vocabulary terms that matched.
//!
//! ```text
//! vocabulary: [bat, cat, catch]
//!
//!   (0) ─b─▶ (1) ─a─▶ (2) ─t─▶ ((3)) ─c─▶ (4) ─h─▶ ((5))
//!    └──c──────▲
//! ```

mod automaton;
mod builder;

pub use automaton::{Automaton, Node, NodeId};
pub use builder::Builder;

use crate::error::ConstraintViolation;
use crate::query::Clause;

/// The wildcard character in query terms.
pub const WILDCARD: char = '*';

/// A term with a single `*`, split into the fixed parts either side.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WildcardPattern {
    pattern: String,
    prefix: String,
    suffix: String,
}

impl WildcardPattern {
    fn new(pattern: &str) -> Self {
        let (prefix, suffix) = pattern.split_once(WILDCARD).unwrap_or((pattern, ""));
        Self {
            pattern: pattern.to_string(),
            prefix: prefix.to_string(),
            suffix: suffix.to_string(),
        }
    }

    pub fn pattern(&self) -> &str {
        &self.pattern
    }

    pub fn prefix(&self) -> &str {
        &self.prefix
    }

    pub fn suffix(&self) -> &str {
        &self.suffix
    }

    /// `*` matches zero or more characters, so prefix and suffix may touch
    /// but never overlap.
    pub fn matches(&self, term: &str) -> bool {
        term.len() >= self.prefix.len() + self.suffix.len()
            && term.starts_with(&self.prefix)
            && term.ends_with(&self.suffix)
    }
}

/// A term plus the number of edits it tolerates.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FuzzyTerm {
    pub term: String,
    pub max_distance: usize,
}

impl FuzzyTerm {
    pub fn matches(&self, candidate: &str) -> bool {
        crate::fuzzy::levenshtein_within(candidate, &self.term, self.max_distance)
    }
}

/// One side of a vocabulary intersection.
#[derive(Debug, Clone, PartialEq)]
pub enum TokenSet {
    Automaton(Automaton),
    Wildcard(WildcardPattern),
    Fuzzy(FuzzyTerm),
}

impl TokenSet {
    /// A single word, or a wildcard pattern if it contains `*`.
    ///
    /// At most one `*` is supported.
    pub fn from_string(term: &str) -> Result<Self, ConstraintViolation> {
        match term.matches(WILDCARD).count() {
            0 => Ok(TokenSet::Automaton(Automaton::from_word(term))),
            1 => Ok(TokenSet::Wildcard(WildcardPattern::new(term))),
            count => Err(ConstraintViolation::MultipleWildcards {
                count,
                term: term.to_string(),
            }),
        }
    }

    pub fn from_fuzzy_string(term: &str, max_distance: usize) -> Self {
        TokenSet::Fuzzy(FuzzyTerm {
            term: term.to_string(),
            max_distance,
        })
    }

    /// Minimized automaton from an ascending word list.
    pub fn from_array<S: AsRef<str>>(words: &[S]) -> Result<Self, ConstraintViolation> {
        Automaton::from_array(words).map(TokenSet::Automaton)
    }

    /// Fuzzy when the clause has an edit distance, otherwise per [`from_string`](Self::from_string).
    pub fn from_clause(clause: &Clause) -> Result<Self, ConstraintViolation> {
        match clause.edit_distance {
            Some(distance) => Ok(Self::from_fuzzy_string(&clause.term, distance)),
            None => Self::from_string(&clause.term),
        }
    }

    /// Vocabulary terms accepted by both sides.
    ///
    /// Only an automaton has a vocabulary to enumerate; a pattern receiver
    /// yields the empty automaton.
    pub fn intersect(&self, other: &TokenSet) -> Automaton {
        match self {
            TokenSet::Automaton(automaton) => automaton.intersect(other),
            TokenSet::Wildcard(_) | TokenSet::Fuzzy(_) => Automaton::empty(),
        }
    }

    /// Every accepted word. Patterns have no enumerable words.
    pub fn to_array(&self) -> Vec<String> {
        match self {
            TokenSet::Automaton(automaton) => automaton.to_array(),
            TokenSet::Wildcard(_) | TokenSet::Fuzzy(_) => Vec::new(),
        }
    }
}

impl From<Automaton> for TokenSet {
    fn from(automaton: Automaton) -> Self {
        TokenSet::Automaton(automaton)
    }
}
