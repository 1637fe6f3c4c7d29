// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! From one clause term to the vocabulary terms it stands for.
//!
//! Two stages:
//!
//! 1. **Pipeline**: `walking` → `walk`. Wildcard terms skip the normal pipeline
//!    (stemming `walk*` as a word is nonsense) but still get the parts around
//!    the `*` stemmed, so `walking*` finds the stemmed `walk` entries.
//! 2. **Vocabulary**: `walk*` and `walk~1` are matched against the vocabulary
//!    automaton; a plain term is looked up as is.

use crate::contracts;
use crate::error::ConstraintViolation;
use crate::pipeline::Pipeline;
use crate::query::Clause;
use crate::token_set::{Automaton, TokenSet, WILDCARD};

/// Pipeline stage for one clause.
pub fn clause_terms(pipeline: &Pipeline, clause: &Clause) -> Vec<String> {
    if clause.use_pipeline {
        pipeline.run(&clause.term)
    } else if !pipeline.is_empty() {
        stem_wildcard_term(pipeline, &clause.term)
    } else {
        vec![clause.term.clone()]
    }
}

/// Run the pipeline over the non-wildcard parts of `term`, then put the `*`
/// back where it was.
///
/// ```text
/// *alking   → *alk
/// commande* → command*
/// walk*ing  → walk*ing    (each side stemmed on its own)
/// ```
///
/// When a part stems to nothing the unstemmed part is kept.
pub fn stem_wildcard_term(pipeline: &Pipeline, term: &str) -> Vec<String> {
    let Some(star) = term.find(WILDCARD) else {
        let stemmed = pipeline.run(term);
        return if stemmed.is_empty() {
            vec![term.to_string()]
        } else {
            stemmed
        };
    };

    let (prefix, rest) = term.split_at(star);
    let suffix = &rest[WILDCARD.len_utf8()..];

    if prefix.is_empty() {
        let stemmed = pipeline.run(suffix);
        if stemmed.is_empty() {
            return vec![term.to_string()];
        }
        stemmed.into_iter().map(|s| format!("{WILDCARD}{s}")).collect()
    } else if suffix.is_empty() {
        let stemmed = pipeline.run(prefix);
        if stemmed.is_empty() {
            return vec![term.to_string()];
        }
        stemmed.into_iter().map(|s| format!("{s}{WILDCARD}")).collect()
    } else {
        let first_or = |part: &str| {
            pipeline
                .run(part)
                .into_iter()
                .next()
                .unwrap_or_else(|| part.to_string())
        };
        vec![format!("{}{WILDCARD}{}", first_or(prefix), first_or(suffix))]
    }
}

/// Vocabulary stage: wildcard first, then fuzzy, otherwise the term itself.
///
/// Matches come back sorted so repeated runs see them in the same order.
pub fn expand_term(
    vocabulary: &Automaton,
    term: &str,
    edit_distance: Option<usize>,
) -> Result<Vec<String>, ConstraintViolation> {
    let probe = if term.contains(WILDCARD) {
        TokenSet::from_string(term)?
    } else if let Some(distance) = edit_distance {
        TokenSet::from_fuzzy_string(term, distance)
    } else {
        return Ok(vec![term.to_string()]);
    };

    let mut matches = vocabulary.intersect(&probe).to_array();
    matches.sort_unstable();
    contracts::check_words_sorted(&matches);
    Ok(matches)
}
