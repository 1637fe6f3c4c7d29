// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Fuzzy matching: typo tolerance via edit distance.
//!
//! The query path never calls these directly. Fuzzy terms are expanded by
//! walking the vocabulary automaton with an edit budget (see
//! [`token_set`](crate::token_set)). The functions here are the plain,
//! one-pair-at-a-time definition of "within N edits" that the automaton walk
//! has to agree with, and the tests hold it to that.

mod levenshtein;

pub use levenshtein::*;
