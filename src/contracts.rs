// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Runtime contracts for the scoring and ranking invariants.
//!
//! Debug-mode assertions on properties the rest of the crate relies on:
//!
//! 1. Are **zero-cost in release builds** (use `debug_assert!`)
//! 2. Fail **at the mutation that broke things**, not three calls later
//!
//! # Invariants
//!
//! | Contract Function               | Property                                        |
//! |---------------------------------|-------------------------------------------------|
//! | `check_vector_sorted`           | sparse vector indices strictly increase          |
//! | `check_results_ranked`          | results are in non-increasing score order        |
//! | `check_levenshtein_early_exit`  | a length gap beyond `max` never reports a match  |
//! | `check_words_sorted`            | automaton enumeration covers distinct words      |
//!
//! # Usage
//!
//! ```ignore
//! use lunrex::contracts::*;
//!
//! // In debug builds, this panics if the ordering is broken
//! check_results_ranked(&results);
//!
//! // In release builds, this is a no-op
//! ```

use crate::types::SearchResult;

// ============================================================================
// SCORING
// ============================================================================

/// Check that sparse vector elements are strictly increasing by index.
///
/// The merge-join dot product silently returns garbage otherwise.
///
/// # Panics (debug builds only)
///
/// Panics if two neighbouring indices are equal or out of order.
#[inline]
pub fn check_vector_sorted(elements: &[(usize, f64)]) {
    for (position, pair) in elements.windows(2).enumerate() {
        debug_assert!(
            pair[0].0 < pair[1].0,
            "Contract violation: vector indices not strictly increasing at {}: {} then {}",
            position + 1,
            pair[0].0,
            pair[1].0
        );
    }
}

/// Check that results come out best first.
///
/// # Panics (debug builds only)
///
/// Panics if a later result outscores an earlier one.
#[inline]
pub fn check_results_ranked(results: &[SearchResult]) {
    for (i, pair) in results.windows(2).enumerate() {
        debug_assert!(
            pair[0].score >= pair[1].score,
            "Contract violation: results[{}] ('{}', {}) ranked above a higher score ('{}', {})",
            i,
            pair[0].doc_ref,
            pair[0].score,
            pair[1].doc_ref,
            pair[1].score
        );
    }
}

// ============================================================================
// VOCABULARY
// ============================================================================

/// Check the length-gap lower bound on edit distance.
///
/// # Panics (debug builds only)
///
/// Panics if `result` claims a match although the character counts differ
/// by more than `max`.
#[inline]
pub fn check_levenshtein_early_exit(a: &str, b: &str, max: usize, result: bool) {
    if result {
        let len_diff = a.chars().count().abs_diff(b.chars().count());
        debug_assert!(
            len_diff <= max,
            "Contract violation: levenshtein_within('{}', '{}', {}) matched with length gap {}",
            a.chars().take(10).collect::<String>(),
            b.chars().take(10).collect::<String>(),
            max,
            len_diff
        );
    }
}

/// Check that an automaton enumeration is free of duplicates once sorted.
///
/// A DAWG accepts each word along exactly one path, so a repeat means two
/// paths were merged wrongly during minimization.
///
/// # Panics (debug builds only)
///
/// Panics on a repeated word.
#[inline]
pub fn check_words_sorted(words: &[String]) {
    for pair in words.windows(2) {
        debug_assert!(
            pair[0] < pair[1],
            "Contract violation: automaton words not distinct and sorted: '{}' then '{}'",
            pair[0],
            pair[1]
        );
    }
}
