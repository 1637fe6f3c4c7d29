// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Optimal string alignment distance, with an early-exit bounded check.
//!
//! Four edits cost one each: insert, delete, substitute, and swap two adjacent
//! characters. The swap makes this OSA rather than plain Levenshtein, so
//! `bar → abr` is one edit, not two. A swapped pair can't be edited again
//! (that's the "restricted" part), which is exactly what a depth-first walk
//! over the vocabulary automaton does too.
//!
//! Distances are counted over `char`s, not bytes.

use crate::contracts;

/// Full OSA distance between two strings.
pub fn damerau_levenshtein(a: &str, b: &str) -> usize {
    let a: Vec<char> = a.chars().collect();
    let b: Vec<char> = b.chars().collect();

    if a.is_empty() {
        return b.len();
    }
    if b.is_empty() {
        return a.len();
    }

    // (a.len()+1) x (b.len()+1); three rows would do but the full matrix
    // keeps the transposition lookup trivial.
    let width = b.len() + 1;
    let mut d = vec![0usize; (a.len() + 1) * width];
    for i in 0..=a.len() {
        d[i * width] = i;
    }
    for j in 0..=b.len() {
        d[j] = j;
    }

    for i in 1..=a.len() {
        for j in 1..=b.len() {
            let cost = usize::from(a[i - 1] != b[j - 1]);
            let mut best = (d[(i - 1) * width + j] + 1)
                .min(d[i * width + j - 1] + 1)
                .min(d[(i - 1) * width + j - 1] + cost);

            if i > 1 && j > 1 && a[i - 1] == b[j - 2] && a[i - 2] == b[j - 1] {
                best = best.min(d[(i - 2) * width + j - 2] + 1);
            }
            d[i * width + j] = best;
        }
    }

    d[a.len() * width + b.len()]
}

/// Are these strings within `max` edits of each other?
///
/// `|len(a) - len(b)|` is a lower bound on the distance, so that check runs
/// before any allocation.
pub fn levenshtein_within(a: &str, b: &str, max: usize) -> bool {
    let a_len = a.chars().count();
    let b_len = b.chars().count();

    if a_len.abs_diff(b_len) > max {
        return false;
    }

    let within = damerau_levenshtein(a, b) <= max;
    contracts::check_levenshtein_early_exit(a, b, max, within);
    within
}
