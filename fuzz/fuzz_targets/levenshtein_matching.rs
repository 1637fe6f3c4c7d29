// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Fuzz target for fuzzy term matching.
//!
//! The fuzzy token set for `query` intersected with a one-word vocabulary
//! must match exactly when the restricted Damerau-Levenshtein distance is
//! within budget, and the bounded distance check must agree with both.

#![no_main]

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use lunrex::{damerau_levenshtein, levenshtein_within, Automaton, TokenSet};

#[derive(Debug, Arbitrary)]
struct MatchInput {
    query: String,
    target: String,
    max_distance: u8,
}

fuzz_target!(|input: MatchInput| {
    // Cap lengths; the fuzzy set grows fast with distance
    let query: String = input.query.chars().filter(|&c| c != '*').take(12).collect();
    let target: String = input.target.chars().filter(|&c| c != '*').take(12).collect();
    let max = usize::from(input.max_distance % 3);

    if target.is_empty() {
        return;
    }

    let distance = damerau_levenshtein(&query, &target);
    let within = levenshtein_within(&query, &target, max);
    assert_eq!(within, distance <= max, "{query:?} vs {target:?}");

    let vocabulary = Automaton::from_array(&[target.as_str()]).expect("single word");
    let probe = TokenSet::from_fuzzy_string(&query, max);
    let matched = vocabulary.intersect(&probe).to_array();

    if distance <= max {
        assert_eq!(matched, vec![target.clone()], "{query:?} ~{max} missed {target:?}");
    } else {
        assert!(matched.is_empty(), "{query:?} ~{max} matched {target:?} at {distance}");
    }
});
