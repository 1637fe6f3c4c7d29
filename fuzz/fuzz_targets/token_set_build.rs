// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Fuzz target for vocabulary automaton construction.
//!
//! Minimization must never lose or invent a word, and a wildcard probe must
//! match the same words as a plain prefix scan.

#![no_main]

use libfuzzer_sys::fuzz_target;
use lunrex::{Automaton, TokenSet};

fuzz_target!(|words: Vec<String>| {
    let mut words: Vec<String> = words
        .into_iter()
        .take(64)
        .map(|w| w.chars().filter(|&c| c != '*').take(16).collect())
        .collect();
    words.sort();
    words.dedup();

    let automaton = Automaton::from_array(words.as_slice()).expect("sorted and unique");

    let mut stored = automaton.to_array();
    stored.sort();
    assert_eq!(stored, words);

    let Some(first) = words.first() else {
        return;
    };
    let Some(lead) = first.chars().next() else {
        return;
    };

    let probe = TokenSet::from_string(&format!("{lead}*")).expect("one wildcard");
    let mut matched = automaton.intersect(&probe).to_array();
    matched.sort();

    let expected: Vec<String> = words
        .iter()
        .filter(|w| w.starts_with(lead))
        .cloned()
        .collect();
    assert_eq!(matched, expected);
});
