// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Fuzz target for the query lexer and parser.
//!
//! Any string must either parse or fail with an error whose span lies inside
//! the input. Successful parses are run against a small index, which must
//! never panic either.

#![no_main]

use libfuzzer_sys::fuzz_target;
use lunrex::query::lexer::{lex, LexemeKind};
use lunrex::{Error, Index};
use std::sync::OnceLock;

static INDEX: OnceLock<Index> = OnceLock::new();

fuzz_target!(|data: &[u8]| {
    let input = String::from_utf8_lossy(data);
    // Cap length to avoid timeouts on fuzzy expansion
    let input: String = input.chars().take(64).collect();
    let len = input.chars().count();

    let lexemes = lex(&input);
    assert_eq!(lexemes.last().map(|l| l.kind), Some(LexemeKind::Eos));
    for lexeme in &lexemes {
        assert!(lexeme.start <= lexeme.end && lexeme.end <= len);
    }

    let index = INDEX.get_or_init(|| {
        Index::from_value(serde_json::json!({
            "fields": ["title", "body"],
            "fieldVectors": [["title/a", [0, 1.0]], ["body/b", [1, 0.5]]],
            "invertedIndex": [
                ["green", { "_index": 0, "title": { "a": {} } }],
                ["plant", { "_index": 1, "body": { "b": {} } }]
            ],
            "pipeline": ["stemmer"]
        }))
        .expect("fixture index loads")
    });

    match index.search(&input) {
        Ok(results) => {
            for pair in results.windows(2) {
                assert!(pair[0].score >= pair[1].score);
            }
        }
        Err(Error::Parse(err)) => {
            assert!(err.start <= err.end && err.end <= len, "{err:?} outside {len}");
        }
        // Two wildcards in one term
        Err(Error::Constraint(_)) => {}
        Err(other) => panic!("unexpected error: {other}"),
    }
});
