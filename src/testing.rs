// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Test utilities shared across unit and integration tests.
//!
//! This module is always compiled but hidden from documentation.
//! It provides canonical fixtures so every test searches the same indexes.

#![doc(hidden)]

use serde_json::{json, Map, Value};

use crate::index::Index;

/// Two documents, two fields, no pipeline.
///
/// | key      | vector               |
/// |----------|----------------------|
/// | title/a  | `{0: 0.5, 1: 0.3}`   |
/// | body/a   | `{0: 0.8}`           |
/// | title/b  | `{1: 0.6}`           |
/// | body/b   | `{0: 0.4, 2: 0.5}`   |
///
/// Terms: `green` (0) in title/a, body/a, body/b; `plant` (1) in title/a,
/// title/b; `study` (2) in body/b.
pub fn sample_index_json() -> Value {
    json!({
        "version": "2.3.9",
        "fields": ["title", "body"],
        "fieldVectors": [
            ["title/a", [0, 0.5, 1, 0.3]],
            ["body/a", [0, 0.8]],
            ["title/b", [1, 0.6]],
            ["body/b", [0, 0.4, 2, 0.5]]
        ],
        "invertedIndex": [
            ["green", {
                "_index": 0,
                "title": { "a": { "position": [[1, 5]] } },
                "body": { "a": {}, "b": {} }
            }],
            ["plant", {
                "_index": 1,
                "title": { "a": {}, "b": {} }
            }],
            ["study", {
                "_index": 2,
                "body": { "b": {} }
            }]
        ],
        "pipeline": []
    })
}

/// Loaded form of [`sample_index_json`].
pub fn sample_index() -> Index {
    Index::from_value(sample_index_json()).expect("sample index loads")
}

/// Stemmed vocabulary with the `stemmer` pipeline.
///
/// Terms: `command` (0) in title/a, body/a; `walk` (1) in body/a, title/b.
pub fn stemmed_index_json() -> Value {
    json!({
        "version": "2.3.9",
        "fields": ["title", "body"],
        "fieldVectors": [
            ["title/a", [0, 0.5]],
            ["body/a", [0, 0.8, 1, 0.4]],
            ["title/b", [1, 0.6]]
        ],
        "invertedIndex": [
            ["command", {
                "_index": 0,
                "title": { "a": {} },
                "body": { "a": {} }
            }],
            ["walk", {
                "_index": 1,
                "title": { "b": {} },
                "body": { "a": {} }
            }]
        ],
        "pipeline": ["stemmer"]
    })
}

/// Loaded form of [`stemmed_index_json`].
pub fn stemmed_index() -> Index {
    Index::from_value(stemmed_index_json()).expect("stemmed index loads")
}

/// One-field index where searching `match` scores each document exactly
/// its weight.
///
/// Every `body/<ref>` vector is `{0: w, 1: sqrt(1 - w²)}`, so it stays unit
/// length as Lunr's builder would leave it. Weights must lie in `(0, 1]`.
/// Term `other` (1) fills the rest of each vector.
pub fn weighted_index(entries: &[(&str, f64)]) -> Index {
    let mut vectors = Vec::new();
    let mut matches = Map::new();
    let mut others = Map::new();
    for &(doc_ref, weight) in entries {
        let rest = (1.0 - weight * weight).max(0.0).sqrt();
        vectors.push(json!([format!("body/{doc_ref}"), [0, weight, 1, rest]]));
        matches.insert(doc_ref.to_string(), json!({}));
        others.insert(doc_ref.to_string(), json!({}));
    }

    Index::from_value(json!({
        "fields": ["body"],
        "fieldVectors": vectors,
        "invertedIndex": [
            ["match", { "_index": 0, "body": matches }],
            ["other", { "_index": 1, "body": others }]
        ],
        "pipeline": []
    }))
    .expect("weighted index loads")
}
