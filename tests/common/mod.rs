//! Shared test utilities and fixtures.

#![allow(dead_code)]

use lunrex::{Index, SearchResult};
use serde_json::json;

// Re-export canonical fixtures from lunrex::testing
pub use lunrex::testing::{
    sample_index, sample_index_json, stemmed_index, stemmed_index_json, weighted_index,
};

// ============================================================================
// RESULT HELPERS
// ============================================================================

/// Document refs in ranked order.
pub fn refs(results: &[SearchResult]) -> Vec<&str> {
    results.iter().map(|r| r.doc_ref.as_str()).collect()
}

/// Refs of a search that must parse.
pub fn search_refs(index: &Index, query: &str) -> Vec<String> {
    index
        .search(query)
        .unwrap_or_else(|e| panic!("query {:?} failed: {}", query, e))
        .into_iter()
        .map(|r| r.doc_ref)
        .collect()
}

pub fn score_of(results: &[SearchResult], doc_ref: &str) -> f64 {
    results
        .iter()
        .find(|r| r.doc_ref == doc_ref)
        .map(|r| r.score)
        .unwrap_or_else(|| panic!("{} not in results", doc_ref))
}

pub fn assert_close(actual: f64, expected: f64) {
    assert!(
        (actual - expected).abs() < 1e-9,
        "expected {}, got {}",
        expected,
        actual
    );
}

// ============================================================================
// FIXTURES
// ============================================================================

/// Three short documents, stemmed, with position metadata.
///
/// ```text
/// a  title: "Professional Plumber"   body: "plumbing and pipe fitting"
/// b  title: "Pipe Organ"             body: "playing the organ professionally"
/// c  title: "Fitting Room"           body: "a room for fitting clothes"
/// ```
///
/// Weights are equal within each field vector, so a single-term query scores
/// a field at its weight: 0.9 in any title, 0.6, 0.7 and 0.5 in the bodies of
/// a, b and c.
pub const DOCUMENTS_INDEX: &str = r#"{
  "version": "2.3.9",
  "fields": ["title", "body"],
  "fieldVectors": [
    ["title/a", [0, 0.9, 1, 0.9]],
    ["body/a", [2, 0.6, 3, 0.6, 4, 0.6]],
    ["title/b", [3, 0.9, 5, 0.9]],
    ["body/b", [0, 0.7, 5, 0.7, 6, 0.7]],
    ["title/c", [4, 0.9, 7, 0.9]],
    ["body/c", [4, 0.5, 7, 0.5, 8, 0.5]]
  ],
  "invertedIndex": [
    ["cloth", { "_index": 8, "title": {}, "body": { "c": { "position": [[23, 7]] } } }],
    ["fit", {
      "_index": 4,
      "title": { "c": { "position": [[0, 7]] } },
      "body": { "a": { "position": [[18, 7]] }, "c": { "position": [[15, 7]] } }
    }],
    ["organ", {
      "_index": 5,
      "title": { "b": { "position": [[5, 5]] } },
      "body": { "b": { "position": [[12, 5]] } }
    }],
    ["pipe", {
      "_index": 3,
      "title": { "b": { "position": [[0, 4]] } },
      "body": { "a": { "position": [[13, 4]] } }
    }],
    ["play", { "_index": 6, "title": {}, "body": { "b": { "position": [[0, 7]] } } }],
    ["plumb", { "_index": 2, "title": {}, "body": { "a": { "position": [[0, 8]] } } }],
    ["plumber", { "_index": 1, "title": { "a": { "position": [[13, 7]] } }, "body": {} }],
    ["profession", {
      "_index": 0,
      "title": { "a": { "position": [[0, 12]] } },
      "body": { "b": { "position": [[18, 14]] } }
    }],
    ["room", {
      "_index": 7,
      "title": { "c": { "position": [[8, 4]] } },
      "body": { "c": { "position": [[2, 4]] } }
    }]
  ],
  "pipeline": ["stemmer"]
}"#;

pub fn documents_index() -> Index {
    Index::from_json(DOCUMENTS_INDEX).expect("documents index loads")
}

/// Single-field index whose only document ref contains slashes.
pub fn nested_ref_index() -> Index {
    Index::from_value(json!({
        "fields": ["body"],
        "fieldVectors": [["body/posts/2024/intro", [0, 1.0]]],
        "invertedIndex": [["hello", { "_index": 0, "body": { "posts/2024/intro": {} } }]],
        "pipeline": []
    }))
    .expect("nested ref index loads")
}
