// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! On-disk (well, on-wire) index format.
//!
//! This is the JSON that Lunr's `index.toJSON()` produces. Lists of pairs
//! rather than objects, so key order survives:
//!
//! ```json
//! {
//!   "version": "2.3.9",
//!   "fields": ["title", "body"],
//!   "fieldVectors": [["title/a", [0, 0.5, 1, 0.3]]],
//!   "invertedIndex": [
//!     ["green", { "_index": 0, "title": { "a": { "position": [[0, 5]] } } }]
//!   ],
//!   "pipeline": ["stemmer"]
//! }
//! ```
//!
//! Every top-level key is optional and defaults to empty.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::match_data::Metadata;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SerializedIndex {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub version: Option<String>,
    #[serde(default)]
    pub fields: Vec<String>,
    /// `(field/docRef, [index, value, ...])`
    #[serde(default)]
    pub field_vectors: Vec<(String, Vec<f64>)>,
    #[serde(default)]
    pub inverted_index: Vec<(String, Posting)>,
    #[serde(default)]
    pub pipeline: Vec<String>,
}

/// One term's inverted-index entry.
///
/// `_index` is the term's position in the global ordering. Every other key
/// is a field name mapping doc refs to that occurrence's metadata.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Posting {
    #[serde(rename = "_index")]
    pub term_index: usize,
    #[serde(flatten)]
    pub fields: BTreeMap<String, BTreeMap<String, Metadata>>,
}

impl Posting {
    /// Documents containing the term in `field`, with their metadata.
    pub fn field(&self, field: &str) -> Option<&BTreeMap<String, Metadata>> {
        self.fields.get(field)
    }
}
