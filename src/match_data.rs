// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Which terms matched which fields, and where.
//!
//! Shape: `term → field → metadata key → values`. With position metadata
//! enabled at index time that looks like:
//!
//! ```text
//! {
//!   "green": {
//!     "title": { "position": [[0, 5]] },
//!     "body":  { "position": [[10, 5], [42, 5]] }
//!   }
//! }
//! ```
//!
//! Values are kept as raw JSON since the index builder decides what goes in
//! them. Combining never aliases the arrays of the source: everything that
//! enters a `MatchData` is copied.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Per-occurrence metadata for one `(term, field, document)` triple.
pub type Metadata = BTreeMap<String, Vec<Value>>;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MatchData {
    pub metadata: BTreeMap<String, BTreeMap<String, Metadata>>,
}

impl MatchData {
    /// Match data for a single term/field pair.
    pub fn new(term: &str, field: &str, metadata: &Metadata) -> Self {
        let mut fields = BTreeMap::new();
        fields.insert(field.to_string(), metadata.clone());

        let mut data = BTreeMap::new();
        data.insert(term.to_string(), fields);
        Self { metadata: data }
    }

    pub fn is_empty(&self) -> bool {
        self.metadata.is_empty()
    }

    /// Merge `other` into `self`, concatenating arrays that share a key.
    pub fn combine(&mut self, other: &MatchData) {
        for (term, fields) in &other.metadata {
            let term_entry = self.metadata.entry(term.clone()).or_default();
            for (field, keys) in fields {
                let field_entry = term_entry.entry(field.clone()).or_default();
                for (key, values) in keys {
                    field_entry
                        .entry(key.clone())
                        .or_default()
                        .extend(values.iter().cloned());
                }
            }
        }
    }

    /// Record metadata for a term/field pair.
    ///
    /// A new pair takes the metadata as is. An existing pair gets per-key
    /// concatenation.
    pub fn add(&mut self, term: &str, field: &str, metadata: Metadata) {
        let fields = self.metadata.entry(term.to_string()).or_default();
        match fields.get_mut(field) {
            None => {
                fields.insert(field.to_string(), metadata);
            }
            Some(existing) => {
                for (key, values) in metadata {
                    existing.entry(key).or_default().extend(values);
                }
            }
        }
    }
}
