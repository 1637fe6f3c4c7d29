// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! What a search hands back.
//!
//! Serialized with Lunr's key names so a JS host can consume results as is:
//!
//! ```json
//! { "ref": "a", "score": 1.3, "matchData": { "metadata": { "green": { "title": {} } } } }
//! ```

use serde::{Deserialize, Serialize};

use crate::match_data::MatchData;

/// One ranked document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SearchResult {
    /// The document's ref, as given when the index was built.
    #[serde(rename = "ref")]
    pub doc_ref: String,
    /// Sum of per-field cosine similarities.
    pub score: f64,
    /// Which terms matched in which fields.
    #[serde(rename = "matchData")]
    pub match_data: MatchData,
}
