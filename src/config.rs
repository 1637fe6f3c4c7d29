// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Host-side search options.
//!
//! `Index::search` itself is unbounded; hosts (the CLI, the WASM binding)
//! cut the ranked list down with these.

use serde::Deserialize;

use crate::types::SearchResult;

/// Default number of results a host shows.
pub const DEFAULT_LIMIT: usize = 10;

/// Options passed in from a host. Missing keys take their defaults.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct SearchOptions {
    /// Maximum number of results.
    pub limit: usize,
}

impl Default for SearchOptions {
    fn default() -> Self {
        Self {
            limit: DEFAULT_LIMIT,
        }
    }
}

impl SearchOptions {
    pub fn with_limit(limit: usize) -> Self {
        Self { limit }
    }

    /// Keep the best `limit` results. Input is assumed ranked.
    pub fn apply(&self, mut results: Vec<SearchResult>) -> Vec<SearchResult> {
        results.truncate(self.limit);
        results
    }
}
