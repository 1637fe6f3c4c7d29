// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Token pipelines: the chain of transforms a query term goes through before
//! it is looked up.
//!
//! The index records the function names its own pipeline used (typically
//! `["stemmer"]`, sometimes with `stopWordFilter` and `trimmer` in front) and
//! the query side replays them, so query terms land on the same vocabulary
//! the index was built with.
//!
//! ```text
//! "Running" ─stemmer─▶ ["run"]
//! "the"     ─stopWordFilter─▶ []          (dropped)
//! ```

mod registry;
pub mod stemmer;
pub mod stop_words;
pub mod trimmer;

pub use registry::{Registry, TokenFn, STEMMER, STOP_WORD_FILTER, TRIMMER};
pub use stemmer::stem;

use tracing::debug;

#[derive(Clone, Default)]
pub struct Pipeline {
    functions: Vec<(String, TokenFn)>,
}

impl std::fmt::Debug for Pipeline {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_list().entries(self.names()).finish()
    }
}

impl Pipeline {
    pub fn new() -> Self {
        Self::default()
    }

    /// Rebuild a pipeline from serialized function names.
    ///
    /// Names the registry doesn't know are skipped.
    pub fn load<S: AsRef<str>>(names: &[S], registry: &Registry) -> Self {
        let mut pipeline = Self::new();
        for name in names {
            let name = name.as_ref();
            match registry.get(name) {
                Some(function) => pipeline.add(name, function),
                None => debug!(function = name, "skipping unregistered pipeline function"),
            }
        }
        pipeline
    }

    pub fn add(&mut self, name: impl Into<String>, function: TokenFn) {
        self.functions.push((name.into(), function));
    }

    /// Feed one token through every stage in order.
    ///
    /// Each stage maps every surviving token to zero or more tokens. Empty
    /// strings are dropped between stages.
    pub fn run(&self, token: &str) -> Vec<String> {
        let mut tokens = vec![token.to_string()];
        for (_, function) in &self.functions {
            tokens = tokens
                .iter()
                .flat_map(|t| function(t))
                .filter(|t| !t.is_empty())
                .collect();
            if tokens.is_empty() {
                break;
            }
        }
        tokens
    }

    /// Function names, in order, for serialization.
    pub fn names(&self) -> Vec<&str> {
        self.functions.iter().map(|(name, _)| name.as_str()).collect()
    }

    pub fn len(&self) -> usize {
        self.functions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.functions.is_empty()
    }
}
