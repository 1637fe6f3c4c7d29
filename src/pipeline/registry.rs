// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Name → function table used to rebuild pipelines from serialized names.
//!
//! A registry is built up front and never mutated after it is shared. The
//! process-wide one ([`Registry::global`]) holds the built-in functions. A
//! host with its own functions builds a registry from the defaults and hands
//! it to [`Index::load_with_registry`](crate::Index::load_with_registry).

use std::collections::HashMap;
use std::sync::LazyLock;

use super::{stemmer, stop_words, trimmer};

/// A token transform. Zero outputs drop the token, several fan it out.
pub type TokenFn = fn(&str) -> Vec<String>;

pub const STEMMER: &str = "stemmer";
pub const STOP_WORD_FILTER: &str = "stopWordFilter";
pub const TRIMMER: &str = "trimmer";

static GLOBAL: LazyLock<Registry> = LazyLock::new(Registry::with_defaults);

#[derive(Clone, Default)]
pub struct Registry {
    functions: HashMap<String, TokenFn>,
}

impl std::fmt::Debug for Registry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_set().entries(self.names()).finish()
    }
}

impl Registry {
    /// No functions at all.
    pub fn empty() -> Self {
        Self::default()
    }

    /// `stemmer`, `stopWordFilter` and `trimmer`.
    pub fn with_defaults() -> Self {
        Self::empty()
            .register(STEMMER, stemmer::stemmer)
            .register(STOP_WORD_FILTER, stop_words::stop_word_filter)
            .register(TRIMMER, trimmer::trimmer)
    }

    /// The process-wide registry with the built-in functions.
    pub fn global() -> &'static Registry {
        &GLOBAL
    }

    /// Add or replace a function.
    #[must_use]
    pub fn register(mut self, name: impl Into<String>, function: TokenFn) -> Self {
        self.functions.insert(name.into(), function);
        self
    }

    pub fn get(&self, name: &str) -> Option<TokenFn> {
        self.functions.get(name).copied()
    }

    pub fn contains(&self, name: &str) -> bool {
        self.functions.contains_key(name)
    }

    /// Registered names, sorted.
    pub fn names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.functions.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }
}
