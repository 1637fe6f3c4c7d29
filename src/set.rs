// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Sets of keys with explicit "everything" and "nothing" values.
//!
//! Query execution tracks required and prohibited matches with these.

use std::collections::HashSet;

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum DocSet {
    /// Contains every possible element.
    Complete,
    /// Contains nothing.
    #[default]
    Empty,
    Finite(HashSet<String>),
}

impl DocSet {
    pub fn from_elements<I, S>(elements: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let set: HashSet<String> = elements.into_iter().map(Into::into).collect();
        if set.is_empty() {
            DocSet::Empty
        } else {
            DocSet::Finite(set)
        }
    }

    pub fn contains(&self, element: &str) -> bool {
        match self {
            DocSet::Complete => true,
            DocSet::Empty => false,
            DocSet::Finite(set) => set.contains(element),
        }
    }

    pub fn is_empty(&self) -> bool {
        matches!(self, DocSet::Empty)
    }

    /// Add one element. A no-op on `Complete`.
    pub fn insert(&mut self, element: impl Into<String>) {
        match self {
            DocSet::Complete => {}
            DocSet::Empty => {
                let mut set = HashSet::new();
                set.insert(element.into());
                *self = DocSet::Finite(set);
            }
            DocSet::Finite(set) => {
                set.insert(element.into());
            }
        }
    }

    pub fn intersect(&self, other: &DocSet) -> DocSet {
        match (self, other) {
            (DocSet::Empty, _) | (_, DocSet::Empty) => DocSet::Empty,
            (DocSet::Complete, set) | (set, DocSet::Complete) => set.clone(),
            (DocSet::Finite(a), DocSet::Finite(b)) => {
                // Walk the smaller side
                let (small, large) = if a.len() <= b.len() { (a, b) } else { (b, a) };
                DocSet::from_elements(small.iter().filter(|e| large.contains(*e)).cloned())
            }
        }
    }

    pub fn union(&self, other: &DocSet) -> DocSet {
        match (self, other) {
            (DocSet::Complete, _) | (_, DocSet::Complete) => DocSet::Complete,
            (DocSet::Empty, set) | (set, DocSet::Empty) => set.clone(),
            (DocSet::Finite(a), DocSet::Finite(b)) => DocSet::Finite(a.union(b).cloned().collect()),
        }
    }
}
