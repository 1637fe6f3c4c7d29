// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Composite `(document, field)` key.
//!
//! The canonical string is `field + "/" + doc_ref`. Parsing splits on the
//! *first* `/` only, so document refs are free to contain slashes
//! (`body/posts/2024/intro` is field `body`, doc `posts/2024/intro`).

use std::fmt;
use std::str::FromStr;
use std::sync::OnceLock;

use crate::error::Error;

/// Separator between field name and document ref.
pub const JOINER: char = '/';

#[derive(Debug, Clone)]
pub struct FieldRef {
    doc_ref: String,
    field_name: String,
    string_value: OnceLock<String>,
}

impl FieldRef {
    pub fn new(doc_ref: impl Into<String>, field_name: impl Into<String>) -> Self {
        Self {
            doc_ref: doc_ref.into(),
            field_name: field_name.into(),
            string_value: OnceLock::new(),
        }
    }

    pub fn doc_ref(&self) -> &str {
        &self.doc_ref
    }

    pub fn field_name(&self) -> &str {
        &self.field_name
    }

    /// Canonical `field/doc` form, built on first use.
    pub fn as_str(&self) -> &str {
        self.string_value
            .get_or_init(|| format!("{}{}{}", self.field_name, JOINER, self.doc_ref))
    }
}

impl FromStr for FieldRef {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (field_name, doc_ref) = s
            .split_once(JOINER)
            .ok_or_else(|| Error::MalformedKey(s.to_string()))?;

        let string_value = OnceLock::new();
        // Keep the caller's string rather than rebuilding it.
        let _ = string_value.set(s.to_string());

        Ok(Self {
            doc_ref: doc_ref.to_string(),
            field_name: field_name.to_string(),
            string_value,
        })
    }
}

impl fmt::Display for FieldRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl PartialEq for FieldRef {
    fn eq(&self, other: &Self) -> bool {
        self.doc_ref == other.doc_ref && self.field_name == other.field_name
    }
}

impl Eq for FieldRef {}

impl std::hash::Hash for FieldRef {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        self.field_name.hash(state);
        self.doc_ref.hash(state);
    }
}
