// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The loaded index: everything a search needs, built once.
//!
//! Loading turns the serialized pair lists into lookup structures:
//!
//! - `fieldVectors` → `field/doc` string → [`Vector`]
//! - `invertedIndex` → term → [`Posting`]
//! - the sorted term list → vocabulary [`Automaton`] for wildcard and fuzzy
//!   expansion
//! - `pipeline` names → [`Pipeline`], resolved against a [`Registry`]
//!
//! Nothing is mutated after that. All per-query state lives in
//! [`search`](crate::search), so one `Index` can be shared across threads.

mod serialized;

pub use serialized::{Posting, SerializedIndex};

use std::collections::HashMap;

use tracing::{debug, instrument, warn};

use crate::error::Result;
use crate::field_ref::FieldRef;
use crate::pipeline::{Pipeline, Registry};
use crate::query::Query;
use crate::scoring::Vector;
use crate::token_set::Automaton;
use crate::types::SearchResult;

/// Major version of the serialized format this reader understands.
pub const SUPPORTED_MAJOR_VERSION: &str = "2";

#[derive(Debug, Clone)]
pub struct Index {
    fields: Vec<String>,
    pipeline: Pipeline,
    field_vectors: HashMap<String, Vector>,
    inverted_index: HashMap<String, Posting>,
    vocabulary: Automaton,
    version: Option<String>,
}

impl Index {
    /// Load with the built-in pipeline functions.
    pub fn load(data: SerializedIndex) -> Result<Self> {
        Self::load_with_registry(data, Registry::global())
    }

    /// Load, resolving pipeline names against `registry`.
    pub fn load_with_registry(data: SerializedIndex, registry: &Registry) -> Result<Self> {
        if let Some(version) = &data.version {
            let major = version.split('.').next().unwrap_or_default();
            if major != SUPPORTED_MAJOR_VERSION {
                warn!(
                    version = %version,
                    "version mismatch: index was serialized by an incompatible version"
                );
            }
        }

        let pipeline = Pipeline::load(data.pipeline.as_slice(), registry);

        let mut field_vectors = HashMap::with_capacity(data.field_vectors.len());
        for (key, elements) in data.field_vectors {
            // Validate the key shape; lookups use the string as is.
            key.parse::<FieldRef>()?;
            field_vectors.insert(key, Vector::from_flat(&elements)?);
        }

        let inverted_index: HashMap<String, Posting> = data.inverted_index.into_iter().collect();

        let mut terms: Vec<&str> = inverted_index.keys().map(String::as_str).collect();
        terms.sort_unstable();
        let vocabulary = Automaton::from_array(terms.as_slice())?;

        debug!(
            fields = data.fields.len(),
            terms = inverted_index.len(),
            vectors = field_vectors.len(),
            pipeline = ?pipeline.names(),
            "index loaded"
        );

        Ok(Self {
            fields: data.fields,
            pipeline,
            field_vectors,
            inverted_index,
            vocabulary,
            version: data.version,
        })
    }

    /// Load straight from index JSON.
    pub fn from_json(json: &str) -> Result<Self> {
        Self::load(serde_json::from_str(json)?)
    }

    pub fn from_value(value: serde_json::Value) -> Result<Self> {
        Self::load(serde_json::from_value(value)?)
    }

    /// Parse `query_string` and run it.
    ///
    /// A parse error aborts before any matching; the index stays usable.
    #[instrument(skip_all, fields(query = %query_string))]
    pub fn search(&self, query_string: &str) -> Result<Vec<SearchResult>> {
        let query = Query::parse(query_string, &self.fields)?;
        self.query(&query)
    }

    /// Run an already-built query.
    pub fn query(&self, query: &Query) -> Result<Vec<SearchResult>> {
        crate::search::execute(self, query)
    }

    /// Build a query in code against this index's fields, then run it.
    ///
    /// ```ignore
    /// index.query_with(|q| {
    ///     q.term("green", ClauseBuilder::new().wildcard(Wildcard::TRAILING));
    /// })?;
    /// ```
    pub fn query_with<F>(&self, build: F) -> Result<Vec<SearchResult>>
    where
        F: FnOnce(&mut Query),
    {
        let mut query = Query::new(self.fields.clone());
        build(&mut query);
        self.query(&query)
    }

    pub fn fields(&self) -> &[String] {
        &self.fields
    }

    pub fn pipeline(&self) -> &Pipeline {
        &self.pipeline
    }

    pub fn vocabulary(&self) -> &Automaton {
        &self.vocabulary
    }

    pub fn version(&self) -> Option<&str> {
        self.version.as_deref()
    }

    pub fn term_count(&self) -> usize {
        self.inverted_index.len()
    }

    pub fn vector_count(&self) -> usize {
        self.field_vectors.len()
    }

    pub fn posting(&self, term: &str) -> Option<&Posting> {
        self.inverted_index.get(term)
    }

    pub fn field_vector(&self, field_ref: &str) -> Option<&Vector> {
        self.field_vectors.get(field_ref)
    }
}
