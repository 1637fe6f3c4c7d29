// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Query execution: where the clauses meet the postings.
//!
//! Two passes over transient state; the index itself is only read.
//!
//! **Gather.** Every clause term is expanded (see [`expansion`]) and each
//! expanded term's posting is walked field by field. Along the way:
//!
//! - per-field query vectors collect the clause boost at the term's index
//! - `field/doc` keys remember which terms matched there, with metadata
//! - required and prohibited matches are noted for filtering
//!
//! **Score.** Each gathered `field/doc` key that survives the presence
//! filter is scored as `query_vector[field].similarity(field_vector)`, and
//! scores are summed per document.
//!
//! ```text
//! "+green plant"
//!   green (required) → title/a, body/a, body/b   query[title][0] += 1 ...
//!   plant            → title/a, title/b          query[title][1] += 1
//!   score keys in the required set only → title/b is dropped
//! ```

pub mod expansion;

use std::collections::{BTreeMap, HashMap};

use tracing::{debug, trace};

use crate::contracts;
use crate::error::Result;
use crate::field_ref::FieldRef;
use crate::index::Index;
use crate::match_data::{MatchData, Metadata};
use crate::query::{Presence, Query};
use crate::scoring::Vector;
use crate::set::DocSet;
use crate::types::SearchResult;

/// Which matches a clause presence lets through.
#[derive(Debug, Default)]
struct PresenceFilter {
    /// `field/doc` keys matched by a required clause.
    required: DocSet,
    /// Documents matched by a prohibited clause in any of its fields.
    prohibited_docs: DocSet,
}

impl PresenceFilter {
    fn record(&mut self, presence: Presence, field_ref: &FieldRef) {
        match presence {
            Presence::Required => self.required.insert(field_ref.as_str()),
            Presence::Prohibited => self.prohibited_docs.insert(field_ref.doc_ref()),
            Presence::Optional => {}
        }
    }

    /// Prohibited documents are out. If anything was required, only keys
    /// a required clause matched are in.
    fn admits(&self, field_ref: &FieldRef) -> bool {
        if self.prohibited_docs.contains(field_ref.doc_ref()) {
            return false;
        }
        self.required.is_empty() || self.required.contains(field_ref.as_str())
    }
}

/// Matched terms per `field/doc`, in first-seen order.
#[derive(Debug, Default)]
struct MatchingFields {
    entries: Vec<(FieldRef, BTreeMap<String, Metadata>)>,
    positions: HashMap<String, usize>,
}

impl MatchingFields {
    /// Later metadata for the same key and term replaces earlier.
    fn record(&mut self, field_ref: FieldRef, term: &str, metadata: &Metadata) {
        let slot = match self.positions.get(field_ref.as_str()) {
            Some(&slot) => slot,
            None => {
                let slot = self.entries.len();
                self.positions.insert(field_ref.as_str().to_string(), slot);
                self.entries.push((field_ref, BTreeMap::new()));
                slot
            }
        };
        self.entries[slot].1.insert(term.to_string(), metadata.clone());
    }
}

/// Run `query` against `index`, best match first.
pub fn execute(index: &Index, query: &Query) -> Result<Vec<SearchResult>> {
    let mut query_vectors: HashMap<&str, Vector> = index
        .fields()
        .iter()
        .map(|field| (field.as_str(), Vector::new()))
        .collect();
    let mut matching = MatchingFields::default();
    let mut filter = PresenceFilter::default();

    for clause in query.clauses() {
        let mut expanded_count = 0;

        for term in expansion::clause_terms(index.pipeline(), clause) {
            let expanded =
                expansion::expand_term(index.vocabulary(), &term, clause.edit_distance)?;
            expanded_count += expanded.len();

            for expanded_term in &expanded {
                let Some(posting) = index.posting(expanded_term) else {
                    continue;
                };

                for field in &clause.fields {
                    let Some(documents) = posting.field(field) else {
                        continue;
                    };

                    for (doc_ref, metadata) in documents {
                        let field_ref = FieldRef::new(doc_ref.as_str(), field.as_str());
                        filter.record(clause.presence, &field_ref);
                        if clause.presence != Presence::Prohibited {
                            matching.record(field_ref, expanded_term, metadata);
                        }
                    }

                    // Clause fields outside the index have no vector to score against.
                    if let Some(vector) = query_vectors.get_mut(field.as_str()) {
                        vector.upsert(posting.term_index, clause.boost, |a, b| a + b);
                    }
                }
            }
        }

        trace!(term = %clause.term, expanded = expanded_count, "clause expanded");
    }

    let results = score(index, &query_vectors, &matching, &filter);
    debug!(results = results.len(), "search complete");
    Ok(results)
}

fn score(
    index: &Index,
    query_vectors: &HashMap<&str, Vector>,
    matching: &MatchingFields,
    filter: &PresenceFilter,
) -> Vec<SearchResult> {
    let mut results: Vec<SearchResult> = Vec::new();
    let mut by_doc: HashMap<&str, usize> = HashMap::new();

    for (field_ref, terms) in &matching.entries {
        if !filter.admits(field_ref) {
            continue;
        }
        let Some(field_vector) = index.field_vector(field_ref.as_str()) else {
            continue;
        };
        let Some(query_vector) = query_vectors.get(field_ref.field_name()) else {
            continue;
        };

        let score = query_vector.similarity(field_vector);
        if score == 0.0 {
            continue;
        }

        let mut field_match = MatchData::default();
        for (term, metadata) in terms {
            field_match.add(term, field_ref.field_name(), metadata.clone());
        }

        match by_doc.get(field_ref.doc_ref()) {
            Some(&slot) => {
                let result = &mut results[slot];
                result.score += score;
                result.match_data.combine(&field_match);
            }
            None => {
                by_doc.insert(field_ref.doc_ref(), results.len());
                results.push(SearchResult {
                    doc_ref: field_ref.doc_ref().to_string(),
                    score,
                    match_data: field_match,
                });
            }
        }
    }

    // Stable: equal scores keep first-scored order
    results.sort_by(|a, b| b.score.total_cmp(&a.score));
    contracts::check_results_ranked(&results);
    results
}
