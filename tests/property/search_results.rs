//! Invariants of ranked results over arbitrary queries.

use super::common::documents_index;
use lunrex::Index;
use proptest::prelude::*;
use std::sync::LazyLock;

static INDEX: LazyLock<Index> = LazyLock::new(documents_index);

fn term() -> impl Strategy<Value = String> {
    prop::sample::select(vec![
        "pipe", "fit", "fitting", "organ", "room", "play", "plumb", "cloth", "pro*", "*er",
        "pl*", "pipr~1", "roam~1", "missing",
    ])
    .prop_map(str::to_string)
}

fn clause() -> impl Strategy<Value = String> {
    (prop::sample::select(vec!["", "", "+", "-"]), term())
        .prop_map(|(presence, term)| format!("{presence}{term}"))
}

fn query() -> impl Strategy<Value = String> {
    prop::collection::vec(clause(), 1..4).prop_map(|clauses| clauses.join(" "))
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(300))]

    #[test]
    fn prop_results_ranked_and_positive(query in query()) {
        let results = INDEX.search(&query).unwrap();
        for pair in results.windows(2) {
            prop_assert!(pair[0].score >= pair[1].score);
        }
        for result in &results {
            prop_assert!(result.score > 0.0);
            prop_assert!(!result.match_data.is_empty());
        }
    }

    #[test]
    fn prop_each_document_once(query in query()) {
        let results = INDEX.search(&query).unwrap();
        let mut refs: Vec<&str> = results.iter().map(|r| r.doc_ref.as_str()).collect();
        refs.sort_unstable();
        refs.dedup();
        prop_assert_eq!(refs.len(), results.len());
    }

    /// Prohibiting a term removes every document the term alone would find.
    #[test]
    fn prop_prohibited_documents_absent(query in query(), banned in term()) {
        let banned_docs: Vec<String> = INDEX
            .search(&banned)
            .unwrap()
            .into_iter()
            .map(|r| r.doc_ref)
            .collect();

        let results = INDEX.search(&format!("{query} -{banned}")).unwrap();
        for result in &results {
            prop_assert!(!banned_docs.contains(&result.doc_ref));
        }
    }

    /// Adding an optional clause never removes a result when nothing is required.
    #[test]
    fn prop_optional_clause_only_adds(a in term(), b in term()) {
        let alone = INDEX.search(&a).unwrap();
        let both = INDEX.search(&format!("{a} {b}")).unwrap();
        for result in &alone {
            prop_assert!(both.iter().any(|r| r.doc_ref == result.doc_ref));
        }
    }
}
