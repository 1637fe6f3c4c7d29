//! `+required` and `-prohibited` clauses.

use super::common::{assert_close, documents_index, score_of, search_refs};

#[test]
fn test_prohibited_removes_whole_document() {
    // organ matches b in both fields; play prohibits b through body/b only
    let index = documents_index();
    assert!(search_refs(&index, "organ -play").is_empty());
}

#[test]
fn test_prohibited_leaves_other_documents() {
    let index = documents_index();
    assert_eq!(search_refs(&index, "fit -room"), vec!["a"]);
    assert_eq!(search_refs(&index, "profession -room"), vec!["a", "b"]);
}

#[test]
fn test_only_prohibited_clauses_match_nothing() {
    let index = documents_index();
    assert!(search_refs(&index, "-pipe").is_empty());
    assert!(search_refs(&index, "-pipe -organ").is_empty());
}

#[test]
fn test_required_limits_scored_fields() {
    // +pipe keeps title/b and body/a; body/b only matched organ
    let results = documents_index().search("+pipe organ").unwrap();
    assert_eq!(super::common::refs(&results), vec!["b", "a"]);
    // query vectors are {pipe: 1, organ: 1}, magnitude √2
    assert_close(score_of(&results, "b"), 1.8 / 2f64.sqrt());
    assert_close(score_of(&results, "a"), 0.6 / 2f64.sqrt());

    let b = &results[0].match_data.metadata;
    assert!(b["organ"].contains_key("title"));
    assert!(!b["organ"].contains_key("body"));
}

#[test]
fn test_required_keys_accumulate_across_clauses() {
    // body/b joins the required keys through +organ
    let results = documents_index().search("+pipe +organ").unwrap();
    assert_close(score_of(&results, "b"), (1.8 + 0.7) / 2f64.sqrt());
    assert_close(score_of(&results, "a"), 0.6 / 2f64.sqrt());
}

#[test]
fn test_required_term_with_no_matches_filters_nothing() {
    // Nothing matched the required clause, so no key is required
    let index = documents_index();
    assert_eq!(search_refs(&index, "+harpsichord pipe"), vec!["b", "a"]);
}

#[test]
fn test_prohibited_wins_over_required() {
    let index = documents_index();
    assert_eq!(search_refs(&index, "+pipe -organ"), vec!["a"]);
}
