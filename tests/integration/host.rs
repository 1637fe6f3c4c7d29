//! What a host (CLI, browser binding, server) does with an index.

use super::common::{documents_index, refs};
use lunrex::{ClauseBuilder, Index, Presence, Query, SearchOptions, SearchResult};
use std::sync::Arc;
use std::thread;

#[test]
fn test_options_truncate_ranked_results() {
    let results = documents_index().search("pipe fit").unwrap();
    let limited = SearchOptions::with_limit(2).apply(results.clone());
    assert_eq!(refs(&limited), refs(&results[..2]));
}

#[test]
fn test_options_from_host_json() {
    let options: SearchOptions = serde_json::from_str(r#"{ "limit": 1 }"#).unwrap();
    let results = options.apply(documents_index().search("pipe").unwrap());
    assert_eq!(refs(&results), vec!["b"]);
}

#[test]
fn test_results_round_trip_through_json() {
    let results = documents_index().search("pl* organ").unwrap();
    let json = serde_json::to_string(&results).unwrap();
    let back: Vec<SearchResult> = serde_json::from_str(&json).unwrap();

    assert_eq!(refs(&back), refs(&results));
    for (decoded, original) in back.iter().zip(&results) {
        assert_eq!(decoded.match_data, original.match_data);
        assert!((decoded.score - original.score).abs() < 1e-12);
    }
}

#[test]
fn test_shared_across_threads() {
    let index: Arc<Index> = Arc::new(documents_index());
    let expected = index.search("pipe fit").unwrap();

    let handles: Vec<_> = (0..4)
        .map(|_| {
            let index = Arc::clone(&index);
            thread::spawn(move || index.search("pipe fit").unwrap())
        })
        .collect();

    for handle in handles {
        assert_eq!(handle.join().unwrap(), expected);
    }
}

#[test]
fn test_prebuilt_query_matches_parsed() {
    let index = documents_index();

    let mut query = Query::new(index.fields().to_vec());
    query
        .term("pipe", ClauseBuilder::new().presence(Presence::Required))
        .term("organ", ClauseBuilder::new());

    assert_eq!(index.query(&query).unwrap(), index.search("+pipe organ").unwrap());
}

#[test]
fn test_terms_share_options() {
    let index = documents_index();
    let results = index
        .query_with(|q| {
            q.terms(["pipe", "room"], ClauseBuilder::new().fields(["title"]));
        })
        .unwrap();

    let mut found = refs(&results);
    found.sort_unstable();
    assert_eq!(found, vec!["b", "c"]);
}

#[test]
fn test_negated_query() {
    let fields = vec!["title".to_string()];
    assert!(Query::parse("-foo -bar", &fields).unwrap().is_negated());
    assert!(!Query::parse("-foo bar", &fields).unwrap().is_negated());
    assert!(!Query::parse("", &fields).unwrap().is_negated());
}
