//! `term~N` edit-distance matching.

use super::common::{documents_index, search_refs, stemmed_index};

#[test]
fn test_one_edit() {
    let index = documents_index();
    assert_eq!(search_refs(&index, "organn~1"), vec!["b"]); // deletion
    assert_eq!(search_refs(&index, "pipr~1"), vec!["b", "a"]); // substitution
    assert_eq!(search_refs(&index, "roam~1"), vec!["c"]);
}

#[test]
fn test_transposition_is_one_edit() {
    let index = documents_index();
    assert_eq!(search_refs(&index, "fti~1"), vec!["c", "a"]);
    assert_eq!(search_refs(&stemmed_index(), "wakl~1"), vec!["b", "a"]);
}

#[test]
fn test_distance_zero_is_exact() {
    let index = documents_index();
    assert_eq!(search_refs(&index, "pipe~0"), search_refs(&index, "pipe"));
    assert!(search_refs(&index, "pipr~0").is_empty());
}

#[test]
fn test_fuzzy_term_goes_through_pipeline_first() {
    // commanded → command, then matched at distance 0
    assert_eq!(search_refs(&stemmed_index(), "commanded~1"), vec!["a"]);
}

#[test]
fn test_fuzzy_without_matches() {
    assert!(search_refs(&stemmed_index(), "zzzzz~1").is_empty());
    assert!(search_refs(&documents_index(), "zzzz~1").is_empty());
}

#[test]
fn test_fuzzy_with_boost() {
    let index = documents_index();
    assert_eq!(search_refs(&index, "pipr~1^2"), vec!["b", "a"]);
}
