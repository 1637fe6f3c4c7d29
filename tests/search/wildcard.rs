//! `*` wildcards, written in the query or glued on by the builder.

use super::common::{documents_index, refs, search_refs, stemmed_index};
use lunrex::{ClauseBuilder, ConstraintViolation, Error, Wildcard};

#[test]
fn test_trailing_wildcard() {
    let index = documents_index();
    assert_eq!(search_refs(&index, "pro*"), vec!["a", "b"]);
    assert_eq!(search_refs(&index, "pl*"), vec!["a", "b"]);
}

#[test]
fn test_leading_wildcard() {
    let index = documents_index();
    assert_eq!(search_refs(&index, "*er"), vec!["a"]);
}

#[test]
fn test_inner_wildcard() {
    let index = documents_index();
    assert_eq!(search_refs(&index, "p*e"), vec!["b", "a"]);
}

#[test]
fn test_wildcard_parts_are_stemmed() {
    let index = stemmed_index();
    // commande → command, alking → alk
    assert_eq!(search_refs(&index, "commande*"), vec!["a"]);
    assert_eq!(search_refs(&index, "*alking"), vec!["b", "a"]);
}

#[test]
fn test_vocabulary_holds_stems_only() {
    // No stemmed term ends in "ing"
    let index = documents_index();
    assert!(search_refs(&index, "*ing").is_empty());
}

#[test]
fn test_wildcard_without_matches() {
    assert!(search_refs(&stemmed_index(), "xyz*").is_empty());
}

#[test]
fn test_two_wildcards_in_one_term() {
    let err = documents_index().search("a*b*c").unwrap_err();
    assert!(matches!(
        err,
        Error::Constraint(ConstraintViolation::MultipleWildcards { count: 2, .. })
    ));
}

#[test]
fn test_builder_wildcard_flags() {
    let index = documents_index();

    let trailing = index
        .query_with(|q| {
            q.term(
                "pro",
                ClauseBuilder::new()
                    .wildcard(Wildcard::TRAILING)
                    .use_pipeline(false),
            );
        })
        .unwrap();
    assert_eq!(refs(&trailing), vec!["a", "b"]);

    let leading = index
        .query_with(|q| {
            q.term(
                "er",
                ClauseBuilder::new()
                    .wildcard(Wildcard::LEADING)
                    .use_pipeline(false),
            );
        })
        .unwrap();
    assert_eq!(refs(&leading), vec!["a"]);
}
