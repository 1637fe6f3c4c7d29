//! Loading serialized indexes, good and bad.

use super::common::{documents_index, search_refs, DOCUMENTS_INDEX};
use lunrex::{ConstraintViolation, Error, Index, SerializedIndex};
use serde_json::json;

#[test]
fn test_load_summary() {
    let index = documents_index();
    assert_eq!(index.version(), Some("2.3.9"));
    assert_eq!(index.fields(), ["title", "body"]);
    assert_eq!(index.term_count(), 9);
    assert_eq!(index.vector_count(), 6);
    assert_eq!(index.pipeline().names(), vec!["stemmer"]);
}

#[test]
fn test_vocabulary_is_shared_automaton() {
    let index = documents_index();
    let mut terms = index.vocabulary().to_array();
    terms.sort();
    assert_eq!(
        terms,
        vec!["cloth", "fit", "organ", "pipe", "play", "plumb", "plumber", "profession", "room"]
    );
    // plumb/plumber share a path, so fewer nodes than characters
    let characters: usize = terms.iter().map(|t| t.chars().count()).sum();
    assert!(index.vocabulary().node_count() < characters);
}

#[test]
fn test_load_via_serialized_struct() {
    let data: SerializedIndex = serde_json::from_str(DOCUMENTS_INDEX).unwrap();
    let index = Index::load(data).unwrap();
    assert_eq!(search_refs(&index, "organ"), vec!["b"]);
}

#[test]
fn test_field_vector_lookup() {
    let index = documents_index();
    let vector = index.field_vector("body/c").unwrap();
    assert_eq!(vector.to_flat(), vec![4.0, 0.5, 7.0, 0.5, 8.0, 0.5]);
    assert!(index.field_vector("body/z").is_none());
}

#[test]
fn test_truncated_json() {
    let truncated = &DOCUMENTS_INDEX[..DOCUMENTS_INDEX.len() / 2];
    assert!(matches!(
        Index::from_json(truncated),
        Err(Error::InvalidIndex(_))
    ));
}

#[test]
fn test_wrong_shapes() {
    // fieldVectors must be pairs
    let err = Index::from_value(json!({ "fieldVectors": [["title/a"]] })).unwrap_err();
    assert!(matches!(err, Error::InvalidIndex(_)));

    // _index is required on a posting
    let err = Index::from_value(json!({ "invertedIndex": [["foo", { "title": {} }]] })).unwrap_err();
    assert!(matches!(err, Error::InvalidIndex(_)));
}

#[test]
fn test_unsorted_vector_rejected() {
    let err = Index::from_value(json!({
        "fields": ["title"],
        "fieldVectors": [["title/a", [3, 0.5, 1, 0.2]]]
    }))
    .unwrap_err();
    assert!(matches!(
        err,
        Error::Constraint(ConstraintViolation::UnsortedVector { position: 1 })
    ));
}

#[test]
fn test_fractional_vector_index_rejected() {
    let err = Index::from_value(json!({ "fieldVectors": [["title/a", [0.5, 1.0]]] })).unwrap_err();
    assert!(matches!(
        err,
        Error::Constraint(ConstraintViolation::InvalidVectorIndex { .. })
    ));
}

#[test]
fn test_error_messages() {
    let err = Index::from_value(json!({ "fieldVectors": [["nojoiner", [0, 1]]] })).unwrap_err();
    assert_eq!(err.to_string(), "malformed field ref string 'nojoiner'");

    let err = documents_index().search("foo^").unwrap_err();
    assert_eq!(err.to_string(), "boost must be numeric");
}
