//! Score arithmetic and result order.

use super::common::{assert_close, documents_index, refs, search_refs, weighted_index};

#[test]
fn test_ranked_by_weight() {
    let index = weighted_index(&[("low", 0.3), ("high", 0.9), ("mid", 0.6)]);
    let results = index.search("match").unwrap();

    assert_eq!(refs(&results), vec!["high", "mid", "low"]);
    assert_close(results[0].score, 0.9);
    assert_close(results[1].score, 0.6);
    assert_close(results[2].score, 0.3);
}

#[test]
fn test_scores_sum_across_fields() {
    // query vectors {pipe: 1, fit: 1}, magnitude √2
    // c: title/c 0.9 + body/c 0.5; a: body/a 0.6 + 0.6; b: title/b 0.9
    let results = documents_index().search("pipe fit").unwrap();
    assert_eq!(refs(&results), vec!["c", "a", "b"]);
    assert_close(results[0].score, 1.4 / 2f64.sqrt());
    assert_close(results[1].score, 1.2 / 2f64.sqrt());
    assert_close(results[2].score, 0.9 / 2f64.sqrt());
}

#[test]
fn test_boost_reorders() {
    let results = documents_index().search("pipe^10 fit").unwrap();
    assert_eq!(refs(&results), vec!["b", "a", "c"]);
    // magnitude √101
    assert_close(results[0].score, 9.0 / 101f64.sqrt());
    assert_close(results[1].score, 6.6 / 101f64.sqrt());
    assert_close(results[2].score, 1.4 / 101f64.sqrt());
}

#[test]
fn test_zero_boost_contributes_nothing() {
    // title/b only matched pipe, whose query weight is 0, so b scores 0 and is dropped
    let index = documents_index();
    assert_eq!(search_refs(&index, "pipe^0 fit"), vec!["c", "a"]);
}

#[test]
fn test_ties_keep_first_scored_order() {
    let index = weighted_index(&[("x", 0.5), ("y", 0.5)]);
    let results = index.search("match").unwrap();
    assert_eq!(refs(&results), vec!["x", "y"]);
    assert_eq!(results[0].score, results[1].score);
}

#[test]
fn test_results_never_increase() {
    let index = documents_index();
    for query in ["pipe", "pl* fit", "profession room organ", "pipr~1 fit^3"] {
        let results = index.search(query).unwrap();
        assert!(
            results.windows(2).all(|w| w[0].score >= w[1].score),
            "unranked results for {:?}",
            query
        );
        assert!(results.iter().all(|r| r.score > 0.0));
    }
}
