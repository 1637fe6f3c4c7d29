//! Differential and axiomatic tests for the edit distance.

use lunrex::{damerau_levenshtein, levenshtein_within};
use proptest::prelude::*;

fn short_string() -> impl Strategy<Value = String> {
    prop::string::string_regex("[a-f]{0,10}").unwrap()
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(500))]

    /// Differential test: distance matches strsim's optimal string alignment.
    #[test]
    fn diff_osa_distance(a in short_string(), b in short_string()) {
        prop_assert_eq!(damerau_levenshtein(&a, &b), strsim::osa_distance(&a, &b));
    }

    #[test]
    fn diff_osa_unicode(
        a in prop::sample::select(vec![
            "cafe", "caf\u{00e9}", "na\u{00ef}ve", "r\u{00e9}sum\u{00e9}",
            "\u{00fc}ber", "t\u{014d}ky\u{014d}", "hello", "world"
        ]),
        b in prop::sample::select(vec![
            "cafe", "caf\u{00e9}", "na\u{00ef}ve", "r\u{00e9}sum\u{00e9}",
            "\u{00fc}ber", "t\u{014d}ky\u{014d}", "hello", "world"
        ])
    ) {
        prop_assert_eq!(damerau_levenshtein(a, b), strsim::osa_distance(a, b));
    }

    /// Bounded check agrees with the full distance for every bound.
    #[test]
    fn prop_within_agrees_with_distance(a in short_string(), b in short_string(), max in 0usize..5) {
        let distance = damerau_levenshtein(&a, &b);
        prop_assert_eq!(
            levenshtein_within(&a, &b, max),
            distance <= max,
            "levenshtein_within({:?}, {:?}, {}) disagrees with distance {}",
            a, b, max, distance
        );
    }

    #[test]
    fn prop_identity(a in short_string()) {
        prop_assert_eq!(damerau_levenshtein(&a, &a), 0);
    }

    #[test]
    fn prop_symmetry(a in short_string(), b in short_string()) {
        prop_assert_eq!(damerau_levenshtein(&a, &b), damerau_levenshtein(&b, &a));
    }

    /// Length gap below, longer length above.
    #[test]
    fn prop_bounds(a in short_string(), b in short_string()) {
        let distance = damerau_levenshtein(&a, &b);
        prop_assert!(distance >= a.len().abs_diff(b.len()));
        prop_assert!(distance <= a.len().max(b.len()));
    }
}
