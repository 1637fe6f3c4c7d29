//! Vocabulary automaton properties.

use super::oracles::{oracle_intersection, oracle_vocabulary, oracle_wildcard};
use lunrex::{Automaton, ConstraintViolation, TokenSet};
use proptest::prelude::*;

// =============================================================================
// STRATEGIES
// =============================================================================

/// Small alphabet so words share prefixes and suffixes.
fn word_strategy() -> impl Strategy<Value = String> {
    prop::string::string_regex("[a-e]{1,6}").unwrap()
}

fn words_strategy() -> impl Strategy<Value = Vec<String>> {
    prop::collection::vec(word_strategy(), 0..30)
}

fn build(words: &[String]) -> Automaton {
    Automaton::from_array(oracle_vocabulary(words).as_slice()).unwrap()
}

fn sorted(mut words: Vec<String>) -> Vec<String> {
    words.sort();
    words
}

// =============================================================================
// CONSTRUCTION
// =============================================================================

proptest! {
    #![proptest_config(ProptestConfig::with_cases(300))]

    /// Whatever goes in comes back out, nothing more.
    #[test]
    fn prop_round_trip(words in words_strategy()) {
        let automaton = build(&words);
        prop_assert_eq!(sorted(automaton.to_array()), oracle_vocabulary(&words));
    }

    #[test]
    fn prop_membership(words in words_strategy(), probe in word_strategy()) {
        let automaton = build(&words);
        prop_assert_eq!(automaton.contains(&probe), words.contains(&probe));
    }

    /// Minimization never needs more nodes than a plain trie.
    #[test]
    fn prop_no_larger_than_trie(words in words_strategy()) {
        let vocabulary = oracle_vocabulary(&words);
        let automaton = build(&words);

        let mut prefixes = std::collections::BTreeSet::new();
        for word in &vocabulary {
            for (i, _) in word.char_indices() {
                prefixes.insert(&word[..i]);
            }
            prefixes.insert(word.as_str());
        }
        prop_assert!(automaton.node_count() <= prefixes.len().max(1));
    }

    #[test]
    fn prop_descending_input_rejected(words in prop::collection::vec(word_strategy(), 2..10)) {
        let mut vocabulary = oracle_vocabulary(&words);
        prop_assume!(vocabulary.len() >= 2);
        vocabulary.reverse();

        let result = Automaton::from_array(vocabulary.as_slice());
        let is_unsorted = matches!(result, Err(ConstraintViolation::UnsortedInput { .. }));
        prop_assert!(is_unsorted);
    }
}

// =============================================================================
// INTERSECTION
// =============================================================================

proptest! {
    #![proptest_config(ProptestConfig::with_cases(300))]

    #[test]
    fn prop_intersection_matches_set_intersection(a in words_strategy(), b in words_strategy()) {
        let left = build(&a);
        let right = build(&b);
        let product = left.intersect(&TokenSet::from(right));
        prop_assert_eq!(sorted(product.to_array()), oracle_intersection(&a, &b));
    }

    #[test]
    fn prop_intersection_commutes(a in words_strategy(), b in words_strategy()) {
        let ab = build(&a).intersect(&TokenSet::from(build(&b)));
        let ba = build(&b).intersect(&TokenSet::from(build(&a)));
        prop_assert_eq!(sorted(ab.to_array()), sorted(ba.to_array()));
    }

    #[test]
    fn prop_self_intersection_is_identity(a in words_strategy()) {
        let automaton = build(&a);
        let product = automaton.intersect(&TokenSet::from(automaton.clone()));
        prop_assert_eq!(sorted(product.to_array()), oracle_vocabulary(&a));
    }

    #[test]
    fn prop_wildcard_matches_oracle(
        words in words_strategy(),
        prefix in "[a-e]{0,2}",
        suffix in "[a-e]{0,2}",
    ) {
        let pattern = format!("{prefix}*{suffix}");
        let probe = TokenSet::from_string(&pattern).unwrap();
        let matched = build(&words).intersect(&probe);
        prop_assert_eq!(
            sorted(matched.to_array()),
            oracle_wildcard(&words, &prefix, &suffix)
        );
    }

    #[test]
    fn prop_fuzzy_matches_osa(words in words_strategy(), term in word_strategy(), max in 0usize..3) {
        let probe = TokenSet::from_fuzzy_string(&term, max);
        let matched = build(&words).intersect(&probe);

        let expected: Vec<String> = oracle_vocabulary(&words)
            .into_iter()
            .filter(|word| strsim::osa_distance(word, &term) <= max)
            .collect();
        prop_assert_eq!(sorted(matched.to_array()), expected);
    }
}
