//! Sparse vector arithmetic against a dense oracle.

use super::oracles::oracle_dot;
use lunrex::Vector;
use proptest::prelude::*;

/// Strictly increasing indices with non-zero values.
fn sparse_strategy() -> impl Strategy<Value = Vec<(usize, f64)>> {
    prop::collection::btree_map(0usize..40, 0.1f64..10.0, 0..12)
        .prop_map(|map| map.into_iter().collect())
}

fn to_vector(elements: &[(usize, f64)]) -> Vector {
    let flat: Vec<f64> = elements
        .iter()
        .flat_map(|&(i, v)| [i as f64, v])
        .collect();
    Vector::from_flat(&flat).unwrap()
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(300))]

    #[test]
    fn diff_dot(a in sparse_strategy(), b in sparse_strategy()) {
        let dot = to_vector(&a).dot(&to_vector(&b));
        prop_assert!((dot - oracle_dot(&a, &b)).abs() < 1e-9);
    }

    #[test]
    fn prop_dot_commutes(a in sparse_strategy(), b in sparse_strategy()) {
        let (va, vb) = (to_vector(&a), to_vector(&b));
        prop_assert!((va.dot(&vb) - vb.dot(&va)).abs() < 1e-9);
    }

    #[test]
    fn prop_magnitude_squared_is_self_dot(a in sparse_strategy()) {
        let v = to_vector(&a);
        prop_assert!((v.magnitude().powi(2) - v.dot(&v)).abs() < 1e-6);
    }

    /// Positive entries only, so overlap can never go negative.
    #[test]
    fn prop_similarity_non_negative(a in sparse_strategy(), b in sparse_strategy()) {
        prop_assert!(to_vector(&a).similarity(&to_vector(&b)) >= 0.0);
    }

    /// Only the receiver is normalized: a vector against itself is its length.
    #[test]
    fn prop_self_similarity_is_magnitude(a in sparse_strategy()) {
        let v = to_vector(&a);
        prop_assert!((v.similarity(&v) - v.magnitude()).abs() < 1e-9);
    }

    #[test]
    fn prop_similarity_scales_dot(a in sparse_strategy(), b in sparse_strategy()) {
        let (va, vb) = (to_vector(&a), to_vector(&b));
        let expected = if va.is_empty() { 0.0 } else { va.dot(&vb) / va.magnitude() };
        prop_assert!((va.similarity(&vb) - expected).abs() < 1e-9);
    }

    #[test]
    fn prop_upsert_keeps_order(a in sparse_strategy()) {
        let mut v = Vector::new();
        for &(i, value) in a.iter().rev() {
            v.upsert(i, value, |old, new| old + new);
        }
        prop_assert_eq!(v.elements(), a.as_slice());
    }

    #[test]
    fn prop_flat_round_trip(a in sparse_strategy()) {
        let v = to_vector(&a);
        let back = Vector::from_flat(&v.to_flat()).unwrap();
        prop_assert_eq!(back, v);
    }
}
