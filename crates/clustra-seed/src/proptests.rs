//! Property-based tests for seed mutation.

use proptest::prelude::*;

use clustra_quiver::MutationType;

use crate::ClusterSeed;

fn finite_type() -> impl Strategy<Value = MutationType> {
    prop_oneof![
        (1usize..=4).prop_map(MutationType::A),
        (2usize..=3).prop_map(MutationType::B),
        Just(MutationType::C(3)),
        Just(MutationType::D(4)),
        Just(MutationType::G2),
    ]
}

/// A finite-type seed, principal or coefficient-free, with a mutation
/// sequence in range.
fn seed_with_sequence() -> impl Strategy<Value = (ClusterSeed, Vec<usize>)> {
    (finite_type(), any::<bool>()).prop_flat_map(|(ty, principal)| {
        let seed = ClusterSeed::new(ty).unwrap();
        let seed = if principal {
            seed.principal_extension(false).unwrap()
        } else {
            seed
        };
        let n = seed.n();
        (Just(seed), proptest::collection::vec(0..n, 0..5))
    })
}

proptest! {
    #[test]
    fn mutation_is_involution((seed, seq) in seed_with_sequence(), k in 0usize..4) {
        let seed = seed.mutated(seq).unwrap();
        let k = k % seed.n();
        prop_assert_eq!(seed.mutated([k, k]).unwrap(), seed);
    }

    #[test]
    fn independent_mutations_commute((seed, seq) in seed_with_sequence(), k in 0usize..4, l in 0usize..4) {
        let seed = seed.mutated(seq).unwrap();
        let (k, l) = (k % seed.n(), l % seed.n());
        let b = seed.exchange_matrix();
        prop_assume!(b.get(k, l) == 0 && b.get(l, k) == 0);
        prop_assert_eq!(seed.mutated([k, l]).unwrap(), seed.mutated([l, k]).unwrap());
    }

    #[test]
    fn cluster_variables_are_laurent((seed, seq) in seed_with_sequence()) {
        let seed = seed.mutated(seq).unwrap();
        for var in seed.cluster() {
            prop_assert!(var.value().is_laurent(), "{} is not a Laurent polynomial", var);
        }
    }

    #[test]
    fn mutation_preserves_skew_symmetrizability((seed, seq) in seed_with_sequence()) {
        let d = seed.exchange_matrix().skew_symmetrizer();
        prop_assert!(d.is_some());
        let mutated = seed.mutated(seq).unwrap();
        prop_assert_eq!(mutated.exchange_matrix().skew_symmetrizer(), d);
        prop_assert_eq!(mutated.mutation_type(), seed.mutation_type());
    }

    #[test]
    fn initial_principal_seed_has_trivial_invariants(ty in finite_type()) {
        let seed = ClusterSeed::new(ty).unwrap().principal_extension(false).unwrap();
        for k in 0..seed.n() {
            prop_assert!(seed.f_polynomial(k, false).unwrap().is_one());
            let mut e = vec![0; seed.n()];
            e[k] = 1;
            prop_assert_eq!(seed.g_vector(k, false).unwrap(), e.clone());
            prop_assert_eq!(seed.c_vector(k, false).unwrap(), e);
        }
    }
}
