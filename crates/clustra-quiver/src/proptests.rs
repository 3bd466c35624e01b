//! Property-based tests for exchange matrix mutation.

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use crate::exchange_matrix::ExchangeMatrix;
    use crate::quiver::{ClusterQuiver, Orientation};
    use clustra_linalg::DenseMatrix;

    /// `B = S·D` with `S` skew-symmetric and `D` a positive diagonal, so
    /// that `D·B` is skew-symmetric; plus `m` random frozen rows.
    fn exchange_matrix() -> impl Strategy<Value = ExchangeMatrix> {
        (2usize..=4, 0usize..=2).prop_flat_map(|(n, m)| {
            (
                proptest::collection::vec(-2i64..=2, n * n),
                proptest::collection::vec(1i64..=2, n),
                proptest::collection::vec(-2i64..=2, m * n),
            )
                .prop_map(move |(s, d, frozen)| {
                    let mut b = DenseMatrix::zeros(n + m, n);
                    for i in 0..n {
                        for j in (i + 1)..n {
                            b[(i, j)] = s[i * n + j] * d[j];
                            b[(j, i)] = -s[i * n + j] * d[i];
                        }
                    }
                    for (idx, v) in frozen.into_iter().enumerate() {
                        b[(n + idx / n, idx % n)] = v;
                    }
                    ExchangeMatrix::new(b).unwrap()
                })
        })
    }

    fn with_sequence() -> impl Strategy<Value = (ExchangeMatrix, Vec<usize>)> {
        exchange_matrix().prop_flat_map(|b| {
            let n = b.n();
            (Just(b), proptest::collection::vec(0..n, 0..6))
        })
    }

    proptest! {
        #[test]
        fn mutation_is_involution(b in exchange_matrix(), k in 0usize..2) {
            prop_assert_eq!(b.mutated(k).unwrap().mutated(k).unwrap(), b);
        }

        #[test]
        fn mutation_preserves_skew_symmetrizer((b, seq) in with_sequence()) {
            let d = b.skew_symmetrizer().unwrap();
            let mut mutated = b.clone();
            for &k in &seq {
                mutated.mutate(k).unwrap();
            }
            // The symmetrizer is a mutation invariant, not just its existence.
            prop_assert_eq!(mutated.skew_symmetrizer(), Some(d));
        }

        #[test]
        fn quiver_matrix_round_trip(b in exchange_matrix()) {
            let q = ClusterQuiver::from_matrix(b.clone());
            let rebuilt = ClusterQuiver::from_digraph(&q.digraph(), b.m()).unwrap();
            prop_assert_eq!(rebuilt.b_matrix(), &b);
        }

        #[test]
        fn reorienting_twice_by_order_is_stable(b in exchange_matrix()) {
            let total = b.n() + b.m();
            let mut q = ClusterQuiver::from_matrix(b);
            q.reorient(&Orientation::Order((0..total).collect())).unwrap();
            prop_assert!(q.is_acyclic());

            let once = q.clone();
            q.reorient(&Orientation::Order((0..total).collect())).unwrap();
            prop_assert_eq!(q, once);
        }
    }
}
