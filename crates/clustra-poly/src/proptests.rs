//! Property-based tests for multivariate polynomial arithmetic.

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use crate::algorithms::division::div_exact;
    use crate::algorithms::gcd::multi_gcd;
    use crate::monomial::Monomial;
    use crate::ordering::MonomialOrder;
    use crate::sparse::MultiPoly;
    use clustra_rings::Z;

    const NUM_VARS: usize = 3;

    fn small_term() -> impl Strategy<Value = (Monomial, Z)> {
        (proptest::collection::vec(0u32..3, NUM_VARS), -5i64..=5)
            .prop_map(|(exps, c)| (Monomial::from_exponents(&exps), Z::new(c)))
    }

    fn small_poly() -> impl Strategy<Value = MultiPoly<Z>> {
        proptest::collection::vec(small_term(), 0..=4)
            .prop_map(|terms| MultiPoly::new(terms, NUM_VARS, MonomialOrder::Grevlex))
    }

    fn nonzero_poly() -> impl Strategy<Value = MultiPoly<Z>> {
        small_poly().prop_filter("polynomial must be non-zero", |p| !p.is_zero())
    }

    proptest! {
        #[test]
        fn poly_add_commutative(a in small_poly(), b in small_poly()) {
            prop_assert_eq!(a.add(&b), b.add(&a));
        }

        #[test]
        fn poly_mul_commutative(a in small_poly(), b in small_poly()) {
            prop_assert_eq!(a.mul(&b), b.mul(&a));
        }

        #[test]
        fn poly_distributive(a in small_poly(), b in small_poly(), c in small_poly()) {
            let left = a.mul(&b.add(&c));
            let right = a.mul(&b).add(&a.mul(&c));
            prop_assert_eq!(left, right);
        }

        #[test]
        fn poly_additive_inverse(a in small_poly()) {
            prop_assert!(a.add(&a.neg()).is_zero());
        }

        #[test]
        fn div_exact_recovers_factor(a in nonzero_poly(), b in nonzero_poly()) {
            let prod = a.mul(&b);
            prop_assert_eq!(div_exact(&prod, &b), Some(a));
        }

        #[test]
        fn gcd_divides_both(a in nonzero_poly(), b in nonzero_poly()) {
            let g = multi_gcd(&a, &b);
            prop_assert!(!g.is_zero());
            prop_assert!(div_exact(&a, &g).is_some());
            prop_assert!(div_exact(&b, &g).is_some());
        }

        #[test]
        fn gcd_contains_common_factor(a in nonzero_poly(), b in nonzero_poly(), f in nonzero_poly()) {
            let g = multi_gcd(&a.mul(&f), &b.mul(&f));
            prop_assert!(div_exact(&g, &f).is_some());
        }
    }
}
