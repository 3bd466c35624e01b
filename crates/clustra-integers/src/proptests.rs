//! Property-based tests for exact arithmetic.

#[cfg(test)]
mod tests {
    use num_traits::Zero;
    use proptest::prelude::*;

    use crate::{Integer, Rational};

    fn small_int() -> impl Strategy<Value = i64> {
        -1000i64..1000i64
    }

    fn non_zero_int() -> impl Strategy<Value = i64> {
        prop_oneof![(-1000i64..=-1i64), (1i64..=1000i64)]
    }

    proptest! {
        #[test]
        fn integer_ring_laws(a in small_int(), b in small_int(), c in small_int()) {
            let (a, b, c) = (Integer::new(a), Integer::new(b), Integer::new(c));
            prop_assert_eq!(&a + &b, &b + &a);
            prop_assert_eq!(&a * &b, &b * &a);
            prop_assert_eq!(&a * &(&b + &c), &(&a * &b) + &(&a * &c));
        }

        #[test]
        fn gcd_divides_both(a in small_int(), b in non_zero_int()) {
            let (a, b) = (Integer::new(a), Integer::new(b));
            let g = a.gcd(&b);
            prop_assert!(!g.is_negative());
            prop_assert!(a.div_exact(&g).is_some());
            prop_assert!(b.div_exact(&g).is_some());
        }

        #[test]
        fn div_exact_inverts_mul(a in small_int(), b in non_zero_int()) {
            let (a, b) = (Integer::new(a), Integer::new(b));
            prop_assert_eq!((&a * &b).div_exact(&b), Some(a));
        }

        #[test]
        fn rational_recip_is_inverse(n in non_zero_int(), d in non_zero_int()) {
            let r = Rational::from_i64(n, d);
            let inv = r.recip().unwrap();
            let prod = &r * &inv;
            prop_assert!(!prod.is_zero());
            prop_assert_eq!(prod, Rational::from(1i64));
        }

        #[test]
        fn rational_denominator_positive(n in small_int(), d in non_zero_int()) {
            let r = Rational::from_i64(n, d);
            prop_assert!(!r.denominator().is_negative());
            prop_assert!(!r.denominator().is_zero());
        }
    }
}
