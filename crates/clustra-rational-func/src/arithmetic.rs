//! Field operations on rational functions.
//!
//! Products cross-cancel before multiplying so that operands stay small;
//! sums with equal denominators skip the cross multiplication.

use std::ops::{Add, Div, Mul, Neg, Sub};

use clustra_poly::algorithms::division::div_exact;
use clustra_poly::algorithms::gcd::multi_gcd;
use clustra_poly::MultiPoly;
use clustra_rings::Z;

use crate::RationalFunction;

/// Removes `g` from `p` when it is a non-trivial factor.
fn cancel(p: &MultiPoly<Z>, g: &MultiPoly<Z>) -> MultiPoly<Z> {
    if g.is_one() {
        p.clone()
    } else {
        div_exact(p, g).expect("gcd divides its argument")
    }
}

impl RationalFunction {
    fn check_vars(&self, other: &Self) {
        assert_eq!(
            self.num_vars(),
            other.num_vars(),
            "rational functions over different variable counts"
        );
    }

    /// Adds two rational functions by reference.
    #[must_use]
    pub fn add_ref(&self, other: &Self) -> Self {
        self.check_vars(other);
        if self.is_zero() {
            return other.clone();
        }
        if other.is_zero() {
            return self.clone();
        }

        // a/b + c/b = (a + c) / b
        if self.denominator() == other.denominator() {
            let num = self.numerator().add(other.numerator());
            return Self::new(num, self.denominator().clone());
        }

        // a/b + c/d = (ad + bc) / bd
        let num = self
            .numerator()
            .mul(other.denominator())
            .add(&other.numerator().mul(self.denominator()));
        let den = self.denominator().mul(other.denominator());
        Self::new(num, den)
    }

    /// Subtracts another rational function from this one.
    #[must_use]
    pub fn sub_ref(&self, other: &Self) -> Self {
        self.add_ref(&other.neg_ref())
    }

    /// Multiplies two rational functions.
    ///
    /// With both operands canonical, `(a/b)·(c/d)` only needs the cross
    /// gcds `gcd(a, d)` and `gcd(c, b)` removed.
    #[must_use]
    pub fn mul_ref(&self, other: &Self) -> Self {
        self.check_vars(other);
        if self.is_zero() || other.is_zero() {
            return Self::zero(self.num_vars());
        }

        let g1 = multi_gcd(self.numerator(), other.denominator());
        let g2 = multi_gcd(other.numerator(), self.denominator());

        let num = cancel(self.numerator(), &g1).mul(&cancel(other.numerator(), &g2));
        let den = cancel(self.denominator(), &g2).mul(&cancel(other.denominator(), &g1));
        Self::from_coprime(num, den)
    }

    /// Divides this rational function by another.
    ///
    /// # Panics
    ///
    /// Panics if `other` is zero.
    #[must_use]
    pub fn div_ref(&self, other: &Self) -> Self {
        let inv = other.inv().expect("division by zero");
        self.mul_ref(&inv)
    }

    /// Negates.
    #[must_use]
    pub fn neg_ref(&self) -> Self {
        Self::from_coprime(self.numerator().neg(), self.denominator().clone())
    }

    /// Computes the multiplicative inverse.
    ///
    /// Returns `None` if this is zero.
    #[must_use]
    pub fn inv(&self) -> Option<Self> {
        if self.is_zero() {
            None
        } else {
            Some(Self::from_coprime(
                self.denominator().clone(),
                self.numerator().clone(),
            ))
        }
    }

    /// Raises to an integer power.
    ///
    /// Returns `None` for a negative power of zero.
    #[must_use]
    pub fn pow(&self, n: i32) -> Option<Self> {
        let base = if n < 0 { self.inv()? } else { self.clone() };
        let exp = n.unsigned_abs();

        // Powers of coprime polynomials stay coprime.
        Some(Self::from_coprime(
            base.numerator().pow(exp),
            base.denominator().pow(exp),
        ))
    }
}

macro_rules! forward_binop {
    ($trait:ident, $method:ident, $impl_fn:ident) => {
        impl $trait for RationalFunction {
            type Output = RationalFunction;

            fn $method(self, other: RationalFunction) -> RationalFunction {
                self.$impl_fn(&other)
            }
        }

        impl $trait<&RationalFunction> for RationalFunction {
            type Output = RationalFunction;

            fn $method(self, other: &RationalFunction) -> RationalFunction {
                self.$impl_fn(other)
            }
        }

        impl $trait<&RationalFunction> for &RationalFunction {
            type Output = RationalFunction;

            fn $method(self, other: &RationalFunction) -> RationalFunction {
                self.$impl_fn(other)
            }
        }
    };
}

forward_binop!(Add, add, add_ref);
forward_binop!(Sub, sub, sub_ref);
forward_binop!(Mul, mul, mul_ref);
forward_binop!(Div, div, div_ref);

impl Neg for RationalFunction {
    type Output = RationalFunction;

    fn neg(self) -> RationalFunction {
        self.neg_ref()
    }
}

impl Neg for &RationalFunction {
    type Output = RationalFunction;

    fn neg(self) -> RationalFunction {
        self.neg_ref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clustra_integers::Integer;

    fn x(i: usize) -> RationalFunction {
        RationalFunction::var(i, 3)
    }

    fn int(n: i64) -> RationalFunction {
        RationalFunction::constant(Integer::new(n), 3)
    }

    #[test]
    fn test_add_same_denominator() {
        // 1/x0 + 1/x0 = 2/x0
        let a = &int(1) / &x(0);
        let sum = &a + &a;
        assert_eq!(sum, &int(2) / &x(0));
    }

    #[test]
    fn test_add_different_denominators() {
        // 1/x0 + 1/x1 = (x0 + x1)/(x0*x1)
        let sum = &(&int(1) / &x(0)) + &(&int(1) / &x(1));
        assert_eq!(sum.numerator(), (&x(0) + &x(1)).numerator());
        assert_eq!(sum.denominator(), (&x(0) * &x(1)).numerator());
    }

    #[test]
    fn test_sum_cancels() {
        // x0/(x0 + x1) + x1/(x0 + x1) = 1
        let s = &x(0) + &x(1);
        let sum = &(&x(0) / &s) + &(&x(1) / &s);
        assert!(sum.is_one());
    }

    #[test]
    fn test_mul_cross_cancels() {
        // (x0/x1) * (x1/x0) = 1
        let a = &x(0) / &x(1);
        let b = &x(1) / &x(0);
        assert!((&a * &b).is_one());

        // ((x0 + 1)/x1) * (x1^2/(x0 + 1)) = x1
        let p = &x(0) + &int(1);
        let c = &p / &x(1);
        let d = &x(1).pow(2).unwrap() / &p;
        assert_eq!(c * d, x(1));
    }

    #[test]
    fn test_div_and_inv() {
        let a = &(&x(0) + &x(2)) / &x(1);
        let inv = a.inv().unwrap();
        assert!((&a * &inv).is_one());
        assert!(RationalFunction::zero(3).inv().is_none());
        assert!((&a / &a).is_one());
    }

    #[test]
    fn test_negative_pow() {
        let a = &x(0) / &x(1);
        let p = a.pow(-2).unwrap();
        assert_eq!(p, &x(1).pow(2).unwrap() / &x(0).pow(2).unwrap());
        assert!(a.pow(0).unwrap().is_one());
        assert!(RationalFunction::zero(3).pow(-1).is_none());
    }

    #[test]
    fn test_neg_keeps_denominator_positive() {
        let a = -(&x(0) / &x(1));
        assert!(!a.denominator().is_leading_negative());
        assert!(a.numerator().is_leading_negative());
        assert!((&a + &(&x(0) / &x(1))).is_zero());
    }

    #[test]
    #[should_panic(expected = "division by zero")]
    fn test_div_by_zero_panics() {
        let _ = &x(0) / &RationalFunction::zero(3);
    }
}
