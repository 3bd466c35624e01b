//! Core rational function type.
//!
//! A rational function is a quotient `N / D` of polynomials in
//! `Z[x_0, .., x_{k-1}]`. The representation is canonical:
//! - `N` and `D` are coprime in `Z[x]` (no common polynomial or integer
//!   factor)
//! - the leading coefficient of `D` is positive
//! - zero is represented as `0 / 1`
//!
//! so two rational functions are equal iff their numerators and
//! denominators are equal.

use clustra_integers::{Integer, Rational};
use clustra_poly::algorithms::division::div_exact;
use clustra_poly::algorithms::gcd::multi_gcd;
use clustra_poly::{MonomialOrder, MultiPoly};
use clustra_rings::Z;

/// Ordering used for every polynomial inside a rational function.
pub(crate) const ORDER: MonomialOrder = MonomialOrder::Grevlex;

/// An element of `Frac(Z[x_0, .., x_{k-1}])`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RationalFunction {
    numerator: MultiPoly<Z>,
    denominator: MultiPoly<Z>,
}

impl RationalFunction {
    /// Creates a rational function and reduces it to canonical form.
    ///
    /// # Panics
    ///
    /// Panics if the denominator is zero or the variable counts differ.
    #[must_use]
    pub fn new(numerator: MultiPoly<Z>, denominator: MultiPoly<Z>) -> Self {
        Self::try_new(numerator, denominator).expect("denominator cannot be zero")
    }

    /// Creates a rational function, or `None` if the denominator is zero.
    #[must_use]
    pub fn try_new(numerator: MultiPoly<Z>, denominator: MultiPoly<Z>) -> Option<Self> {
        assert_eq!(
            numerator.num_vars(),
            denominator.num_vars(),
            "numerator and denominator must share variables"
        );
        if denominator.is_zero() {
            return None;
        }

        let mut rf = Self {
            numerator,
            denominator,
        };
        rf.normalize();
        Some(rf)
    }

    /// Wraps numerator and denominator that are already coprime; only the
    /// sign is fixed up.
    pub(crate) fn from_coprime(numerator: MultiPoly<Z>, denominator: MultiPoly<Z>) -> Self {
        if numerator.is_zero() {
            let num_vars = numerator.num_vars();
            return Self::zero(num_vars);
        }
        if denominator.is_leading_negative() {
            Self {
                numerator: numerator.neg(),
                denominator: denominator.neg(),
            }
        } else {
            Self {
                numerator,
                denominator,
            }
        }
    }

    /// Creates a rational function from a polynomial (denominator 1).
    #[must_use]
    pub fn from_poly(p: MultiPoly<Z>) -> Self {
        let denominator = MultiPoly::one(p.num_vars(), p.order());
        Self {
            numerator: p,
            denominator,
        }
    }

    /// Creates zero over `num_vars` variables.
    #[must_use]
    pub fn zero(num_vars: usize) -> Self {
        Self {
            numerator: MultiPoly::zero(num_vars, ORDER),
            denominator: MultiPoly::one(num_vars, ORDER),
        }
    }

    /// Creates one over `num_vars` variables.
    #[must_use]
    pub fn one(num_vars: usize) -> Self {
        Self::constant(Integer::new(1), num_vars)
    }

    /// Creates an integer constant.
    #[must_use]
    pub fn constant(c: Integer, num_vars: usize) -> Self {
        Self::from_poly(MultiPoly::constant(Z(c), num_vars, ORDER))
    }

    /// Creates a rational constant.
    #[must_use]
    pub fn from_rational(c: &Rational, num_vars: usize) -> Self {
        Self::from_coprime(
            MultiPoly::constant(Z(c.numerator()), num_vars, ORDER),
            MultiPoly::constant(Z(c.denominator()), num_vars, ORDER),
        )
    }

    /// Creates the generator `x_i`.
    #[must_use]
    pub fn var(i: usize, num_vars: usize) -> Self {
        Self::from_poly(MultiPoly::var(i, num_vars, ORDER))
    }

    /// Returns the numerator.
    #[must_use]
    pub fn numerator(&self) -> &MultiPoly<Z> {
        &self.numerator
    }

    /// Returns the denominator.
    #[must_use]
    pub fn denominator(&self) -> &MultiPoly<Z> {
        &self.denominator
    }

    /// Returns the number of variables.
    #[must_use]
    pub fn num_vars(&self) -> usize {
        self.numerator.num_vars()
    }

    /// Returns true if this is zero.
    #[must_use]
    pub fn is_zero(&self) -> bool {
        self.numerator.is_zero()
    }

    /// Returns true if this is one.
    #[must_use]
    pub fn is_one(&self) -> bool {
        self.numerator.is_one() && self.denominator.is_one()
    }

    /// Returns true if the denominator is 1.
    #[must_use]
    pub fn is_polynomial(&self) -> bool {
        self.denominator.is_one()
    }

    /// Returns true if the denominator is a single term, i.e. the function
    /// is a Laurent polynomial (up to an integer denominator).
    #[must_use]
    pub fn is_laurent(&self) -> bool {
        self.denominator.is_monomial()
    }

    /// Reduces to canonical form.
    fn normalize(&mut self) {
        let num_vars = self.num_vars();
        if self.numerator.is_zero() {
            self.denominator = MultiPoly::one(num_vars, ORDER);
            return;
        }

        if !self.denominator.is_one() {
            let g = multi_gcd(&self.numerator, &self.denominator);
            if !g.is_one() {
                self.numerator = div_exact(&self.numerator, &g).expect("gcd divides numerator");
                self.denominator = div_exact(&self.denominator, &g).expect("gcd divides denominator");
            }
        }

        if self.denominator.is_leading_negative() {
            self.numerator = self.numerator.neg();
            self.denominator = self.denominator.neg();
        }
    }

    /// Degree in each variable of the numerator minus that of the
    /// denominator.
    #[must_use]
    pub fn degree_vector(&self) -> Vec<i64> {
        self.numerator
            .degrees()
            .into_iter()
            .zip(self.denominator.degrees())
            .map(|(a, b)| i64::from(a) - i64::from(b))
            .collect()
    }

    /// Substitutes integer values for variables.
    ///
    /// Returns `None` if the denominator vanishes under the substitution.
    #[must_use]
    pub fn subs(&self, assignments: &[(usize, Integer)]) -> Option<Self> {
        let mut num = self.numerator.clone();
        let mut den = self.denominator.clone();
        for (var, value) in assignments {
            let value = Z(value.clone());
            num = num.substitute(*var, &value);
            den = den.substitute(*var, &value);
        }
        Self::try_new(num, den)
    }

    /// Re-embeds into the first `num_vars` variables.
    ///
    /// Returns `None` if a dropped variable still occurs.
    #[must_use]
    pub fn project(&self, num_vars: usize) -> Option<Self> {
        Some(Self {
            numerator: self.numerator.project(num_vars)?,
            denominator: self.denominator.project(num_vars)?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn x(i: usize) -> RationalFunction {
        RationalFunction::var(i, 3)
    }

    fn int(n: i64) -> RationalFunction {
        RationalFunction::constant(Integer::new(n), 3)
    }

    #[test]
    fn test_cancels_common_factor() {
        // (x0^2 - x1^2) / (x0 + x1) = x0 - x1
        let num = x(0).numerator().pow(2).sub(&x(1).numerator().pow(2));
        let den = x(0).numerator().add(x(1).numerator());
        let rf = RationalFunction::new(num, den);

        assert!(rf.is_polynomial());
        assert_eq!(rf, &x(0) - &x(1));
    }

    #[test]
    fn test_denominator_sign_is_canonical() {
        let rf = RationalFunction::new(x(0).numerator().clone(), x(1).numerator().neg());
        assert!(!rf.denominator().is_leading_negative());
        assert_eq!(rf, -(&x(0) / &x(1)));
    }

    #[test]
    fn test_integer_content_cancels() {
        let num = x(0).numerator().scale(&Z::new(4));
        let den = x(1).numerator().scale(&Z::new(6));
        let rf = RationalFunction::new(num, den);
        assert_eq!(rf.numerator(), &x(0).numerator().scale(&Z::new(2)));
        assert_eq!(rf.denominator(), &x(1).numerator().scale(&Z::new(3)));
    }

    #[test]
    fn test_zero_is_canonical() {
        let zero = &x(0) - &x(0);
        assert!(zero.is_zero());
        assert_eq!(zero, RationalFunction::zero(3));
    }

    #[test]
    fn test_from_rational() {
        let half = RationalFunction::from_rational(&Rational::from_i64(-1, 2), 3);
        assert_eq!(&half + &half, int(-1));
    }

    #[test]
    fn test_degree_vector() {
        // (x0^2*x2 + 1) / (x1*x2^3)
        let rf = &(&x(0).pow(2).unwrap() * &x(2)) + &int(1);
        let rf = &rf / &(&x(1) * &x(2).pow(3).unwrap());
        assert_eq!(rf.degree_vector(), vec![2, -1, -2]);
        assert!(rf.is_laurent());
    }

    #[test]
    fn test_subs() {
        // (x0 + x1) / x2 at x2 = 2, x1 = 1 -> (x0 + 1) / 2
        let rf = &(&x(0) + &x(1)) / &x(2);
        let s = rf.subs(&[(2, Integer::new(2)), (1, Integer::new(1))]).unwrap();
        let expected = &(&x(0) + &int(1)) / &int(2);
        assert_eq!(s, expected);

        // pole
        assert!(rf.subs(&[(2, Integer::new(0))]).is_none());
    }

    #[test]
    fn test_project() {
        let rf = &x(0) / &x(1);
        let p = rf.project(2).unwrap();
        assert_eq!(p.num_vars(), 2);
        assert!(x(2).project(2).is_none());
    }

    #[test]
    #[should_panic(expected = "denominator cannot be zero")]
    fn test_zero_denominator_panics() {
        let _ = RationalFunction::new(x(0).numerator().clone(), MultiPoly::zero(3, ORDER));
    }
}
