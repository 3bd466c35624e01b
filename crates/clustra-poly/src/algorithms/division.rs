//! Exact multivariate division.
//!
//! Division by leading terms succeeds exactly when the divisor divides the
//! dividend: every step cancels the leading term of the running remainder,
//! and the leading monomials strictly decrease in the (well-)ordering, so
//! the loop terminates either with a zero remainder or at a leading term
//! that the divisor's leading term does not divide.

use clustra_rings::traits::EuclideanDomain;

use crate::sparse::MultiPoly;

/// Computes `a / b` if `b` divides `a` exactly, `None` otherwise.
///
/// Returns `None` when `b` is zero.
#[must_use]
pub fn div_exact<R: EuclideanDomain>(a: &MultiPoly<R>, b: &MultiPoly<R>) -> Option<MultiPoly<R>> {
    let (lm_b, lc_b) = b.leading_term()?;

    if let Some(c) = b.as_constant() {
        let terms = a
            .terms()
            .iter()
            .map(|(m, x)| x.div_exact(c).map(|q| (m.clone(), q)))
            .collect::<Option<Vec<_>>>()?;
        return Some(MultiPoly::new(terms, a.num_vars(), a.order()));
    }

    let mut quotient = Vec::new();
    let mut rem = a.clone();

    while let Some((lm, lc)) = rem.leading_term() {
        let m = lm.div(lm_b)?;
        let c = lc.div_exact(lc_b)?;
        rem = rem.sub(&b.mul_monomial(&m, &c));
        quotient.push((m, c));
    }

    Some(MultiPoly::new(quotient, a.num_vars(), a.order()))
}

/// Divides every coefficient by the scalar `c`, which must divide all of
/// them.
///
/// # Panics
///
/// Panics if some coefficient is not divisible by `c`.
#[must_use]
pub fn div_scalar<R: EuclideanDomain>(p: &MultiPoly<R>, c: &R) -> MultiPoly<R> {
    if c.is_one() {
        return p.clone();
    }
    let terms = p
        .terms()
        .iter()
        .map(|(m, x)| {
            let q = x.div_exact(c).expect("scalar must divide every coefficient");
            (m.clone(), q)
        })
        .collect();
    MultiPoly::new(terms, p.num_vars(), p.order())
}
