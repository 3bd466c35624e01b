//! Multivariate polynomial GCD.
//!
//! The GCD over a Euclidean domain `R` is computed recursively: pick a main
//! variable `v`, view both inputs as polynomials in `v` with coefficients in
//! `R[other variables]`, split off contents, and run a primitive
//! pseudo-remainder sequence. Contents are combined through recursive GCD
//! calls on polynomials that do not involve `v`, so the recursion bottoms
//! out at constants.
//!
//! Two fast paths cover the common shapes of Laurent cluster variables:
//! constants and single terms. A single term `c * m` shares with `p` only
//! the gcd of `c` with the integer content of `p` and the exponent-wise
//! minimum of `m` with the monomials of `p`.
//!
//! Results are normalized to have a non-negative leading coefficient.

use clustra_rings::traits::{EuclideanDomain, OrderedRing};

use crate::algorithms::division::{div_exact, div_scalar};
use crate::sparse::MultiPoly;

/// GCD of all coefficients (zero for the zero polynomial).
#[must_use]
pub fn content<R: EuclideanDomain>(p: &MultiPoly<R>) -> R {
    p.terms()
        .iter()
        .map(|(_, c)| c.clone())
        .reduce(|a, b| a.gcd(&b))
        .unwrap_or_else(R::zero)
}

/// Divides out the coefficient content.
#[must_use]
pub fn primitive_part<R: EuclideanDomain + OrderedRing>(p: &MultiPoly<R>) -> MultiPoly<R> {
    let c = content(p);
    if c.is_zero() {
        return p.clone();
    }
    normalize_sign(&div_scalar(p, &c.abs()))
}

/// Negates `p` if its leading coefficient is negative.
#[must_use]
pub fn normalize_sign<R: OrderedRing>(p: &MultiPoly<R>) -> MultiPoly<R> {
    if p.is_leading_negative() {
        p.neg()
    } else {
        p.clone()
    }
}

/// Greatest common divisor of two multivariate polynomials.
///
/// `gcd(0, 0) = 0`. Otherwise the result divides both inputs and has a
/// positive leading coefficient.
///
/// # Panics
///
/// Panics if the polynomials have different variable counts or orderings.
#[must_use]
pub fn multi_gcd<R: EuclideanDomain + OrderedRing>(a: &MultiPoly<R>, b: &MultiPoly<R>) -> MultiPoly<R> {
    assert_eq!(a.num_vars(), b.num_vars(), "variable count mismatch");

    if a.is_zero() {
        return normalize_sign(b);
    }
    if b.is_zero() {
        return normalize_sign(a);
    }
    if a.is_constant() || b.is_constant() {
        let g = content(a).gcd(&content(b)).abs();
        return MultiPoly::constant(g, a.num_vars(), a.order());
    }
    if a.is_monomial() {
        return term_gcd(a, b);
    }
    if b.is_monomial() {
        return term_gcd(b, a);
    }

    let Some(var) = main_variable(a, b) else {
        // both constant, handled above
        return MultiPoly::one(a.num_vars(), a.order());
    };

    match (a.depends_on(var), b.depends_on(var)) {
        (true, false) => multi_gcd(&content_in(a, var), b),
        (false, true) => multi_gcd(a, &content_in(b, var)),
        _ => prs_gcd(a, b, var),
    }
}

/// GCD where `t` is a single term.
fn term_gcd<R: EuclideanDomain + OrderedRing>(t: &MultiPoly<R>, p: &MultiPoly<R>) -> MultiPoly<R> {
    let (m, c) = &t.terms()[0];
    let coeff = c.gcd(&content(p)).abs();
    let mono = m.gcd(&p.monomial_content());
    MultiPoly::term(mono, coeff, t.order())
}

/// Highest-index variable occurring in either polynomial.
fn main_variable<R: EuclideanDomain>(a: &MultiPoly<R>, b: &MultiPoly<R>) -> Option<usize> {
    (0..a.num_vars())
        .rev()
        .find(|&v| a.depends_on(v) || b.depends_on(v))
}

/// Splits `p` into coefficients of powers of `var`; index `i` holds the
/// coefficient of `var^i`.
fn coefficients_in<R: EuclideanDomain>(p: &MultiPoly<R>, var: usize) -> Vec<MultiPoly<R>> {
    let deg = p.degree(var) as usize;
    let mut buckets: Vec<Vec<_>> = vec![Vec::new(); deg + 1];
    for (m, c) in p.terms() {
        buckets[m.exponent(var) as usize].push((m.with_exponent(var, 0), c.clone()));
    }
    buckets
        .into_iter()
        .map(|terms| MultiPoly::new(terms, p.num_vars(), p.order()))
        .collect()
}

/// Reassembles `sum coeffs[i] * var^i`.
fn from_coefficients<R: EuclideanDomain>(
    coeffs: &[MultiPoly<R>],
    var: usize,
    num_vars: usize,
    order: crate::ordering::MonomialOrder,
) -> MultiPoly<R> {
    let mut terms = Vec::new();
    for (i, coeff) in coeffs.iter().enumerate() {
        let e = u32::try_from(i).expect("degree fits in u32");
        for (m, c) in coeff.terms() {
            terms.push((m.with_exponent(var, e), c.clone()));
        }
    }
    MultiPoly::new(terms, num_vars, order)
}

/// Content of `p` viewed as a polynomial in `var`.
fn content_in<R: EuclideanDomain + OrderedRing>(p: &MultiPoly<R>, var: usize) -> MultiPoly<R> {
    gcd_of_all(&coefficients_in(p, var))
}

fn gcd_of_all<R: EuclideanDomain + OrderedRing>(coeffs: &[MultiPoly<R>]) -> MultiPoly<R> {
    let mut g: Option<MultiPoly<R>> = None;
    for c in coeffs.iter().filter(|c| !c.is_zero()) {
        let next = match &g {
            None => normalize_sign(c),
            Some(acc) => multi_gcd(acc, c),
        };
        if next.is_one() {
            return next;
        }
        g = Some(next);
    }
    g.expect("at least one non-zero coefficient")
}

/// Makes a coefficient vector primitive in its main variable.
fn primitive_in<R: EuclideanDomain + OrderedRing>(coeffs: Vec<MultiPoly<R>>) -> Vec<MultiPoly<R>> {
    let g = gcd_of_all(&coeffs);
    if g.is_one() {
        return coeffs;
    }
    coeffs
        .iter()
        .map(|c| div_exact(c, &g).expect("content divides every coefficient"))
        .collect()
}

fn trim<R: EuclideanDomain>(coeffs: &mut Vec<MultiPoly<R>>) {
    while coeffs.last().is_some_and(MultiPoly::is_zero) {
        coeffs.pop();
    }
}

/// Pseudo-remainder of `f` by `g` (both coefficient vectors in the main
/// variable, `g` non-zero): repeatedly replaces `f` by
/// `lc(g) * f - lc(f) * v^(deg f - deg g) * g`.
fn pseudo_remainder<R: EuclideanDomain>(f: &[MultiPoly<R>], g: &[MultiPoly<R>]) -> Vec<MultiPoly<R>> {
    let d = g.len() - 1;
    let lc_g = &g[d];
    let mut r = f.to_vec();
    trim(&mut r);

    while r.len() > d {
        let shift = r.len() - 1 - d;
        let lc_r = r[r.len() - 1].clone();
        for coeff in &mut r {
            *coeff = coeff.mul(lc_g);
        }
        for (i, gi) in g.iter().enumerate() {
            r[i + shift] = r[i + shift].sub(&lc_r.mul(gi));
        }
        trim(&mut r);
    }

    r
}

/// GCD of two polynomials that both involve `var`.
fn prs_gcd<R: EuclideanDomain + OrderedRing>(a: &MultiPoly<R>, b: &MultiPoly<R>, var: usize) -> MultiPoly<R> {
    let (num_vars, order) = (a.num_vars(), a.order());

    let ca = content_in(a, var);
    let cb = content_in(b, var);
    let c = multi_gcd(&ca, &cb);

    let pa = div_exact(a, &ca).expect("content divides polynomial");
    let pb = div_exact(b, &cb).expect("content divides polynomial");

    let mut f = coefficients_in(&pa, var);
    let mut g = coefficients_in(&pb, var);
    if f.len() < g.len() {
        std::mem::swap(&mut f, &mut g);
    }

    loop {
        let r = pseudo_remainder(&f, &g);
        f = g;
        if r.is_empty() {
            break;
        }
        if r.len() == 1 {
            // non-zero remainder free of `var`: primitive parts are coprime
            return c;
        }
        g = primitive_in(r);
    }

    let primitive = primitive_in(f);
    normalize_sign(&c.mul(&from_coefficients(&primitive, var, num_vars, order)))
}
