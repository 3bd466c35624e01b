//! Sparse multivariate polynomials.
//!
//! Terms are kept as `(monomial, coefficient)` pairs sorted in descending
//! monomial order with no zero coefficients, so structural equality is
//! polynomial equality.

use std::cmp::Ordering;
use std::collections::hash_map::Entry;
use std::fmt;

use clustra_rings::traits::{OrderedRing, Ring};
use rustc_hash::FxHashMap;

use crate::monomial::Monomial;
use crate::ordering::MonomialOrder;

/// A sparse multivariate polynomial over a ring `R`.
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct MultiPoly<R: Ring> {
    /// Terms in descending monomial order.
    terms: Vec<(Monomial, R)>,
    /// Number of variables.
    num_vars: usize,
    /// Monomial ordering used for sorting.
    order: MonomialOrder,
}

impl<R: Ring> MultiPoly<R> {
    /// Creates a polynomial from arbitrary terms.
    ///
    /// Terms are sorted, like terms combined and zero terms dropped.
    #[must_use]
    pub fn new(terms: Vec<(Monomial, R)>, num_vars: usize, order: MonomialOrder) -> Self {
        debug_assert!(terms.iter().all(|(m, _)| m.num_vars() == num_vars));
        let mut poly = Self {
            terms,
            num_vars,
            order,
        };
        poly.normalize();
        poly
    }

    /// Creates the zero polynomial.
    #[must_use]
    pub fn zero(num_vars: usize, order: MonomialOrder) -> Self {
        Self {
            terms: Vec::new(),
            num_vars,
            order,
        }
    }

    /// Creates the constant polynomial 1.
    #[must_use]
    pub fn one(num_vars: usize, order: MonomialOrder) -> Self {
        Self::constant(R::one(), num_vars, order)
    }

    /// Creates a constant polynomial.
    #[must_use]
    pub fn constant(c: R, num_vars: usize, order: MonomialOrder) -> Self {
        Self::term(Monomial::one(num_vars), c, order)
    }

    /// Creates the single variable `x_i`.
    #[must_use]
    pub fn var(i: usize, num_vars: usize, order: MonomialOrder) -> Self {
        Self::term(Monomial::var(i, num_vars), R::one(), order)
    }

    /// Creates the single term `c * m`.
    #[must_use]
    pub fn term(m: Monomial, c: R, order: MonomialOrder) -> Self {
        let num_vars = m.num_vars();
        if c.is_zero() {
            return Self::zero(num_vars, order);
        }
        Self {
            terms: vec![(m, c)],
            num_vars,
            order,
        }
    }

    /// Returns true if this is the zero polynomial.
    #[must_use]
    pub fn is_zero(&self) -> bool {
        self.terms.is_empty()
    }

    /// Returns true if this is the constant 1.
    #[must_use]
    pub fn is_one(&self) -> bool {
        self.as_constant().is_some_and(Ring::is_one)
    }

    /// Returns true if the polynomial has no variables (zero included).
    #[must_use]
    pub fn is_constant(&self) -> bool {
        self.terms.iter().all(|(m, _)| m.is_one())
    }

    /// Returns the constant value if the polynomial is a non-zero constant.
    #[must_use]
    pub fn as_constant(&self) -> Option<&R> {
        match self.terms.as_slice() {
            [(m, c)] if m.is_one() => Some(c),
            _ => None,
        }
    }

    /// Returns true if the polynomial is a single term.
    #[must_use]
    pub fn is_monomial(&self) -> bool {
        self.terms.len() == 1
    }

    /// Returns the number of terms.
    #[must_use]
    pub fn len(&self) -> usize {
        self.terms.len()
    }

    /// Returns true if there are no terms.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.terms.is_empty()
    }

    /// Returns the number of variables.
    #[must_use]
    pub fn num_vars(&self) -> usize {
        self.num_vars
    }

    /// Returns the monomial ordering.
    #[must_use]
    pub fn order(&self) -> MonomialOrder {
        self.order
    }

    /// Returns the terms in descending order.
    #[must_use]
    pub fn terms(&self) -> &[(Monomial, R)] {
        &self.terms
    }

    /// Returns the leading term.
    #[must_use]
    pub fn leading_term(&self) -> Option<&(Monomial, R)> {
        self.terms.first()
    }

    /// Returns the leading monomial.
    #[must_use]
    pub fn leading_monomial(&self) -> Option<&Monomial> {
        self.terms.first().map(|(m, _)| m)
    }

    /// Returns the leading coefficient.
    #[must_use]
    pub fn leading_coeff(&self) -> Option<&R> {
        self.terms.first().map(|(_, c)| c)
    }

    /// Sorts terms and combines like terms.
    fn normalize(&mut self) {
        let order = self.order;
        self.terms.sort_by(|a, b| order.compare(&b.0, &a.0));

        let mut merged: Vec<(Monomial, R)> = Vec::with_capacity(self.terms.len());
        for (m, c) in self.terms.drain(..) {
            match merged.last_mut() {
                Some((last, acc)) if *last == m => {
                    let sum = acc.clone() + c;
                    *acc = sum;
                }
                _ => merged.push((m, c)),
            }
        }
        merged.retain(|(_, c)| !c.is_zero());
        self.terms = merged;
    }

    fn assert_compatible(&self, other: &Self) {
        assert_eq!(self.num_vars, other.num_vars, "variable count mismatch");
        assert_eq!(self.order, other.order, "monomial order mismatch");
    }

    /// Adds two polynomials by merging their sorted term lists.
    #[must_use]
    pub fn add(&self, other: &Self) -> Self {
        self.assert_compatible(other);

        let mut terms = Vec::with_capacity(self.len() + other.len());
        let mut lhs = self.terms.iter().peekable();
        let mut rhs = other.terms.iter().peekable();

        loop {
            let ord = match (lhs.peek(), rhs.peek()) {
                (Some((a, _)), Some((b, _))) => self.order.compare(a, b),
                (Some(_), None) => Ordering::Greater,
                (None, Some(_)) => Ordering::Less,
                (None, None) => break,
            };
            match ord {
                Ordering::Greater => terms.extend(lhs.next().cloned()),
                Ordering::Less => terms.extend(rhs.next().cloned()),
                Ordering::Equal => {
                    if let (Some((m, a)), Some((_, b))) = (lhs.next(), rhs.next()) {
                        let c = a.clone() + b.clone();
                        if !c.is_zero() {
                            terms.push((m.clone(), c));
                        }
                    }
                }
            }
        }

        Self {
            terms,
            num_vars: self.num_vars,
            order: self.order,
        }
    }

    /// Negates a polynomial.
    #[must_use]
    pub fn neg(&self) -> Self {
        Self {
            terms: self.terms.iter().map(|(m, c)| (m.clone(), -c.clone())).collect(),
            num_vars: self.num_vars,
            order: self.order,
        }
    }

    /// Subtracts two polynomials.
    #[must_use]
    pub fn sub(&self, other: &Self) -> Self {
        self.add(&other.neg())
    }

    /// Multiplies two polynomials, accumulating products in a hash map.
    #[must_use]
    pub fn mul(&self, other: &Self) -> Self {
        self.assert_compatible(other);

        if self.is_zero() || other.is_zero() {
            return Self::zero(self.num_vars, self.order);
        }
        if self.is_monomial() {
            let (m, c) = &self.terms[0];
            return other.mul_monomial(m, c);
        }
        if other.is_monomial() {
            let (m, c) = &other.terms[0];
            return self.mul_monomial(m, c);
        }

        let mut acc: FxHashMap<Monomial, R> = FxHashMap::default();
        for (m1, c1) in &self.terms {
            for (m2, c2) in &other.terms {
                let c = c1.clone() * c2.clone();
                match acc.entry(m1.mul(m2)) {
                    Entry::Occupied(mut e) => {
                        let sum = e.get().clone() + c;
                        *e.get_mut() = sum;
                    }
                    Entry::Vacant(e) => {
                        e.insert(c);
                    }
                }
            }
        }

        Self::new(acc.into_iter().collect(), self.num_vars, self.order)
    }

    /// Multiplies by a scalar.
    #[must_use]
    pub fn scale(&self, c: &R) -> Self {
        if c.is_zero() {
            return Self::zero(self.num_vars, self.order);
        }

        Self {
            terms: self
                .terms
                .iter()
                .map(|(m, x)| (m.clone(), x.clone() * c.clone()))
                .filter(|(_, x)| !x.is_zero())
                .collect(),
            num_vars: self.num_vars,
            order: self.order,
        }
    }

    /// Multiplies by the term `c * m`.
    ///
    /// Multiplying by a monomial preserves every monomial order, so no
    /// re-sorting is needed.
    #[must_use]
    pub fn mul_monomial(&self, m: &Monomial, c: &R) -> Self {
        if c.is_zero() {
            return Self::zero(self.num_vars, self.order);
        }

        Self {
            terms: self
                .terms
                .iter()
                .map(|(m2, c2)| (m.mul(m2), c2.clone() * c.clone()))
                .filter(|(_, x)| !x.is_zero())
                .collect(),
            num_vars: self.num_vars,
            order: self.order,
        }
    }

    /// Raises to a non-negative power by square-and-multiply.
    #[must_use]
    pub fn pow(&self, n: u32) -> Self {
        if self.is_monomial() {
            let (m, c) = &self.terms[0];
            return Self::term(m.pow(n), c.pow(n), self.order);
        }

        let mut result = Self::one(self.num_vars, self.order);
        let mut base = self.clone();
        let mut exp = n;

        while exp > 0 {
            if exp & 1 == 1 {
                result = result.mul(&base);
            }
            exp >>= 1;
            if exp > 0 {
                base = base.mul(&base);
            }
        }

        result
    }

    /// Computes the total degree (0 for the zero polynomial).
    #[must_use]
    pub fn total_degree(&self) -> u32 {
        self.terms
            .iter()
            .map(|(m, _)| m.total_degree())
            .max()
            .unwrap_or(0)
    }

    /// Computes the degree in variable `var`.
    #[must_use]
    pub fn degree(&self, var: usize) -> u32 {
        self.terms
            .iter()
            .map(|(m, _)| m.exponent(var))
            .max()
            .unwrap_or(0)
    }

    /// Computes the degree in every variable.
    #[must_use]
    pub fn degrees(&self) -> Vec<u32> {
        (0..self.num_vars).map(|v| self.degree(v)).collect()
    }

    /// Exponent-wise minimum over all terms: the largest monomial dividing
    /// the polynomial.
    #[must_use]
    pub fn monomial_content(&self) -> Monomial {
        self.terms
            .iter()
            .map(|(m, _)| m.clone())
            .reduce(|a, b| a.gcd(&b))
            .unwrap_or_else(|| Monomial::one(self.num_vars))
    }

    /// Returns true if some term has a positive exponent in `var`.
    #[must_use]
    pub fn depends_on(&self, var: usize) -> bool {
        self.terms.iter().any(|(m, _)| m.exponent(var) > 0)
    }

    /// Substitutes `value` for variable `var`.
    #[must_use]
    pub fn substitute(&self, var: usize, value: &R) -> Self {
        if !self.depends_on(var) {
            return self.clone();
        }

        let terms = self
            .terms
            .iter()
            .map(|(m, c)| {
                let e = m.exponent(var);
                (m.with_exponent(var, 0), c.clone() * value.pow(e))
            })
            .collect();

        Self::new(terms, self.num_vars, self.order)
    }

    /// Re-embeds into the first `num_vars` variables.
    ///
    /// Returns `None` if the polynomial involves a dropped variable.
    #[must_use]
    pub fn project(&self, num_vars: usize) -> Option<Self> {
        let terms = self
            .terms
            .iter()
            .map(|(m, c)| m.project(num_vars).map(|m| (m, c.clone())))
            .collect::<Option<Vec<_>>>()?;

        Some(Self::new(terms, num_vars, self.order))
    }
}

impl<R: OrderedRing> MultiPoly<R> {
    /// Returns true if the leading coefficient is negative.
    #[must_use]
    pub fn is_leading_negative(&self) -> bool {
        self.leading_coeff().is_some_and(OrderedRing::is_negative)
    }

    /// Returns a displayable view that prints with the given variable names.
    #[must_use]
    pub fn display_with<'a, S: AsRef<str>>(&'a self, names: &'a [S]) -> PolyDisplay<'a, R, S> {
        PolyDisplay { poly: self, names }
    }
}

/// Display adapter pairing a polynomial with variable names.
pub struct PolyDisplay<'a, R: Ring, S> {
    poly: &'a MultiPoly<R>,
    names: &'a [S],
}

impl<R: OrderedRing + fmt::Display, S: AsRef<str>> fmt::Display for PolyDisplay<'_, R, S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.poly.is_zero() {
            return write!(f, "0");
        }

        for (i, (m, c)) in self.poly.terms.iter().enumerate() {
            let negative = c.is_negative();
            if i == 0 {
                if negative {
                    write!(f, "-")?;
                }
            } else if negative {
                write!(f, " - ")?;
            } else {
                write!(f, " + ")?;
            }

            let abs = c.abs();
            if m.is_one() {
                write!(f, "{abs}")?;
            } else {
                if !abs.is_one() {
                    write!(f, "{abs}*")?;
                }
                m.fmt_with(self.names, f)?;
            }
        }

        Ok(())
    }
}

impl<R: OrderedRing + fmt::Display> fmt::Display for MultiPoly<R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let names: [&str; 0] = [];
        write!(f, "{}", self.display_with(&names))
    }
}
