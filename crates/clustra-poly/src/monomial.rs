//! Exponent-vector monomials.
//!
//! A monomial over `n` variables is stored as its `n` exponents. Seeds of
//! rank up to four with principal coefficients fit inline; larger ones spill
//! to the heap.

use std::cmp::Ordering;

use smallvec::SmallVec;

/// A monomial `x0^e0 * x1^e1 * ...` stored as its exponent vector.
#[derive(Clone, PartialEq, Eq, Hash, Debug, Default)]
pub struct Monomial(SmallVec<[u32; 8]>);

impl Monomial {
    /// Creates the monomial 1 over `num_vars` variables.
    #[must_use]
    pub fn one(num_vars: usize) -> Self {
        Self(SmallVec::from_elem(0, num_vars))
    }

    /// Creates the monomial `x_i`.
    ///
    /// # Panics
    ///
    /// Panics if `i >= num_vars`.
    #[must_use]
    pub fn var(i: usize, num_vars: usize) -> Self {
        assert!(i < num_vars, "variable index {i} out of range for {num_vars} variables");
        let mut m = Self::one(num_vars);
        m.0[i] = 1;
        m
    }

    /// Creates a monomial from exponents.
    #[must_use]
    pub fn from_exponents(exps: &[u32]) -> Self {
        Self(SmallVec::from_slice(exps))
    }

    /// Returns the number of variables.
    #[must_use]
    pub fn num_vars(&self) -> usize {
        self.0.len()
    }

    /// Returns the exponent of variable `i`.
    #[must_use]
    pub fn exponent(&self, i: usize) -> u32 {
        self.0[i]
    }

    /// Returns all exponents.
    #[must_use]
    pub fn exponents(&self) -> &[u32] {
        &self.0
    }

    /// Returns true if every exponent is zero.
    #[must_use]
    pub fn is_one(&self) -> bool {
        self.0.iter().all(|&e| e == 0)
    }

    /// Multiplies two monomials (adds exponents).
    #[must_use]
    pub fn mul(&self, other: &Self) -> Self {
        debug_assert_eq!(self.num_vars(), other.num_vars());
        Self(self.0.iter().zip(&other.0).map(|(a, b)| a + b).collect())
    }

    /// Raises to a power (scales exponents).
    #[must_use]
    pub fn pow(&self, e: u32) -> Self {
        Self(self.0.iter().map(|a| a * e).collect())
    }

    /// Divides by `other`, or `None` if `other` does not divide `self`.
    #[must_use]
    pub fn div(&self, other: &Self) -> Option<Self> {
        debug_assert_eq!(self.num_vars(), other.num_vars());
        self.0
            .iter()
            .zip(&other.0)
            .map(|(a, b)| a.checked_sub(*b))
            .collect::<Option<SmallVec<_>>>()
            .map(Self)
    }

    /// Returns true if `self` divides `other`.
    #[must_use]
    pub fn divides(&self, other: &Self) -> bool {
        self.0.iter().zip(&other.0).all(|(a, b)| a <= b)
    }

    /// Computes the total degree.
    #[must_use]
    pub fn total_degree(&self) -> u32 {
        self.0.iter().sum()
    }

    /// Exponent-wise maximum.
    #[must_use]
    pub fn lcm(&self, other: &Self) -> Self {
        Self(self.0.iter().zip(&other.0).map(|(a, b)| *a.max(b)).collect())
    }

    /// Exponent-wise minimum.
    #[must_use]
    pub fn gcd(&self, other: &Self) -> Self {
        Self(self.0.iter().zip(&other.0).map(|(a, b)| *a.min(b)).collect())
    }

    /// Returns a copy with the exponent of variable `i` replaced.
    #[must_use]
    pub fn with_exponent(&self, i: usize, e: u32) -> Self {
        let mut m = self.clone();
        m.0[i] = e;
        m
    }

    /// Keeps only the first `num_vars` exponents.
    ///
    /// Returns `None` if a dropped variable has a positive exponent.
    #[must_use]
    pub fn project(&self, num_vars: usize) -> Option<Self> {
        if self.0[num_vars.min(self.0.len())..].iter().any(|&e| e > 0) {
            return None;
        }
        let mut exps = self.0.clone();
        exps.resize(num_vars, 0);
        Some(Self(exps))
    }

    /// Writes the monomial using the given variable names, e.g. `x0^2*y1`.
    ///
    /// Writes nothing for the monomial 1.
    ///
    /// # Errors
    ///
    /// Propagates formatter errors.
    pub fn fmt_with<S: AsRef<str>>(&self, names: &[S], f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut first = true;
        for (i, &e) in self.0.iter().enumerate() {
            if e == 0 {
                continue;
            }
            if !first {
                write!(f, "*")?;
            }
            first = false;
            match names.get(i) {
                Some(name) => write!(f, "{}", name.as_ref())?,
                None => write!(f, "x{i}")?,
            }
            if e > 1 {
                write!(f, "^{e}")?;
            }
        }
        Ok(())
    }
}

/// Compares two monomials lexicographically.
#[must_use]
pub fn cmp_lex(a: &Monomial, b: &Monomial) -> Ordering {
    a.0.iter().cmp(b.0.iter())
}

/// Compares two monomials by graded lexicographic order.
#[must_use]
pub fn cmp_grlex(a: &Monomial, b: &Monomial) -> Ordering {
    a.total_degree()
        .cmp(&b.total_degree())
        .then_with(|| cmp_lex(a, b))
}

/// Compares two monomials by graded reverse lexicographic order.
#[must_use]
pub fn cmp_grevlex(a: &Monomial, b: &Monomial) -> Ordering {
    a.total_degree().cmp(&b.total_degree()).then_with(|| {
        // smaller exponent in the last differing variable wins
        for (ea, eb) in a.0.iter().zip(&b.0).rev() {
            match eb.cmp(ea) {
                Ordering::Equal => continue,
                ord => return ord,
            }
        }
        Ordering::Equal
    })
}
