//! The ambient field `Frac(Z[x0, .., x{n-1}, y0, .., y{m-1}])`.

use std::fmt;
use std::sync::Arc;

use clustra_integers::Integer;
use clustra_rings::Ring;

use crate::RationalFunction;

/// A rational function field with named generators.
///
/// Cloning is cheap; clones compare equal and share the name table.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct RationalFunctionField {
    names: Arc<[String]>,
}

impl RationalFunctionField {
    /// Creates a field with the given generator names, in order.
    #[must_use]
    pub fn new<S: Into<String>>(names: impl IntoIterator<Item = S>) -> Self {
        Self {
            names: names.into_iter().map(Into::into).collect(),
        }
    }

    /// Creates the field with generators `x0..x{n-1}, y0..y{m-1}`.
    #[must_use]
    pub fn with_cluster_names(n: usize, m: usize) -> Self {
        Self::new(
            (0..n)
                .map(|i| format!("x{i}"))
                .chain((0..m).map(|i| format!("y{i}"))),
        )
    }

    /// Returns the number of generators.
    #[must_use]
    pub fn ngens(&self) -> usize {
        self.names.len()
    }

    /// Returns the generator names.
    #[must_use]
    pub fn names(&self) -> &[String] {
        &self.names
    }

    /// Returns the `i`-th generator, if it exists.
    #[must_use]
    pub fn gen(&self, i: usize) -> Option<RationalFunction> {
        (i < self.ngens()).then(|| RationalFunction::var(i, self.ngens()))
    }

    /// Returns all generators.
    #[must_use]
    pub fn gens(&self) -> Vec<RationalFunction> {
        (0..self.ngens())
            .map(|i| RationalFunction::var(i, self.ngens()))
            .collect()
    }

    /// Returns zero.
    #[must_use]
    pub fn zero(&self) -> RationalFunction {
        RationalFunction::zero(self.ngens())
    }

    /// Returns one.
    #[must_use]
    pub fn one(&self) -> RationalFunction {
        RationalFunction::one(self.ngens())
    }

    /// Embeds an integer.
    #[must_use]
    pub fn constant(&self, c: i64) -> RationalFunction {
        RationalFunction::constant(Integer::new(c), self.ngens())
    }

    /// Returns true if `f` is an element of this field.
    #[must_use]
    pub fn contains(&self, f: &RationalFunction) -> bool {
        f.num_vars() == self.ngens()
    }

    /// Formats `f` with this field's generator names.
    #[must_use]
    pub fn display<'a>(&'a self, f: &'a RationalFunction) -> FieldDisplay<'a> {
        FieldDisplay { field: self, f }
    }
}

impl fmt::Display for RationalFunctionField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Fraction Field of Multivariate Polynomial Ring in {} over Rational Field",
            self.names.join(", ")
        )
    }
}

/// Display adapter returned by [`RationalFunctionField::display`].
pub struct FieldDisplay<'a> {
    field: &'a RationalFunctionField,
    f: &'a RationalFunction,
}

impl fmt::Display for FieldDisplay<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let names = self.field.names();
        let num = self.f.numerator();
        let den = self.f.denominator();

        if den.is_one() {
            return write!(f, "{}", num.display_with(names));
        }

        if num.len() > 1 {
            write!(f, "({})", num.display_with(names))?;
        } else {
            write!(f, "{}", num.display_with(names))?;
        }

        // A product of variables needs parentheses to survive the `/`.
        let bare = den.is_constant()
            || den.terms().first().is_some_and(|(mono, c)| {
                den.len() == 1
                    && c.is_one()
                    && mono.exponents().iter().filter(|&&e| e > 0).count() == 1
            });
        if bare {
            write!(f, "/{}", den.display_with(names))
        } else {
            write!(f, "/({})", den.display_with(names))
        }
    }
}
