//! Cluster variables: field elements tagged exchangeable or frozen.

use std::fmt;

use clustra_poly::MultiPoly;
use clustra_rational_func::{RationalFunction, RationalFunctionField};
use clustra_rings::Z;

/// Whether a variable can be mutated.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum VariableKind {
    /// A cluster variable proper.
    Exchangeable,
    /// A frozen variable (coefficient).
    Frozen,
}

/// An element of a seed's ground field with its classification.
///
/// Immutable; mutation replaces variables rather than changing them.
/// Equality compares the field elements only.
#[derive(Clone, Debug)]
pub struct ClusterVariable {
    value: RationalFunction,
    field: RationalFunctionField,
    kind: VariableKind,
}

impl ClusterVariable {
    /// Tags a field element.
    #[must_use]
    pub fn new(value: RationalFunction, field: RationalFunctionField, kind: VariableKind) -> Self {
        debug_assert!(field.contains(&value));
        Self { value, field, kind }
    }

    /// The field element.
    #[must_use]
    pub fn value(&self) -> &RationalFunction {
        &self.value
    }

    /// Consumes and returns the field element.
    #[must_use]
    pub fn into_value(self) -> RationalFunction {
        self.value
    }

    /// The field the variable lives in.
    #[must_use]
    pub fn field(&self) -> &RationalFunctionField {
        &self.field
    }

    /// The classification tag.
    #[must_use]
    pub fn kind(&self) -> VariableKind {
        self.kind
    }

    /// Returns true for frozen variables.
    #[must_use]
    pub fn is_frozen(&self) -> bool {
        self.kind == VariableKind::Frozen
    }

    /// The reduced numerator.
    #[must_use]
    pub fn numerator(&self) -> &MultiPoly<Z> {
        self.value.numerator()
    }

    /// The reduced denominator.
    #[must_use]
    pub fn denominator(&self) -> &MultiPoly<Z> {
        self.value.denominator()
    }
}

impl PartialEq for ClusterVariable {
    fn eq(&self, other: &Self) -> bool {
        self.value == other.value
    }
}

impl Eq for ClusterVariable {}

impl PartialEq<RationalFunction> for ClusterVariable {
    fn eq(&self, other: &RationalFunction) -> bool {
        self.value == *other
    }
}

impl AsRef<RationalFunction> for ClusterVariable {
    fn as_ref(&self) -> &RationalFunction {
        &self.value
    }
}

impl From<ClusterVariable> for RationalFunction {
    fn from(var: ClusterVariable) -> Self {
        var.value
    }
}

impl fmt::Display for ClusterVariable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.field.display(&self.value))
    }
}
