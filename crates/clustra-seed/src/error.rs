//! Errors raised by seed operations.

use clustra_quiver::QuiverError;
use thiserror::Error;

/// Errors that can occur while building, mutating or querying a seed.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum SeedError {
    /// The input could not be turned into a quiver.
    #[error("invalid seed input: {0}")]
    InvalidInput(#[from] QuiverError),

    /// A mutation was requested outside the exchangeable vertices.
    #[error("the seed cannot be mutated at vertex {vertex}; exchangeable vertices are 0..{n}")]
    InvalidVertex {
        /// The requested vertex.
        vertex: usize,
        /// Number of exchangeable vertices.
        n: usize,
    },

    /// A malformed argument.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// An index past the end of the variables it addresses.
    #[error("the seed has no {what} of index {index} (there are {len})")]
    IndexOutOfRange {
        /// What was indexed.
        what: &'static str,
        /// The requested index.
        index: usize,
        /// Number of valid indices.
        len: usize,
    },

    /// The seed does not satisfy a precondition of the operation.
    #[error("{0}")]
    PreconditionUnmet(String),

    /// `set_cluster` received the wrong number of values.
    #[error("expected {expected} cluster variables, got {found}")]
    LengthMismatch {
        /// `n + m`.
        expected: usize,
        /// Number supplied.
        found: usize,
    },

    /// `set_cluster` received a value outside the seed's field.
    #[error("value {index} is not an element of the seed's ground field")]
    NotInField {
        /// Position of the offending value.
        index: usize,
    },

    /// A substitution or inversion hit a zero denominator.
    #[error("division by zero while evaluating a cluster variable")]
    ZeroDenominator,
}

impl SeedError {
    pub(crate) fn no_principal_coefficients() -> Self {
        Self::PreconditionUnmet(
            "no principal coefficients initialized; use principal_extension, or ignore_coefficients to ignore this"
                .into(),
        )
    }
}
