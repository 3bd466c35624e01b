//! Errors raised while building or transforming quivers.

use thiserror::Error;

/// Errors that can occur in the quiver layer.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum QuiverError {
    /// The exchangeable block admits no positive skew-symmetrizer.
    #[error("the exchangeable part of the matrix is not skew-symmetrizable")]
    NotSkewSymmetrizable,

    /// The matrix or vertex counts do not describe a valid exchange matrix.
    #[error("invalid shape: {0}")]
    Shape(String),

    /// An edge that cannot appear in a quiver.
    #[error("invalid edge ({from}, {to}): {reason}")]
    InvalidEdge {
        /// Source vertex.
        from: usize,
        /// Target vertex.
        to: usize,
        /// What is wrong with it.
        reason: String,
    },

    /// Both `i → j` and `j → i` were given.
    #[error("edges ({0}, {1}) and ({1}, {0}) form an oriented 2-cycle")]
    TwoCycle(usize, usize),

    /// The orientation data is not a total order on the vertices.
    #[error("invalid orientation: {0}")]
    InvalidOrientation(String),

    /// An entry or label does not fit the `i64` arithmetic of mutation.
    #[error("integer overflow: {0}")]
    Overflow(String),

    /// Unknown Dynkin letter or unsupported rank.
    #[error("invalid mutation type: {0}")]
    InvalidMutationType(String),

    /// A vertex index past the end of the quiver.
    #[error("vertex {vertex} is out of range for {count} vertices")]
    VertexOutOfRange {
        /// The offending vertex.
        vertex: usize,
        /// Number of admissible vertices.
        count: usize,
    },
}
