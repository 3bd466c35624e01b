//! Inputs accepted by seed construction and mutation.

use std::str::FromStr;

use clustra_linalg::DenseMatrix;
use clustra_quiver::{ClusterQuiver, ExchangeMatrix, MutationType, QuiverDigraph};

use crate::error::SeedError;
use crate::seed::ClusterSeed;

/// The shapes a seed can be built from.
///
/// Everything except [`SeedInput::Seed`] and [`SeedInput::Quiver`] is
/// first turned into a [`ClusterQuiver`].
#[derive(Clone, Debug)]
pub enum SeedInput {
    /// Copy an existing seed.
    Seed(ClusterSeed),
    /// Start from a quiver: the cluster is the field's generators.
    Quiver(ClusterQuiver),
    /// An `(n+m) × n` exchange matrix.
    Matrix(DenseMatrix<i64>),
    /// A labelled digraph; the frozen option selects trailing frozen
    /// vertices.
    Digraph(QuiverDigraph),
    /// Unlabelled edges; the frozen option selects trailing frozen
    /// vertices.
    EdgeList(Vec<(usize, usize)>),
    /// The standard quiver of a Dynkin type.
    MutationType(MutationType),
}

impl From<ClusterSeed> for SeedInput {
    fn from(seed: ClusterSeed) -> Self {
        Self::Seed(seed)
    }
}

impl From<&ClusterSeed> for SeedInput {
    fn from(seed: &ClusterSeed) -> Self {
        Self::Seed(seed.clone())
    }
}

impl From<ClusterQuiver> for SeedInput {
    fn from(quiver: ClusterQuiver) -> Self {
        Self::Quiver(quiver)
    }
}

impl From<DenseMatrix<i64>> for SeedInput {
    fn from(matrix: DenseMatrix<i64>) -> Self {
        Self::Matrix(matrix)
    }
}

impl From<ExchangeMatrix> for SeedInput {
    fn from(matrix: ExchangeMatrix) -> Self {
        Self::Matrix(matrix.into_matrix())
    }
}

impl From<QuiverDigraph> for SeedInput {
    fn from(digraph: QuiverDigraph) -> Self {
        Self::Digraph(digraph)
    }
}

impl From<Vec<(usize, usize)>> for SeedInput {
    fn from(edges: Vec<(usize, usize)>) -> Self {
        Self::EdgeList(edges)
    }
}

impl From<&[(usize, usize)]> for SeedInput {
    fn from(edges: &[(usize, usize)]) -> Self {
        Self::EdgeList(edges.to_vec())
    }
}

impl From<MutationType> for SeedInput {
    fn from(ty: MutationType) -> Self {
        Self::MutationType(ty)
    }
}

/// An ordered list of vertices to mutate at.
///
/// A single vertex is a sequence of length one.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct MutationSequence(Vec<usize>);

impl MutationSequence {
    /// The vertices, in order.
    #[must_use]
    pub fn vertices(&self) -> &[usize] {
        &self.0
    }

    /// Number of steps.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns true for the empty sequence.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Checks every vertex against the exchangeable range `0..n`.
    ///
    /// # Errors
    ///
    /// Returns [`SeedError::InvalidVertex`] naming the first bad vertex.
    pub fn validate(&self, n: usize) -> Result<(), SeedError> {
        match self.0.iter().find(|&&v| v >= n) {
            Some(&vertex) => Err(SeedError::InvalidVertex { vertex, n }),
            None => Ok(()),
        }
    }
}

impl From<usize> for MutationSequence {
    fn from(vertex: usize) -> Self {
        Self(vec![vertex])
    }
}

impl From<Vec<usize>> for MutationSequence {
    fn from(vertices: Vec<usize>) -> Self {
        Self(vertices)
    }
}

impl From<&Vec<usize>> for MutationSequence {
    fn from(vertices: &Vec<usize>) -> Self {
        Self(vertices.clone())
    }
}

impl From<&[usize]> for MutationSequence {
    fn from(vertices: &[usize]) -> Self {
        Self(vertices.to_vec())
    }
}

impl<const N: usize> From<[usize; N]> for MutationSequence {
    fn from(vertices: [usize; N]) -> Self {
        Self(vertices.to_vec())
    }
}

impl<'a> IntoIterator for &'a MutationSequence {
    type Item = &'a usize;
    type IntoIter = std::slice::Iter<'a, usize>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

/// Parses `3`, `1, 2, 1`, `[1, 2, 1]` or `(1, 2, 1)`.
impl FromStr for MutationSequence {
    type Err = SeedError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        let inner = trimmed
            .strip_prefix('[')
            .and_then(|t| t.strip_suffix(']'))
            .or_else(|| trimmed.strip_prefix('(').and_then(|t| t.strip_suffix(')')))
            .unwrap_or(trimmed);

        if inner.trim().is_empty() {
            return Ok(Self::default());
        }
        inner
            .split(',')
            .map(|part| {
                part.trim().parse::<usize>().map_err(|_| {
                    SeedError::InvalidArgument(format!(
                        "a seed can only be mutated at a vertex or a sequence of vertices, got {s:?}"
                    ))
                })
            })
            .collect::<Result<Vec<_>, _>>()
            .map(Self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_shapes() {
        assert_eq!(MutationSequence::from(2).vertices(), &[2]);
        assert_eq!(MutationSequence::from([0, 1, 0]).vertices(), &[0, 1, 0]);
        assert_eq!(MutationSequence::from(vec![3]).len(), 1);
        assert!(MutationSequence::from(Vec::new()).is_empty());
    }

    #[test]
    fn test_parse() {
        assert_eq!("3".parse(), Ok(MutationSequence::from(3)));
        assert_eq!("[1, 2, 1]".parse(), Ok(MutationSequence::from([1, 2, 1])));
        assert_eq!("(0,1)".parse(), Ok(MutationSequence::from([0, 1])));
        assert_eq!("[]".parse(), Ok(MutationSequence::default()));
        assert!(matches!(
            "[1, x]".parse::<MutationSequence>(),
            Err(SeedError::InvalidArgument(_))
        ));
        assert!(matches!(
            "-1".parse::<MutationSequence>(),
            Err(SeedError::InvalidArgument(_))
        ));
    }

    #[test]
    fn test_validate() {
        let seq = MutationSequence::from([0, 4, 7]);
        assert_eq!(seq.validate(8), Ok(()));
        assert_eq!(seq.validate(4), Err(SeedError::InvalidVertex { vertex: 4, n: 4 }));
    }
}
