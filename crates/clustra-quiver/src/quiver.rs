//! Cluster quivers: the graph view of an exchange matrix.

use std::fmt;

use clustra_linalg::DenseMatrix;
use tracing::debug;

use crate::digraph::{EdgeLabel, QuiverDigraph};
use crate::error::QuiverError;
use crate::exchange_matrix::ExchangeMatrix;
use crate::mutation_type::MutationType;

/// How to reorient the edges of a quiver.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Orientation {
    /// A total order on all vertices; every edge is made to point from the
    /// earlier vertex to the later one.
    Order(Vec<usize>),
    /// Desired edge directions; each pair `(i, j)` turns an existing edge
    /// `j → i` into `i → j`. Pairs that are not edges are ignored.
    Edges(Vec<(usize, usize)>),
}

/// A quiver with `n` exchangeable and `m` frozen vertices.
///
/// The exchange matrix is the source of truth; the digraph is derived on
/// request.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ClusterQuiver {
    matrix: ExchangeMatrix,
    mutation_type: Option<MutationType>,
}

impl ClusterQuiver {
    /// Creates the quiver of an exchange matrix.
    #[must_use]
    pub fn from_matrix(matrix: ExchangeMatrix) -> Self {
        Self {
            matrix,
            mutation_type: None,
        }
    }

    /// Creates a quiver from a labelled digraph whose last `frozen`
    /// vertices are frozen.
    ///
    /// # Errors
    ///
    /// Returns [`QuiverError::Shape`] if `frozen` exceeds the vertex count,
    /// [`QuiverError::InvalidEdge`] for an edge between two frozen
    /// vertices and [`QuiverError::NotSkewSymmetrizable`] if the labels are
    /// inconsistent.
    pub fn from_digraph(digraph: &QuiverDigraph, frozen: usize) -> Result<Self, QuiverError> {
        let total = digraph.num_vertices();
        if frozen > total {
            return Err(QuiverError::Shape(format!(
                "{frozen} frozen vertices requested on a quiver with {total} vertices"
            )));
        }
        let n = total - frozen;

        let mut b = DenseMatrix::zeros(total, n);
        for (i, j, (b_ij, b_ji)) in digraph.edges() {
            if i >= n && j >= n {
                return Err(QuiverError::InvalidEdge {
                    from: i,
                    to: j,
                    reason: "both endpoints are frozen".into(),
                });
            }
            if j < n {
                b[(i, j)] = b_ij;
            }
            if i < n {
                b[(j, i)] = b_ji;
            }
        }

        Ok(Self::from_matrix(ExchangeMatrix::new(b)?))
    }

    /// Creates a quiver from unlabelled edges; see
    /// [`QuiverDigraph::from_pairs`].
    ///
    /// # Errors
    ///
    /// As [`QuiverDigraph::from_pairs`] and [`ClusterQuiver::from_digraph`].
    pub fn from_pairs(pairs: &[(usize, usize)], frozen: usize) -> Result<Self, QuiverError> {
        Self::from_digraph(&QuiverDigraph::from_pairs(pairs)?, frozen)
    }

    /// Creates the standard quiver of a mutation type.
    #[must_use]
    pub fn from_mutation_type(ty: MutationType) -> Self {
        let quiver = Self::from_digraph(&ty.standard_digraph(), 0)
            .expect("standard quivers are skew-symmetrizable");
        Self {
            mutation_type: Some(ty),
            ..quiver
        }
    }

    /// The exchange matrix.
    #[must_use]
    pub fn b_matrix(&self) -> &ExchangeMatrix {
        &self.matrix
    }

    /// Number of exchangeable vertices.
    #[must_use]
    pub fn n(&self) -> usize {
        self.matrix.n()
    }

    /// Number of frozen vertices.
    #[must_use]
    pub fn m(&self) -> usize {
        self.matrix.m()
    }

    /// The labelled digraph on all `n + m` vertices.
    #[must_use]
    pub fn digraph(&self) -> QuiverDigraph {
        QuiverDigraph::from_edges(self.n() + self.m(), self.edges())
            .expect("exchange matrices give valid quivers")
    }

    /// Edges `(from, to, (b_from_to, b_to_from))` in lexicographic order.
    #[must_use]
    pub fn edges(&self) -> Vec<(usize, usize, EdgeLabel)> {
        let (n, m) = (self.n(), self.m());
        let b = &self.matrix;

        let mut edges = Vec::new();
        for i in 0..n + m {
            for j in 0..n {
                let v = b.get(i, j);
                if i < n {
                    if v > 0 {
                        edges.push((i, j, (v, b.get(j, i))));
                    }
                } else if v > 0 {
                    edges.push((i, j, (v, -v)));
                } else if v < 0 {
                    edges.push((j, i, (-v, v)));
                }
            }
        }
        edges.sort_unstable_by_key(|&(i, j, _)| (i, j));
        edges
    }

    /// Returns true if the quiver, frozen vertices included, has no
    /// oriented cycle.
    #[must_use]
    pub fn is_acyclic(&self) -> bool {
        self.digraph().is_acyclic()
    }

    /// Returns true if every exchangeable vertex is a source or a sink of
    /// the exchangeable part.
    #[must_use]
    pub fn is_bipartite(&self) -> bool {
        self.bipartition().is_some()
    }

    /// Splits the exchangeable vertices into sources and sinks.
    ///
    /// Isolated vertices count as sources. Returns `None` if some vertex
    /// has both incoming and outgoing edges.
    #[must_use]
    pub fn bipartition(&self) -> Option<(Vec<usize>, Vec<usize>)> {
        let principal = self.digraph().induced_prefix(self.n());
        let mut sources = Vec::new();
        let mut sinks = Vec::new();
        for v in 0..principal.num_vertices() {
            match (principal.in_degree(v), principal.out_degree(v)) {
                (0, _) => sources.push(v),
                (_, 0) => sinks.push(v),
                _ => return None,
            }
        }
        Some((sources, sinks))
    }

    /// Reorients edges in place.
    ///
    /// The mutation type is forgotten, since reorienting can change it.
    ///
    /// # Errors
    ///
    /// Returns [`QuiverError::InvalidOrientation`] if an order is not a
    /// permutation of all vertices.
    pub fn reorient(&mut self, orientation: &Orientation) -> Result<(), QuiverError> {
        let mut digraph = self.digraph();
        let total = digraph.num_vertices();

        match orientation {
            Orientation::Order(order) => {
                let invalid = || {
                    QuiverError::InvalidOrientation(format!(
                        "{order:?} is not an order on {total} vertices"
                    ))
                };
                if order.len() != total {
                    return Err(invalid());
                }
                let mut position = vec![None; total];
                for (p, &v) in order.iter().enumerate() {
                    let slot = position
                        .get_mut(v)
                        .filter(|slot| slot.is_none())
                        .ok_or_else(invalid)?;
                    *slot = Some(p);
                }
                let backwards: Vec<(usize, usize)> = digraph
                    .edges()
                    .filter(|&(i, j, _)| position[i] > position[j])
                    .map(|(i, j, _)| (i, j))
                    .collect();
                for (i, j) in backwards {
                    digraph.reverse_edge(i, j);
                }
            }
            Orientation::Edges(pairs) => {
                for &(i, j) in pairs {
                    digraph.reverse_edge(j, i);
                }
            }
        }

        debug!(?orientation, "reoriented quiver");
        *self = Self::from_digraph(&digraph, self.m())?;
        Ok(())
    }

    /// Mutates at exchangeable vertex `k`. The mutation type is kept.
    ///
    /// # Errors
    ///
    /// Returns [`QuiverError::VertexOutOfRange`] if `k >= n`.
    pub fn mutate(&mut self, k: usize) -> Result<(), QuiverError> {
        self.matrix.mutate(k)
    }

    /// The quiver restricted to its exchangeable vertices.
    #[must_use]
    pub fn principal_part(&self) -> Self {
        Self {
            matrix: self.matrix.principal_part(),
            mutation_type: self.mutation_type,
        }
    }

    /// The mutation type this quiver was built with, if any.
    #[must_use]
    pub fn known_mutation_type(&self) -> Option<MutationType> {
        self.mutation_type
    }

    /// The mutation type: the known one, or else the result of
    /// [`MutationType::classify`].
    #[must_use]
    pub fn mutation_type(&self) -> Option<MutationType> {
        self.mutation_type
            .or_else(|| MutationType::classify(&self.matrix))
    }
}

impl fmt::Display for ClusterQuiver {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Quiver on {} vertices", self.n() + self.m())?;
        if let Some(ty) = self.mutation_type() {
            write!(f, " of type {ty}")?;
        }
        match self.m() {
            0 => Ok(()),
            1 => write!(f, " with 1 frozen vertex"),
            m => write!(f, " with {m} frozen vertices"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn a4() -> ClusterQuiver {
        ClusterQuiver::from_mutation_type(MutationType::A(4))
    }

    #[test]
    fn test_a4_matrix() {
        assert_eq!(
            a4().b_matrix().as_matrix().to_rows(),
            vec![
                vec![0, 1, 0, 0],
                vec![-1, 0, -1, 0],
                vec![0, 1, 0, 1],
                vec![0, 0, -1, 0],
            ]
        );
        assert_eq!(a4().to_string(), "Quiver on 4 vertices of type ['A', 4]");
    }

    #[test]
    fn test_frozen_edges() {
        let edges = a4().edges();
        assert_eq!(
            edges,
            vec![(0, 1, (1, -1)), (2, 1, (1, -1)), (2, 3, (1, -1))]
        );

        let pairs: Vec<_> = edges.iter().map(|&(i, j, _)| (i, j)).collect();
        let q = ClusterQuiver::from_pairs(&pairs, 1).unwrap();
        assert_eq!((q.n(), q.m()), (3, 1));
        assert_eq!(q.edges(), edges);
        assert_eq!(
            q.principal_part().edges(),
            vec![(0, 1, (1, -1)), (2, 1, (1, -1))]
        );
        assert_eq!(q.to_string(), "Quiver on 4 vertices of type ['A', 3] with 1 frozen vertex");
    }

    #[test]
    fn test_frozen_sink_and_source() {
        // 0 -> 2 (frozen) and 3 (frozen) -> 1.
        let q = ClusterQuiver::from_pairs(&[(0, 1), (0, 2), (3, 1)], 2).unwrap();
        assert_eq!(
            q.b_matrix().as_matrix().to_rows(),
            vec![vec![0, 1], vec![-1, 0], vec![-1, 0], vec![0, 1]]
        );
        assert_eq!(q.digraph().edges().count(), 3);
    }

    #[test]
    fn test_rejects_frozen_frozen_edge() {
        assert!(matches!(
            ClusterQuiver::from_pairs(&[(0, 1), (1, 2)], 2),
            Err(QuiverError::InvalidEdge { from: 1, to: 2, .. })
        ));
        assert!(matches!(
            ClusterQuiver::from_pairs(&[(0, 1)], 3),
            Err(QuiverError::Shape(_))
        ));
    }

    #[test]
    fn test_acyclic() {
        assert!(a4().is_acyclic());
        let triangle = ClusterQuiver::from_pairs(&[(0, 1), (1, 2), (2, 0)], 0).unwrap();
        assert!(!triangle.is_acyclic());
        assert_eq!(triangle.mutation_type(), None);
    }

    #[test]
    fn test_bipartite() {
        // Alternating orientation: every vertex a source or a sink.
        assert_eq!(a4().bipartition(), Some((vec![0, 2], vec![1, 3])));

        // Linear orientation: vertex 1 is neither.
        let linear = ClusterQuiver::from_pairs(&[(0, 1), (1, 2)], 0).unwrap();
        assert!(!linear.is_bipartite());

        // Frozen vertices are not considered.
        let framed = ClusterQuiver::from_pairs(&[(0, 1), (2, 0)], 1).unwrap();
        assert!(framed.is_bipartite());
    }

    #[test]
    fn test_reorient_by_order() {
        let mut q = a4();
        q.reorient(&Orientation::Order(vec![0, 1, 2, 3])).unwrap();
        assert_eq!(
            q.edges(),
            vec![(0, 1, (1, -1)), (1, 2, (1, -1)), (2, 3, (1, -1))]
        );
        assert_eq!(q.known_mutation_type(), None);
        assert_eq!(q.mutation_type(), Some(MutationType::A(4)));
    }

    #[test]
    fn test_reorient_by_edges() {
        let mut q = ClusterQuiver::from_mutation_type(MutationType::B(2));
        q.reorient(&Orientation::Edges(vec![(1, 0), (0, 5)])).unwrap();
        assert_eq!(q.edges(), vec![(1, 0, (2, -1))]);
        assert_eq!(
            q.b_matrix().as_matrix().to_rows(),
            vec![vec![0, -1], vec![2, 0]]
        );
    }

    #[test]
    fn test_reorient_rejects_bad_order() {
        let mut q = a4();
        for order in [vec![0, 1, 2], vec![0, 1, 1, 2], vec![0, 1, 2, 7]] {
            assert!(matches!(
                q.reorient(&Orientation::Order(order)),
                Err(QuiverError::InvalidOrientation(_))
            ));
        }
        assert_eq!(q, a4());
    }

    #[test]
    fn test_mutate_keeps_type() {
        let mut q = a4();
        q.mutate(1).unwrap();
        assert_eq!(q.known_mutation_type(), Some(MutationType::A(4)));
        assert!(q.mutate(4).is_err());
    }
}
