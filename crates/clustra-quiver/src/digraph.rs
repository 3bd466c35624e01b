//! Labelled directed graphs underlying quivers.

use std::collections::{BTreeMap, VecDeque};

use crate::error::QuiverError;

/// Edge label `(b_ij, b_ji)` of an edge `i → j`; always `b_ij > 0 > b_ji`.
pub type EdgeLabel = (i64, i64);

/// A directed graph on vertices `0..num_vertices` with labelled edges.
///
/// Loops and oriented 2-cycles are rejected, so between two vertices there
/// is at most one edge.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct QuiverDigraph {
    num_vertices: usize,
    edges: BTreeMap<(usize, usize), EdgeLabel>,
}

impl QuiverDigraph {
    /// Creates a graph with no edges.
    #[must_use]
    pub fn new(num_vertices: usize) -> Self {
        Self {
            num_vertices,
            edges: BTreeMap::new(),
        }
    }

    /// Creates a graph from labelled edges.
    ///
    /// # Errors
    ///
    /// Fails as [`QuiverDigraph::add_edge`] does.
    pub fn from_edges(
        num_vertices: usize,
        edges: impl IntoIterator<Item = (usize, usize, EdgeLabel)>,
    ) -> Result<Self, QuiverError> {
        let mut graph = Self::new(num_vertices);
        for (from, to, label) in edges {
            graph.add_edge(from, to, label)?;
        }
        Ok(graph)
    }

    /// Creates a graph from unlabelled pairs.
    ///
    /// The vertex count is one more than the largest vertex named. A pair
    /// given `k` times becomes one edge labelled `(k, -k)`.
    ///
    /// # Errors
    ///
    /// Fails on loops and oriented 2-cycles.
    pub fn from_pairs(pairs: &[(usize, usize)]) -> Result<Self, QuiverError> {
        let num_vertices = pairs.iter().map(|&(i, j)| i.max(j) + 1).max().unwrap_or(0);

        let mut multiplicity: BTreeMap<(usize, usize), i64> = BTreeMap::new();
        for &pair in pairs {
            *multiplicity.entry(pair).or_insert(0) += 1;
        }

        Self::from_edges(
            num_vertices,
            multiplicity.into_iter().map(|((i, j), k)| (i, j, (k, -k))),
        )
    }

    /// Adds the edge `from → to`.
    ///
    /// # Errors
    ///
    /// Returns [`QuiverError::VertexOutOfRange`] for unknown vertices,
    /// [`QuiverError::InvalidEdge`] for loops, duplicates and labels not of
    /// the form `(+, -)`, and [`QuiverError::TwoCycle`] if `to → from`
    /// already exists.
    pub fn add_edge(&mut self, from: usize, to: usize, label: EdgeLabel) -> Result<(), QuiverError> {
        for v in [from, to] {
            if v >= self.num_vertices {
                return Err(QuiverError::VertexOutOfRange {
                    vertex: v,
                    count: self.num_vertices,
                });
            }
        }
        let invalid = |reason: &str| QuiverError::InvalidEdge {
            from,
            to,
            reason: reason.to_owned(),
        };
        if from == to {
            return Err(invalid("loops are not allowed"));
        }
        if label.0 <= 0 || label.1 >= 0 {
            return Err(invalid("label must be (positive, negative)"));
        }
        if label.1 == i64::MIN {
            return Err(QuiverError::Overflow(format!("label ({}, {})", label.0, label.1)));
        }
        if self.edges.contains_key(&(to, from)) {
            return Err(QuiverError::TwoCycle(from, to));
        }
        if self.edges.contains_key(&(from, to)) {
            return Err(invalid("duplicate edge"));
        }
        self.edges.insert((from, to), label);
        Ok(())
    }

    /// Number of vertices.
    #[must_use]
    pub fn num_vertices(&self) -> usize {
        self.num_vertices
    }

    /// Number of edges.
    #[must_use]
    pub fn num_edges(&self) -> usize {
        self.edges.len()
    }

    /// Iterates over edges `(from, to, label)` in lexicographic order.
    pub fn edges(&self) -> impl Iterator<Item = (usize, usize, EdgeLabel)> + '_ {
        self.edges.iter().map(|(&(i, j), &label)| (i, j, label))
    }

    /// Returns the label of `from → to`, if that edge exists.
    #[must_use]
    pub fn label(&self, from: usize, to: usize) -> Option<EdgeLabel> {
        self.edges.get(&(from, to)).copied()
    }

    /// Returns true if `from → to` is an edge.
    #[must_use]
    pub fn has_edge(&self, from: usize, to: usize) -> bool {
        self.edges.contains_key(&(from, to))
    }

    /// Replaces `from → to` by `to → from`, negating and swapping the label.
    ///
    /// Returns false if there is no such edge.
    pub fn reverse_edge(&mut self, from: usize, to: usize) -> bool {
        match self.edges.remove(&(from, to)) {
            Some((a, b)) => {
                self.edges.insert((to, from), (-b, -a));
                true
            }
            None => false,
        }
    }

    /// Number of edges ending at `v`.
    #[must_use]
    pub fn in_degree(&self, v: usize) -> usize {
        self.edges.keys().filter(|&&(_, j)| j == v).count()
    }

    /// Number of edges starting at `v`.
    #[must_use]
    pub fn out_degree(&self, v: usize) -> usize {
        self.edges.keys().filter(|&&(i, _)| i == v).count()
    }

    /// The subgraph induced on vertices `0..count`.
    #[must_use]
    pub fn induced_prefix(&self, count: usize) -> Self {
        let count = count.min(self.num_vertices);
        Self {
            num_vertices: count,
            edges: self
                .edges
                .iter()
                .filter(|(&(i, j), _)| i < count && j < count)
                .map(|(&k, &v)| (k, v))
                .collect(),
        }
    }

    /// Returns true if the graph has no directed cycle (Kahn's algorithm).
    #[must_use]
    pub fn is_acyclic(&self) -> bool {
        let mut in_degree = vec![0usize; self.num_vertices];
        let mut successors = vec![Vec::new(); self.num_vertices];
        for &(i, j) in self.edges.keys() {
            in_degree[j] += 1;
            successors[i].push(j);
        }

        let mut queue: VecDeque<usize> = (0..self.num_vertices)
            .filter(|&v| in_degree[v] == 0)
            .collect();
        let mut visited = 0;
        while let Some(v) = queue.pop_front() {
            visited += 1;
            for &w in &successors[v] {
                in_degree[w] -= 1;
                if in_degree[w] == 0 {
                    queue.push_back(w);
                }
            }
        }
        visited == self.num_vertices
    }
}
