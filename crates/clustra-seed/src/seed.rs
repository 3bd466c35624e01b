//! The cluster seed: construction, accessors and display.

use std::cell::OnceCell;
use std::fmt;

use clustra_linalg::DenseMatrix;
use clustra_quiver::{ClusterQuiver, ExchangeMatrix, MutationType};
use clustra_rational_func::{RationalFunction, RationalFunctionField};
use tracing::warn;

use crate::config::SeedOptions;
use crate::error::SeedError;
use crate::input::SeedInput;

/// A seed of a cluster algebra of rank `n` with `m` frozen variables.
///
/// Owns its exchange matrix and cluster outright; `clone` is a deep copy.
/// The quiver is derived from the matrix on first request and dropped
/// whenever the matrix changes.
#[derive(Clone, Debug)]
pub struct ClusterSeed {
    pub(crate) n: usize,
    pub(crate) m: usize,
    pub(crate) field: RationalFunctionField,
    pub(crate) matrix: ExchangeMatrix,
    /// `n + m` values, index-aligned with the matrix rows.
    pub(crate) cluster: Vec<RationalFunction>,
    pub(crate) quiver: OnceCell<ClusterQuiver>,
    pub(crate) mutation_type: Option<MutationType>,
    pub(crate) description: String,
    pub(crate) is_principal: Option<bool>,
}

impl ClusterSeed {
    /// Builds a seed with default options.
    ///
    /// # Errors
    ///
    /// Returns [`SeedError::InvalidInput`] if the input does not describe a
    /// valid quiver.
    pub fn new(input: impl Into<SeedInput>) -> Result<Self, SeedError> {
        Self::with_options(input, SeedOptions::default())
    }

    /// Builds a seed.
    ///
    /// A seed input is copied, except for its principal flag, which is
    /// taken from the options like for every other input. Every other input starts from the initial cluster
    /// `x0, .., x{n-1}, y0, .., y{m-1}`.
    ///
    /// # Errors
    ///
    /// Returns [`SeedError::InvalidInput`] if the input does not describe a
    /// valid quiver.
    pub fn with_options(
        input: impl Into<SeedInput>,
        options: SeedOptions,
    ) -> Result<Self, SeedError> {
        let input = input.into();
        let warn_ignored_frozen = |shape: &str| {
            if let Some(frozen) = options.frozen {
                warn!(frozen, shape, "the frozen option is ignored for this input");
            }
        };

        let quiver = match input {
            SeedInput::Seed(mut seed) => {
                warn_ignored_frozen("seed");
                seed.is_principal = options.is_principal;
                return Ok(seed);
            }
            SeedInput::Quiver(quiver) => {
                warn_ignored_frozen("quiver");
                quiver
            }
            SeedInput::Matrix(matrix) => {
                warn_ignored_frozen("matrix");
                ClusterQuiver::from_matrix(ExchangeMatrix::new(matrix)?)
            }
            SeedInput::MutationType(ty) => {
                warn_ignored_frozen("mutation type");
                ClusterQuiver::from_mutation_type(ty)
            }
            SeedInput::Digraph(digraph) => {
                ClusterQuiver::from_digraph(&digraph, options.frozen.unwrap_or(0))?
            }
            SeedInput::EdgeList(edges) => {
                ClusterQuiver::from_pairs(&edges, options.frozen.unwrap_or(0))?
            }
        };

        Ok(Self::from_quiver(quiver, options.is_principal))
    }

    /// A seed over a fresh field with the initial cluster.
    pub(crate) fn from_quiver(quiver: ClusterQuiver, is_principal: Option<bool>) -> Self {
        let (n, m) = (quiver.n(), quiver.m());
        let field = RationalFunctionField::with_cluster_names(n, m);
        Self {
            n,
            m,
            cluster: field.gens(),
            field,
            matrix: quiver.b_matrix().clone(),
            mutation_type: quiver.known_mutation_type(),
            quiver: OnceCell::from(quiver),
            description: format!("A seed for a cluster algebra of rank {n}"),
            is_principal,
        }
    }

    /// Number of exchangeable variables.
    #[must_use]
    pub fn n(&self) -> usize {
        self.n
    }

    /// Number of frozen variables.
    #[must_use]
    pub fn m(&self) -> usize {
        self.m
    }

    /// A copy of the exchange matrix.
    #[must_use]
    pub fn b_matrix(&self) -> DenseMatrix<i64> {
        self.matrix.as_matrix().clone()
    }

    /// The exchange matrix.
    #[must_use]
    pub fn exchange_matrix(&self) -> &ExchangeMatrix {
        &self.matrix
    }

    /// The field `Frac(Z[x0, .., y{m-1}])` the cluster lives in.
    #[must_use]
    pub fn ground_field(&self) -> &RationalFunctionField {
        &self.field
    }

    /// The mutation type, if known.
    #[must_use]
    pub fn mutation_type(&self) -> Option<MutationType> {
        self.mutation_type
    }

    /// Whether the frozen variables are principal coefficients; `None`
    /// when unknown.
    #[must_use]
    pub fn is_principal(&self) -> Option<bool> {
        self.is_principal
    }

    /// The description used by `Display`, without type or frozen count.
    #[must_use]
    pub fn description(&self) -> &str {
        &self.description
    }

    /// The quiver of the current exchange matrix.
    pub fn quiver(&self) -> &ClusterQuiver {
        self.quiver
            .get_or_init(|| ClusterQuiver::from_matrix(self.matrix.clone()))
    }

    /// Returns true if the quiver has no oriented cycle.
    pub fn is_acyclic(&self) -> bool {
        self.quiver().is_acyclic()
    }

    /// Returns true if every exchangeable vertex is a source or a sink.
    pub fn is_bipartite(&self) -> bool {
        self.quiver().is_bipartite()
    }

    /// Sources and sinks of the exchangeable part, if it is bipartite.
    pub fn bipartition(&self) -> Option<(Vec<usize>, Vec<usize>)> {
        self.quiver().bipartition()
    }

    /// Drops the cached quiver after the matrix changed.
    pub(crate) fn invalidate_quiver(&mut self) {
        self.quiver.take();
    }
}

/// Seeds are equal when their exchange matrices and clusters are equal.
impl PartialEq for ClusterSeed {
    fn eq(&self, other: &Self) -> bool {
        self.matrix == other.matrix && self.cluster == other.cluster
    }
}

impl Eq for ClusterSeed {}

impl fmt::Display for ClusterSeed {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.description)?;
        if let Some(ty) = self.mutation_type {
            write!(f, " of type {ty}")?;
        }
        match self.m {
            0 => Ok(()),
            1 => write!(f, " with 1 frozen variable"),
            m => write!(f, " with {m} frozen variables"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clustra_quiver::{QuiverDigraph, QuiverError};

    #[test]
    fn test_from_mutation_type() {
        let seed = ClusterSeed::new(MutationType::A(5)).unwrap();
        assert_eq!((seed.n(), seed.m()), (5, 0));
        assert_eq!(
            seed.to_string(),
            "A seed for a cluster algebra of rank 5 of type ['A', 5]"
        );
        assert_eq!(seed.is_principal(), None);
        assert_eq!(seed.ground_field().names(), ["x0", "x1", "x2", "x3", "x4"]);
    }

    #[test]
    fn test_all_inputs_agree() {
        let seed = ClusterSeed::new(MutationType::A(4)).unwrap();

        let from_seed = ClusterSeed::new(&seed).unwrap();
        let from_quiver = ClusterSeed::new(seed.quiver().clone()).unwrap();
        let from_matrix = ClusterSeed::new(seed.b_matrix()).unwrap();
        let from_digraph = ClusterSeed::new(seed.quiver().digraph()).unwrap();
        let pairs: Vec<_> = seed.quiver().edges().iter().map(|&(i, j, _)| (i, j)).collect();
        let from_edges = ClusterSeed::new(pairs).unwrap();

        for other in [&from_seed, &from_quiver, &from_matrix, &from_digraph, &from_edges] {
            assert_eq!(other, &seed);
        }
        assert_eq!(from_seed.to_string(), seed.to_string());
        assert_eq!(from_matrix.to_string(), "A seed for a cluster algebra of rank 4");
    }

    #[test]
    fn test_frozen_option() {
        let pairs = vec![(0, 1), (2, 1), (2, 3)];
        let seed = ClusterSeed::with_options(pairs, SeedOptions::new().frozen(1)).unwrap();
        assert_eq!((seed.n(), seed.m()), (3, 1));
        assert_eq!(
            seed.to_string(),
            "A seed for a cluster algebra of rank 3 with 1 frozen variable"
        );
        assert_eq!(seed.ground_field().names(), ["x0", "x1", "x2", "y0"]);

        // Ignored for seeds and matrices.
        let copy = ClusterSeed::with_options(&seed, SeedOptions::new().frozen(2)).unwrap();
        assert_eq!(copy.m(), 1);
        let m = ClusterSeed::with_options(seed.b_matrix(), SeedOptions::new().frozen(3)).unwrap();
        assert_eq!(m.m(), 1);
    }

    #[test]
    fn test_invalid_input() {
        let bad = DenseMatrix::from_rows(vec![vec![0i64, 1], vec![1, 0]]);
        assert!(matches!(
            ClusterSeed::new(bad),
            Err(SeedError::InvalidInput(_))
        ));
        assert!(matches!(
            ClusterSeed::new(vec![(0, 1), (1, 0)]),
            Err(SeedError::InvalidInput(_))
        ));
        let extreme = DenseMatrix::from_rows(vec![vec![0, i64::MIN], vec![1, 0]]);
        assert!(matches!(
            ClusterSeed::new(extreme),
            Err(SeedError::InvalidInput(QuiverError::Overflow(_)))
        ));
        let mut digraph = QuiverDigraph::new(2);
        digraph.add_edge(0, 1, (1, -1)).unwrap();
        assert!(matches!(
            ClusterSeed::with_options(digraph, SeedOptions::new().frozen(3)),
            Err(SeedError::InvalidInput(_))
        ));
    }

    #[test]
    fn test_principal_flag_is_stored() {
        let seed =
            ClusterSeed::with_options(MutationType::B(3), SeedOptions::new().principal(false))
                .unwrap();
        assert_eq!(seed.is_principal(), Some(false));
        let copy = ClusterSeed::new(&seed).unwrap();
        assert_eq!(copy.is_principal(), None);
    }

    #[test]
    fn test_copy_forgets_principal_coefficients() {
        let principal = ClusterSeed::new(MutationType::A(2))
            .unwrap()
            .principal_extension(false)
            .unwrap();
        assert!(principal.f_polynomial(0, false).is_ok());

        let copy = ClusterSeed::new(&principal).unwrap();
        assert_eq!(copy, principal);
        assert_eq!(copy.is_principal(), None);
        assert!(matches!(
            copy.f_polynomial(0, false),
            Err(SeedError::PreconditionUnmet(_))
        ));

        let flagged =
            ClusterSeed::with_options(&principal, SeedOptions::new().principal(true)).unwrap();
        assert_eq!(flagged.is_principal(), Some(true));
        assert_eq!(principal.clone().is_principal(), Some(true));
    }

    #[test]
    fn test_quiver_cache() {
        let seed = ClusterSeed::new(MutationType::A(3)).unwrap();
        assert!(seed.is_acyclic());
        assert!(seed.is_bipartite());
        assert_eq!(seed.bipartition(), Some((vec![0, 2], vec![1])));

        let cyclic = ClusterSeed::new(vec![(0, 1), (1, 2), (2, 0)]).unwrap();
        assert!(!cyclic.is_acyclic());
        assert!(!cyclic.is_bipartite());
    }
}
