//! # Clustra
//!
//! Cluster algebra seeds in Rust.
//!
//! Clustra mutates cluster seeds exactly: every cluster variable is a
//! canonical quotient of integer polynomials in the initial variables, so
//! the Laurent phenomenon can be observed rather than assumed.
//!
//! ## Features
//!
//! - **Exact arithmetic**: big integers and rationals over `dashu`
//! - **Rational functions**: multivariate, cancelled by polynomial GCD
//! - **Quivers**: skew-symmetrizable exchange matrices, labelled digraphs,
//!   Dynkin mutation types
//! - **Seeds**: mutation, F-polynomials, g- and c-vectors, principal
//!   extension
//!
//! ## Quick Start
//!
//! ```rust
//! use clustra::prelude::*;
//!
//! let mut seed = ClusterSeed::new(MutationType::A(2)).unwrap();
//! seed.mutate([0, 1, 0, 1, 0]).unwrap();
//!
//! // The A2 pentagon closes up to swapping the two variables.
//! let cluster: Vec<String> = seed.cluster().iter().map(ToString::to_string).collect();
//! assert_eq!(cluster, ["x1", "x0"]);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub use clustra_integers as integers;
pub use clustra_linalg as linalg;
pub use clustra_poly as poly;
pub use clustra_quiver as quiver;
pub use clustra_rational_func as rational_func;
pub use clustra_rings as rings;
pub use clustra_seed as seed;

/// Prelude module for convenient imports.
pub mod prelude {
    pub use clustra_integers::{Integer, Rational};
    pub use clustra_linalg::DenseMatrix;
    pub use clustra_quiver::{ClusterQuiver, ExchangeMatrix, MutationType, Orientation};
    pub use clustra_rational_func::{RationalFunction, RationalFunctionField};
    pub use clustra_rings::Z;
    pub use clustra_seed::{ClusterSeed, ClusterVariable, MutationOutput, SeedError, SeedOptions};
}
