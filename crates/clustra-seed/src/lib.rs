//! # clustra-seed
//!
//! Cluster seeds and seed mutation.
//!
//! A [`ClusterSeed`] pairs an [`ExchangeMatrix`] with a cluster: one exact
//! rational function per matrix row, living in the field generated by
//! `x0..x{n-1}` (exchangeable) and `y0..y{m-1}` (frozen). Mutating at an
//! exchangeable vertex `k` replaces the `k`-th variable through the
//! exchange relation
//!
//! ```text
//! x_k · x_k' = ∏_{b_jk > 0} x_j^{b_jk} + ∏_{b_jk < 0} x_j^{-b_jk}
//! ```
//!
//! and mutates the matrix at `k`.
//!
//! The crate also provides the derived invariants of a seed with principal
//! coefficients (F-polynomials, g-vectors, c-vectors, coefficients) and
//! seed transformations (principal extension, restriction to the
//! exchangeable part, reorientation, cluster reset).
//!
//! ## Example
//!
//! ```
//! use clustra_quiver::MutationType;
//! use clustra_seed::ClusterSeed;
//!
//! let mut seed = ClusterSeed::new(MutationType::A(3)).unwrap();
//! seed.mutate([1, 2]).unwrap();
//!
//! let cluster: Vec<String> = seed.cluster().iter().map(ToString::to_string).collect();
//! assert_eq!(cluster, ["x0", "(x0*x2 + 1)/x1", "(x0*x2 + x1 + 1)/(x1*x2)"]);
//! ```
//!
//! [`ExchangeMatrix`]: clustra_quiver::ExchangeMatrix

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

pub mod config;
mod derived;
pub mod error;
pub mod input;
mod mutation;
pub mod seed;
mod transform;
pub mod variable;

#[cfg(test)]
mod proptests;

pub use config::SeedOptions;
pub use error::SeedError;
pub use input::{MutationSequence, SeedInput};
pub use mutation::{MutationOutput, MutationStep};
pub use seed::ClusterSeed;
pub use variable::{ClusterVariable, VariableKind};
