//! # clustra-quiver
//!
//! The combinatorial layer underneath cluster seeds.
//!
//! This crate provides:
//! - [`ExchangeMatrix`]: an `(n+m) × n` integer matrix whose top `n × n`
//!   block is skew-symmetrizable, with in-place matrix mutation
//! - [`QuiverDigraph`]: a directed graph with `(b_ij, b_ji)` edge labels
//! - [`ClusterQuiver`]: the quiver of an exchange matrix, with frozen
//!   vertices, acyclicity and bipartiteness tests, and reorientation
//! - [`MutationType`]: finite Dynkin types with standard quivers and a
//!   classifier for tree-shaped quivers
//!
//! ## Conventions
//!
//! Vertices `0..n` are exchangeable and `n..n+m` are frozen. An edge
//! `i → j` exists iff `b_ij > 0`; its label is `(b_ij, b_ji)`, where for a
//! frozen endpoint the missing entry is taken as `-b_ij`.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

pub mod digraph;
pub mod error;
pub mod exchange_matrix;
pub mod mutation_type;
pub mod quiver;

#[cfg(test)]
mod proptests;

pub use digraph::{EdgeLabel, QuiverDigraph};
pub use error::QuiverError;
pub use exchange_matrix::ExchangeMatrix;
pub use mutation_type::MutationType;
pub use quiver::{ClusterQuiver, Orientation};
