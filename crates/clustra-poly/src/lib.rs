//! # clustra-poly
//!
//! Sparse multivariate polynomial arithmetic for clustra.
//!
//! This crate provides:
//! - Exponent-vector monomials ([`Monomial`]) and monomial orderings
//! - Sparse multivariate polynomials ([`MultiPoly`]) over any [`Ring`]
//! - Exact multivariate division
//! - Multivariate GCD over a Euclidean domain (recursive primitive PRS)
//!
//! Polynomials carry their variable count; combining polynomials with
//! different variable counts or orderings is a programming error and panics.
//!
//! [`Ring`]: clustra_rings::Ring

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

pub mod algorithms;
pub mod monomial;
pub mod ordering;
pub mod sparse;

#[cfg(test)]
mod proptests;

pub use monomial::Monomial;
pub use ordering::MonomialOrder;
pub use sparse::MultiPoly;
