//! # clustra-integers
//!
//! Exact integer and rational arithmetic underneath the clustra polynomial
//! and rational-function layers.
//!
//! Both types are thin wrappers over `dashu`:
//! - [`Integer`] wraps `IBig`
//! - [`Rational`] wraps `RBig`, always in lowest terms
//!
//! Cluster variables routinely grow coefficients past machine width after a
//! few dozen mutations, so nothing in the stack uses fixed-width integers
//! for polynomial coefficients.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod integer;
pub mod rational;

#[cfg(test)]
mod proptests;

pub use integer::Integer;
pub use rational::Rational;
