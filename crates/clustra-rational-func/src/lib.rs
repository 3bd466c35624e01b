//! # clustra-rational-func
//!
//! Multivariate rational functions for clustra.
//!
//! This crate provides:
//! - [`RationalFunction`]: an exact quotient of integer polynomials kept in
//!   canonical form
//! - Field arithmetic (add, sub, mul, div, integer powers)
//! - Substitution of integer values for variables
//! - [`RationalFunctionField`]: the named-generator field that cluster
//!   seeds live in, which prints elements by generator name
//!
//! Every cluster variable is an element of `Frac(Z[x0, .., y{m-1}])`;
//! exactness of the exchange relation depends on the reduction performed
//! here.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

mod arithmetic;
pub mod field;
mod rational_func;

pub use field::{FieldDisplay, RationalFunctionField};
pub use rational_func::RationalFunction;
