//! # clustra-rings
//!
//! Algebraic structure traits for the clustra polynomial layer.
//!
//! ## Trait Hierarchy
//!
//! ```text
//! Ring
//!  ├── OrderedRing
//!  └── CommutativeRing
//!       └── IntegralDomain
//!            └── EuclideanDomain
//! ```
//!
//! The only concrete ring shipped here is [`Z`]: cluster variables live in
//! the fraction field of `Z[x0, .., y{m-1}]`, and that field is built on top
//! of integer polynomials rather than as a ring of its own.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod integers;
pub mod traits;

pub use integers::Z;
pub use traits::{CommutativeRing, EuclideanDomain, IntegralDomain, OrderedRing, Ring};
