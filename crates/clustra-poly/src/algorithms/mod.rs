//! Polynomial algorithms.
//!
//! - Exact multivariate division
//! - Content and primitive parts
//! - Multivariate GCD over a Euclidean domain

pub mod division;
pub mod gcd;
