//! # clustra-linalg
//!
//! Dense matrices for clustra.
//!
//! Exchange matrices are small, rectangular and integral; this crate
//! provides the row-major [`DenseMatrix`] they are stored in, with the
//! block operations (submatrices, vertical stacking, transposition) that
//! seed transformations need and a bracketed, column-aligned display.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

pub mod dense_matrix;

pub use dense_matrix::DenseMatrix;

#[cfg(test)]
mod tests;
