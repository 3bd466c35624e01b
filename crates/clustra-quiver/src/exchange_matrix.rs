//! Exchange matrices and matrix mutation.

use std::collections::VecDeque;
use std::fmt;

use clustra_integers::Rational;
use clustra_linalg::DenseMatrix;

use crate::error::QuiverError;

/// An `(n+m) × n` integer matrix with skew-symmetrizable top block.
///
/// Rows `0..n` are exchangeable, rows `n..n+m` are frozen (coefficient)
/// rows. The skew-symmetrizability of the top block is checked on
/// construction and preserved by [`ExchangeMatrix::mutate`].
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct ExchangeMatrix {
    matrix: DenseMatrix<i64>,
}

impl ExchangeMatrix {
    /// Validates and wraps a matrix.
    ///
    /// # Errors
    ///
    /// Returns [`QuiverError::Shape`] if the matrix has fewer rows than
    /// columns and [`QuiverError::NotSkewSymmetrizable`] if its top square
    /// block has no skew-symmetrizer. An entry equal to `i64::MIN`, which
    /// has no negation, gives [`QuiverError::Overflow`].
    pub fn new(matrix: DenseMatrix<i64>) -> Result<Self, QuiverError> {
        let (rows, cols) = (matrix.num_rows(), matrix.num_cols());
        if rows < cols {
            return Err(QuiverError::Shape(format!(
                "an exchange matrix needs at least as many rows as columns, got {rows}x{cols}"
            )));
        }
        if (0..rows).any(|i| matrix.row(i).contains(&i64::MIN)) {
            return Err(QuiverError::Overflow("matrix entry i64::MIN".into()));
        }
        if skew_symmetrizer(&matrix.submatrix(0..cols, 0..cols)).is_none() {
            return Err(QuiverError::NotSkewSymmetrizable);
        }
        Ok(Self { matrix })
    }

    /// Validates and wraps a list of rows.
    ///
    /// # Errors
    ///
    /// As [`ExchangeMatrix::new`]; ragged rows give [`QuiverError::Shape`].
    pub fn from_rows(rows: Vec<Vec<i64>>) -> Result<Self, QuiverError> {
        let matrix = DenseMatrix::try_from_rows(rows)
            .ok_or_else(|| QuiverError::Shape("rows have different lengths".into()))?;
        Self::new(matrix)
    }

    /// Wraps a matrix that is known to be valid.
    pub(crate) fn from_trusted(matrix: DenseMatrix<i64>) -> Self {
        debug_assert!(matrix.num_rows() >= matrix.num_cols());
        Self { matrix }
    }

    /// Number of exchangeable vertices.
    #[must_use]
    pub fn n(&self) -> usize {
        self.matrix.num_cols()
    }

    /// Number of frozen vertices.
    #[must_use]
    pub fn m(&self) -> usize {
        self.matrix.num_rows() - self.matrix.num_cols()
    }

    /// Returns the entry `b_ij`.
    ///
    /// # Panics
    ///
    /// Panics if the indices are out of range.
    #[must_use]
    pub fn get(&self, i: usize, j: usize) -> i64 {
        self.matrix[(i, j)]
    }

    /// Returns the underlying matrix.
    #[must_use]
    pub fn as_matrix(&self) -> &DenseMatrix<i64> {
        &self.matrix
    }

    /// Consumes and returns the underlying matrix.
    #[must_use]
    pub fn into_matrix(self) -> DenseMatrix<i64> {
        self.matrix
    }

    /// The exchangeable `n × n` block.
    #[must_use]
    pub fn principal_part(&self) -> Self {
        let n = self.n();
        Self::from_trusted(self.matrix.submatrix(0..n, 0..n))
    }

    /// The frozen `m × n` block.
    #[must_use]
    pub fn coefficient_block(&self) -> DenseMatrix<i64> {
        let n = self.n();
        self.matrix.submatrix(n..n + self.m(), 0..n)
    }

    /// Appends an `n × n` identity block below the matrix.
    #[must_use]
    pub fn stack_identity(&self) -> Self {
        let stacked = self
            .matrix
            .vstack(&DenseMatrix::identity(self.n()))
            .expect("identity block has n columns");
        Self::from_trusted(stacked)
    }

    /// Overwrites the frozen block with the identity.
    ///
    /// # Errors
    ///
    /// Returns [`QuiverError::Shape`] unless `n == m`.
    pub fn reset_coefficient_block(&mut self) -> Result<(), QuiverError> {
        let (n, m) = (self.n(), self.m());
        if n != m {
            return Err(QuiverError::Shape(format!(
                "the coefficient block is {m}x{n}, not square"
            )));
        }
        for i in 0..m {
            for j in 0..n {
                self.matrix[(n + i, j)] = i64::from(i == j);
            }
        }
        Ok(())
    }

    /// Mutates the matrix at exchangeable vertex `k`, in place.
    ///
    /// ```text
    /// b'_ij = -b_ij                                      if i = k or j = k
    /// b'_ij = b_ij + sgn(b_ik) · max(0, b_ik · b_kj)     otherwise
    /// ```
    ///
    /// # Errors
    ///
    /// Returns [`QuiverError::VertexOutOfRange`] if `k >= n` and
    /// [`QuiverError::Overflow`] if an entry leaves the `i64` range; the
    /// matrix is unchanged on error.
    pub fn mutate(&mut self, k: usize) -> Result<(), QuiverError> {
        let n = self.n();
        if k >= n {
            return Err(QuiverError::VertexOutOfRange {
                vertex: k,
                count: n,
            });
        }

        let old = &self.matrix;
        let mut mutated = old.clone();
        for i in 0..old.num_rows() {
            for j in 0..n {
                mutated[(i, j)] = if i == k || j == k {
                    -old[(i, j)]
                } else {
                    let b_ik = old[(i, k)];
                    b_ik.checked_mul(old[(k, j)])
                        .map(|p| b_ik.signum() * p.max(0))
                        .and_then(|delta| old[(i, j)].checked_add(delta))
                        .filter(|&v| v != i64::MIN)
                        .ok_or_else(|| {
                            QuiverError::Overflow(format!(
                                "entry ({i}, {j}) after mutation at {k}"
                            ))
                        })?
                };
            }
        }
        self.matrix = mutated;
        Ok(())
    }

    /// Returns the mutation at `k` as a new matrix.
    ///
    /// # Errors
    ///
    /// As [`ExchangeMatrix::mutate`].
    pub fn mutated(&self, k: usize) -> Result<Self, QuiverError> {
        let mut result = self.clone();
        result.mutate(k)?;
        Ok(result)
    }

    /// Returns a positive skew-symmetrizer of the exchangeable block.
    #[must_use]
    pub fn skew_symmetrizer(&self) -> Option<Vec<Rational>> {
        let n = self.n();
        skew_symmetrizer(&self.matrix.submatrix(0..n, 0..n))
    }
}

/// Finds positive `d` with `d_i · b_ij = -d_j · b_ji` for all `i, j`.
///
/// Each connected component is normalized so that its smallest vertex has
/// `d = 1`. Returns `None` if `b` is not square or no such `d` exists.
#[must_use]
pub fn skew_symmetrizer(b: &DenseMatrix<i64>) -> Option<Vec<Rational>> {
    if !b.is_square() {
        return None;
    }
    let n = b.num_rows();

    for i in 0..n {
        if b[(i, i)] != 0 {
            return None;
        }
        for j in (i + 1)..n {
            let (b_ij, b_ji) = (b[(i, j)], b[(j, i)]);
            // Opposite signs, or both zero.
            if (b_ij == 0) != (b_ji == 0) || (b_ij != 0 && b_ij.signum() == b_ji.signum()) {
                return None;
            }
        }
    }

    let mut d: Vec<Option<Rational>> = vec![None; n];
    let mut queue = VecDeque::new();
    for root in 0..n {
        if d[root].is_some() {
            continue;
        }
        d[root] = Some(Rational::from(1i64));
        queue.push_back(root);

        while let Some(i) = queue.pop_front() {
            let d_i = d[i].clone()?;
            for j in 0..n {
                let (b_ij, b_ji) = (b[(i, j)], b[(j, i)]);
                if b_ij == 0 {
                    continue;
                }
                // d_j = -d_i · b_ij / b_ji
                let d_j = &d_i * &Rational::from_i64(b_ij.checked_neg()?, b_ji);
                match &d[j] {
                    Some(existing) if *existing != d_j => return None,
                    Some(_) => {}
                    None => {
                        d[j] = Some(d_j);
                        queue.push_back(j);
                    }
                }
            }
        }
    }

    d.into_iter().collect()
}

impl fmt::Display for ExchangeMatrix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.matrix)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn a4() -> ExchangeMatrix {
        ExchangeMatrix::from_rows(vec![
            vec![0, 1, 0, 0],
            vec![-1, 0, -1, 0],
            vec![0, 1, 0, 1],
            vec![0, 0, -1, 0],
        ])
        .unwrap()
    }

    #[test]
    fn test_mutate_a4() {
        let mut b = a4();
        b.mutate(0).unwrap();
        assert_eq!(
            b.as_matrix().to_rows(),
            vec![
                vec![0, -1, 0, 0],
                vec![1, 0, -1, 0],
                vec![0, 1, 0, 1],
                vec![0, 0, -1, 0],
            ]
        );
    }

    #[test]
    fn test_mutate_sequence() {
        let mut b = a4();
        for k in [0, 1, 0] {
            b.mutate(k).unwrap();
        }
        assert_eq!(
            b.as_matrix().to_rows(),
            vec![
                vec![0, -1, 1, 0],
                vec![1, 0, 0, 0],
                vec![-1, 0, 0, 1],
                vec![0, 0, -1, 0],
            ]
        );
    }

    #[test]
    fn test_mutate_frozen_rows() {
        // A3 with principal coefficients, mutated at [1, 2, 1].
        let mut b = ExchangeMatrix::from_rows(vec![
            vec![0, 1, 0],
            vec![-1, 0, -1],
            vec![0, 1, 0],
        ])
        .unwrap()
        .stack_identity();
        for k in [1, 2, 1] {
            b.mutate(k).unwrap();
        }
        assert_eq!(
            b.as_matrix().to_rows(),
            vec![
                vec![0, 1, -1],
                vec![-1, 0, 1],
                vec![1, -1, 0],
                vec![1, 0, 0],
                vec![0, 1, -1],
                vec![0, 0, -1],
            ]
        );

        b.reset_coefficient_block().unwrap();
        assert_eq!(b.coefficient_block(), DenseMatrix::identity(3));
    }

    #[test]
    fn test_mutation_is_involution() {
        let b = ExchangeMatrix::from_rows(vec![vec![0, 1, -2], vec![-1, 0, 2], vec![1, -1, 0]])
            .unwrap();
        for k in 0..3 {
            assert_eq!(b.mutated(k).unwrap().mutated(k).unwrap(), b);
        }
    }

    #[test]
    fn test_mutate_out_of_range() {
        let mut b = a4();
        assert_eq!(
            b.mutate(4),
            Err(QuiverError::VertexOutOfRange { vertex: 4, count: 4 })
        );
    }

    #[test]
    fn test_rejects_bad_matrices() {
        // Symmetric, not skew.
        assert_eq!(
            ExchangeMatrix::from_rows(vec![vec![0, 1], vec![1, 0]]),
            Err(QuiverError::NotSkewSymmetrizable)
        );
        // Inconsistent ratios around a triangle.
        assert_eq!(
            ExchangeMatrix::from_rows(vec![vec![0, 1, -1], vec![-2, 0, 1], vec![1, -1, 0]]),
            Err(QuiverError::NotSkewSymmetrizable)
        );
        assert!(matches!(
            ExchangeMatrix::from_rows(vec![vec![0, 1, 0]]),
            Err(QuiverError::Shape(_))
        ));
        assert!(matches!(
            ExchangeMatrix::from_rows(vec![vec![0, 1], vec![-1]]),
            Err(QuiverError::Shape(_))
        ));
    }

    #[test]
    fn test_extreme_entries() {
        assert!(matches!(
            ExchangeMatrix::from_rows(vec![vec![0, i64::MIN], vec![1, 0]]),
            Err(QuiverError::Overflow(_))
        ));
        // -b_ij overflows while looking for a symmetrizer.
        let b = DenseMatrix::from_rows(vec![vec![0, i64::MIN], vec![1, 0]]);
        assert_eq!(skew_symmetrizer(&b), None);

        let big = i64::MAX / 2 + 1;
        let mut b = ExchangeMatrix::from_rows(vec![
            vec![0, 2, 0],
            vec![-1, 0, big],
            vec![0, -1, 0],
        ])
        .unwrap();
        let before = b.clone();
        assert!(matches!(b.mutate(1), Err(QuiverError::Overflow(_))));
        assert_eq!(b, before);
    }

    #[test]
    fn test_skew_symmetrizer_b2() {
        let b = ExchangeMatrix::from_rows(vec![vec![0, 1], vec![-2, 0]]).unwrap();
        let d = b.skew_symmetrizer().unwrap();
        assert_eq!(d, vec![Rational::from(1i64), Rational::from_i64(1, 2)]);
    }

    #[test]
    fn test_principal_part_and_blocks() {
        let b = a4().stack_identity();
        assert_eq!((b.n(), b.m()), (4, 4));
        assert_eq!(b.principal_part(), a4());
        assert_eq!(b.coefficient_block(), DenseMatrix::identity(4));
        assert!(a4().reset_coefficient_block().is_err());
    }
}
