//! Integration tests for clustra-linalg.

#[cfg(test)]
mod integration_tests {
    use crate::dense_matrix::DenseMatrix;

    #[test]
    fn test_principal_block_layout() {
        // A 3x3 skew-symmetric block over an identity coefficient block.
        let b = DenseMatrix::from_rows(vec![vec![0i64, 1, 0], vec![-1, 0, -1], vec![0, 1, 0]]);
        let extended = b.vstack(&DenseMatrix::identity(3)).unwrap();

        assert_eq!(extended.num_rows(), 6);
        assert_eq!(extended.submatrix(0..3, 0..3), b);
        assert_eq!(extended.submatrix(3..6, 0..3), DenseMatrix::identity(3));
        assert_eq!(
            extended.to_string(),
            "[ 0  1  0]\n[-1  0 -1]\n[ 0  1  0]\n[ 1  0  0]\n[ 0  1  0]\n[ 0  0  1]"
        );
    }

    #[test]
    fn test_skew_symmetric_transpose() {
        let b = DenseMatrix::from_rows(vec![vec![0i64, 2], vec![-1, 0]]);
        let neg_t = b.transpose().map(|x| -x);
        // B is skew-symmetrizable but not skew-symmetric.
        assert_ne!(neg_t, b);
        assert_eq!(neg_t.map(|x| x.signum()), b.map(|x| x.signum()));
    }

    #[test]
    fn test_row_edits() {
        let mut m: DenseMatrix<i64> = DenseMatrix::zeros(2, 3);
        m.row_mut(1).copy_from_slice(&[4, 5, 6]);
        m[(0, 2)] = -7;
        assert_eq!(m.to_rows(), vec![vec![0, 0, -7], vec![4, 5, 6]]);
    }
}
