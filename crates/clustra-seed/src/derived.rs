//! Quantities read off a seed: variables, F-polynomials, g- and c-vectors
//! and coefficients. Nothing here is cached.

use clustra_integers::Integer;
use clustra_linalg::DenseMatrix;
use clustra_rational_func::RationalFunction;

use crate::error::SeedError;
use crate::seed::ClusterSeed;
use crate::variable::{ClusterVariable, VariableKind};

fn check_index(what: &'static str, index: usize, len: usize) -> Result<(), SeedError> {
    if index < len {
        Ok(())
    } else {
        Err(SeedError::IndexOutOfRange { what, index, len })
    }
}

impl ClusterSeed {
    fn require_principal(&self, ignore_coefficients: bool) -> Result<(), SeedError> {
        if ignore_coefficients || self.is_principal == Some(true) {
            Ok(())
        } else {
            Err(SeedError::no_principal_coefficients())
        }
    }

    fn require_square(&self, what: &str) -> Result<(), SeedError> {
        if self.n == self.m {
            Ok(())
        } else {
            Err(SeedError::PreconditionUnmet(format!(
                "the {what} is only defined if the numbers of frozen and exchangeable variables coincide"
            )))
        }
    }

    fn tag(&self, value: RationalFunction, kind: VariableKind) -> ClusterVariable {
        ClusterVariable::new(value, self.field.clone(), kind)
    }

    /// The current `k`-th cluster variable.
    ///
    /// # Errors
    ///
    /// Returns [`SeedError::IndexOutOfRange`] unless `k < n`.
    pub fn cluster_variable(&self, k: usize) -> Result<ClusterVariable, SeedError> {
        check_index("cluster variable", k, self.n)?;
        Ok(self.tag(self.cluster[k].clone(), VariableKind::Exchangeable))
    }

    /// The `n` current cluster variables.
    #[must_use]
    pub fn cluster(&self) -> Vec<ClusterVariable> {
        self.cluster[..self.n]
            .iter()
            .map(|v| self.tag(v.clone(), VariableKind::Exchangeable))
            .collect()
    }

    /// The `m` current frozen variables.
    #[must_use]
    pub fn frozen_variables(&self) -> Vec<ClusterVariable> {
        self.cluster[self.n..]
            .iter()
            .map(|v| self.tag(v.clone(), VariableKind::Frozen))
            .collect()
    }

    /// The initial cluster variable `x_k`, whatever the current cluster is.
    ///
    /// # Errors
    ///
    /// Returns [`SeedError::IndexOutOfRange`] unless `k < n`.
    pub fn x(&self, k: usize) -> Result<ClusterVariable, SeedError> {
        check_index("initial cluster variable", k, self.n)?;
        Ok(self.tag(RationalFunction::var(k, self.n + self.m), VariableKind::Exchangeable))
    }

    /// The initial frozen variable `y_k`.
    ///
    /// # Errors
    ///
    /// Returns [`SeedError::IndexOutOfRange`] unless `k < m`.
    pub fn y(&self, k: usize) -> Result<ClusterVariable, SeedError> {
        check_index("frozen variable", k, self.m)?;
        Ok(self.tag(RationalFunction::var(self.n + k, self.n + self.m), VariableKind::Frozen))
    }

    /// The `k`-th F-polynomial: the `k`-th cluster variable with every
    /// `x_i` set to 1.
    ///
    /// # Errors
    ///
    /// Returns [`SeedError::PreconditionUnmet`] without principal
    /// coefficients (unless `ignore_coefficients`) or if `n != m`, then
    /// [`SeedError::IndexOutOfRange`] unless `k < n`.
    pub fn f_polynomial(
        &self,
        k: usize,
        ignore_coefficients: bool,
    ) -> Result<RationalFunction, SeedError> {
        self.require_principal(ignore_coefficients)?;
        self.require_square("F-polynomial")?;
        let var = self.cluster_variable(k)?;

        let ones: Vec<(usize, Integer)> = (0..self.n).map(|i| (i, Integer::new(1))).collect();
        var.value().subs(&ones).ok_or(SeedError::ZeroDenominator)
    }

    /// All F-polynomials.
    ///
    /// # Errors
    ///
    /// As [`ClusterSeed::f_polynomial`].
    pub fn f_polynomials(&self, ignore_coefficients: bool) -> Result<Vec<RationalFunction>, SeedError> {
        self.require_principal(ignore_coefficients)?;
        (0..self.n)
            .map(|k| self.f_polynomial(k, ignore_coefficients))
            .collect()
    }

    /// The `k`-th g-vector: the degree vector in `x_0..x_{n-1}` of the
    /// `k`-th cluster variable with every `y_i` set to 0.
    ///
    /// # Errors
    ///
    /// As [`ClusterSeed::f_polynomial`]; [`SeedError::ZeroDenominator`] if
    /// setting the `y_i` to 0 leaves a zero denominator.
    pub fn g_vector(&self, k: usize, ignore_coefficients: bool) -> Result<Vec<i64>, SeedError> {
        self.require_principal(ignore_coefficients)?;
        self.require_square("g-vector")?;
        let var = self.cluster_variable(k)?;

        let zeros: Vec<(usize, Integer)> = (self.n..self.n + self.m)
            .map(|i| (i, Integer::new(0)))
            .collect();
        let f0 = var.value().subs(&zeros).ok_or(SeedError::ZeroDenominator)?;
        let mut degrees = f0.degree_vector();
        degrees.truncate(self.n);
        Ok(degrees)
    }

    /// The `n × n` matrix whose columns are the g-vectors.
    ///
    /// # Errors
    ///
    /// As [`ClusterSeed::g_vector`].
    pub fn g_matrix(&self, ignore_coefficients: bool) -> Result<DenseMatrix<i64>, SeedError> {
        self.require_principal(ignore_coefficients)?;
        let rows = (0..self.n)
            .map(|k| self.g_vector(k, ignore_coefficients))
            .collect::<Result<Vec<_>, _>>()?;
        Ok(DenseMatrix::from_rows(rows).transpose())
    }

    /// The `k`-th c-vector: column `k` of the frozen block of the exchange
    /// matrix.
    ///
    /// # Errors
    ///
    /// Returns [`SeedError::IndexOutOfRange`] unless `k < n`, then
    /// [`SeedError::PreconditionUnmet`] without principal coefficients
    /// (unless `ignore_coefficients`).
    pub fn c_vector(&self, k: usize, ignore_coefficients: bool) -> Result<Vec<i64>, SeedError> {
        check_index("c-vector", k, self.n)?;
        self.require_principal(ignore_coefficients)?;
        Ok((self.n..self.n + self.m)
            .map(|i| self.matrix.get(i, k))
            .collect())
    }

    /// The frozen `m × n` block of the exchange matrix.
    ///
    /// # Errors
    ///
    /// Returns [`SeedError::PreconditionUnmet`] without principal
    /// coefficients (unless `ignore_coefficients`).
    pub fn c_matrix(&self, ignore_coefficients: bool) -> Result<DenseMatrix<i64>, SeedError> {
        self.require_principal(ignore_coefficients)?;
        Ok(self.matrix.coefficient_block())
    }

    /// The `k`-th coefficient `∏ y_i^{c_i}` for the `k`-th c-vector `c`;
    /// 1 when there are no frozen variables.
    ///
    /// # Errors
    ///
    /// Returns [`SeedError::IndexOutOfRange`] unless `k < n`.
    pub fn coefficient(&self, k: usize) -> Result<RationalFunction, SeedError> {
        check_index("coefficient", k, self.n)?;
        if self.m == 0 {
            return Ok(self.field.one());
        }

        let exponents = self.c_vector(k, true)?;
        let mut product = self.field.one();
        for (i, &e) in exponents.iter().enumerate() {
            let e = i32::try_from(e).map_err(|_| {
                SeedError::InvalidArgument(format!("c-vector entry {e} is too large"))
            })?;
            let y = self.y(i)?.into_value();
            product = &product * &y.pow(e).ok_or(SeedError::ZeroDenominator)?;
        }
        Ok(product)
    }

    /// All coefficients.
    ///
    /// # Errors
    ///
    /// As [`ClusterSeed::coefficient`].
    pub fn coefficients(&self) -> Result<Vec<RationalFunction>, SeedError> {
        (0..self.n).map(|k| self.coefficient(k)).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clustra_quiver::MutationType;

    fn a3() -> ClusterSeed {
        ClusterSeed::new(MutationType::A(3)).unwrap()
    }

    #[test]
    fn test_x_and_y() {
        let mut seed = a3().principal_extension(false).unwrap();
        seed.mutate([2, 1]).unwrap();

        assert_eq!(seed.x(1).unwrap().to_string(), "x1");
        assert_eq!(seed.y(2).unwrap().to_string(), "y2");
        assert!(seed.y(2).unwrap().is_frozen());
        assert_eq!(
            seed.x(3),
            Err(SeedError::IndexOutOfRange {
                what: "initial cluster variable",
                index: 3,
                len: 3
            })
        );
        assert!(matches!(seed.y(3), Err(SeedError::IndexOutOfRange { .. })));
    }

    #[test]
    fn test_cluster_excludes_frozen() {
        let seed = a3().principal_extension(false).unwrap();
        assert_eq!(seed.cluster().len(), 3);
        let frozen: Vec<String> = seed.frozen_variables().iter().map(ToString::to_string).collect();
        assert_eq!(frozen, ["y0", "y1", "y2"]);
        assert!(seed.cluster_variable(3).is_err());
    }

    #[test]
    fn test_precondition_order() {
        // No principal flag: the flag is reported before the index.
        let seed = a3();
        assert!(matches!(
            seed.f_polynomial(7, false),
            Err(SeedError::PreconditionUnmet(_))
        ));
        assert!(matches!(
            seed.g_vector(7, false),
            Err(SeedError::PreconditionUnmet(_))
        ));
        // c-vectors check the index first.
        assert!(matches!(
            seed.c_vector(7, false),
            Err(SeedError::IndexOutOfRange { .. })
        ));
        assert!(matches!(
            seed.c_vector(0, false),
            Err(SeedError::PreconditionUnmet(_))
        ));
        // Ignoring coefficients still needs n == m.
        assert!(matches!(
            seed.f_polynomial(0, true),
            Err(SeedError::PreconditionUnmet(_))
        ));
        assert!(seed.c_vector(0, true).unwrap().is_empty());
    }

    #[test]
    fn test_coefficient_without_frozen() {
        let seed = a3();
        assert!(seed.coefficient(1).unwrap().is_one());
        assert!(seed.coefficient(3).is_err());
    }

    #[test]
    fn test_initial_invariants_of_principal_seed() {
        let seed = a3().principal_extension(false).unwrap();
        assert!(seed.f_polynomials(false).unwrap().iter().all(RationalFunction::is_one));
        assert_eq!(seed.g_matrix(false).unwrap(), DenseMatrix::identity(3));
        assert_eq!(seed.c_matrix(false).unwrap(), DenseMatrix::identity(3));
        let names: Vec<String> = seed
            .coefficients()
            .unwrap()
            .iter()
            .map(|c| seed.ground_field().display(c).to_string())
            .collect();
        assert_eq!(names, ["y0", "y1", "y2"]);
    }
}
