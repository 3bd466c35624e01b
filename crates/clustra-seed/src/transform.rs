//! Seed transformations: restriction, principal extension, reorientation
//! and cluster resets.

use clustra_integers::Integer;
use clustra_quiver::{ClusterQuiver, Orientation};
use clustra_rational_func::RationalFunction;
use std::cell::OnceCell;
use tracing::debug;

use crate::error::SeedError;
use crate::seed::ClusterSeed;

impl ClusterSeed {
    /// The seed on the exchangeable part: frozen rows are dropped and every
    /// `y_i` in the cluster is set to 1.
    ///
    /// The mutation type is kept.
    ///
    /// # Errors
    ///
    /// Returns [`SeedError::ZeroDenominator`] if a cluster variable has a
    /// pole at `y = 1`.
    pub fn exchangeable_part(&self) -> Result<Self, SeedError> {
        let (n, m) = (self.n, self.m);
        let ones: Vec<(usize, Integer)> = (n..n + m).map(|i| (i, Integer::new(1))).collect();

        let cluster = self.cluster[..n]
            .iter()
            .enumerate()
            .map(|(index, v)| {
                v.subs(&ones)
                    .ok_or(SeedError::ZeroDenominator)?
                    .project(n)
                    .ok_or(SeedError::NotInField { index })
            })
            .collect::<Result<Vec<_>, _>>()?;

        let mut seed = Self::from_quiver(ClusterQuiver::from_matrix(self.matrix.principal_part()), None);
        seed.cluster = cluster;
        seed.mutation_type = self.mutation_type;
        Ok(seed)
    }

    /// The seed with an `n × n` identity block appended below the exchange
    /// matrix, i.e. one new frozen variable per exchangeable one.
    ///
    /// The result starts from its initial cluster and is marked principal
    /// exactly when `self` had no frozen variables.
    ///
    /// # Errors
    ///
    /// Returns [`SeedError::PreconditionUnmet`] if `self` already has
    /// frozen variables and `ignore_coefficients` is false.
    pub fn principal_extension(&self, ignore_coefficients: bool) -> Result<Self, SeedError> {
        if !ignore_coefficients && self.m != 0 {
            return Err(SeedError::PreconditionUnmet(
                "the exchange matrix is not square; use ignore_coefficients to ignore this".into(),
            ));
        }

        debug!(n = self.n, m = self.m, "principal extension");
        let quiver = ClusterQuiver::from_matrix(self.matrix.stack_identity());
        let mut seed = Self::from_quiver(quiver, Some(self.m == 0));
        seed.mutation_type = self.mutation_type;
        Ok(seed)
    }

    /// Reorients the quiver, then resets the cluster to the initial one.
    ///
    /// The mutation type is forgotten.
    ///
    /// # Errors
    ///
    /// Returns [`SeedError::InvalidArgument`] if an order is not a
    /// permutation of all `n + m` vertices.
    pub fn reorient(&mut self, orientation: &Orientation) -> Result<(), SeedError> {
        let mut quiver = self.quiver().clone();
        quiver
            .reorient(orientation)
            .map_err(|e| SeedError::InvalidArgument(e.to_string()))?;

        debug!(?orientation, "reorienting seed");
        self.matrix = quiver.b_matrix().clone();
        self.quiver = OnceCell::from(quiver);
        self.reset_cluster();
        self.mutation_type = None;
        Ok(())
    }

    /// Replaces the whole cluster (frozen variables included).
    ///
    /// The principal flag becomes unknown.
    ///
    /// # Errors
    ///
    /// Returns [`SeedError::LengthMismatch`] unless exactly `n + m` values
    /// are given, and [`SeedError::NotInField`] for a value over a
    /// different number of generators.
    pub fn set_cluster<I, V>(&mut self, values: I) -> Result<(), SeedError>
    where
        I: IntoIterator<Item = V>,
        V: Into<RationalFunction>,
    {
        let values: Vec<RationalFunction> = values.into_iter().map(Into::into).collect();
        let expected = self.n + self.m;
        if values.len() != expected {
            return Err(SeedError::LengthMismatch {
                expected,
                found: values.len(),
            });
        }
        if let Some(index) = values.iter().position(|v| !self.field.contains(v)) {
            return Err(SeedError::NotInField { index });
        }

        self.cluster = values;
        self.is_principal = None;
        Ok(())
    }

    /// Resets the cluster to the field generators. The principal flag
    /// becomes unknown, as with [`ClusterSeed::set_cluster`].
    pub fn reset_cluster(&mut self) {
        self.cluster = self.field.gens();
        self.is_principal = None;
    }

    /// Overwrites the frozen block of the exchange matrix with the
    /// identity.
    ///
    /// # Errors
    ///
    /// Returns [`SeedError::PreconditionUnmet`] unless `n == m`.
    pub fn reset_principal_coefficients(&mut self) -> Result<(), SeedError> {
        if self.n != self.m {
            return Err(SeedError::PreconditionUnmet(
                "the numbers of cluster variables and of frozen variables do not coincide".into(),
            ));
        }
        self.matrix
            .reset_coefficient_block()
            .map_err(|e| SeedError::PreconditionUnmet(e.to_string()))?;
        self.invalidate_quiver();
        Ok(())
    }
}
