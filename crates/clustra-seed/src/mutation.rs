//! Seed mutation.

use std::str::FromStr;

use clustra_linalg::DenseMatrix;
use clustra_quiver::ExchangeMatrix;
use clustra_rational_func::{RationalFunction, RationalFunctionField};
use tracing::{debug, trace};

use crate::error::SeedError;
use crate::input::MutationSequence;
use crate::seed::ClusterSeed;
use crate::variable::{ClusterVariable, VariableKind};

/// What [`ClusterSeed::mutation_sequence`] reports after each step.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MutationOutput {
    /// The seed after the step.
    Seed,
    /// The exchange matrix after the step.
    Matrix,
    /// The variable produced by the step.
    Var,
}

impl FromStr for MutationOutput {
    type Err = SeedError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "seed" => Ok(Self::Seed),
            "matrix" => Ok(Self::Matrix),
            "var" => Ok(Self::Var),
            other => Err(SeedError::InvalidArgument(format!(
                "the output can only be `seed`, `matrix` or `var`, got `{other}`"
            ))),
        }
    }
}

/// One entry of a mutation sequence report.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum MutationStep {
    /// See [`MutationOutput::Seed`].
    Seed(ClusterSeed),
    /// See [`MutationOutput::Matrix`].
    Matrix(DenseMatrix<i64>),
    /// See [`MutationOutput::Var`].
    Var(ClusterVariable),
}

impl MutationStep {
    /// The seed, for [`MutationOutput::Seed`] reports.
    #[must_use]
    pub fn as_seed(&self) -> Option<&ClusterSeed> {
        match self {
            Self::Seed(seed) => Some(seed),
            _ => None,
        }
    }

    /// The matrix, for [`MutationOutput::Matrix`] reports.
    #[must_use]
    pub fn as_matrix(&self) -> Option<&DenseMatrix<i64>> {
        match self {
            Self::Matrix(matrix) => Some(matrix),
            _ => None,
        }
    }

    /// The new variable, for [`MutationOutput::Var`] reports.
    #[must_use]
    pub fn as_var(&self) -> Option<&ClusterVariable> {
        match self {
            Self::Var(var) => Some(var),
            _ => None,
        }
    }
}

/// The exchange relation at `k`:
/// `x_k' = (∏_{b_jk > 0} x_j^{b_jk} + ∏_{b_jk < 0} x_j^{-b_jk}) / x_k`.
fn exchange(
    field: &RationalFunctionField,
    matrix: &ExchangeMatrix,
    cluster: &[RationalFunction],
    k: usize,
) -> Result<RationalFunction, SeedError> {
    let mut mon_p = field.one();
    let mut mon_n = field.one();

    for (j, x_j) in cluster.iter().enumerate() {
        let b = matrix.get(j, k);
        if b == 0 {
            continue;
        }
        let exp = i32::try_from(b.abs()).map_err(|_| {
            SeedError::InvalidArgument(format!("exchange matrix entry {b} is too large"))
        })?;
        let factor = x_j.pow(exp).ok_or(SeedError::ZeroDenominator)?;
        if b > 0 {
            mon_p = &mon_p * &factor;
        } else {
            mon_n = &mon_n * &factor;
        }
    }

    trace!(
        vertex = k,
        mon_p = %field.display(&mon_p),
        mon_n = %field.display(&mon_n),
        "exchange monomials"
    );

    let inverse = cluster[k].inv().ok_or(SeedError::ZeroDenominator)?;
    Ok(&(&mon_p + &mon_n) * &inverse)
}

impl ClusterSeed {
    /// Mutates in place at a vertex or a sequence of vertices.
    ///
    /// The whole sequence is validated before the first step, and the
    /// seed is only updated once every step has succeeded.
    ///
    /// # Errors
    ///
    /// Returns [`SeedError::InvalidVertex`] if a vertex is not in `0..n`,
    /// [`SeedError::ZeroDenominator`] if a variable to be exchanged is
    /// zero (only possible after [`ClusterSeed::set_cluster`]), and
    /// [`SeedError::InvalidInput`] if a matrix entry overflows.
    pub fn mutate(&mut self, sequence: impl Into<MutationSequence>) -> Result<(), SeedError> {
        let sequence = sequence.into();
        sequence.validate(self.n)?;

        let mut matrix = self.matrix.clone();
        let mut cluster = self.cluster.clone();
        for &k in &sequence {
            debug!(vertex = k, rank = self.n, "mutating seed");
            cluster[k] = exchange(&self.field, &matrix, &cluster, k)?;
            matrix.mutate(k)?;
        }

        self.matrix = matrix;
        self.cluster = cluster;
        self.invalidate_quiver();
        Ok(())
    }

    /// Returns a mutated copy, leaving `self` unchanged.
    ///
    /// # Errors
    ///
    /// As [`ClusterSeed::mutate`].
    pub fn mutated(&self, sequence: impl Into<MutationSequence>) -> Result<Self, SeedError> {
        let mut seed = self.clone();
        seed.mutate(sequence)?;
        Ok(seed)
    }

    /// Mutates a copy along `sequence`, reporting the state after each
    /// step.
    ///
    /// # Errors
    ///
    /// As [`ClusterSeed::mutate`]; nothing is reported on failure.
    pub fn mutation_sequence(
        &self,
        sequence: impl Into<MutationSequence>,
        output: MutationOutput,
    ) -> Result<Vec<MutationStep>, SeedError> {
        let sequence = sequence.into();
        sequence.validate(self.n)?;

        let mut seed = self.clone();
        let mut steps = Vec::with_capacity(sequence.len());
        for &k in &sequence {
            seed.mutate(k)?;
            steps.push(match output {
                MutationOutput::Seed => MutationStep::Seed(seed.clone()),
                MutationOutput::Matrix => MutationStep::Matrix(seed.b_matrix()),
                MutationOutput::Var => MutationStep::Var(ClusterVariable::new(
                    seed.cluster[k].clone(),
                    seed.field.clone(),
                    VariableKind::Exchangeable,
                )),
            });
        }
        Ok(steps)
    }
}
