use std::time::Instant;

use jobmatch_builder::{AugmentPolicy, MatrixBuilder, MatrixSeed};
use jobmatch_core::{Dimensions, InputError, ValueRange};
use jobmatch_solver::{AssignmentSolver as _, CostRule, KuhnMunkresSolver, SolverError, aggregate};

use crate::report::Report;

/// Raw positional parameters, validated by [`run`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct Problem {
    pub(crate) n_workers: i64,
    pub(crate) n_jobs: i64,
    pub(crate) low: i64,
    pub(crate) high: i64,
}

#[derive(Debug, Clone, Copy)]
pub(crate) struct Options {
    pub(crate) seed: MatrixSeed,
    pub(crate) policy: AugmentPolicy,
    pub(crate) cost_rule: CostRule,
}

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error, derive_more::From,
)]
pub(crate) enum AppError {
    #[display("{_0}")]
    Input(InputError),
    #[display("{_0}")]
    Solver(SolverError),
}

/// Builds, solves, and aggregates one problem.
pub(crate) fn run(problem: Problem, options: &Options) -> Result<Report, AppError> {
    let dimensions = Dimensions::from_signed(problem.n_workers, problem.n_jobs)?;
    let range = ValueRange::new(problem.low, problem.high)?;
    range.check_fits(dimensions)?;

    log::info!(
        "building {}x{} cost matrix in [{}, {}) with seed {}",
        dimensions.workers(),
        dimensions.jobs(),
        range.low(),
        range.high(),
        options.seed
    );
    let built = MatrixBuilder::new(options.policy).build_with_seed(dimensions, range, options.seed);

    let solver = KuhnMunkresSolver::new();
    let start = Instant::now();
    let pairing = solver.solve(&built.augmented)?;
    let elapsed = start.elapsed();
    log::info!(
        "{} matched {} pairs in {elapsed:?}",
        solver.name(),
        pairing.len()
    );

    let assignment = aggregate(&pairing, &built.index_map)?;
    let cost = assignment.total_cost(&built.original, options.cost_rule)?;

    Ok(Report {
        original: built.original,
        augmented: built.augmented,
        assignment,
        cost,
        elapsed,
    })
}
