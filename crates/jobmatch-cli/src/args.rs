use clap::{CommandFactory as _, Parser, ValueEnum, error::ErrorKind};
use jobmatch_builder::{AugmentPolicy, MatrixSeed};
use jobmatch_solver::CostRule;

use crate::app::{Options, Problem};

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum PolicyArg {
    /// Leave surplus workers idle.
    Identity,
    /// Replicate job columns so every worker gets a job.
    ReplicateJobs,
}

impl From<PolicyArg> for AugmentPolicy {
    fn from(arg: PolicyArg) -> Self {
        match arg {
            PolicyArg::Identity => AugmentPolicy::Identity,
            PolicyArg::ReplicateJobs => AugmentPolicy::ReplicateJobs,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum CostRuleArg {
    /// Charge each assigned job its whole column sum.
    ColumnSum,
    /// Charge each assigned job the assigned worker's cost.
    MatchedCell,
}

impl From<CostRuleArg> for CostRule {
    fn from(arg: CostRuleArg) -> Self {
        match arg {
            CostRuleArg::ColumnSum => CostRule::ColumnSum,
            CostRuleArg::MatchedCell => CostRule::MatchedCell,
        }
    }
}

/// Solve a random worker/job assignment problem with the Hungarian method.
#[derive(Debug, Parser)]
#[command(author, version, about, allow_negative_numbers = true)]
pub(crate) struct Args {
    /// Number of workers.
    n_workers: Option<i64>,

    /// Number of jobs.
    n_jobs: Option<i64>,

    /// Lowest cost (inclusive).
    low: Option<i64>,

    /// Highest cost (exclusive).
    high: Option<i64>,

    /// Seed for the random cost matrix.
    #[arg(long, value_name = "SEED", default_value_t = MatrixSeed::DEFAULT)]
    seed: MatrixSeed,

    /// How to shape the matrix when there are more workers than jobs.
    #[arg(long, value_enum, default_value_t = PolicyArg::Identity)]
    policy: PolicyArg,

    /// How the total cost charges an assigned job.
    #[arg(long, value_enum, default_value_t = CostRuleArg::ColumnSum)]
    cost_rule: CostRuleArg,

    /// Width of the horizontal rules between report sections.
    #[arg(long, env = "COLUMNS", value_name = "COLUMNS", default_value_t = 80)]
    pub(crate) width: usize,
}

impl Args {
    /// Returns the positional problem, or `None` if none was given.
    ///
    /// Fails with [`ErrorKind::MissingRequiredArgument`] if only some
    /// positionals are present.
    pub(crate) fn problem(&self) -> Result<Option<Problem>, clap::Error> {
        match (self.n_workers, self.n_jobs, self.low, self.high) {
            (Some(n_workers), Some(n_jobs), Some(low), Some(high)) => Ok(Some(Problem {
                n_workers,
                n_jobs,
                low,
                high,
            })),
            (None, None, None, None) => Ok(None),
            _ => Err(Self::command().error(
                ErrorKind::MissingRequiredArgument,
                "expected all of <N_WORKERS> <N_JOBS> <LOW> <HIGH>",
            )),
        }
    }

    pub(crate) fn options(&self) -> Options {
        Options {
            seed: self.seed,
            policy: self.policy.into(),
            cost_rule: self.cost_rule.into(),
        }
    }

    /// Returns the help text, which lists the four positionals in order.
    pub(crate) fn usage() -> String {
        Self::command().render_help().to_string()
    }
}
