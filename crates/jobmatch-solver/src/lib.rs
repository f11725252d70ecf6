//! Assignment solving and result aggregation.
//!
//! - [`AssignmentSolver`] is the seam to an optimal matching algorithm;
//!   [`KuhnMunkresSolver`] implements it with the Hungarian method from the
//!   `pathfinding` crate.
//! - [`aggregate`] maps a solver [`Pairing`] over an augmented matrix back to
//!   original workers and jobs, producing an [`Assignment`].
//!
//! # Examples
//!
//! ```
//! use jobmatch_core::{CostMatrix, Dimensions, IndexMap};
//! use jobmatch_solver::{AssignmentSolver as _, CostRule, KuhnMunkresSolver, aggregate};
//!
//! let costs = CostMatrix::from_rows([[4, 1, 3], [2, 0, 5], [3, 2, 2]])?;
//! let index_map = IndexMap::new(Dimensions::new(3, 3)?);
//!
//! let pairing = KuhnMunkresSolver::new().solve(&costs)?;
//! let assignment = aggregate(&pairing, &index_map)?;
//!
//! assert_eq!(assignment.jobs_of(0), &[1]);
//! assert_eq!(assignment.jobs_of(1), &[0]);
//! assert_eq!(assignment.jobs_of(2), &[2]);
//! assert_eq!(assignment.total_cost(&costs, CostRule::MatchedCell)?, 5);
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

pub use self::{assignment::*, error::*, solver::*};

mod assignment;
mod error;
mod solver;

#[cfg(test)]
mod testing;
